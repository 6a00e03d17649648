//! Core domain types
//!
//! Structures describing what the review API reports about a submission.

pub mod homework;

pub use homework::{Homework, HomeworkStatus};
