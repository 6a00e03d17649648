//! Verdict Core
//!
//! Core types and rules for the homework status bot.
//!
//! This crate contains:
//! - Domain types: homework records and the review status table
//! - Response validation: shape checks for the review API payload
//! - Verdicts: turning a homework record into a chat message
//!
//! Nothing here performs I/O; the client and runner crates feed it JSON.

pub mod domain;
pub mod error;
pub mod response;
pub mod verdict;

pub use error::{DescribeError, ValidationError};
pub use response::{latest_homework, validate};
pub use verdict::describe;
