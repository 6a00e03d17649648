//! Scheduler layer for the runner
//!
//! This layer drives the poll loop: fetch the latest statuses, decide
//! whether anything changed, notify, and sleep until the next tick.

pub mod poller;

pub use poller::StatusPoller;
