//! Service layer
//!
//! Services hold the side effects the poll loop triggers. They are
//! trait-based so the loop can be tested with recording fakes.

mod notifier;

pub use notifier::{Notifier, TelegramNotifier};
