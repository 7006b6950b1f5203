pub mod billing;
pub mod client;
pub mod project;
pub mod time_entry;
pub mod timer;

pub use billing::BillingRow;
pub use client::Client;
pub use project::ProjectWithClient;
pub use time_entry::{NewTimeEntry, TimeEntry};
pub use timer::ActiveTimer;
