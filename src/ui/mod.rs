pub mod menu;
pub mod messages;
pub mod prompt;
