pub mod analysis;
pub mod import;
pub mod report;
pub mod tracker;
