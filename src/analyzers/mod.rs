pub mod fields;
pub mod performance;
pub mod selector;
