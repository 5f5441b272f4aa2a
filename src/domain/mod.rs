pub mod compare;
pub mod fields;
pub mod format;
pub mod property;
