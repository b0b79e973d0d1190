pub mod format;
pub mod source;
