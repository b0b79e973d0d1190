pub mod parsers;
#[cfg(feature = "tracing")]
pub mod tracing;
