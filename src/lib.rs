//! Lumina library exports

pub mod core;
pub mod explain;
pub mod headless;
pub mod tui;

#[cfg(test)]
pub mod test_support;

pub use explain::ReadingLevel;
