//! CLI command implementations

pub mod generate;

pub use generate::{GenerateCommand, DEFAULT_MODULES_ROOT};
