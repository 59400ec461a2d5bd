//! Feature module scaffolding

pub mod generator;
pub mod naming;

pub use generator::{GeneratedFile, Scaffolder};
pub use naming::NameHelpers;
