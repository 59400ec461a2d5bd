//! nestmod CLI library
//!
//! Scaffolds complete `NestJS` CRUD feature modules: `TypeORM` entity,
//! create/update `DTOs`, service, controller, module wiring, and Jest spec
//! stubs, all derived from a single feature name.

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod commands;
pub mod error;
pub mod scaffold;
pub mod templates;

pub use error::ScaffoldError;
pub use scaffold::{GeneratedFile, NameHelpers, Scaffolder};
pub use templates::TemplateRegistry;
