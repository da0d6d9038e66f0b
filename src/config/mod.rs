//! Configuration for gitsweep.
//!
//! Two layers feed one resolved [`SweepConfig`]:
//! - the optional `.gitsweep.yaml` settings file at the repository root
//!   ([`RepoSettings`]), with forward-compatible parsing (unknown fields are ignored);
//! - command-line flags, which win over the settings file.
//!
//! Anything set in neither place falls back to the built-in defaults in [`types`].

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::{RepoSettings, SweepConfig};
pub use types::OutputFormat;
