//! Core library components.
//!
//! Scope resolution, sealing, the GitHub client and the reconciler. Nothing
//! here prints; the CLI layer owns terminal output.

pub mod cipher;
pub mod config;
pub mod constants;
pub mod github;
pub mod reconcile;
pub mod scope;
pub mod types;
pub mod validation;
