//! Test support utilities for ghvar integration tests.
//!
//! Provides an in-memory GitHub, CLI command helpers and assertions.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;
pub mod github;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use commands::*;
#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use github::*;
