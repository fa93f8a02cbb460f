//! Skycast Library
//!
//! This module exposes the lookup, store, and shell-cache modules for use in
//! integration tests.

pub mod cli;
pub mod clock;
pub mod data;
pub mod lookup;
pub mod shell;
pub mod store;
