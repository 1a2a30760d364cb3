//! Command handlers for the `contentkit` binary
//!
//! Each handler wires infrastructure adapters into a use case, streams its
//! events through the UI context and prints a summary. Handlers return the
//! number of failed items so `--strict` can turn them into an exit code.

pub mod clean;
pub mod git_update;
pub mod icons;
pub mod swap;
