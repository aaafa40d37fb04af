//! Command-line interface for the revlog storage engine.
//!
//! The storage primitives live in the library crates; this crate owns the
//! outer surface: argument parsing ([`cli`]), the [`Repository`] facade
//! that wires stage, commit store, and reconstructor together over one
//! [`Layout`](revlog_types::Layout) ([`repo`]), and command dispatch with
//! human/JSON output ([`commands`]).

pub mod cli;
pub mod commands;
pub mod repo;

pub use repo::{Repository, RepoError};
