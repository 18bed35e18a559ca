//! SQLite persistence for Prism analysis runs.
//!
//! A run writes one snapshot: the full analysis bundle as a JSON artifact
//! plus normalized tables for the headline results, so past runs stay
//! queryable with plain SQL. `run_history` is an append-only log of every
//! pipeline invocation.

pub mod connection;
pub mod migrations;
pub mod queries;
pub mod store;

pub use connection::Database;
pub use store::{load_bundle, load_latest_bundle, save_bundle};
