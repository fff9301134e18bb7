//! Menagerie Database — SurrealDB connection management, schema
//! migrations, repository implementations, and the one-shot seed
//! importer.
//!
//! This crate provides:
//! - Connection management ([`DbManager`], [`DbConfig`])
//! - Schema initialization and migrations ([`run_migrations`])
//! - SurrealDB implementations of every `menagerie-core` repository
//!   trait ([`repository`])
//! - The bulk seed import ([`import`])

mod connection;
mod error;
mod schema;

pub mod import;
pub mod repository;

pub use connection::{DbConfig, DbManager};
pub use error::DbError;
pub use schema::{run_migrations, schema_v1};
