//! SQLite-backed document persistence

pub mod connection;
pub mod documents;
pub mod migrations;

pub use connection::get_database_pool;
pub use documents::{DocumentStore, LIST_CAP};
pub use migrations::run_migrations;
