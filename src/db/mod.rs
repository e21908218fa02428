//! Database module for PostgreSQL connection and content queries
//! 
//! Read-only: the engine never writes to any content table.

pub mod connection;
pub mod content_repo;

pub use connection::{init_pool, DbPool};
pub use content_repo::PgContentSource;
