pub mod connection;
pub mod result;
pub mod resultset;
pub mod runner;
pub mod value;

// Re-export types for convenience
pub use connection::Connection;
pub use result::{ConnectionError, Error, QueryError, Result};
pub use resultset::ResultSet;
pub use runner::{QueryRunner, execute, run_query};
pub use value::SqlValue;

// Re-export third-party types used in the public API to provide fallback for dependency conflicts
pub use serde_json::Value as JsonValue;
