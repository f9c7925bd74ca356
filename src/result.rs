use thiserror::Error;

/// Failure to open or validate a database file.
///
/// Reported at the open boundary and returned to the caller; never a crash.
/// A caller holding this error has no connection to proceed with.
#[derive(Error, Debug)]
pub enum ConnectionError {
    #[error("failed to open database `{locator}`: {source}")]
    Open {
        locator: String,
        source: rusqlite::Error,
    },
    #[error("`{locator}` is not a valid SQLite database: {source}")]
    Invalid {
        locator: String,
        source: rusqlite::Error,
    },
}

/// Failure while executing SQL against an open connection.
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("query string is empty")]
    EmptyQuery,
    #[error("connection has been closed")]
    ConnectionClosed,
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Either error kind, for entry points that cover the whole lifecycle.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Connection(#[from] ConnectionError),
    #[error(transparent)]
    Query(#[from] QueryError),
}

/// Type alias for Results using the crate error types
pub type Result<T, E = Error> = std::result::Result<T, E>;
