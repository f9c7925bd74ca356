use crate::result::{ConnectionError, QueryError};
use tracing::{debug, error, warn};

/// Live handle to an open SQLite session.
///
/// Owned exclusively by the caller that opened it. The underlying handle is
/// released exactly once: either by an explicit [`close`](Connection::close)
/// or on drop, whichever comes first. A released connection must not be
/// reused; `execute` against it reports [`QueryError::ConnectionClosed`].
#[derive(Debug)]
pub struct Connection {
    inner: Option<rusqlite::Connection>,
    locator: String,
}

impl Connection {
    /// Open the database identified by `locator`.
    ///
    /// The locator is a bare filesystem path, `:memory:`, or a `sqlite://`
    /// connection URI (`sqlite:///club.db` resolves to the relative path
    /// `club.db`, `sqlite:////var/db/club.db` to an absolute one).
    ///
    /// Failures are logged and returned; there is no degraded mode that hands
    /// back an unusable connection.
    pub fn open(locator: &str) -> Result<Self, ConnectionError> {
        let path = resolve_locator(locator);

        let conn = rusqlite::Connection::open(path).map_err(|source| {
            error!(locator, %source, "failed to open database");
            ConnectionError::Open {
                locator: locator.to_string(),
                source,
            }
        })?;

        // rusqlite opens lazily, so force a read here: a file that exists but
        // is not a database should fail at open, not at the first query
        if let Err(source) = conn.query_row("PRAGMA schema_version", [], |_| Ok(())) {
            error!(locator, %source, "database file is not usable");
            return Err(ConnectionError::Invalid {
                locator: locator.to_string(),
                source,
            });
        }

        debug!(locator, "database opened");
        Ok(Self {
            inner: Some(conn),
            locator: locator.to_string(),
        })
    }

    /// The locator this connection was opened with.
    pub fn locator(&self) -> &str {
        &self.locator
    }

    pub fn is_open(&self) -> bool {
        self.inner.is_some()
    }

    pub(crate) fn handle(&self) -> Result<&rusqlite::Connection, QueryError> {
        self.inner.as_ref().ok_or(QueryError::ConnectionClosed)
    }

    /// Release the underlying handle. Safe to call repeatedly and after a
    /// failed `execute`; a close error is logged, never propagated.
    pub fn close(&mut self) {
        if let Some(conn) = self.inner.take() {
            if let Err((_, source)) = conn.close() {
                warn!(locator = %self.locator, %source, "error while closing database");
            }
            debug!(locator = %self.locator, "database closed");
        }
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        self.close();
    }
}

/// Strip the `sqlite://` URI scheme down to a filesystem path.
///
/// `sqlite:///rel.db` → `rel.db`, `sqlite:////abs.db` → `/abs.db`,
/// anything without the scheme passes through unchanged (including `:memory:`).
fn resolve_locator(locator: &str) -> &str {
    match locator.strip_prefix("sqlite://") {
        Some(rest) => rest.strip_prefix('/').unwrap_or(rest),
        None => locator,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_locator_bare_path() {
        assert_eq!(resolve_locator("club.db"), "club.db");
        assert_eq!(resolve_locator("/var/db/club.db"), "/var/db/club.db");
        assert_eq!(resolve_locator(":memory:"), ":memory:");
    }

    #[test]
    fn test_resolve_locator_uri_relative() {
        assert_eq!(resolve_locator("sqlite:///club.db"), "club.db");
    }

    #[test]
    fn test_resolve_locator_uri_absolute() {
        assert_eq!(resolve_locator("sqlite:////var/db/club.db"), "/var/db/club.db");
    }
}
