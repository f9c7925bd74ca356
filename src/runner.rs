use crate::{
    connection::Connection,
    result::{QueryError, Result},
    resultset::ResultSet,
    value::SqlValue,
};
use tracing::debug;

/// Trait for executing SQL against a database session
pub trait QueryRunner {
    fn query_run(&mut self, sql: &str) -> Result<ResultSet, QueryError>;
}

impl QueryRunner for Connection {
    fn query_run(&mut self, sql: &str) -> Result<ResultSet, QueryError> {
        execute(self, sql)
    }
}

/// Execute `sql` on an open connection and materialize every row.
///
/// Rejects an empty query. SQL failures (malformed statements, missing
/// tables, constraint violations) are propagated; the connection stays open
/// and reusable afterwards. Read-only usage is the documented intent, but a
/// mutation executes normally and yields an empty result set.
pub fn execute(conn: &Connection, sql: &str) -> Result<ResultSet, QueryError> {
    if sql.trim().is_empty() {
        return Err(QueryError::EmptyQuery);
    }

    let handle = conn.handle()?;
    let mut stmt = handle.prepare(sql)?;

    let columns: Vec<String> = stmt
        .column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    let column_count = columns.len();

    let rows = stmt
        .query_map([], |row| {
            let mut values = Vec::with_capacity(column_count);
            for idx in 0..column_count {
                values.push(SqlValue::from(row.get_ref(idx)?));
            }
            Ok(values)
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    debug!(locator = %conn.locator(), rows = rows.len(), "query executed");
    Ok(ResultSet { columns, rows })
}

/// Run the whole lifecycle in one call: open `locator`, execute `sql`, and
/// release the connection on both the success and the failure path.
pub fn run_query(locator: &str, sql: &str) -> Result<ResultSet> {
    let mut conn = Connection::open(locator)?;
    let result = execute(&conn, sql);
    conn.close();
    Ok(result?)
}
