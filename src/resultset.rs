use crate::value::SqlValue;
use std::io::{self, Write};

/// Fully materialized output of one query execution.
///
/// Columns appear in statement order and every row was read into memory before
/// the result was returned; there are no live cursor semantics. A `ResultSet`
/// reflects the database at the moment the query ran and holds no connection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    /// Column names in the order the statement produced them
    pub columns: Vec<String>,
    /// Row values, each in column order
    pub rows: Vec<Vec<SqlValue>>,
}

impl ResultSet {
    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Write one line per row, column values joined with `" | "` in source order.
    /// An empty result set writes nothing.
    pub fn render_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for row in &self.rows {
            let line = row
                .iter()
                .map(|value| value.to_string())
                .collect::<Vec<_>>()
                .join(" | ");
            writeln!(out, "{line}")?;
        }
        Ok(())
    }

    /// Print the rows to stdout for human inspection.
    pub fn render(&self) -> io::Result<()> {
        self.render_to(&mut io::stdout().lock())
    }

    /// Rows as a JSON array of objects keyed by column name.
    pub fn to_json(&self) -> serde_json::Value {
        let rows = self
            .rows
            .iter()
            .map(|row| {
                let mut obj = serde_json::Map::new();
                for (name, value) in self.columns.iter().zip(row) {
                    obj.insert(name.clone(), value.into());
                }
                serde_json::Value::Object(obj)
            })
            .collect();
        serde_json::Value::Array(rows)
    }
}
