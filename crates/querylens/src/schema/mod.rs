use std::path::Path;

use anyhow::{Context, Result, bail};
use rusqlite::{Connection, OpenFlags};
use tracing::debug;

use crate::projection::PhysicalSchema;

/// Opens the mirror database for introspection; never creates it.
pub fn open_mirror_connection(path: &Path) -> Result<Connection> {
    if !path.is_file() {
        bail!("mirror database does not exist: {}", path.display());
    }

    Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .with_context(|| format!("failed to open mirror database: {}", path.display()))
}

/// Reads the live column list of `table`.
pub fn load_table_columns(connection: &Connection, table: &str) -> Result<PhysicalSchema> {
    let pragma_sql = format!("PRAGMA table_info({})", sqlite_single_quoted(table));
    let mut statement = connection
        .prepare(&pragma_sql)
        .with_context(|| format!("failed to prepare column introspection for `{table}`"))?;

    let column_rows = statement
        .query_map([], |row| row.get::<usize, String>(1))
        .with_context(|| format!("failed to execute column introspection for `{table}`"))?;

    let columns = column_rows
        .map(|row| row.context("failed to decode table column row"))
        .collect::<Result<Vec<_>>>()?;

    if columns.is_empty() {
        bail!("table `{table}` does not exist or has no columns");
    }

    debug!(table, columns = columns.len(), "loaded physical schema snapshot");
    Ok(PhysicalSchema::new(columns))
}

pub fn load_table_columns_from_path(path: &Path, table: &str) -> Result<PhysicalSchema> {
    let connection = open_mirror_connection(path)?;
    load_table_columns(&connection, table)
}

/// Parses an explicit `a,b,c` column list into a snapshot.
#[must_use]
pub fn parse_column_list(raw: &str) -> PhysicalSchema {
    raw.split(',').collect()
}

fn sqlite_single_quoted(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;

    use super::{load_table_columns, parse_column_list};

    #[test]
    fn loads_columns_from_live_table() {
        let connection = Connection::open_in_memory().expect("in-memory sqlite should open");
        connection
            .execute_batch(
                "CREATE TABLE CLUSTER_SLOW_QUERY (Time TEXT, Digest TEXT, Conn_ID INTEGER)",
            )
            .expect("table should be creatable");

        let schema =
            load_table_columns(&connection, "CLUSTER_SLOW_QUERY").expect("columns should load");
        assert_eq!(schema.len(), 3);
        assert!(schema.contains("conn_id"));
        assert!(schema.contains("Time"));
    }

    #[test]
    fn missing_table_is_an_error() {
        let connection = Connection::open_in_memory().expect("in-memory sqlite should open");
        let err = load_table_columns(&connection, "no_such_table")
            .expect_err("missing table must fail");
        assert!(
            err.to_string().contains("does not exist"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn quoted_table_names_are_escaped() {
        let connection = Connection::open_in_memory().expect("in-memory sqlite should open");
        connection
            .execute_batch("CREATE TABLE \"odd'name\" (digest TEXT)")
            .expect("table should be creatable");
        let schema = load_table_columns(&connection, "odd'name").expect("columns should load");
        assert!(schema.contains("digest"));
    }

    #[test]
    fn column_lists_trim_and_skip_blanks() {
        let schema = parse_column_list(" Digest, ,Time,");
        assert_eq!(schema.column_names().collect::<Vec<_>>(), ["Digest", "Time"]);
    }
}
