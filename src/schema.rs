//! Money Manager backup schema.
//!
//! Column shapes follow the application's own backup files. There are no
//! foreign-key constraints; referential integrity is an application-level
//! concern the parser must handle on its own.

use rusqlite::Connection;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS ASSETS (
    uid TEXT PRIMARY KEY,
    NIC_NAME TEXT,
    TYPE INTEGER
);
CREATE TABLE IF NOT EXISTS ZCATEGORY (
    uid TEXT PRIMARY KEY,
    NAME TEXT,
    TYPE INTEGER
);
CREATE TABLE IF NOT EXISTS INOUTCOME (
    uid TEXT PRIMARY KEY,
    ZDATE TEXT,
    ZMONEY REAL,
    DO_TYPE TEXT,
    ZCONTENT TEXT,
    categoryUid TEXT,
    assetUid TEXT
);
";

/// Ensure the three backup tables exist on `conn`.
///
/// Idempotent: safe against a handle that already carries the schema.
/// Propagates the engine error if the handle is unwritable or locked.
pub fn create_schema(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(SCHEMA)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_names(conn: &Connection) -> Vec<String> {
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
            .unwrap();
        stmt.query_map([], |row| row.get(0))
            .unwrap()
            .map(|r| r.unwrap())
            .collect()
    }

    #[test]
    fn test_schema_creates_three_tables() {
        let conn = Connection::open_in_memory().unwrap();
        create_schema(&conn).unwrap();
        assert_eq!(table_names(&conn), vec!["ASSETS", "INOUTCOME", "ZCATEGORY"]);
    }

    #[test]
    fn test_schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        create_schema(&conn).unwrap();
        create_schema(&conn).unwrap();
        assert_eq!(table_names(&conn).len(), 3);
    }

    #[test]
    fn test_schema_survives_existing_rows() {
        let conn = Connection::open_in_memory().unwrap();
        create_schema(&conn).unwrap();
        conn.execute("INSERT INTO ASSETS VALUES ('acc1', 'Cash', 1)", [])
            .unwrap();
        create_schema(&conn).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM ASSETS", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }
}
