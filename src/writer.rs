//! Fixture writers: materialize backup descriptions to `.mmbak` files.
//!
//! Each writer is independent and owns its connection for the duration of
//! one file. Writers truncate any pre-existing file at the target path
//! before writing, so repeated runs produce identical row content instead
//! of accumulating duplicates.

use std::fs;
use std::io;
use std::path::Path;

use rusqlite::{params, Connection};

use crate::error::{FixtureError, Result};
use crate::model::{self, Backup};
use crate::schema;

/// Fixed payload of `corrupt.mmbak`. Anything that is not a SQLite header
/// works; the sentinel text makes the file self-describing in a hex dump.
pub const CORRUPT_PAYLOAD: &[u8] = b"This is not a valid SQLite database file!";

/// Remove a stale file at `path`, then open a fresh database there.
fn open_clean(path: &Path, fixture: &'static str) -> Result<Connection> {
    remove_stale(path, fixture)?;
    Connection::open(path).map_err(|source| FixtureError::Storage { fixture, source })
}

fn remove_stale(path: &Path, fixture: &'static str) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(FixtureError::Io { fixture, source }),
    }
}

/// Write a full three-table backup: schema, then all rows in one batch.
fn materialize(backup: &Backup, path: &Path, fixture: &'static str) -> Result<()> {
    let mut conn = open_clean(path, fixture)?;
    let storage = |source| FixtureError::Storage { fixture, source };

    schema::create_schema(&conn).map_err(storage)?;

    let tx = conn.transaction().map_err(storage)?;
    for account in &backup.accounts {
        tx.execute(
            "INSERT INTO ASSETS (uid, NIC_NAME, TYPE) VALUES (?1, ?2, ?3)",
            params![account.uid, account.nickname, account.account_type],
        )
        .map_err(storage)?;
    }
    for category in &backup.categories {
        tx.execute(
            "INSERT INTO ZCATEGORY (uid, NAME, TYPE) VALUES (?1, ?2, ?3)",
            params![category.uid, category.name, category.category_type],
        )
        .map_err(storage)?;
    }
    for txn in &backup.transactions {
        tx.execute(
            "INSERT INTO INOUTCOME (uid, ZDATE, ZMONEY, DO_TYPE, ZCONTENT, categoryUid, assetUid)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                txn.uid,
                txn.date,
                txn.amount,
                txn.direction,
                txn.memo,
                txn.category_uid,
                txn.asset_uid
            ],
        )
        .map_err(storage)?;
    }
    tx.commit().map_err(storage)
}

/// Write `valid.mmbak`: the baseline backup the parser accepts without any
/// diagnostic.
pub fn write_valid(path: &Path) -> Result<()> {
    materialize(&model::valid_backup(), path, "valid")
}

/// Write `bad_dates.mmbak`: ten transactions, one per date-defect class.
pub fn write_bad_dates(path: &Path) -> Result<()> {
    materialize(&model::bad_dates_backup(), path, "bad_dates")
}

/// Write `missing_tables.mmbak`: valid SQLite carrying only `ASSETS`, so the
/// file opens fine but fails application-level schema completeness.
pub fn write_missing_tables(path: &Path) -> Result<()> {
    let fixture = "missing_tables";
    let conn = open_clean(path, fixture)?;
    let storage = |source| FixtureError::Storage { fixture, source };

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS ASSETS (
            uid TEXT PRIMARY KEY,
            NIC_NAME TEXT,
            TYPE INTEGER
        );",
    )
    .map_err(storage)?;

    let account = model::missing_tables_account();
    conn.execute(
        "INSERT INTO ASSETS (uid, NIC_NAME, TYPE) VALUES (?1, ?2, ?3)",
        params![account.uid, account.nickname, account.account_type],
    )
    .map_err(storage)?;
    Ok(())
}

/// Write `empty.mmbak`: full schema, zero rows. Distinguishes "schema
/// present, no data" from both the missing-tables and corrupt cases.
pub fn write_empty(path: &Path) -> Result<()> {
    materialize(&model::empty_backup(), path, "empty")
}

/// Write `corrupt.mmbak`: raw non-SQLite bytes, bypassing the engine
/// entirely. Opening it as a database must fail with a format error.
pub fn write_corrupt(path: &Path) -> Result<()> {
    let fixture = "corrupt";
    remove_stale(path, fixture)?;
    fs::write(path, CORRUPT_PAYLOAD).map_err(|source| FixtureError::Io { fixture, source })
}
