//! Deterministic test fixtures for Money Manager `.mmbak` backup files.
//!
//! A `.mmbak` backup is a plain SQLite database carrying three tables:
//! `ASSETS` (accounts), `ZCATEGORY` (categories), and `INOUTCOME`
//! (transactions). The external backup parser is validated against five
//! structurally distinct files, all produced here:
//!
//! - `valid.mmbak` — well-formed backup the parser must accept cleanly
//! - `bad_dates.mmbak` — ten transactions, one per date-defect class
//! - `missing_tables.mmbak` — valid SQLite, incomplete application schema
//! - `empty.mmbak` — full schema, zero rows
//! - `corrupt.mmbak` — not a SQLite file at all
//!
//! # Design
//!
//! Fixture content is described as plain data ([`model::Backup`]) by pure
//! builders, then materialized to disk by independent writers. The
//! [`FixtureGenerator`] orchestrates all five writers against one output
//! directory and aborts on the first failure. Every writer truncates its
//! target first, so re-running against a populated directory reproduces the
//! same row content instead of appending duplicates.

pub mod error;
pub mod generator;
pub mod model;
pub mod schema;
pub mod writer;

pub use error::{FixtureError, Result};
pub use generator::{Fixture, FixtureGenerator};
pub use model::{Account, Backup, Category, Transaction};
