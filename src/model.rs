//! Backup entities and pure fixture descriptions.
//!
//! The three entities mirror Money Manager's backup schema one-to-one:
//! [`Account`] → `ASSETS`, [`Category`] → `ZCATEGORY`, [`Transaction`] →
//! `INOUTCOME`. A [`Backup`] bundles the row sets for one fixture file.
//!
//! Builders here are pure: they return fixed, deterministic descriptions and
//! touch no I/O, so row content can be asserted without a database handle.
//! All fixture content is compile-time constant, hence `&'static str` fields.

/// One row of the `ASSETS` table.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Unique identifier, opaque string
    pub uid: &'static str,
    /// Display nickname (`NIC_NAME`)
    pub nickname: &'static str,
    /// Account-type code (`TYPE`)
    pub account_type: i64,
}

/// One row of the `ZCATEGORY` table.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    /// Unique identifier, opaque string
    pub uid: &'static str,
    /// Display name (`NAME`)
    pub name: &'static str,
    /// 0 = expense, 1 = income (`TYPE`)
    pub category_type: i64,
}

/// One row of the `INOUTCOME` table.
///
/// `date` is the crux of the validation contract: free-form text, `None`
/// for a SQL NULL. References to category/account are by uid with no
/// foreign-key enforcement in the container.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Unique identifier, opaque string
    pub uid: &'static str,
    /// Free-form date text (`ZDATE`), `None` → NULL
    pub date: Option<&'static str>,
    /// Monetary amount (`ZMONEY`)
    pub amount: f64,
    /// Text-encoded direction (`DO_TYPE`): "0" = expense, "1" = income
    pub direction: &'static str,
    /// Free-text memo (`ZCONTENT`)
    pub memo: &'static str,
    /// Reference to a `ZCATEGORY.uid`
    pub category_uid: &'static str,
    /// Reference to an `ASSETS.uid`
    pub asset_uid: &'static str,
}

/// Full row-set description of one backup fixture.
#[derive(Debug, Clone, Default)]
pub struct Backup {
    pub accounts: Vec<Account>,
    pub categories: Vec<Category>,
    pub transactions: Vec<Transaction>,
}

/// The well-formed baseline backup: 2 accounts, 3 categories, 3 transactions,
/// every date strict `YYYY-MM-DD`, every reference resolvable.
pub fn valid_backup() -> Backup {
    Backup {
        accounts: vec![
            Account { uid: "acc1", nickname: "Cash Wallet", account_type: 1 },
            Account { uid: "acc2", nickname: "Bank Account", account_type: 2 },
        ],
        categories: vec![
            Category { uid: "cat1", name: "Food", category_type: 0 },
            Category { uid: "cat2", name: "Salary", category_type: 1 },
            Category { uid: "cat3", name: "Transport", category_type: 0 },
        ],
        transactions: vec![
            Transaction {
                uid: "tx1",
                date: Some("2025-01-15"),
                amount: 100.50,
                direction: "0",
                memo: "Lunch",
                category_uid: "cat1",
                asset_uid: "acc1",
            },
            Transaction {
                uid: "tx2",
                date: Some("2025-01-20"),
                amount: 50000.00,
                direction: "1",
                memo: "Monthly Salary",
                category_uid: "cat2",
                asset_uid: "acc2",
            },
            Transaction {
                uid: "tx3",
                date: Some("2025-01-22"),
                amount: 35.00,
                direction: "0",
                memo: "Bus fare",
                category_uid: "cat3",
                asset_uid: "acc1",
            },
        ],
    }
}

/// The date-defect taxonomy backup: one account, one category, and exactly
/// ten transactions, each exercising one distinct date-field defect.
///
/// The id-to-date mapping is contractual — parser test suites assert a
/// specific diagnostic per uid. Eight rows are genuinely malformed; `tx_old`
/// and `tx_future` are well-formed but extreme, and a correct parser accepts
/// them.
pub fn bad_dates_backup() -> Backup {
    let tx = |uid, date, amount, memo| Transaction {
        uid,
        date,
        amount,
        direction: "0",
        memo,
        category_uid: "cat1",
        asset_uid: "acc1",
    };

    Backup {
        accounts: vec![Account { uid: "acc1", nickname: "Wallet", account_type: 1 }],
        categories: vec![Category { uid: "cat1", name: "Food", category_type: 0 }],
        transactions: vec![
            tx("tx_null_date", None, 100.00, "Null date tx"),
            tx("tx_empty_date", Some(""), 200.00, "Empty date tx"),
            tx("tx_invalid_str", Some("not-a-date"), 300.00, "Invalid string"),
            tx("tx_wrong_format", Some("32/13/2025"), 400.00, "Wrong format"),
            tx("tx_partial", Some("2025-01"), 500.00, "Partial date"),
            tx("tx_unix", Some("1706745600"), 600.00, "Unix timestamp"),
            tx("tx_negative", Some("-12345"), 700.00, "Negative number"),
            tx("tx_datetime", Some("2025-01-15 14:30:00"), 800.00, "With time"),
            tx("tx_old", Some("1900-01-01"), 900.00, "Very old date"),
            tx("tx_future", Some("9999-12-31"), 1000.00, "Far future"),
        ],
    }
}

/// The single account row of the missing-tables fixture. That fixture never
/// gets a full [`Backup`]: only `ASSETS` exists in the file.
pub fn missing_tables_account() -> Account {
    Account { uid: "acc1", nickname: "Cash", account_type: 1 }
}

/// Schema present, no data.
pub fn empty_backup() -> Backup {
    Backup::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn uids_unique(backup: &Backup) -> bool {
        let accounts: HashSet<_> = backup.accounts.iter().map(|a| a.uid).collect();
        let categories: HashSet<_> = backup.categories.iter().map(|c| c.uid).collect();
        let transactions: HashSet<_> = backup.transactions.iter().map(|t| t.uid).collect();
        accounts.len() == backup.accounts.len()
            && categories.len() == backup.categories.len()
            && transactions.len() == backup.transactions.len()
    }

    #[test]
    fn test_valid_backup_shape() {
        let backup = valid_backup();
        assert_eq!(backup.accounts.len(), 2);
        assert_eq!(backup.categories.len(), 3);
        assert_eq!(backup.transactions.len(), 3);
        assert!(uids_unique(&backup));
    }

    #[test]
    fn test_valid_backup_references_resolve() {
        let backup = valid_backup();
        let accounts: HashSet<_> = backup.accounts.iter().map(|a| a.uid).collect();
        let categories: HashSet<_> = backup.categories.iter().map(|c| c.uid).collect();
        for tx in &backup.transactions {
            assert!(categories.contains(tx.category_uid), "dangling category in {}", tx.uid);
            assert!(accounts.contains(tx.asset_uid), "dangling account in {}", tx.uid);
        }
    }

    #[test]
    fn test_valid_backup_dates_and_directions() {
        for tx in valid_backup().transactions {
            let date = tx.date.expect("valid fixture has no NULL dates");
            assert_eq!(date.len(), 10);
            assert!(tx.amount > 0.0);
            assert!(tx.direction == "0" || tx.direction == "1");
        }
    }

    #[test]
    fn test_bad_dates_taxonomy_is_exact() {
        let backup = bad_dates_backup();
        assert_eq!(backup.accounts.len(), 1);
        assert_eq!(backup.categories.len(), 1);
        assert!(uids_unique(&backup));

        let expected: Vec<(&str, Option<&str>)> = vec![
            ("tx_null_date", None),
            ("tx_empty_date", Some("")),
            ("tx_invalid_str", Some("not-a-date")),
            ("tx_wrong_format", Some("32/13/2025")),
            ("tx_partial", Some("2025-01")),
            ("tx_unix", Some("1706745600")),
            ("tx_negative", Some("-12345")),
            ("tx_datetime", Some("2025-01-15 14:30:00")),
            ("tx_old", Some("1900-01-01")),
            ("tx_future", Some("9999-12-31")),
        ];
        let actual: Vec<(&str, Option<&str>)> = backup
            .transactions
            .iter()
            .map(|t| (t.uid, t.date))
            .collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_bad_dates_builder_is_deterministic() {
        let first = bad_dates_backup();
        let second = bad_dates_backup();
        assert_eq!(first.transactions, second.transactions);
        assert_eq!(first.accounts, second.accounts);
        assert_eq!(first.categories, second.categories);
    }

    #[test]
    fn test_empty_backup_has_no_rows() {
        let backup = empty_backup();
        assert!(backup.accounts.is_empty());
        assert!(backup.categories.is_empty());
        assert!(backup.transactions.is_empty());
    }
}
