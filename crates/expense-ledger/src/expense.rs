//! Expense Entity
//!
//! A single tracked spending entry plus the raw form draft used to create
//! or edit one.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::amount::parse_amount;
use crate::error::{LedgerError, LedgerResult};

/// Date layout written to storage
const STORED_DATE_FORMAT: &str = "%Y-%m-%d";

/// One expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique within a ledger
    pub id: u32,
    pub name: String,
    /// `None` only for records hydrated from older stored data
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(with = "calendar_date")]
    pub date: NaiveDate,
}

impl Expense {
    /// Amount with `None` treated as zero
    pub fn amount_or_zero(&self) -> f64 {
        self.amount.unwrap_or(0.0)
    }
}

/// Raw form state for creating or editing an expense
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDraft {
    pub name: String,
    /// Unparsed amount text exactly as typed
    pub amount: String,
    pub date: NaiveDate,
}

impl ExpenseDraft {
    /// Empty form defaulting to `today`
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            name: String::new(),
            amount: String::new(),
            date: today,
        }
    }

    /// Form pre-populated from an existing record
    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            name: expense.name.clone(),
            amount: expense.amount.map(|a| a.to_string()).unwrap_or_default(),
            date: expense.date,
        }
    }

    /// Validate and convert into record fields `(name, amount, date)`.
    ///
    /// Only the name is checked; the amount never fails to parse.
    pub(crate) fn to_fields(&self) -> LedgerResult<(String, f64, NaiveDate)> {
        if self.name.trim().is_empty() {
            return Err(LedgerError::InvalidInput("expense name is required".to_string()));
        }
        Ok((self.name.clone(), parse_amount(&self.amount), self.date))
    }
}

/// Parse a stored date, accepting `YYYY-MM-DD` or a full RFC 3339 timestamp.
///
/// The timestamp form is what the browser's `Date#toJSON` writes, so lists
/// saved by earlier versions of the tracker still load.
pub fn parse_stored_date(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(raw, STORED_DATE_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
}

mod calendar_date {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::{parse_stored_date, STORED_DATE_FORMAT};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(STORED_DATE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_stored_date(&raw).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_serializes_plain_date() {
        let expense = Expense {
            id: 7,
            name: "Coffee".to_string(),
            amount: Some(4.5),
            date: date(2024, 6, 1),
        };
        let json = serde_json::to_string(&expense).unwrap();
        assert_eq!(json, r#"{"id":7,"name":"Coffee","amount":4.5,"date":"2024-06-01"}"#);
    }

    #[test]
    fn test_reads_browser_timestamps_and_null_amounts() {
        let json = r#"{"id":1,"name":"Rent","amount":null,"date":"2024-06-01T00:00:00.000Z"}"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.date, date(2024, 6, 1));
        assert_eq!(expense.amount, None);
        assert_eq!(expense.amount_or_zero(), 0.0);
    }

    #[test]
    fn test_missing_amount_defaults_to_none() {
        let json = r#"{"id":1,"name":"Rent","date":"2024-06-01"}"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.amount, None);
    }

    #[test]
    fn test_rejects_garbage_date() {
        let json = r#"{"id":1,"name":"Rent","amount":1,"date":"last tuesday"}"#;
        assert!(serde_json::from_str::<Expense>(json).is_err());
    }

    #[test]
    fn test_draft_from_expense() {
        let mut expense = Expense {
            id: 2,
            name: "Groceries".to_string(),
            amount: Some(250.0),
            date: date(2024, 5, 15),
        };
        let draft = ExpenseDraft::from_expense(&expense);
        assert_eq!(draft.amount, "250");
        assert_eq!(draft.name, "Groceries");
        assert_eq!(draft.date, date(2024, 5, 15));

        expense.amount = None;
        assert_eq!(ExpenseDraft::from_expense(&expense).amount, "");
    }

    #[test]
    fn test_draft_requires_name() {
        let mut draft = ExpenseDraft::blank(date(2024, 1, 1));
        draft.amount = "3".to_string();
        assert!(matches!(draft.to_fields(), Err(LedgerError::InvalidInput(_))));

        draft.name = "   ".to_string();
        assert!(draft.to_fields().is_err());

        draft.name = "Tea".to_string();
        let (name, amount, _) = draft.to_fields().unwrap();
        assert_eq!(name, "Tea");
        assert_eq!(amount, 3.0);
    }
}
