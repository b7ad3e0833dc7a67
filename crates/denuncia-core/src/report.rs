//! Report — the single entity of the service.
//!
//! Reports are append-only: once the store has assigned an `id` and a
//! `created_at`, nothing about the record changes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A persisted complaint record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
  pub id:          i64,
  pub category:    String,
  pub description: String,
  pub created_at:  DateTime<Utc>,
}

/// Input for [`ReportStore::insert`](crate::store::ReportStore::insert).
///
/// Can only be built through [`NewReport::new`], so a value of this type
/// always carries a non-empty category and description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReport {
  category:    String,
  description: String,
  created_at:  Option<DateTime<Utc>>,
}

impl NewReport {
  /// Validate both fields and build the input.
  ///
  /// Returns [`Error::Validation`] if either field is empty.
  pub fn new(
    category:    impl Into<String>,
    description: impl Into<String>,
  ) -> Result<Self> {
    let category = category.into();
    let description = description.into();

    if category.is_empty() {
      return Err(Error::Validation("category is required"));
    }
    if description.is_empty() {
      return Err(Error::Validation("description is required"));
    }

    Ok(Self { category, description, created_at: None })
  }

  /// Pin the creation timestamp instead of letting the store assign it.
  pub fn at(mut self, created_at: DateTime<Utc>) -> Self {
    self.created_at = Some(created_at);
    self
  }

  pub fn category(&self) -> &str { &self.category }

  pub fn description(&self) -> &str { &self.description }

  pub fn created_at(&self) -> Option<DateTime<Utc>> { self.created_at }

  /// Split into `(category, description, created_at)`.
  pub fn into_parts(self) -> (String, String, Option<DateTime<Utc>>) {
    (self.category, self.description, self.created_at)
  }
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone as _;

  use super::*;

  #[test]
  fn new_accepts_non_empty_fields() {
    let input = NewReport::new("fraud", "saw a scam").unwrap();
    assert_eq!(input.category(), "fraud");
    assert_eq!(input.description(), "saw a scam");
    assert!(input.created_at().is_none());
  }

  #[test]
  fn new_rejects_empty_category() {
    let err = NewReport::new("", "saw a scam").unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
  }

  #[test]
  fn new_rejects_empty_description() {
    let err = NewReport::new("fraud", "").unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
  }

  #[test]
  fn at_pins_timestamp() {
    let ts = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
    let (_, _, created_at) =
      NewReport::new("fraud", "x").unwrap().at(ts).into_parts();
    assert_eq!(created_at, Some(ts));
  }
}
