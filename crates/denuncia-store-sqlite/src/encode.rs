//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 UTC strings with a fixed number of
//! fractional digits, so ordering the column as text orders it in time.

use chrono::{DateTime, SecondsFormat, Utc};
use denuncia_core::report::Report;

use crate::{Error, Result};

// ─── DateTime<Utc>
// ────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw values read directly from a `reports` row.
pub struct RawReport {
  pub id:          i64,
  pub category:    String,
  pub description: String,
  pub created_at:  String,
}

impl RawReport {
  /// Decode a row selected as `id, category, description, created_at`.
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(RawReport {
      id:          row.get(0)?,
      category:    row.get(1)?,
      description: row.get(2)?,
      created_at:  row.get(3)?,
    })
  }

  pub fn into_report(self) -> Result<Report> {
    if self.category.is_empty() {
      return Err(Error::EmptyField(self.id, "category"));
    }
    if self.description.is_empty() {
      return Err(Error::EmptyField(self.id, "description"));
    }
    Ok(Report {
      id:          self.id,
      category:    self.category,
      description: self.description,
      created_at:  decode_dt(&self.created_at)?,
    })
  }
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone as _;

  use super::*;

  #[test]
  fn encoded_timestamps_are_fixed_width() {
    let whole = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let frac  = whole + chrono::Duration::microseconds(1_500);
    assert_eq!(encode_dt(whole), "2024-01-01T00:00:00.000000Z");
    assert_eq!(encode_dt(frac), "2024-01-01T00:00:00.001500Z");
    assert!(encode_dt(whole) < encode_dt(frac));
  }

  #[test]
  fn decode_round_trips_encode() {
    let ts = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 15).unwrap();
    assert_eq!(decode_dt(&encode_dt(ts)).unwrap(), ts);
  }

  #[test]
  fn row_with_empty_field_is_a_storage_error() {
    let raw = RawReport {
      id:          7,
      category:    String::new(),
      description: "d".into(),
      created_at:  "2024-01-01T00:00:00.000000Z".into(),
    };
    assert!(matches!(raw.into_report(), Err(Error::EmptyField(7, "category"))));
  }

  #[test]
  fn decode_rejects_garbage() {
    assert!(matches!(decode_dt("yesterday"), Err(Error::DateParse(_))));
  }
}
