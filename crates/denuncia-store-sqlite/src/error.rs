//! Error type for `denuncia-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),

  /// A row came back with a field that `NewReport` would have rejected.
  #[error("report {0} has an empty {1}")]
  EmptyField(i64, &'static str),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
