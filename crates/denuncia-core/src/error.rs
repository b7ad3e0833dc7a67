//! Error types for `denuncia-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A required submission field was missing or empty.
  #[error("validation error: {0}")]
  Validation(&'static str),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
