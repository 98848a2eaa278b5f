//! Error type for `brasserie-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  /// The file was written by a newer release with a schema this one does not
  /// know.
  #[error("unsupported schema version {0}")]
  UnsupportedSchemaVersion(i64),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
