//! Error types for `brasserie-core`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  #[error("{resource} is missing required field `{field}`")]
  MissingField {
    resource: &'static str,
    field:    &'static str,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
