//! Errors surfaced by the notification ledger.
//!
//! Only two things can go wrong:
//! - a stored document cannot be decoded (malformed JSON, or a value of the
//!   wrong shape under an account)
//! - the storage backend itself fails
//!
//! An absent key or account is not an error; callers get the documented
//! default instead.

use thiserror::Error;

use crate::backend::BackendError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to parse stored document `{key}`: {source}")]
    Parse {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize document: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("storage backend error: {0}")]
    Backend(#[from] BackendError),
}
