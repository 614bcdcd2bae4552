// Copyright (c) 2025 Shopbook Developers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Errors surfaced by the ledger core.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Malformed or missing caller input. Recoverable by correcting the
    /// input; never retried automatically.
    #[error("{0}")]
    InvalidInput(String),

    /// The targeted row does not exist for the caller's owner/kind/id
    /// combination. Cross-owner access deliberately surfaces as this
    /// variant rather than anything that would confirm the row exists.
    #[error("Transaction not found")]
    NotFound,

    /// The underlying database failed unexpectedly. Fatal for the current
    /// operation; retry policy belongs to the caller.
    #[error("storage error: {0}")]
    Storage(rusqlite::Error),
}

impl LedgerError {
    pub fn invalid(message: impl Into<String>) -> Self {
        LedgerError::InvalidInput(message.into())
    }
}

impl From<rusqlite::Error> for LedgerError {
    fn from(error: rusqlite::Error) -> Self {
        match error {
            rusqlite::Error::QueryReturnedNoRows => LedgerError::NotFound,
            other => LedgerError::Storage(other),
        }
    }
}
