//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted while loading a question bank.
///
/// The engine itself never validates bank content; these cover getting the
/// bank off disk and out of JSON.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BankError {
    #[error("failed to read question bank file")]
    Io(#[from] std::io::Error),
    #[error("failed to parse question bank JSON")]
    Parse(#[from] serde_json::Error),
}
