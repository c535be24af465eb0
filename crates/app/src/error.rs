//! Application error types.

use domain::AddressBookError;
use thiserror::Error;

/// Errors that stop the roster from starting.
#[derive(Debug, Error)]
pub enum AppError {
    /// An address book operation was rejected.
    #[error("Address book error: {0}")]
    AddressBook(#[from] AddressBookError),

    /// The log filter directive could not be parsed.
    #[error("Invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),

    /// A global tracing subscriber was already installed.
    #[error("Tracing init error: {0}")]
    Tracing(#[from] tracing_subscriber::util::TryInitError),
}
