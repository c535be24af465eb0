//! Domain error types.

use thiserror::Error;

/// Errors returned by address book operations.
///
/// Every error is raised before any state is touched, so a failed call
/// leaves the address book unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressBookError {
    /// The operation would store two persons that are the same person.
    #[error("Duplicate person: {name}")]
    DuplicatePerson { name: String },

    /// The referenced person is not in the address book.
    #[error("Person not found: {name}")]
    PersonNotFound { name: String },

    /// A write was attempted through a read-only view.
    #[error("Unsupported mutation: cannot {operation} through a read-only person list")]
    UnsupportedMutation { operation: &'static str },
}

impl AddressBookError {
    /// Returns the error kind as a metric label.
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressBookError::DuplicatePerson { .. } => "duplicate_person",
            AddressBookError::PersonNotFound { .. } => "person_not_found",
            AddressBookError::UnsupportedMutation { .. } => "unsupported_mutation",
        }
    }
}

/// Result type for address book operations.
pub type Result<T> = std::result::Result<T, AddressBookError>;
