//! Domain layer for the event roster.
//!
//! This crate provides the in-memory data model:
//! - [`Person`] records with identity equality and tag replacement
//! - [`Event`], the single current event with an uninitialised state
//! - [`AddressBook`], the aggregate root that keeps persons unique, applies
//!   bulk tag changes and notifies observers after every committed mutation

pub mod address_book;
pub mod error;
pub mod event;
pub mod person;

pub use address_book::{
    AddressBook, AddressBookChanged, AddressBookObserver, AddressBookSnapshot, ChangeKind,
    PersonListView, ReadOnlyAddressBook,
};
pub use common::{Tag, TagSet, tag_set};
pub use error::{AddressBookError, Result};
pub use event::{Event, EventDetails};
pub use person::{Address, Attendance, Email, Name, Person, PersonBuilder, Phone};
