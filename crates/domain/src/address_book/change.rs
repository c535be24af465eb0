//! Change notifications published by the address book.

use common::Tag;

use crate::event::Event;

use super::{PersonListView, ReadOnlyAddressBook};

/// What kind of mutation an address book has committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeKind {
    /// All persons and the event were replaced.
    Reset,

    /// A person was appended.
    PersonAdded,

    /// A person was replaced in place.
    PersonUpdated,

    /// A person was removed.
    PersonRemoved,

    /// A tag was added to every person lacking it.
    TagAdded { tag: Tag, affected: usize },

    /// A tag was removed from every person holding it.
    TagRemoved { tag: Tag, affected: usize },

    /// The current event was replaced or cleared.
    EventUpdated,

    /// Every person was marked absent.
    AttendanceReset { affected: usize },
}

impl ChangeKind {
    /// Returns the change kind name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeKind::Reset => "Reset",
            ChangeKind::PersonAdded => "PersonAdded",
            ChangeKind::PersonUpdated => "PersonUpdated",
            ChangeKind::PersonRemoved => "PersonRemoved",
            ChangeKind::TagAdded { .. } => "TagAdded",
            ChangeKind::TagRemoved { .. } => "TagRemoved",
            ChangeKind::EventUpdated => "EventUpdated",
            ChangeKind::AttendanceReset { .. } => "AttendanceReset",
        }
    }
}

impl std::fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A committed change together with the resulting state.
pub struct AddressBookChanged<'a> {
    /// The mutation that was committed.
    pub kind: ChangeKind,

    /// The address book state after the mutation.
    pub snapshot: &'a dyn ReadOnlyAddressBook,
}

impl<'a> AddressBookChanged<'a> {
    pub fn new(kind: ChangeKind, snapshot: &'a dyn ReadOnlyAddressBook) -> Self {
        Self { kind, snapshot }
    }

    /// Returns the persons after the change.
    pub fn persons(&self) -> PersonListView<'a> {
        self.snapshot.person_list()
    }

    /// Returns the event after the change.
    pub fn event(&self) -> &'a Event {
        self.snapshot.event_details()
    }
}

impl std::fmt::Debug for AddressBookChanged<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AddressBookChanged")
            .field("kind", &self.kind)
            .field("persons", &self.snapshot.person_count())
            .field("event", self.snapshot.event_details())
            .finish()
    }
}

/// Receives a notification after every committed address book mutation.
///
/// Observers are called synchronously, after the mutation is complete and
/// before the mutating call returns. They may only read the new state.
pub trait AddressBookObserver {
    /// Returns the observer name, used in logs.
    fn name(&self) -> &'static str;

    /// Handles a committed change.
    fn on_change(&self, change: &AddressBookChanged<'_>);
}
