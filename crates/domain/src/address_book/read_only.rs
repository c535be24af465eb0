//! Read-only access to address book state.

use crate::event::Event;
use crate::person::Person;

use super::PersonListView;

/// Read access to an address book's persons and current event.
///
/// Implemented by the aggregate itself and by [`AddressBookSnapshot`], which
/// is the usual source for bulk loads.
pub trait ReadOnlyAddressBook {
    /// Returns a read-only view of the persons, in insertion order.
    fn person_list(&self) -> PersonListView<'_>;

    /// Returns the current event, which may be uninitialised.
    fn event_details(&self) -> &Event;

    /// Returns the number of persons.
    fn person_count(&self) -> usize {
        self.person_list().len()
    }
}

/// An owned copy of address book state.
///
/// Unlike [`AddressBook`](super::AddressBook), a snapshot does not enforce
/// uniqueness; that is checked when it is loaded into an address book.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBookSnapshot {
    pub persons: Vec<Person>,
    pub event: Event,
}

impl AddressBookSnapshot {
    pub fn new(persons: Vec<Person>, event: Event) -> Self {
        Self { persons, event }
    }

    /// Creates a snapshot with the given persons and no event.
    pub fn with_persons(persons: Vec<Person>) -> Self {
        Self {
            persons,
            event: Event::new(),
        }
    }
}

impl ReadOnlyAddressBook for AddressBookSnapshot {
    fn person_list(&self) -> PersonListView<'_> {
        PersonListView::new(&self.persons)
    }

    fn event_details(&self) -> &Event {
        &self.event
    }
}
