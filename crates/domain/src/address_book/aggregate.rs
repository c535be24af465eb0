//! Address book aggregate implementation.

use common::Tag;

use crate::error::{AddressBookError, Result};
use crate::event::Event;
use crate::person::{Attendance, Person};

use super::{
    AddressBookChanged, AddressBookObserver, AddressBookSnapshot, ChangeKind, PersonListView,
    ReadOnlyAddressBook, unique_list::UniquePersonList,
};

/// Address book aggregate root.
///
/// Owns an ordered sequence of unique persons and the current event. All
/// mutations go through this type; each committed mutation publishes exactly
/// one [`AddressBookChanged`] notification to the registered observers.
/// Failed mutations publish nothing and leave the state unchanged.
#[derive(Default)]
pub struct AddressBook {
    /// Persons in insertion order.
    persons: UniquePersonList,

    /// The current event, possibly uninitialised.
    event: Event,

    /// Notified after every committed mutation.
    observers: Vec<Box<dyn AddressBookObserver>>,
}

impl AddressBook {
    /// Creates an empty address book with an uninitialised event.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an address book holding a copy of `data`.
    pub fn from_snapshot<S>(data: &S) -> Result<Self>
    where
        S: ReadOnlyAddressBook + ?Sized,
    {
        let mut book = Self::new();
        book.reset_data(data)?;
        Ok(book)
    }

    /// Registers an observer for change notifications.
    pub fn subscribe(&mut self, observer: Box<dyn AddressBookObserver>) {
        tracing::debug!(observer = observer.name(), "observer subscribed");
        self.observers.push(observer);
    }

    /// Returns the number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

// Query methods
impl AddressBook {
    /// Returns a read-only view of the persons.
    pub fn person_list(&self) -> PersonListView<'_> {
        PersonListView::new(self.persons.as_slice())
    }

    /// Returns the current event.
    pub fn event_details(&self) -> &Event {
        &self.event
    }

    /// Returns true if the same person is already stored.
    pub fn has_person(&self, person: &Person) -> bool {
        self.persons.contains(person)
    }

    /// Returns the persons carrying `tag`.
    pub fn persons_with_tag<'a>(&'a self, tag: &'a Tag) -> impl Iterator<Item = &'a Person> {
        self.persons.as_slice().iter().filter(move |p| p.has_tag(tag))
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.len() == 0
    }

    /// Returns an owned copy of the current state.
    pub fn snapshot(&self) -> AddressBookSnapshot {
        AddressBookSnapshot::new(self.persons.as_slice().to_vec(), self.event.clone())
    }
}

// Command methods
impl AddressBook {
    /// Replaces all persons and the event with those of `new_data`.
    ///
    /// Fails with [`AddressBookError::DuplicatePerson`] if `new_data` holds the
    /// same person twice, in which case nothing is replaced.
    pub fn reset_data<S>(&mut self, new_data: &S) -> Result<()>
    where
        S: ReadOnlyAddressBook + ?Sized,
    {
        let persons = new_data.person_list().to_vec();
        self.persons.set_persons(persons).map_err(rejected)?;
        self.event.set_event(new_data.event_details());

        tracing::debug!(
            persons = self.persons.len(),
            event_initialised = self.event.is_user_initialised(),
            "address book reset"
        );
        self.notify(ChangeKind::Reset);
        Ok(())
    }

    /// Appends a person.
    ///
    /// Fails with [`AddressBookError::DuplicatePerson`] if the same person is
    /// already stored.
    pub fn add_person(&mut self, person: Person) -> Result<()> {
        let name = person.name().to_string();
        self.persons.add(person).map_err(rejected)?;

        tracing::debug!(%name, "person added");
        self.notify(ChangeKind::PersonAdded);
        Ok(())
    }

    /// Replaces `target` with `edited`, keeping its position.
    ///
    /// Fails with [`AddressBookError::PersonNotFound`] if `target` is not
    /// stored, or [`AddressBookError::DuplicatePerson`] if `edited` is the same
    /// person as someone other than `target`.
    pub fn set_person(&mut self, target: &Person, edited: Person) -> Result<()> {
        let name = edited.name().to_string();
        self.persons.set(target, edited).map_err(rejected)?;

        tracing::debug!(previous = %target.name(), %name, "person updated");
        self.notify(ChangeKind::PersonUpdated);
        Ok(())
    }

    /// Removes the stored person that is the same person as `key`.
    pub fn remove_person(&mut self, key: &Person) -> Result<Person> {
        let removed = self.persons.remove(key).map_err(rejected)?;

        tracing::debug!(name = %removed.name(), "person removed");
        self.notify(ChangeKind::PersonRemoved);
        Ok(removed)
    }

    /// Marks the attendance of `target`.
    pub fn set_attendance(&mut self, target: &Person, attendance: Attendance) -> Result<()> {
        let current = self
            .persons
            .position(target)
            .map(|index| self.persons.as_slice()[index].clone())
            .ok_or_else(|| AddressBookError::PersonNotFound {
                name: target.name().to_string(),
            })
            .map_err(rejected)?;
        let edited = current.with_attendance(attendance);
        self.persons.set(&current, edited).map_err(rejected)?;

        tracing::debug!(name = %current.name(), %attendance, "attendance marked");
        self.notify(ChangeKind::PersonUpdated);
        Ok(())
    }

    /// Marks every person absent. Returns the number of persons changed.
    #[tracing::instrument(skip(self))]
    pub fn reset_attendance(&mut self) -> usize {
        let affected = self.persons.replace_each(|person| {
            person
                .attendance()
                .is_present()
                .then(|| person.with_attendance(Attendance::Absent))
        });

        tracing::debug!(affected, "attendance reset");
        self.notify(ChangeKind::AttendanceReset { affected });
        affected
    }

    /// Removes `tag` from every person carrying it.
    ///
    /// Persons without the tag are left as they are. Returns the number of
    /// persons changed.
    #[tracing::instrument(skip(self, tag), fields(tag = %tag))]
    pub fn remove_tag(&mut self, tag: &Tag) -> usize {
        let affected = self
            .persons
            .replace_each(|person| person.has_tag(tag).then(|| person.with_tag_removed(tag)));

        tracing::debug!(affected, "tag removed");
        self.notify(ChangeKind::TagRemoved {
            tag: tag.clone(),
            affected,
        });
        affected
    }

    /// Adds `tag` to every person not carrying it yet.
    ///
    /// Persons that already carry the tag are left as they are. Returns the
    /// number of persons changed.
    #[tracing::instrument(skip(self, tag), fields(tag = %tag))]
    pub fn add_tag(&mut self, tag: &Tag) -> usize {
        let affected = self.persons.replace_each(|person| {
            (!person.has_tag(tag)).then(|| person.with_tag_added(tag.clone()))
        });

        tracing::debug!(affected, "tag added");
        self.notify(ChangeKind::TagAdded {
            tag: tag.clone(),
            affected,
        });
        affected
    }

    /// Replaces the current event with a copy of `event`.
    pub fn set_event(&mut self, event: &Event) {
        self.event.set_event(event);

        tracing::debug!(event = %self.event, "event updated");
        self.notify(ChangeKind::EventUpdated);
    }

    /// Returns the current event to the uninitialised state.
    pub fn clear_event(&mut self) {
        self.event.clear();

        tracing::debug!("event cleared");
        self.notify(ChangeKind::EventUpdated);
    }
}

impl AddressBook {
    fn notify(&self, kind: ChangeKind) {
        metrics::counter!("address_book_mutations_total", "kind" => kind.as_str()).increment(1);

        let change = AddressBookChanged::new(kind, self);
        for observer in &self.observers {
            tracing::trace!(observer = observer.name(), kind = %change.kind, "notifying observer");
            observer.on_change(&change);
        }
    }
}

fn rejected(err: AddressBookError) -> AddressBookError {
    metrics::counter!("address_book_rejections_total", "error" => err.as_str()).increment(1);
    tracing::warn!(error = %err, "mutation rejected");
    err
}

impl ReadOnlyAddressBook for AddressBook {
    fn person_list(&self) -> PersonListView<'_> {
        AddressBook::person_list(self)
    }

    fn event_details(&self) -> &Event {
        &self.event
    }
}

impl PartialEq for AddressBook {
    fn eq(&self, other: &Self) -> bool {
        self.persons == other.persons && self.event == other.event
    }
}

impl Eq for AddressBook {}

impl std::fmt::Debug for AddressBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AddressBook")
            .field("persons", &self.persons.as_slice())
            .field("event", &self.event)
            .field("observers", &self.observers.len())
            .finish()
    }
}
