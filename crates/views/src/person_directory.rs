//! Person directory read model: one display row per person.

use std::cell::RefCell;
use std::rc::Rc;

use domain::{AddressBookChanged, AddressBookObserver, Attendance, Person, PersonListView};

use crate::read_model::ReadModel;

/// A person rendered for a list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonRow {
    /// One-based position in the list.
    pub index: usize,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub attendance: Attendance,
    pub tags: Vec<String>,
}

impl PersonRow {
    fn render(index: usize, person: &Person) -> Self {
        Self {
            index: index + 1,
            name: person.name().to_string(),
            phone: person.phone().to_string(),
            email: person.email().to_string(),
            attendance: person.attendance(),
            tags: person.tags().iter().map(|t| t.name().to_string()).collect(),
        }
    }
}

/// Keeps a rendered row per person in sync with the address book.
#[derive(Clone, Default)]
pub struct PersonDirectoryView {
    rows: Rc<RefCell<Vec<PersonRow>>>,
}

impl PersonDirectoryView {
    /// Creates a view showing `persons`.
    pub fn new(persons: PersonListView<'_>) -> Self {
        let view = Self::default();
        view.refresh(persons);
        view
    }

    /// Returns all rows in list order.
    pub fn rows(&self) -> Vec<PersonRow> {
        self.rows.borrow().clone()
    }

    /// Gets the row for the person with exactly `name`.
    pub fn find(&self, name: &str) -> Option<PersonRow> {
        self.rows.borrow().iter().find(|r| r.name == name).cloned()
    }

    /// Returns how many persons are marked present.
    pub fn present_count(&self) -> usize {
        self.rows
            .borrow()
            .iter()
            .filter(|r| r.attendance.is_present())
            .count()
    }

    fn refresh(&self, persons: PersonListView<'_>) {
        let rows = persons
            .iter()
            .enumerate()
            .map(|(i, person)| PersonRow::render(i, person))
            .collect();
        *self.rows.borrow_mut() = rows;
    }
}

impl AddressBookObserver for PersonDirectoryView {
    fn name(&self) -> &'static str {
        "PersonDirectoryView"
    }

    fn on_change(&self, change: &AddressBookChanged<'_>) {
        self.refresh(change.persons());
        tracing::debug!(kind = %change.kind, rows = self.count(), "person directory refreshed");
    }
}

impl ReadModel for PersonDirectoryView {
    fn name(&self) -> &'static str {
        "PersonDirectoryView"
    }

    fn count(&self) -> usize {
        self.rows.borrow().len()
    }
}
