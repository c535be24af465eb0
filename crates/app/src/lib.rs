//! Event roster application wiring.
//!
//! Builds the address book, subscribes the display views to it and seeds it
//! with sample data when configured to.

pub mod config;
pub mod error;
pub mod telemetry;

use chrono::{NaiveDate, NaiveTime};
use domain::{
    AddressBook, AddressBookSnapshot, Attendance, Event, EventDetails, Person, PersonBuilder,
    tag_set,
};
use views::{EventDetailsView, ImportErrorLog, PersonDirectoryView};

use config::Config;
use error::AppError;

/// The address book together with the views observing it.
pub struct Roster {
    pub book: AddressBook,
    pub event_view: EventDetailsView,
    pub directory: PersonDirectoryView,
    pub import_errors: ImportErrorLog,
}

impl Roster {
    /// Creates an empty roster with both views subscribed.
    pub fn new() -> Self {
        let mut book = AddressBook::new();
        let event_view = EventDetailsView::new(book.event_details());
        let directory = PersonDirectoryView::new(book.person_list());

        book.subscribe(Box::new(event_view.clone()));
        book.subscribe(Box::new(directory.clone()));

        Self {
            book,
            event_view,
            directory,
            import_errors: ImportErrorLog::new(),
        }
    }

    /// Adds each person, recording the ones the address book rejects.
    ///
    /// Returns the number of persons added.
    pub fn import_persons(&mut self, persons: impl IntoIterator<Item = Person>) -> usize {
        let mut added = 0;
        for person in persons {
            let input = person.to_string();
            match self.book.add_person(person) {
                Ok(()) => added += 1,
                Err(err) => self.import_errors.record_error(input, &err),
            }
        }
        tracing::info!(
            added,
            rejected = self.import_errors.errors().len(),
            "persons imported"
        );
        added
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a roster according to `config`.
pub fn build_roster(config: &Config) -> Result<Roster, AppError> {
    let mut roster = Roster::new();
    if config.sample_data {
        roster.book.reset_data(&sample_snapshot())?;
        tracing::info!(persons = roster.book.len(), "sample data loaded");
    }
    Ok(roster)
}

/// Sample persons and event used to seed a fresh roster.
pub fn sample_snapshot() -> AddressBookSnapshot {
    let persons = vec![
        PersonBuilder::new()
            .name("Alice Pauline")
            .phone("85355255")
            .email("alice@example.com")
            .address("123, Jurong West Ave 6, #08-111")
            .tags(["friends"])
            .build(),
        PersonBuilder::new()
            .name("Benson Meier")
            .phone("98765432")
            .email("johnd@example.com")
            .address("311, Clementi Ave 2, #02-25")
            .attendance(Attendance::Present)
            .tags(["owesMoney", "friends"])
            .build(),
        PersonBuilder::new()
            .name("Carl Kurz")
            .phone("95352563")
            .email("heinz@example.com")
            .address("wall street")
            .build(),
    ];

    let event = match (
        NaiveDate::from_ymd_opt(2026, 11, 20),
        NaiveTime::from_hms_opt(19, 0, 0),
    ) {
        (Some(date), Some(time)) => Event::scheduled(
            EventDetails::new("Welcome Tea", date, "Town Hall", time)
                .with_tags(tag_set(["networking"])),
        ),
        _ => Event::new(),
    };

    AddressBookSnapshot::new(persons, event)
}
