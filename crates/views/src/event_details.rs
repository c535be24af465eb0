//! Event details read model: the current event rendered for display.

use std::cell::RefCell;
use std::rc::Rc;

use domain::{AddressBookChanged, AddressBookObserver, Event};

use crate::read_model::ReadModel;

/// Name shown while no event has been set.
pub const EVENT_PLACEHOLDER: &str = "Please put in event details";

/// Display fields for the current event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDetailsDisplay {
    pub name: String,
    pub date: String,
    pub venue: String,
    pub start_time: String,
    pub tags: Vec<String>,
    /// False while the placeholder is shown.
    pub initialised: bool,
}

impl EventDetailsDisplay {
    /// Renders `event`, falling back to the placeholder when it is
    /// uninitialised.
    pub fn render(event: &Event) -> Self {
        match event.details() {
            Some(details) => Self {
                name: details.name.clone(),
                date: details.date.format("%d/%m/%Y").to_string(),
                venue: details.venue.clone(),
                start_time: details.start_time.format("%H%M").to_string(),
                tags: details.tags.iter().map(|t| t.name().to_string()).collect(),
                initialised: true,
            },
            None => Self::placeholder(),
        }
    }

    fn placeholder() -> Self {
        Self {
            name: EVENT_PLACEHOLDER.to_string(),
            date: String::new(),
            venue: String::new(),
            start_time: String::new(),
            tags: Vec::new(),
            initialised: false,
        }
    }
}

/// Keeps the rendered current event in sync with the address book.
///
/// Clones share the same display state, so one clone can be subscribed to
/// the address book while another is kept for reading.
#[derive(Clone)]
pub struct EventDetailsView {
    display: Rc<RefCell<EventDetailsDisplay>>,
    refreshes: Rc<RefCell<u64>>,
}

impl EventDetailsView {
    /// Creates a view showing `event`.
    pub fn new(event: &Event) -> Self {
        Self {
            display: Rc::new(RefCell::new(EventDetailsDisplay::render(event))),
            refreshes: Rc::new(RefCell::new(0)),
        }
    }

    /// Returns the current display fields.
    pub fn display(&self) -> EventDetailsDisplay {
        self.display.borrow().clone()
    }

    /// Returns true if the address book holds an initialised event.
    pub fn has_event(&self) -> bool {
        self.display.borrow().initialised
    }

    /// Returns how many notifications this view has handled.
    pub fn refreshes(&self) -> u64 {
        *self.refreshes.borrow()
    }
}

impl AddressBookObserver for EventDetailsView {
    fn name(&self) -> &'static str {
        "EventDetailsView"
    }

    fn on_change(&self, change: &AddressBookChanged<'_>) {
        let rendered = EventDetailsDisplay::render(change.event());
        tracing::debug!(
            kind = %change.kind,
            event = %rendered.name,
            initialised = rendered.initialised,
            "event details refreshed"
        );
        *self.display.borrow_mut() = rendered;
        *self.refreshes.borrow_mut() += 1;
    }
}

impl ReadModel for EventDetailsView {
    fn name(&self) -> &'static str {
        "EventDetailsView"
    }

    fn count(&self) -> usize {
        usize::from(self.has_event())
    }
}
