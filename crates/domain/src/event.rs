//! The current event held by an address book.

use chrono::{NaiveDate, NaiveTime};
use common::TagSet;
use serde::{Deserialize, Serialize};

/// Details of a scheduled event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDetails {
    /// Event name.
    pub name: String,

    /// Day the event takes place.
    pub date: NaiveDate,

    /// Where the event takes place.
    pub venue: String,

    /// Time the event starts.
    pub start_time: NaiveTime,

    /// Tags describing the event.
    #[serde(default)]
    pub tags: TagSet,
}

impl EventDetails {
    /// Creates event details without tags.
    pub fn new(
        name: impl Into<String>,
        date: NaiveDate,
        venue: impl Into<String>,
        start_time: NaiveTime,
    ) -> Self {
        Self {
            name: name.into(),
            date,
            venue: venue.into(),
            start_time,
            tags: TagSet::new(),
        }
    }

    /// Replaces the event tags.
    pub fn with_tags(mut self, tags: TagSet) -> Self {
        self.tags = tags;
        self
    }
}

/// Holder for the address book's current event.
///
/// The default value is the uninitialised state: no event has been set yet.
/// This is distinct from an event whose fields happen to be blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    details: Option<EventDetails>,
}

impl Event {
    /// Creates an uninitialised event.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an event holding `details`.
    pub fn scheduled(details: EventDetails) -> Self {
        Self {
            details: Some(details),
        }
    }

    /// Overwrites all state with a copy of `other`, including its
    /// uninitialised state.
    pub fn set_event(&mut self, other: &Event) {
        self.details = other.details.clone();
    }

    /// Returns the event to the uninitialised state.
    pub fn clear(&mut self) {
        self.details = None;
    }

    /// Returns true once event details have been set.
    pub fn is_user_initialised(&self) -> bool {
        self.details.is_some()
    }

    pub fn details(&self) -> Option<&EventDetails> {
        self.details.as_ref()
    }

    pub fn name(&self) -> Option<&str> {
        self.details.as_ref().map(|d| d.name.as_str())
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.details.as_ref().map(|d| d.date)
    }

    pub fn venue(&self) -> Option<&str> {
        self.details.as_ref().map(|d| d.venue.as_str())
    }

    pub fn start_time(&self) -> Option<NaiveTime> {
        self.details.as_ref().map(|d| d.start_time)
    }

    /// Returns the event tags; empty when uninitialised.
    pub fn tags(&self) -> impl Iterator<Item = &common::Tag> {
        self.details.iter().flat_map(|d| d.tags.iter())
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.details {
            Some(d) => write!(
                f,
                "{} on {} at {}, {}",
                d.name,
                d.date.format("%Y-%m-%d"),
                d.start_time.format("%H:%M"),
                d.venue
            ),
            None => write!(f, "no event"),
        }
    }
}
