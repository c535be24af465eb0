//! Presentation-facing read models for the event roster.
//!
//! This crate provides the display side of the address book:
//! - [`ReadModel`] trait for query access to rendered data
//! - [`EventDetailsView`] and [`PersonDirectoryView`], observers refreshed
//!   on every address book change
//! - [`ImportErrorLog`] for rejected import rows

pub mod event_details;
pub mod import_errors;
pub mod person_directory;
pub mod read_model;

pub use event_details::{EVENT_PLACEHOLDER, EventDetailsDisplay, EventDetailsView};
pub use import_errors::{ImportError, ImportErrorLog};
pub use person_directory::{PersonDirectoryView, PersonRow};
pub use read_model::ReadModel;
