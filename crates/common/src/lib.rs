//! Shared value types for the event roster.

pub mod tag;

pub use tag::{Tag, TagSet, tag_set};
