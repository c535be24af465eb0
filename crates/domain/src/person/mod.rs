//! Person record and related value objects.

mod builder;
mod entity;
mod value_objects;

pub use builder::PersonBuilder;
pub use entity::Person;
pub use value_objects::{Address, Attendance, Email, Name, Phone};
