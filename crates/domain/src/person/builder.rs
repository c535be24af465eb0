//! Builder for [`Person`] records.

use common::{Tag, TagSet};

use super::{Address, Attendance, Email, Name, Person, Phone};

const DEFAULT_NAME: &str = "Alice Pauline";
const DEFAULT_PHONE: &str = "85355255";
const DEFAULT_EMAIL: &str = "alice@gmail.com";
const DEFAULT_ADDRESS: &str = "123, Jurong West Ave 6, #08-111";

/// Builds a [`Person`], either from defaults or starting from an existing one.
#[derive(Debug, Clone)]
pub struct PersonBuilder {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    attendance: Attendance,
    tags: TagSet,
}

impl PersonBuilder {
    /// Creates a builder populated with placeholder details and no tags.
    pub fn new() -> Self {
        Self {
            name: Name::new(DEFAULT_NAME),
            phone: Phone::new(DEFAULT_PHONE),
            email: Email::new(DEFAULT_EMAIL),
            address: Address::new(DEFAULT_ADDRESS),
            attendance: Attendance::default(),
            tags: TagSet::new(),
        }
    }

    pub fn name(mut self, name: impl Into<Name>) -> Self {
        self.name = name.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<Phone>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn email(mut self, email: impl Into<Email>) -> Self {
        self.email = email.into();
        self
    }

    pub fn address(mut self, address: impl Into<Address>) -> Self {
        self.address = address.into();
        self
    }

    pub fn attendance(mut self, attendance: Attendance) -> Self {
        self.attendance = attendance;
        self
    }

    /// Replaces the tags with the given names.
    pub fn tags<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = names.into_iter().map(Tag::new).collect();
        self
    }

    pub fn build(self) -> Person {
        Person::new(
            self.name,
            self.phone,
            self.email,
            self.address,
            self.attendance,
            self.tags,
        )
    }
}

impl Default for PersonBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&Person> for PersonBuilder {
    fn from(person: &Person) -> Self {
        Self {
            name: person.name().clone(),
            phone: person.phone().clone(),
            email: person.email().clone(),
            address: person.address().clone(),
            attendance: person.attendance(),
            tags: person.tags().clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let person = PersonBuilder::new().build();
        assert_eq!(person.name().as_str(), DEFAULT_NAME);
        assert_eq!(person.attendance(), Attendance::Absent);
        assert!(person.tags().is_empty());
    }

    #[test]
    fn test_builder_from_person_copies_every_field() {
        let original = PersonBuilder::new()
            .name("Bob Choo")
            .attendance(Attendance::Present)
            .tags(["husband", "friend"])
            .build();
        assert_eq!(PersonBuilder::from(&original).build(), original);
    }
}
