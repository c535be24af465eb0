//! The person record stored in an address book.

use common::{Tag, TagSet};
use serde::{Deserialize, Serialize};

use super::{Address, Attendance, Email, Name, Phone};

/// A person in the address book.
///
/// Persons are immutable once stored: every change produces a replacement
/// record via the `with_*` methods or [`PersonBuilder`](super::PersonBuilder).
///
/// `==` compares every field, tags included. Use [`Person::is_same_person`]
/// for the weaker identity check that decides uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    #[serde(default)]
    attendance: Attendance,
    #[serde(default)]
    tags: TagSet,
}

impl Person {
    /// Creates a new person.
    pub fn new(
        name: impl Into<Name>,
        phone: impl Into<Phone>,
        email: impl Into<Email>,
        address: impl Into<Address>,
        attendance: Attendance,
        tags: TagSet,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            address: address.into(),
            attendance,
            tags,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn attendance(&self) -> Attendance {
        self.attendance
    }

    /// Returns the person's tags.
    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// Returns true if the person carries `tag`.
    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    /// Returns true if `other` is the same person.
    ///
    /// Two persons are the same if their names match and they share either a
    /// phone number or an email address. Tags, address and attendance are
    /// ignored. Returns false for `None`.
    pub fn is_same_person(&self, other: Option<&Person>) -> bool {
        match other {
            Some(other) if std::ptr::eq(self, other) => true,
            Some(other) => {
                other.name == self.name
                    && (other.phone == self.phone || other.email == self.email)
            }
            None => false,
        }
    }

    /// Returns a copy of this person with its tags replaced.
    pub fn with_tags(&self, tags: TagSet) -> Person {
        Person {
            tags,
            ..self.clone()
        }
    }

    /// Returns a copy of this person with `tag` added.
    pub fn with_tag_added(&self, tag: Tag) -> Person {
        let mut tags = self.tags.clone();
        tags.insert(tag);
        self.with_tags(tags)
    }

    /// Returns a copy of this person without `tag`.
    pub fn with_tag_removed(&self, tag: &Tag) -> Person {
        let mut tags = self.tags.clone();
        tags.remove(tag);
        self.with_tags(tags)
    }

    /// Returns a copy of this person with the given attendance.
    pub fn with_attendance(&self, attendance: Attendance) -> Person {
        Person {
            attendance,
            ..self.clone()
        }
    }
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} Phone: {} Email: {} Address: {} Attendance: {} Tags: ",
            self.name, self.phone, self.email, self.address, self.attendance
        )?;
        for tag in &self.tags {
            write!(f, "{tag}")?;
        }
        Ok(())
    }
}
