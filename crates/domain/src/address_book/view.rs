//! Read-only view over the person sequence.

use crate::error::{AddressBookError, Result};
use crate::person::Person;

/// A read-only, borrowed view of an address book's persons.
///
/// Reads are forwarded to the backing sequence. Every write method exists only
/// to reject the attempt with [`AddressBookError::UnsupportedMutation`]; the
/// backing sequence can only change through the owning aggregate.
#[derive(Debug, Clone, Copy)]
pub struct PersonListView<'a> {
    persons: &'a [Person],
}

impl<'a> PersonListView<'a> {
    /// Wraps a person sequence.
    pub fn new(persons: &'a [Person]) -> Self {
        Self { persons }
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a Person> {
        self.persons.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'a, Person> {
        self.persons.iter()
    }

    pub fn as_slice(&self) -> &'a [Person] {
        self.persons
    }

    /// Returns true if a person equal in every field is present.
    pub fn contains(&self, person: &Person) -> bool {
        self.persons.contains(person)
    }

    pub fn to_vec(&self) -> Vec<Person> {
        self.persons.to_vec()
    }

    /// Always fails: the view cannot grow.
    pub fn push(&mut self, _person: Person) -> Result<()> {
        Err(AddressBookError::UnsupportedMutation { operation: "push" })
    }

    /// Always fails: the view cannot shrink.
    pub fn remove(&mut self, _index: usize) -> Result<Person> {
        Err(AddressBookError::UnsupportedMutation { operation: "remove" })
    }

    /// Always fails: entries cannot be replaced through the view.
    pub fn set(&mut self, _index: usize, _person: Person) -> Result<Person> {
        Err(AddressBookError::UnsupportedMutation { operation: "set" })
    }

    /// Always fails: the view cannot be cleared.
    pub fn clear(&mut self) -> Result<()> {
        Err(AddressBookError::UnsupportedMutation { operation: "clear" })
    }
}

impl<'a> IntoIterator for PersonListView<'a> {
    type Item = &'a Person;
    type IntoIter = std::slice::Iter<'a, Person>;

    fn into_iter(self) -> Self::IntoIter {
        self.persons.iter()
    }
}

impl<'a> IntoIterator for &PersonListView<'a> {
    type Item = &'a Person;
    type IntoIter = std::slice::Iter<'a, Person>;

    fn into_iter(self) -> Self::IntoIter {
        self.persons.iter()
    }
}

impl std::ops::Index<usize> for PersonListView<'_> {
    type Output = Person;

    fn index(&self, index: usize) -> &Self::Output {
        &self.persons[index]
    }
}

impl PartialEq for PersonListView<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.persons == other.persons
    }
}

impl Eq for PersonListView<'_> {}

impl PartialEq<[Person]> for PersonListView<'_> {
    fn eq(&self, other: &[Person]) -> bool {
        self.persons == other
    }
}

impl PartialEq<Vec<Person>> for PersonListView<'_> {
    fn eq(&self, other: &Vec<Person>) -> bool {
        self.persons == other.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::person::PersonBuilder;

    #[test]
    fn test_reads_are_forwarded() {
        let persons = vec![
            PersonBuilder::new().name("Amy Bee").build(),
            PersonBuilder::new().name("Bob Choo").build(),
        ];
        let view = PersonListView::new(&persons);

        assert_eq!(view.len(), 2);
        assert_eq!(view[1].name().as_str(), "Bob Choo");
        assert!(view.contains(&persons[0]));
        assert_eq!(view.iter().count(), 2);
        assert_eq!(view, persons);
    }

    #[test]
    fn test_writes_are_rejected() {
        let persons = vec![PersonBuilder::new().build()];
        let mut view = PersonListView::new(&persons);

        assert_eq!(
            view.remove(0),
            Err(AddressBookError::UnsupportedMutation { operation: "remove" })
        );
        assert!(view.push(PersonBuilder::new().build()).is_err());
        assert!(view.set(0, PersonBuilder::new().build()).is_err());
        assert!(view.clear().is_err());
        assert_eq!(view.len(), 1);
    }
}
