//! Ordered person sequence that never holds the same person twice.

use crate::error::{AddressBookError, Result};
use crate::person::Person;

/// Persons in insertion order, unique by [`Person::is_same_person`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct UniquePersonList {
    persons: Vec<Person>,
}

impl UniquePersonList {
    pub(crate) fn contains(&self, person: &Person) -> bool {
        self.position(person).is_some()
    }

    pub(crate) fn position(&self, person: &Person) -> Option<usize> {
        self.persons
            .iter()
            .position(|existing| existing.is_same_person(Some(person)))
    }

    pub(crate) fn as_slice(&self) -> &[Person] {
        &self.persons
    }

    pub(crate) fn len(&self) -> usize {
        self.persons.len()
    }

    pub(crate) fn add(&mut self, person: Person) -> Result<()> {
        if self.contains(&person) {
            return Err(duplicate(&person));
        }
        self.persons.push(person);
        Ok(())
    }

    /// Replaces `target` with `edited` at the same position.
    pub(crate) fn set(&mut self, target: &Person, edited: Person) -> Result<()> {
        let index = self.position(target).ok_or_else(|| not_found(target))?;

        let collides = self
            .persons
            .iter()
            .enumerate()
            .any(|(i, existing)| i != index && existing.is_same_person(Some(&edited)));
        if collides {
            return Err(duplicate(&edited));
        }

        self.persons[index] = edited;
        Ok(())
    }

    pub(crate) fn remove(&mut self, key: &Person) -> Result<Person> {
        let index = self.position(key).ok_or_else(|| not_found(key))?;
        Ok(self.persons.remove(index))
    }

    /// Replaces the whole sequence. Nothing changes if `persons` holds a
    /// duplicate.
    pub(crate) fn set_persons(&mut self, persons: Vec<Person>) -> Result<()> {
        for (i, person) in persons.iter().enumerate() {
            if persons[..i]
                .iter()
                .any(|earlier| earlier.is_same_person(Some(person)))
            {
                return Err(duplicate(person));
            }
        }
        self.persons = persons;
        Ok(())
    }

    /// Substitutes every person for which `replace` returns a replacement.
    ///
    /// Replacements must keep identity fields unchanged. Returns the number of
    /// persons replaced.
    pub(crate) fn replace_each<F>(&mut self, mut replace: F) -> usize
    where
        F: FnMut(&Person) -> Option<Person>,
    {
        let mut replaced = 0;
        for slot in &mut self.persons {
            if let Some(next) = replace(slot) {
                debug_assert!(slot.is_same_person(Some(&next)));
                *slot = next;
                replaced += 1;
            }
        }
        replaced
    }
}

fn duplicate(person: &Person) -> AddressBookError {
    AddressBookError::DuplicatePerson {
        name: person.name().to_string(),
    }
}

fn not_found(person: &Person) -> AddressBookError {
    AddressBookError::PersonNotFound {
        name: person.name().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::person::PersonBuilder;

    fn person(name: &str, phone: &str, email: &str) -> Person {
        PersonBuilder::new()
            .name(name)
            .phone(phone)
            .email(email)
            .build()
    }

    #[test]
    fn test_add_rejects_same_person() {
        let mut list = UniquePersonList::default();
        list.add(person("Amy", "1", "amy@a.com")).unwrap();

        let err = list.add(person("Amy", "1", "other@a.com")).unwrap_err();
        assert_eq!(
            err,
            AddressBookError::DuplicatePerson {
                name: "Amy".to_string()
            }
        );
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_set_keeps_position() {
        let mut list = UniquePersonList::default();
        list.add(person("Amy", "1", "amy@a.com")).unwrap();
        list.add(person("Bob", "2", "bob@b.com")).unwrap();
        list.add(person("Cat", "3", "cat@c.com")).unwrap();

        let target = person("Bob", "2", "bob@b.com");
        list.set(&target, person("Bobby", "9", "bob@b.com")).unwrap();

        assert_eq!(list.as_slice()[1].name().as_str(), "Bobby");
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_set_to_same_identity_is_allowed() {
        let mut list = UniquePersonList::default();
        let amy = person("Amy", "1", "amy@a.com");
        list.add(amy.clone()).unwrap();

        let edited = PersonBuilder::from(&amy).tags(["friend"]).build();
        list.set(&amy, edited.clone()).unwrap();
        assert_eq!(list.as_slice(), &[edited]);
    }

    #[test]
    fn test_set_rejects_collision_with_other_person() {
        let mut list = UniquePersonList::default();
        let amy = person("Amy", "1", "amy@a.com");
        let amy_two = person("Amy", "2", "amy2@a.com");
        list.add(amy.clone()).unwrap();
        list.add(amy_two.clone()).unwrap();

        // Same as `amy` by phone and as `amy_two` by email.
        let bridging = person("Amy", "1", "amy2@a.com");
        assert!(matches!(
            list.set(&amy, bridging),
            Err(AddressBookError::DuplicatePerson { .. })
        ));
        assert_eq!(list.as_slice(), &[amy, amy_two]);
    }

    #[test]
    fn test_set_missing_target_fails() {
        let mut list = UniquePersonList::default();
        let ghost = person("Ghost", "0", "ghost@g.com");
        assert!(matches!(
            list.set(&ghost, ghost.clone()),
            Err(AddressBookError::PersonNotFound { .. })
        ));
    }

    #[test]
    fn test_remove_by_identity() {
        let mut list = UniquePersonList::default();
        list.add(person("Amy", "1", "amy@a.com")).unwrap();

        let removed = list.remove(&person("Amy", "1", "changed@a.com")).unwrap();
        assert_eq!(removed.email().as_str(), "amy@a.com");
        assert_eq!(list.len(), 0);
        assert!(list.remove(&removed).is_err());
    }

    #[test]
    fn test_set_persons_is_all_or_nothing() {
        let mut list = UniquePersonList::default();
        list.add(person("Zed", "0", "zed@z.com")).unwrap();

        let result = list.set_persons(vec![
            person("Amy", "1", "amy@a.com"),
            person("Amy", "2", "amy@a.com"),
        ]);
        assert!(result.is_err());
        assert_eq!(list.as_slice()[0].name().as_str(), "Zed");
    }

    #[test]
    fn test_replace_each_counts_replacements() {
        let mut list = UniquePersonList::default();
        list.add(person("Amy", "1", "amy@a.com")).unwrap();
        list.add(person("Bob", "2", "bob@b.com")).unwrap();

        let replaced = list.replace_each(|p| {
            (p.name().as_str() == "Bob").then(|| PersonBuilder::from(p).tags(["x"]).build())
        });
        assert_eq!(replaced, 1);
        assert!(list.as_slice()[0].tags().is_empty());
        assert_eq!(list.as_slice()[1].tags().len(), 1);
    }
}
