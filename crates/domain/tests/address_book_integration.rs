//! Integration tests for the AddressBook aggregate.
//!
//! These tests cover bulk loading, person uniqueness, the read-only person
//! list, bulk tag operations and change notifications.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{NaiveDate, NaiveTime};
use domain::{
    AddressBook, AddressBookChanged, AddressBookError, AddressBookObserver, AddressBookSnapshot,
    Attendance, ChangeKind, Event, EventDetails, Person, PersonBuilder, ReadOnlyAddressBook, Tag,
    tag_set,
};

const TAG_FRIEND: &str = "friend";
const TAG_HUSBAND: &str = "husband";
const TAG_DIET_AMY: &str = "vegetarian";
const TAG_DIET_BOB: &str = "halal";
const TAG_UNUSED: &str = "unused";

fn alice() -> Person {
    PersonBuilder::new()
        .name("Alice Pauline")
        .phone("85355255")
        .email("alice@example.com")
        .address("123, Jurong West Ave 6, #08-111")
        .tags([TAG_FRIEND])
        .build()
}

fn benson() -> Person {
    PersonBuilder::new()
        .name("Benson Meier")
        .phone("98765432")
        .email("johnd@example.com")
        .address("311, Clementi Ave 2, #02-25")
        .tags(["owesMoney", TAG_FRIEND])
        .build()
}

fn danny() -> Person {
    PersonBuilder::new()
        .name("Daniel Meier")
        .phone("87652533")
        .email("cornelia@example.com")
        .address("10th street")
        .tags([TAG_FRIEND])
        .build()
}

fn amy() -> Person {
    PersonBuilder::new()
        .name("Amy Bee")
        .phone("11111111")
        .email("amy@example.com")
        .address("Block 312, Amy Street 1")
        .tags([TAG_FRIEND, TAG_DIET_AMY])
        .build()
}

fn bob() -> Person {
    PersonBuilder::new()
        .name("Bob Choo")
        .phone("22222222")
        .email("bob@example.com")
        .address("Block 123, Bobby Street 3")
        .attendance(Attendance::Present)
        .tags([TAG_FRIEND, TAG_DIET_BOB])
        .build()
}

fn book_with(persons: &[Person]) -> AddressBook {
    let mut book = AddressBook::new();
    for person in persons {
        book.add_person(person.clone()).unwrap();
    }
    book
}

fn typical_snapshot() -> AddressBookSnapshot {
    let event = Event::scheduled(
        EventDetails::new(
            "Orientation Camp",
            NaiveDate::from_ymd_opt(2026, 8, 3).unwrap(),
            "Sports Hall",
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        )
        .with_tags(tag_set(["freshmen"])),
    );
    AddressBookSnapshot::new(vec![alice(), benson(), danny()], event)
}

/// Counts notifications and keeps the last person count seen.
#[derive(Clone, Default)]
struct CountingObserver {
    kinds: Rc<RefCell<Vec<ChangeKind>>>,
    last_person_count: Rc<RefCell<Option<usize>>>,
}

impl AddressBookObserver for CountingObserver {
    fn name(&self) -> &'static str {
        "CountingObserver"
    }

    fn on_change(&self, change: &AddressBookChanged<'_>) {
        self.kinds.borrow_mut().push(change.kind.clone());
        *self.last_person_count.borrow_mut() = Some(change.persons().len());
    }
}

mod construction {
    use super::*;

    #[test]
    fn new_book_is_empty_with_uninitialised_event() {
        let book = AddressBook::new();
        assert_eq!(book.person_list(), Vec::<Person>::new());
        assert_eq!(book.event_details(), &Event::new());
        assert!(!book.event_details().is_user_initialised());
        assert!(book.is_empty());
    }

    #[test]
    fn from_snapshot_copies_state() {
        let snapshot = typical_snapshot();
        let book = AddressBook::from_snapshot(&snapshot).unwrap();
        assert_eq!(book.snapshot(), snapshot);
    }
}

mod reset_data {
    use super::*;

    #[test]
    fn valid_snapshot_replaces_data() {
        let mut book = book_with(&[amy()]);
        let new_data = typical_snapshot();

        book.reset_data(&new_data).unwrap();

        assert_eq!(book.person_list(), new_data.persons);
        assert_eq!(book.event_details(), &new_data.event);
    }

    #[test]
    fn another_book_can_be_the_source() {
        let source = AddressBook::from_snapshot(&typical_snapshot()).unwrap();
        let mut book = AddressBook::new();

        book.reset_data(&source).unwrap();

        assert_eq!(book, source);
    }

    #[test]
    fn duplicate_persons_are_rejected_and_state_kept() {
        let edited_alice = PersonBuilder::from(&alice())
            .attendance(Attendance::Present)
            .tags([TAG_DIET_BOB])
            .build();
        let new_data = AddressBookSnapshot::with_persons(vec![alice(), edited_alice]);
        let mut book = AddressBook::new();

        let err = book.reset_data(&new_data).unwrap_err();

        assert_eq!(
            err,
            AddressBookError::DuplicatePerson {
                name: "Alice Pauline".to_string()
            }
        );
        assert_eq!(book, AddressBook::new());
    }

    #[test]
    fn failed_reset_keeps_previous_event() {
        let mut book = AddressBook::from_snapshot(&typical_snapshot()).unwrap();
        let before = book.snapshot();
        let bad = AddressBookSnapshot::new(vec![bob(), bob()], Event::new());

        assert!(book.reset_data(&bad).is_err());
        assert_eq!(book.snapshot(), before);
    }
}

mod persons {
    use super::*;

    #[test]
    fn has_person_is_false_for_unknown_person() {
        assert!(!AddressBook::new().has_person(&alice()));
    }

    #[test]
    fn has_person_is_true_after_add() {
        let mut book = AddressBook::new();
        book.add_person(alice()).unwrap();
        assert!(book.has_person(&alice()));
    }

    #[test]
    fn has_person_matches_on_identity_fields() {
        let mut book = AddressBook::new();
        book.add_person(alice()).unwrap();
        let edited_alice = PersonBuilder::from(&alice())
            .attendance(Attendance::Present)
            .tags([TAG_DIET_BOB])
            .build();
        assert!(book.has_person(&edited_alice));
    }

    #[test]
    fn add_person_rejects_same_person() {
        let mut book = book_with(&[alice()]);
        let edited_alice = PersonBuilder::from(&alice()).tags([TAG_HUSBAND]).build();

        assert!(matches!(
            book.add_person(edited_alice),
            Err(AddressBookError::DuplicatePerson { .. })
        ));
        assert_eq!(book.person_list(), vec![alice()]);
    }

    #[test]
    fn set_person_replaces_in_place() {
        let mut book = book_with(&[alice(), benson(), danny()]);
        let edited = PersonBuilder::from(&benson())
            .address("1 New Road")
            .build();

        book.set_person(&benson(), edited.clone()).unwrap();

        assert_eq!(book.person_list(), vec![alice(), edited, danny()]);
    }

    #[test]
    fn set_person_rejects_collision_with_another_person() {
        let mut book = book_with(&[alice(), benson()]);
        let clash = PersonBuilder::from(&alice()).address("elsewhere").build();

        assert!(matches!(
            book.set_person(&benson(), clash),
            Err(AddressBookError::DuplicatePerson { .. })
        ));
        assert_eq!(book.person_list(), vec![alice(), benson()]);
    }

    #[test]
    fn set_person_unknown_target() {
        let mut book = book_with(&[alice()]);
        assert!(matches!(
            book.set_person(&bob(), bob()),
            Err(AddressBookError::PersonNotFound { .. })
        ));
    }

    #[test]
    fn remove_person() {
        let mut book = book_with(&[alice(), benson()]);

        let removed = book.remove_person(&alice()).unwrap();

        assert_eq!(removed, alice());
        assert_eq!(book.person_list(), vec![benson()]);
        assert!(matches!(
            book.remove_person(&alice()),
            Err(AddressBookError::PersonNotFound { .. })
        ));
    }

    #[test]
    fn person_list_rejects_modification() {
        let book = book_with(&[alice()]);

        let result = book.person_list().remove(0);

        assert_eq!(
            result,
            Err(AddressBookError::UnsupportedMutation { operation: "remove" })
        );
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn person_list_is_live() {
        let mut book = AddressBook::new();
        assert_eq!(book.person_list().len(), 0);
        book.add_person(alice()).unwrap();
        assert_eq!(book.person_list().len(), 1);
        assert_eq!(book.person_count(), 1);
    }
}

mod tags {
    use super::*;

    #[test]
    fn remove_tag_non_existent_tag_book_unchanged() {
        let mut book = book_with(&[bob(), amy()]);

        assert_eq!(book.remove_tag(&Tag::new(TAG_UNUSED)), 0);

        assert_eq!(book, book_with(&[bob(), amy()]));
    }

    #[test]
    fn remove_tag_shared_tag_removed_from_every_holder() {
        let mut book = book_with(&[bob(), amy()]);

        book.remove_tag(&Tag::new(TAG_FRIEND));
        book.remove_tag(&Tag::new(TAG_FRIEND));

        let amy_without_friend = PersonBuilder::from(&amy()).tags([TAG_DIET_AMY]).build();
        let bob_without_friend = PersonBuilder::from(&bob()).tags([TAG_DIET_BOB]).build();
        assert_eq!(book, book_with(&[bob_without_friend, amy_without_friend]));
    }

    #[test]
    fn remove_tag_leaves_non_holders_untouched() {
        let outsider = PersonBuilder::new()
            .name("Carl Kurz")
            .phone("95352563")
            .email("heinz@example.com")
            .tags(["colleague"])
            .build();
        let mut book = book_with(&[amy(), outsider.clone()]);

        assert_eq!(book.remove_tag(&Tag::new(TAG_FRIEND)), 1);

        assert_eq!(book.person_list()[1], outsider);
        assert!(book.has_person(&amy()));
    }

    #[test]
    fn add_tag_no_new_tags_to_add_book_unchanged() {
        let mut book = book_with(&[danny()]);

        assert_eq!(book.add_tag(&Tag::new(TAG_FRIEND)), 0);

        assert_eq!(book, book_with(&[danny()]));
    }

    #[test]
    fn add_tag_added_to_multiple_persons() {
        let mut book = book_with(&[bob(), amy()]);

        assert_eq!(book.add_tag(&Tag::new(TAG_HUSBAND)), 2);

        let amy_with_husband = PersonBuilder::from(&amy())
            .tags([TAG_FRIEND, TAG_DIET_AMY, TAG_HUSBAND])
            .build();
        let bob_with_husband = PersonBuilder::from(&bob())
            .tags([TAG_FRIEND, TAG_DIET_BOB, TAG_HUSBAND])
            .build();
        assert_eq!(book, book_with(&[bob_with_husband, amy_with_husband]));
    }

    #[test]
    fn add_tag_is_idempotent() {
        let mut book = book_with(&[bob(), amy()]);
        let tag = Tag::new(TAG_HUSBAND);

        book.add_tag(&tag);
        let after_first = book.snapshot();
        assert_eq!(book.add_tag(&tag), 0);

        assert_eq!(book.snapshot(), after_first);
    }

    #[test]
    fn bulk_tag_operations_keep_identity_and_order() {
        let mut book = book_with(&[alice(), benson(), danny()]);

        book.add_tag(&Tag::new(TAG_HUSBAND));
        book.remove_tag(&Tag::new(TAG_FRIEND));

        let names: Vec<_> = book
            .person_list()
            .iter()
            .map(|p| p.name().to_string())
            .collect();
        assert_eq!(names, ["Alice Pauline", "Benson Meier", "Daniel Meier"]);
        assert!(book.has_person(&alice()));
        assert!(book.has_person(&benson()));
        assert!(book.has_person(&danny()));
    }
}

mod notifications {
    use super::*;

    #[test]
    fn one_notification_per_committed_mutation() {
        let observer = CountingObserver::default();
        let mut book = AddressBook::new();
        book.subscribe(Box::new(observer.clone()));

        book.reset_data(&typical_snapshot()).unwrap();
        book.add_person(amy()).unwrap();
        book.add_tag(&Tag::new(TAG_HUSBAND));
        book.remove_tag(&Tag::new(TAG_UNUSED));
        book.set_attendance(&amy(), Attendance::Present).unwrap();
        book.remove_person(&amy()).unwrap();

        let kinds: Vec<_> = observer.kinds.borrow().iter().map(|k| k.as_str()).collect();
        assert_eq!(
            kinds,
            [
                "Reset",
                "PersonAdded",
                "TagAdded",
                "TagRemoved",
                "PersonUpdated",
                "PersonRemoved"
            ]
        );
        assert_eq!(*observer.last_person_count.borrow(), Some(3));
    }

    #[test]
    fn rejected_mutations_are_silent() {
        let observer = CountingObserver::default();
        let mut book = AddressBook::new();
        book.subscribe(Box::new(observer.clone()));

        let duplicates = AddressBookSnapshot::with_persons(vec![alice(), alice()]);
        assert!(book.reset_data(&duplicates).is_err());
        assert!(book.remove_person(&alice()).is_err());

        assert!(observer.kinds.borrow().is_empty());
    }

    #[test]
    fn event_updates_are_published() {
        let observer = CountingObserver::default();
        let mut book = AddressBook::new();
        book.subscribe(Box::new(observer.clone()));

        book.set_event(typical_snapshot().event_details());

        assert!(book.event_details().is_user_initialised());
        assert_eq!(*observer.kinds.borrow(), vec![ChangeKind::EventUpdated]);
    }
}
