//! Address book aggregate and the interfaces it exposes to observers.

mod aggregate;
mod change;
mod read_only;
mod unique_list;
mod view;

pub use aggregate::AddressBook;
pub use change::{AddressBookChanged, AddressBookObserver, ChangeKind};
pub use read_only::{AddressBookSnapshot, ReadOnlyAddressBook};
pub use view::PersonListView;
