//! Roster - the ordered, in-memory collection of students.
//!
//! The store is a plain `Vec` wrapper: insertion order is the display order,
//! roll numbers are not unique, and no operation can fail.
//!
//! ## Example
//!
//! ```
//! use roster::{RosterStore, Student};
//!
//! let mut roster = RosterStore::new();
//! roster.add(Student::new("Ann", 1, "A"));
//! roster.add(Student::new("Ben", 2, "B"));
//!
//! assert_eq!(roster.search("an"), vec![Student::new("Ann", 1, "A")]);
//!
//! roster.remove_by_roll_number(1);
//! assert_eq!(roster.list_all(), &[Student::new("Ben", 2, "B")]);
//! ```

mod search;
mod store;

pub use search::matches;
pub use store::RosterStore;
