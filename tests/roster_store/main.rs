//! Integration tests for RosterStore.

mod fixtures;

use fixtures::{ann, ben, class_4b, names};
use roster::{RosterStore, Student};

// =============================================================================
// Walkthroughs
// =============================================================================

#[test]
fn add_search_remove_walkthrough() {
    let mut roster = RosterStore::new();
    roster.add(ann());
    roster.add(ben());
    assert_eq!(roster.list_all(), &[ann(), ben()]);

    // Name match ignores case; no roll number contains "an"
    assert_eq!(roster.search("an"), vec![ann()]);

    roster.remove_by_roll_number(1);
    assert_eq!(roster.list_all(), &[ben()]);

    roster.remove_by_roll_number(99);
    assert_eq!(roster.list_all(), &[ben()]);
}

#[test]
fn shared_roll_number_is_removed_everywhere() {
    let mut roster = RosterStore::new();
    roster.add(Student::new("Ann", 5, "A"));
    roster.add(Student::new("Ben", 5, "B"));

    roster.remove_by_roll_number(5);
    assert!(roster.is_empty());
}

// =============================================================================
// Search
// =============================================================================

#[test]
fn search_matches_names_in_roster_order() {
    let roster = class_4b();
    assert_eq!(names(&roster.search("an")), vec!["Hannah", "Joanna"]);
    assert_eq!(
        names(&roster.search("A")),
        vec!["Hannah", "Omar", "Joanna", "Tobias"]
    );
}

#[test]
fn search_matches_roll_number_digits() {
    let roster = class_4b();
    assert_eq!(names(&roster.search("102")), vec!["Omar"]);
    assert_eq!(names(&roster.search("1")), vec!["Omar", "Joanna", "Tobias"]);
}

#[test]
fn search_ignores_grade() {
    let roster = class_4b();
    assert!(roster.search("A-").is_empty());
    assert!(roster.search("+").is_empty());
}

#[test]
fn search_empty_term_is_everything() {
    let roster = class_4b();
    assert_eq!(roster.search(""), roster.list_all());
}

#[test]
fn search_on_empty_roster() {
    assert!(RosterStore::new().search("").is_empty());
}

// =============================================================================
// Removal
// =============================================================================

#[test]
fn removal_keeps_relative_order() {
    let mut roster = class_4b();
    roster.remove_by_roll_number(5);
    assert_eq!(names(roster.list_all()), vec!["Omar", "Joanna", "Tobias"]);
}

#[test]
fn removal_is_repeatable() {
    let mut roster = class_4b();
    roster.remove_by_roll_number(12);
    let once = roster.clone();

    roster.remove_by_roll_number(12);
    assert_eq!(roster, once);
    assert_eq!(roster.len(), 4);
}

#[test]
fn duplicates_are_kept_on_add() {
    let mut roster = RosterStore::new();
    roster.add(ann());
    roster.add(ann());
    assert_eq!(roster.list_all(), &[ann(), ann()]);
}
