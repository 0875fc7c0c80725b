use roster::{RosterStore, Student};

pub fn ann() -> Student {
    Student::new("Ann", 1, "A")
}

pub fn ben() -> Student {
    Student::new("Ben", 2, "B")
}

/// A class of five where roll number 5 is shared by two students.
pub fn class_4b() -> RosterStore {
    vec![
        Student::new("Hannah", 5, "A"),
        Student::new("Omar", 1023, "B+"),
        Student::new("Joanna", 12, "C"),
        Student::new("Li", 5, "A-"),
        Student::new("Tobias", 210, "B"),
    ]
    .into_iter()
    .collect()
}

pub fn names(students: &[Student]) -> Vec<&str> {
    students.iter().map(|s| s.name()).collect()
}
