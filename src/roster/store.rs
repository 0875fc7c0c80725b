use tracing::{debug, trace};

use super::search::matches_lowered;
use crate::student::Student;

/// Ordered in-memory roster.
///
/// Records are kept in insertion order. Roll numbers are not deduplicated,
/// and removal by roll number drops every record that carries it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RosterStore {
    students: Vec<Student>,
}

impl RosterStore {
    /// Create a new empty roster.
    pub fn new() -> Self {
        RosterStore {
            students: Vec::new(),
        }
    }

    /// Append a student to the end of the roster.
    pub fn add(&mut self, student: Student) {
        debug!(
            roll_number = student.roll_number,
            name = %student.name,
            "adding student"
        );
        self.students.push(student);
    }

    /// Remove every student with the given roll number. Missing roll numbers
    /// are a no-op.
    pub fn remove_by_roll_number(&mut self, roll_number: i32) {
        let before = self.students.len();
        self.students.retain(|s| s.roll_number != roll_number);
        debug!(
            roll_number,
            removed = before - self.students.len(),
            "removed students by roll number"
        );
    }

    /// Students whose name contains `term` (ignoring case) or whose roll
    /// number contains it, in roster order.
    pub fn search(&self, term: &str) -> Vec<Student> {
        let lowered = term.to_lowercase();
        let results: Vec<Student> = self
            .students
            .iter()
            .filter(|s| matches_lowered(s, term, &lowered))
            .cloned()
            .collect();
        trace!(term, hits = results.len(), "searched roster");
        results
    }

    /// All students in insertion order.
    pub fn list_all(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Student> {
        self.students.iter()
    }
}

impl FromIterator<Student> for RosterStore {
    fn from_iter<I: IntoIterator<Item = Student>>(iter: I) -> Self {
        RosterStore {
            students: iter.into_iter().collect(),
        }
    }
}

impl Extend<Student> for RosterStore {
    fn extend<I: IntoIterator<Item = Student>>(&mut self, iter: I) {
        for student in iter {
            self.add(student);
        }
    }
}

impl<'a> IntoIterator for &'a RosterStore {
    type Item = &'a Student;
    type IntoIter = std::slice::Iter<'a, Student>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
