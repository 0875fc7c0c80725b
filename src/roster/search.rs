use crate::student::Student;

/// Returns true when `term` occurs in the student's name (ignoring case) or
/// in the decimal form of the roll number (exactly).
///
/// An empty term matches every student.
pub fn matches(student: &Student, term: &str) -> bool {
    matches_lowered(student, term, &term.to_lowercase())
}

/// Same as [`matches`] with the lowercased term computed once by the caller.
pub(crate) fn matches_lowered(student: &Student, term: &str, lowered: &str) -> bool {
    student.name.to_lowercase().contains(lowered)
        || student.roll_number.to_string().contains(term)
}
