use std::fmt;

use tracing::warn;

use crate::app::{Alert, AlertKind};
use crate::student::Student;

/// Raw text of the add-student form, exactly as entered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StudentForm {
    pub name: String,
    pub roll_number: String,
    pub grade: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// At least one of name, roll number, or grade was left empty.
    MissingFields,
    /// The roll number text is not an integer.
    InvalidRollNumber(String),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::MissingFields => write!(f, "All fields are required."),
            FormError::InvalidRollNumber(_) => {
                write!(f, "Invalid Roll Number. Please enter a valid integer.")
            }
        }
    }
}

impl std::error::Error for FormError {}

impl FormError {
    /// The error alert a front end shows for this failure.
    pub fn alert(&self) -> Alert {
        Alert::new(AlertKind::Error, "Validation Error", self.to_string())
    }
}

impl StudentForm {
    pub fn new(
        name: impl Into<String>,
        roll_number: impl Into<String>,
        grade: impl Into<String>,
    ) -> Self {
        StudentForm {
            name: name.into(),
            roll_number: roll_number.into(),
            grade: grade.into(),
        }
    }

    /// Check the fields and build the student they describe.
    ///
    /// Emptiness is checked before the roll number is parsed. Fields are not
    /// trimmed.
    pub fn validate(&self) -> Result<Student, FormError> {
        if self.name.is_empty() || self.roll_number.is_empty() || self.grade.is_empty() {
            warn!("student form rejected: missing fields");
            return Err(FormError::MissingFields);
        }

        let roll_number = self.roll_number.parse::<i32>().map_err(|_| {
            warn!(input = %self.roll_number, "student form rejected: bad roll number");
            FormError::InvalidRollNumber(self.roll_number.clone())
        })?;

        Ok(Student::new(self.name.clone(), roll_number, self.grade.clone()))
    }
}

impl TryFrom<StudentForm> for Student {
    type Error = FormError;

    fn try_from(form: StudentForm) -> Result<Self, Self::Error> {
        form.validate()
    }
}

impl TryFrom<&StudentForm> for Student {
    type Error = FormError;

    fn try_from(form: &StudentForm) -> Result<Self, Self::Error> {
        form.validate()
    }
}
