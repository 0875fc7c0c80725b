use serde::{Deserialize, Serialize};
use std::fmt;

/// A single roster entry.
///
/// Students are plain values: the roster identifies them only by
/// `roll_number`, which is not required to be unique.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    pub roll_number: i32,
    pub grade: String,
}

impl Student {
    pub fn new(name: impl Into<String>, roll_number: i32, grade: impl Into<String>) -> Self {
        Student {
            name: name.into(),
            roll_number,
            grade: grade.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn roll_number(&self) -> i32 {
        self.roll_number
    }

    pub fn grade(&self) -> &str {
        &self.grade
    }
}

/// Renders the listing line used by the "all students" view: `Ann - 1`.
impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.roll_number)
    }
}
