use tracing::{debug, info};

use super::alert::{Alert, AlertKind};
use crate::config::AppConfig;
use crate::form::{FormError, StudentForm};
use crate::roster::RosterStore;
use crate::student::Student;

/// Headless roster screen.
///
/// Owns the store and the rows currently on display. Every mutation is
/// followed by a re-fetch from the store, so `rows()` is always a snapshot
/// of the last query, never a live view.
#[derive(Clone, Debug, Default)]
pub struct RosterApp {
    store: RosterStore,
    rows: Vec<Student>,
    config: AppConfig,
}

impl RosterApp {
    pub fn new(config: AppConfig) -> Self {
        Self::with_store(RosterStore::new(), config)
    }

    /// Start from an existing roster; rows show all of it.
    pub fn with_store(store: RosterStore, config: AppConfig) -> Self {
        let rows = store.list_all().to_vec();
        RosterApp {
            store,
            rows,
            config,
        }
    }

    pub fn store(&self) -> &RosterStore {
        &self.store
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn rows(&self) -> &[Student] {
        &self.rows
    }

    pub fn into_store(self) -> RosterStore {
        self.store
    }

    /// Validate the form and add the student. On failure nothing changes.
    pub fn add_student(&mut self, form: &StudentForm) -> Result<Alert, FormError> {
        let student = form.validate()?;
        info!(roll_number = student.roll_number, "student added");
        self.store.add(student);
        self.refresh();

        Ok(Alert::new(
            AlertKind::Information,
            "Student Added",
            "Student added successfully!",
        ))
    }

    /// Remove the selected student's roll number after the user confirms.
    ///
    /// Returns the warning to show when nothing is selected, otherwise `None`.
    /// Every student sharing the selected roll number is removed.
    pub fn remove_selected<F>(&mut self, selected: Option<&Student>, confirm: F) -> Option<Alert>
    where
        F: FnOnce(&Alert) -> bool,
    {
        let Some(selected) = selected else {
            return Some(Alert::new(
                AlertKind::Warning,
                "No Student Selected",
                "Please select a student to remove.",
            ));
        };

        let prompt = Alert::new(
            AlertKind::Confirmation,
            "Confirm Removal",
            "Are you sure you want to remove the selected student?",
        )
        .with_header("Remove Student");

        if confirm(&prompt) {
            info!(roll_number = selected.roll_number, "student removal confirmed");
            self.store.remove_by_roll_number(selected.roll_number);
            self.refresh();
        } else {
            debug!(roll_number = selected.roll_number, "student removal cancelled");
        }
        None
    }

    /// Show only the students matching `term`.
    pub fn search(&mut self, term: &str) {
        self.rows = self.store.search(term);
    }

    /// Show every student and describe them in an information alert.
    pub fn display_all(&mut self) -> Alert {
        self.refresh();
        Alert::new(AlertKind::Information, "All Students", listing(&self.rows))
    }

    fn refresh(&mut self) {
        self.rows = self.store.list_all().to_vec();
    }
}

/// `List of students:` followed by one `name - roll` line per student.
pub fn listing(students: &[Student]) -> String {
    let mut text = String::from("List of students:\n");
    for student in students {
        text.push_str(&student.to_string());
        text.push('\n');
    }
    text
}
