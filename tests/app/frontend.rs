//! A scripted front end: records what a real screen would have shown.

use roster::{Alert, AlertKind, RosterApp, Student, StudentForm};

#[derive(Default)]
pub struct ScriptedScreen {
    pub shown: Vec<Alert>,
    pub answer_confirmations: bool,
}

impl ScriptedScreen {
    pub fn confirming() -> Self {
        ScriptedScreen {
            shown: Vec::new(),
            answer_confirmations: true,
        }
    }

    /// Submit the add dialog; validation failures become error alerts.
    pub fn submit(&mut self, app: &mut RosterApp, name: &str, roll: &str, grade: &str) {
        let alert = match app.add_student(&StudentForm::new(name, roll, grade)) {
            Ok(alert) => alert,
            Err(e) => e.alert(),
        };
        self.shown.push(alert);
    }

    pub fn remove(&mut self, app: &mut RosterApp, selected: Option<&Student>) {
        let answer = self.answer_confirmations;
        let mut asked = None;
        let warning = app.remove_selected(selected, |prompt| {
            asked = Some(prompt.clone());
            answer
        });
        self.shown.extend(asked);
        self.shown.extend(warning);
    }

    pub fn kinds(&self) -> Vec<AlertKind> {
        self.shown.iter().map(|a| a.kind).collect()
    }
}
