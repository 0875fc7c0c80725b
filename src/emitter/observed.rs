use event_emitter_rs::EventEmitter;
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::roster::RosterStore;
use crate::student::Student;

/// Emitted after `add`, with the student as JSON.
pub const STUDENT_ADDED: &str = "StudentAdded";

/// Emitted after `remove_by_roll_number`, with a [`RemovedPayload`] as JSON.
pub const STUDENTS_REMOVED: &str = "StudentsRemoved";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovedPayload {
    pub roll_number: i32,
    pub removed: usize,
}

/// A roster that announces its mutations.
///
/// Listeners run on the emitter's own threads, so they may observe an event
/// some time after the mutating call has returned.
pub struct ObservedRoster {
    store: RosterStore,
    event_emitter: EventEmitter,
}

impl Default for ObservedRoster {
    fn default() -> Self {
        Self::new(RosterStore::new())
    }
}

impl ObservedRoster {
    pub fn new(store: RosterStore) -> Self {
        ObservedRoster {
            store,
            event_emitter: EventEmitter::new(),
        }
    }

    /// Register a listener for [`STUDENT_ADDED`] or [`STUDENTS_REMOVED`].
    pub fn on<F>(&mut self, event: &str, listener: F)
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.event_emitter.on(event, listener);
    }

    pub fn add(&mut self, student: Student) {
        let payload = serde_json::to_string(&student);
        self.store.add(student);
        self.emit(STUDENT_ADDED, payload);
    }

    pub fn remove_by_roll_number(&mut self, roll_number: i32) {
        let before = self.store.len();
        self.store.remove_by_roll_number(roll_number);
        let payload = serde_json::to_string(&RemovedPayload {
            roll_number,
            removed: before - self.store.len(),
        });
        self.emit(STUDENTS_REMOVED, payload);
    }

    pub fn search(&self, term: &str) -> Vec<Student> {
        self.store.search(term)
    }

    pub fn list_all(&self) -> &[Student] {
        self.store.list_all()
    }

    pub fn store(&self) -> &RosterStore {
        &self.store
    }

    pub fn into_store(self) -> RosterStore {
        self.store
    }

    fn emit(&mut self, event: &str, payload: serde_json::Result<String>) {
        match payload {
            Ok(data) => {
                trace!(event, "emitting roster event");
                self.event_emitter.emit(event, data);
            }
            Err(e) => warn!(event, error = %e, "dropping roster event"),
        }
    }
}
