//! Emitter - push notifications for roster changes.
//!
//! [`ObservedRoster`] wraps a [`RosterStore`](crate::RosterStore) and emits
//! an event after each mutation, for front ends that would rather be told
//! than re-fetch. Payloads are JSON strings.

mod observed;

pub use observed::{ObservedRoster, RemovedPayload, STUDENTS_REMOVED, STUDENT_ADDED};
