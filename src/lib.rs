pub mod app;
mod config;
#[cfg(feature = "emitter")]
pub mod emitter;
mod form;
pub mod roster;
mod student;

pub use app::{listing, Alert, AlertKind, RosterApp};
pub use config::{AppConfig, ConfigError};
#[cfg(feature = "emitter")]
pub use emitter::{ObservedRoster, RemovedPayload};
pub use form::{FormError, StudentForm};
pub use roster::RosterStore;
pub use student::Student;

// Re-export the EventEmitter from the event_emitter_rs crate
#[cfg(feature = "emitter")]
pub use event_emitter_rs::EventEmitter;
