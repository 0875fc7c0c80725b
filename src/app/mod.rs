//! App - a headless controller for roster front ends.
//!
//! The controller makes the decisions a screen would make (validate the
//! form, ask before removing, choose which rows to show) and hands back
//! [`Alert`] values. Rendering is left to the caller.
//!
//! ## Example
//!
//! ```
//! use roster::{AppConfig, RosterApp, StudentForm};
//!
//! let mut app = RosterApp::new(AppConfig::default());
//! app.add_student(&StudentForm::new("Ann", "1", "A")).unwrap();
//!
//! app.search("zzz");
//! assert!(app.rows().is_empty());
//!
//! let alert = app.display_all();
//! assert_eq!(alert.content, "List of students:\nAnn - 1\n");
//! ```

mod alert;
mod controller;

pub use alert::{Alert, AlertKind};
pub use controller::{listing, RosterApp};
