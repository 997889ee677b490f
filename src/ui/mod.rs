//! Terminal host for the project wizard.
//!
//! The event loop runs on the main thread. Submissions and collaborator
//! refreshes are spawned on the tokio runtime and report back through the
//! same channel as key presses.

pub mod app;
pub mod collaborators;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod wizard_dialog;

pub use runtime::{build_app, run};
