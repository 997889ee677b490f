//! Multi-step form wizard with validation-gated navigation and derived
//! default values, plus a terminal host for the "Create Project" flow.

pub mod config;
pub mod detail;
pub mod form;
pub mod i18n;
pub mod logging;
pub mod mvi;
pub mod routes;
pub mod ui;
pub mod wizard;
