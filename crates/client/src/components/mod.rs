//! Reusable UI components.

pub mod modals;
pub mod ui;
