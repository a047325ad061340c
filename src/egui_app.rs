//! egui front end: controller, UI state, view models, and renderer.

/// Controller that owns the form and the background request plumbing.
pub mod controller;
/// Shared UI state types.
pub mod state;
/// egui renderer.
pub mod ui;
/// Render projections of controller state.
pub mod view_model;
