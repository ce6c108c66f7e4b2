// Skiff - app/mod.rs
//
// Application layer: the browser controller, UI state, persisted settings.
// Dependencies: core layer, util.
// Must NOT depend on: ui, platform specifics.

pub mod browser;
pub mod settings;
pub mod state;
