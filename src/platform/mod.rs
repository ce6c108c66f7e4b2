// Skiff - platform/mod.rs
//
// Platform abstraction layer: paths, config.toml, web engines, processes.
// Dependencies: util, core (engine trait and model), directories, wry.
// Must NOT depend on: app, ui.

pub mod config;
pub mod engine;
pub mod launch;
