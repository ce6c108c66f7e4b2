// Skiff - core/mod.rs
//
// Core browser model.
// Dependencies: std, serde, chrono, url, util.
// Must NOT depend on: ui, platform, app, or any GUI crate.

pub mod address;
pub mod bookmarks;
pub mod engine;
pub mod history;
pub mod model;
pub mod search;
pub mod tabs;
