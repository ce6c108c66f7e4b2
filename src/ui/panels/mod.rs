// Skiff - ui/panels/mod.rs

pub mod about;
pub mod bookmark_dialog;
pub mod menus;
pub mod page;
pub mod settings;
pub mod tabs;
pub mod toolbar;
