//! Settings menu model.
//!
//! This module contains:
//! - The closed set of row kinds a settings screen is built from
//! - The menu hierarchy those rows link together
//! - A navigator that resolves submenu keys as rows are activated

pub(crate) mod item;
pub(crate) mod menu;
mod navigator;

pub use item::SettingsItem;
pub use menu::MenuTree;
pub use navigator::{Activation, Navigator};
