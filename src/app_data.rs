//! Application data embedded from TOML files at compile time.
//!
//! This module provides access to data that is:
//! - Embedded at compile time via `include_str!`
//! - Parsed lazily on first access via `OnceLock`
//! - Immutable at runtime (not user-configurable)
//!
//! This is distinct from `config.rs` which handles user preferences.
//! App data defines *what the front-end shows* (menu layout, display text),
//! while config defines *user choices* (locale, start menu).
//!
//! Data files are located in `embedded/`:
//! - `settings_menu.toml` - Settings screens and their rows
//! - `strings.toml` - Display text for row titles and descriptions

use std::sync::OnceLock;

use crate::settings::MenuTree;
use crate::strings::StringTable;

// Embed data files at compile time
const SETTINGS_MENU_TOML: &str = include_str!("../embedded/settings_menu.toml");
const STRINGS_TOML: &str = include_str!("../embedded/strings.toml");

/// Get the built-in settings menu layout (lazy-loaded)
pub fn settings_menu() -> &'static MenuTree {
    static MENU: OnceLock<MenuTree> = OnceLock::new();
    MENU.get_or_init(|| {
        MenuTree::from_toml(SETTINGS_MENU_TOML).unwrap_or_else(|e| {
            panic!("Failed to parse settings_menu.toml: {}", e);
        })
    })
}

/// Get the built-in string table (lazy-loaded)
pub fn strings() -> &'static StringTable {
    static STRINGS: OnceLock<StringTable> = OnceLock::new();
    STRINGS.get_or_init(|| {
        StringTable::from_toml(STRINGS_TOML).unwrap_or_else(|e| {
            panic!("Failed to parse strings.toml: {}", e);
        })
    })
}
