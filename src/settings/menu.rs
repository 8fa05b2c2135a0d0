//! Settings menu hierarchy.
//!
//! A [`MenuTree`] is a flat list of menus keyed by string. Submenu rows link
//! menus together by key, so the hierarchy is only as sound as those keys;
//! [`MenuTree::validate`] reports every broken link at once.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::item::SettingsItem;

/// Problems found while loading or validating a menu layout
#[derive(Error, Debug)]
pub enum MenuError {
    #[error("Failed to parse menu layout: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Root menu not found: {0}")]
    MissingRoot(String),

    #[error("Duplicate menu key: {0}")]
    DuplicateKey(String),

    #[error("Invalid menu key: {0:?}")]
    InvalidKey(String),

    #[error("Row {index} of menu '{menu}' links to unknown menu '{target}'")]
    DanglingSubmenu {
        menu: String,
        index: usize,
        target: String,
    },

    #[error("Menu '{0}' is not reachable from the root")]
    Unreachable(String),

    #[error("Row {index} of menu '{menu}' has a default outside its choices or range")]
    InvalidDefault { menu: String, index: usize },
}

/// One settings screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsMenu {
    pub key: String,
    pub title_id: u32,
    #[serde(default)]
    pub items: Vec<SettingsItem>,
}

/// All settings screens and the key of the first one shown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuTree {
    root: String,
    #[serde(rename = "menu", default)]
    menus: Vec<SettingsMenu>,
}

impl MenuTree {
    #[cfg(test)]
    pub fn new(root: impl Into<String>, menus: Vec<SettingsMenu>) -> Self {
        Self {
            root: root.into(),
            menus,
        }
    }

    /// Parse a layout. The result is not validated.
    pub fn from_toml(content: &str) -> Result<Self, MenuError> {
        Ok(toml::from_str(content)?)
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn get(&self, key: &str) -> Option<&SettingsMenu> {
        self.menus.iter().find(|menu| menu.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Menus in layout order
    pub fn menus(&self) -> &[SettingsMenu] {
        &self.menus
    }

    /// Destination keys of the submenu rows in a menu, in row order
    pub fn submenu_keys(&self, key: &str) -> Vec<&str> {
        self.get(key)
            .map(|menu| {
                menu.items
                    .iter()
                    .filter_map(SettingsItem::menu_key)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Check the layout and collect every problem found
    pub fn validate(&self) -> Result<(), Vec<MenuError>> {
        let mut errors = Vec::new();

        if !self.contains(&self.root) {
            errors.push(MenuError::MissingRoot(self.root.clone()));
        }

        let mut seen = HashSet::new();
        for menu in &self.menus {
            if !is_valid_key(&menu.key) {
                errors.push(MenuError::InvalidKey(menu.key.clone()));
            }
            if !seen.insert(menu.key.as_str()) {
                errors.push(MenuError::DuplicateKey(menu.key.clone()));
            }
        }

        for menu in &self.menus {
            for (index, item) in menu.items.iter().enumerate() {
                if !has_valid_default(item) {
                    errors.push(MenuError::InvalidDefault {
                        menu: menu.key.clone(),
                        index,
                    });
                }
                if let Some(target) = item.menu_key() {
                    if !self.contains(target) {
                        errors.push(MenuError::DanglingSubmenu {
                            menu: menu.key.clone(),
                            index,
                            target: target.to_string(),
                        });
                    }
                }
            }
        }

        if self.contains(&self.root) {
            let reachable = self.reachable_from(&self.root);
            for menu in &self.menus {
                if !reachable.contains(menu.key.as_str()) {
                    errors.push(MenuError::Unreachable(menu.key.clone()));
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Depth-first listing of rows starting at `from`.
    ///
    /// Submenu rows are followed into their menus. A menu already on the
    /// current path is listed as a row but not entered again.
    pub fn walk<'a>(&'a self, from: &'a str) -> Vec<(usize, &'a SettingsItem)> {
        let mut rows = Vec::new();
        let mut path = vec![from];
        self.walk_into(from, 0, &mut path, &mut rows);
        rows
    }

    fn walk_into<'a>(
        &'a self,
        key: &str,
        depth: usize,
        path: &mut Vec<&'a str>,
        rows: &mut Vec<(usize, &'a SettingsItem)>,
    ) {
        let Some(menu) = self.get(key) else {
            return;
        };

        for item in &menu.items {
            rows.push((depth, item));

            if let Some(target) = item.menu_key() {
                if path.contains(&target) {
                    continue;
                }
                path.push(target);
                self.walk_into(target, depth + 1, path, rows);
                path.pop();
            }
        }
    }

    fn reachable_from<'a>(&'a self, start: &'a str) -> HashSet<&'a str> {
        let mut reachable = HashSet::new();
        let mut pending = vec![start];

        while let Some(key) = pending.pop() {
            if !reachable.insert(key) {
                continue;
            }
            for target in self.submenu_keys(key) {
                if self.contains(target) && !reachable.contains(target) {
                    pending.push(target);
                }
            }
        }

        reachable
    }
}

fn has_valid_default(item: &SettingsItem) -> bool {
    match item {
        SettingsItem::SingleChoice(choice) => {
            choice.choices.len() == choice.values.len() && choice.choice_for(choice.default).is_some()
        }
        SettingsItem::Slider(slider) => slider.contains(slider.default),
        SettingsItem::StringSingleChoice(choice) => choice.default_choice().is_some(),
        _ => true,
    }
}

/// Menu keys are lowercase identifiers: `[a-z][a-z0-9_]*`
fn is_valid_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}
