//! Navigation through the settings menu hierarchy.

use thiserror::Error;

use super::item::SettingsItem;
use super::menu::{MenuTree, SettingsMenu};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Unknown menu: {0}")]
    UnknownMenu(String),

    #[error("Menu '{menu}' has no row {index}")]
    NoSuchItem { menu: String, index: usize },
}

/// What activating a row did
#[derive(Debug, Clone, PartialEq)]
pub enum Activation<'a> {
    /// A submenu row opened the menu with this key
    Opened(&'a str),
    /// The row edits a value; the caller shows an editor for it
    Edit(&'a SettingsItem),
    /// The row triggers the named action
    Run(&'a str),
    /// Headers do nothing
    Inert,
}

/// Back stack over a [`MenuTree`].
///
/// The stack always holds at least the menu the navigator started at.
#[derive(Debug, Clone)]
pub struct Navigator<'a> {
    tree: &'a MenuTree,
    stack: Vec<&'a SettingsMenu>,
}

impl<'a> Navigator<'a> {
    /// Start at the tree's root menu
    pub fn new(tree: &'a MenuTree) -> Result<Self, NavigationError> {
        Self::starting_at(tree, tree.root())
    }

    /// Start at an arbitrary menu; it becomes the bottom of the stack
    pub fn starting_at(tree: &'a MenuTree, key: &str) -> Result<Self, NavigationError> {
        let menu = tree
            .get(key)
            .ok_or_else(|| NavigationError::UnknownMenu(key.to_string()))?;

        Ok(Self {
            tree,
            stack: vec![menu],
        })
    }

    pub fn current(&self) -> &'a SettingsMenu {
        self.stack[self.stack.len() - 1]
    }

    pub fn current_key(&self) -> &'a str {
        self.current().key.as_str()
    }

    /// Keys from the starting menu down to the current one
    pub fn breadcrumbs(&self) -> Vec<&'a str> {
        self.stack.iter().map(|menu| menu.key.as_str()).collect()
    }

    /// Push the menu with this key. The stack is unchanged on error.
    pub fn open(&mut self, key: &str) -> Result<&'a SettingsMenu, NavigationError> {
        let menu = self.tree.get(key).ok_or_else(|| {
            tracing::warn!("Cannot open unknown menu '{}'", key);
            NavigationError::UnknownMenu(key.to_string())
        })?;

        tracing::debug!("Opened menu '{}' from '{}'", menu.key, self.current_key());
        self.stack.push(menu);
        Ok(menu)
    }

    /// Activate the row at `index` of the current menu
    pub fn activate(&mut self, index: usize) -> Result<Activation<'a>, NavigationError> {
        let menu = self.current();
        let item = menu
            .items
            .get(index)
            .ok_or_else(|| NavigationError::NoSuchItem {
                menu: menu.key.clone(),
                index,
            })?;

        match item {
            SettingsItem::Submenu(submenu) => {
                let opened = self.open(submenu.menu_key())?;
                Ok(Activation::Opened(opened.key.as_str()))
            }
            SettingsItem::Runnable(runnable) => Ok(Activation::Run(runnable.action.as_str())),
            SettingsItem::Header(_) => Ok(Activation::Inert),
            _ => Ok(Activation::Edit(item)),
        }
    }

    /// Pop one menu. Returns false when already at the starting menu.
    pub fn back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    /// Pop back to the starting menu
    pub fn home(&mut self) {
        self.stack.truncate(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::item::{
        HeaderSetting, ItemType, RunnableSetting, SubmenuSetting, SwitchSetting,
    };

    fn tree() -> MenuTree {
        MenuTree::new(
            "root",
            vec![
                SettingsMenu {
                    key: "root".to_string(),
                    title_id: 1,
                    items: vec![
                        SubmenuSetting::new(2, 3, "audio").into(),
                        SubmenuSetting::new(4, 5, "nowhere").into(),
                        SettingsItem::Runnable(RunnableSetting {
                            title_id: 6,
                            description_id: 7,
                            action: "reset_settings".to_string(),
                        }),
                        SettingsItem::Header(HeaderSetting { title_id: 8 }),
                    ],
                },
                SettingsMenu {
                    key: "audio".to_string(),
                    title_id: 2,
                    items: vec![SettingsItem::Switch(SwitchSetting {
                        title_id: 9,
                        description_id: 0,
                        setting: "mute".to_string(),
                        default: false,
                    })],
                },
            ],
        )
    }

    #[test]
    fn test_starts_at_root() {
        let tree = tree();
        let nav = Navigator::new(&tree).unwrap();
        assert_eq!(nav.current_key(), "root");
        assert_eq!(nav.breadcrumbs().len(), 1);
        assert_eq!(nav.breadcrumbs(), ["root"]);
    }

    #[test]
    fn test_activate_submenu_opens_it() {
        let tree = tree();
        let mut nav = Navigator::new(&tree).unwrap();

        assert_eq!(nav.activate(0), Ok(Activation::Opened("audio")));
        assert_eq!(nav.current().key, "audio");
        assert_eq!(nav.breadcrumbs(), ["root", "audio"]);

        match nav.activate(0).unwrap() {
            Activation::Edit(item) => assert_eq!(item.item_type(), ItemType::Switch),
            other => panic!("expected edit, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_key_surfaces_on_navigation() {
        let tree = tree();
        let mut nav = Navigator::new(&tree).unwrap();

        assert_eq!(
            nav.activate(1),
            Err(NavigationError::UnknownMenu("nowhere".to_string()))
        );
        assert_eq!(nav.current_key(), "root");
        assert_eq!(nav.breadcrumbs().len(), 1);
    }

    #[test]
    fn test_runnable_and_header_rows() {
        let tree = tree();
        let mut nav = Navigator::new(&tree).unwrap();

        assert_eq!(nav.activate(2), Ok(Activation::Run("reset_settings")));
        assert_eq!(nav.activate(3), Ok(Activation::Inert));
        assert_eq!(
            nav.activate(4),
            Err(NavigationError::NoSuchItem {
                menu: "root".to_string(),
                index: 4
            })
        );
    }

    #[test]
    fn test_back_and_home() {
        let tree = tree();
        let mut nav = Navigator::new(&tree).unwrap();

        assert!(!nav.back());
        nav.open("audio").unwrap();
        nav.open("root").unwrap();
        assert_eq!(nav.breadcrumbs().len(), 3);

        assert!(nav.back());
        assert_eq!(nav.current_key(), "audio");

        nav.home();
        assert_eq!(nav.current_key(), "root");
        assert_eq!(nav.breadcrumbs().len(), 1);
    }

    #[test]
    fn test_starting_at_unknown_menu() {
        let tree = tree();
        let result = Navigator::starting_at(&tree, "video");
        assert!(matches!(result, Err(NavigationError::UnknownMenu(k)) if k == "video"));

        let nav = Navigator::starting_at(&tree, "audio").unwrap();
        assert_eq!(nav.current_key(), "audio");
    }
}
