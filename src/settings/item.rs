//! Settings list rows.
//!
//! Every row carries a title and description string id; the UI resolves
//! them through the string table. [`ItemType`] is the tag a row renderer
//! dispatches on.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Row kind tag. The numeric tags match the ones the row renderer uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum ItemType {
    Header = 0,
    Switch = 1,
    SingleChoice = 2,
    Slider = 3,
    Submenu = 4,
    StringSingleChoice = 5,
    DateTime = 6,
    Runnable = 7,
}

impl ItemType {
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Short name used in CLI listings
    pub fn name(self) -> &'static str {
        match self {
            ItemType::Header => "header",
            ItemType::Switch => "switch",
            ItemType::SingleChoice => "single_choice",
            ItemType::Slider => "slider",
            ItemType::Submenu => "submenu",
            ItemType::StringSingleChoice => "string_single_choice",
            ItemType::DateTime => "date_time",
            ItemType::Runnable => "runnable",
        }
    }
}

/// A single row in a settings menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SettingsItem {
    Header(HeaderSetting),
    Switch(SwitchSetting),
    SingleChoice(SingleChoiceSetting),
    Slider(SliderSetting),
    Submenu(SubmenuSetting),
    StringSingleChoice(StringSingleChoiceSetting),
    DateTime(DateTimeSetting),
    Runnable(RunnableSetting),
}

impl SettingsItem {
    pub fn item_type(&self) -> ItemType {
        match self {
            SettingsItem::Header(_) => ItemType::Header,
            SettingsItem::Switch(_) => ItemType::Switch,
            SettingsItem::SingleChoice(_) => ItemType::SingleChoice,
            SettingsItem::Slider(_) => ItemType::Slider,
            SettingsItem::Submenu(item) => item.item_type(),
            SettingsItem::StringSingleChoice(_) => ItemType::StringSingleChoice,
            SettingsItem::DateTime(_) => ItemType::DateTime,
            SettingsItem::Runnable(_) => ItemType::Runnable,
        }
    }

    pub fn title_id(&self) -> u32 {
        match self {
            SettingsItem::Header(item) => item.title_id,
            SettingsItem::Switch(item) => item.title_id,
            SettingsItem::SingleChoice(item) => item.title_id,
            SettingsItem::Slider(item) => item.title_id,
            SettingsItem::Submenu(item) => item.title_id(),
            SettingsItem::StringSingleChoice(item) => item.title_id,
            SettingsItem::DateTime(item) => item.title_id,
            SettingsItem::Runnable(item) => item.title_id,
        }
    }

    /// Description string id, 0 when the row has none
    pub fn description_id(&self) -> u32 {
        match self {
            SettingsItem::Header(_) => 0,
            SettingsItem::Switch(item) => item.description_id,
            SettingsItem::SingleChoice(item) => item.description_id,
            SettingsItem::Slider(item) => item.description_id,
            SettingsItem::Submenu(item) => item.description_id(),
            SettingsItem::StringSingleChoice(item) => item.description_id,
            SettingsItem::DateTime(item) => item.description_id,
            SettingsItem::Runnable(item) => item.description_id,
        }
    }

    /// Destination key for submenu rows
    pub fn menu_key(&self) -> Option<&str> {
        match self {
            SettingsItem::Submenu(item) => Some(item.menu_key()),
            _ => None,
        }
    }

    /// Key of the setting value this row edits, if it edits one
    pub fn setting_key(&self) -> Option<&str> {
        match self {
            SettingsItem::Switch(item) => Some(&item.setting),
            SettingsItem::SingleChoice(item) => Some(&item.setting),
            SettingsItem::Slider(item) => Some(&item.setting),
            SettingsItem::StringSingleChoice(item) => Some(&item.setting),
            SettingsItem::DateTime(item) => Some(&item.setting),
            SettingsItem::Header(_) | SettingsItem::Submenu(_) | SettingsItem::Runnable(_) => None,
        }
    }
}

impl From<SubmenuSetting> for SettingsItem {
    fn from(item: SubmenuSetting) -> Self {
        SettingsItem::Submenu(item)
    }
}

/// Row that opens another menu when activated.
///
/// The key is stored as given. Whether it names an existing menu is only
/// checked when navigating, or by [`MenuTree::validate`](super::MenuTree::validate).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "SubmenuRow")]
pub struct SubmenuSetting {
    title_id: u32,
    description_id: u32,
    menu_key: String,
}

/// Layout form of a submenu row; converted through `SubmenuSetting::new`
#[derive(Deserialize)]
struct SubmenuRow {
    title_id: u32,
    #[serde(default)]
    description_id: u32,
    menu_key: String,
}

impl From<SubmenuRow> for SubmenuSetting {
    fn from(row: SubmenuRow) -> Self {
        SubmenuSetting::new(row.title_id, row.description_id, row.menu_key)
    }
}

impl SubmenuSetting {
    pub fn new(title_id: u32, description_id: u32, menu_key: impl Into<String>) -> Self {
        Self {
            title_id,
            description_id,
            menu_key: menu_key.into(),
        }
    }

    pub fn title_id(&self) -> u32 {
        self.title_id
    }

    pub fn description_id(&self) -> u32 {
        self.description_id
    }

    pub fn menu_key(&self) -> &str {
        &self.menu_key
    }

    pub fn item_type(&self) -> ItemType {
        ItemType::Submenu
    }
}

/// Section heading; not selectable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderSetting {
    pub title_id: u32,
}

/// On/off toggle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchSetting {
    pub title_id: u32,
    #[serde(default)]
    pub description_id: u32,
    pub setting: String,
    #[serde(default)]
    pub default: bool,
}

/// Pick one of several labelled integer values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleChoiceSetting {
    pub title_id: u32,
    #[serde(default)]
    pub description_id: u32,
    pub setting: String,
    /// String ids of the choice labels, parallel to `values`
    pub choices: Vec<u32>,
    pub values: Vec<i32>,
    #[serde(default)]
    pub default: i32,
}

impl SingleChoiceSetting {
    /// Label id for a stored value
    pub fn choice_for(&self, value: i32) -> Option<u32> {
        self.values
            .iter()
            .position(|v| *v == value)
            .and_then(|index| self.choices.get(index).copied())
    }
}

/// Integer value within a range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderSetting {
    pub title_id: u32,
    #[serde(default)]
    pub description_id: u32,
    pub setting: String,
    pub min: i32,
    pub max: i32,
    pub default: i32,
    #[serde(default)]
    pub units: String,
}

impl SliderSetting {
    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Pick one of several free-form strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringSingleChoiceSetting {
    pub title_id: u32,
    #[serde(default)]
    pub description_id: u32,
    pub setting: String,
    pub choices: Vec<String>,
    #[serde(default)]
    pub default_index: usize,
}

impl StringSingleChoiceSetting {
    pub fn default_choice(&self) -> Option<&str> {
        self.choices.get(self.default_index).map(String::as_str)
    }
}

/// Date and time picker, stored as seconds since the Unix epoch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateTimeSetting {
    pub title_id: u32,
    #[serde(default)]
    pub description_id: u32,
    pub setting: String,
    #[serde(default)]
    pub default: i64,
}

impl DateTimeSetting {
    /// Default value as UTC text, or None if the timestamp is out of range
    pub fn format_default(&self) -> Option<String> {
        DateTime::<Utc>::from_timestamp(self.default, 0)
            .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
    }
}

/// Row that triggers an action rather than editing a value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnableSetting {
    pub title_id: u32,
    #[serde(default)]
    pub description_id: u32,
    pub action: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submenu_setting_fields() {
        let item = SubmenuSetting::new(5, 6, "audio");
        assert_eq!(item.title_id(), 5);
        assert_eq!(item.description_id(), 6);
        assert_eq!(item.menu_key(), "audio");
        assert_eq!(item.item_type(), ItemType::Submenu);
        assert_eq!(item.item_type().tag(), 4);
    }

    #[test]
    fn test_submenu_key_not_normalized() {
        let item = SubmenuSetting::new(1, 2, "  Audio ");
        assert_eq!(item.menu_key(), "  Audio ");

        let empty = SubmenuSetting::new(1, 2, "");
        assert_eq!(empty.menu_key(), "");
    }

    #[test]
    fn test_submenu_value_equality() {
        let a = SubmenuSetting::new(5, 6, "audio");
        let b = SubmenuSetting::new(5, 6, String::from("audio"));
        assert_eq!(a, b);
        assert_ne!(a, SubmenuSetting::new(5, 6, "system"));
        assert_ne!(a, SubmenuSetting::new(5, 7, "audio"));
    }

    #[test]
    fn test_settings_item_dispatch() {
        let item = SettingsItem::from(SubmenuSetting::new(10, 11, "renderer"));
        assert_eq!(item.item_type(), ItemType::Submenu);
        assert_eq!(item.title_id(), 10);
        assert_eq!(item.description_id(), 11);
        assert_eq!(item.menu_key(), Some("renderer"));
        assert_eq!(item.setting_key(), None);

        let header = SettingsItem::Header(HeaderSetting { title_id: 3 });
        assert_eq!(header.item_type(), ItemType::Header);
        assert_eq!(header.description_id(), 0);
        assert_eq!(header.menu_key(), None);
    }

    #[test]
    fn test_submenu_row_from_layout() {
        #[derive(Deserialize)]
        struct Rows {
            items: Vec<SettingsItem>,
        }

        let rows: Rows = toml::from_str(
            r#"items = [{ type = "submenu", title_id = 5, description_id = 6, menu_key = " audio" }]"#,
        )
        .unwrap();

        let item = &rows.items[0];
        assert_eq!(item, &SettingsItem::Submenu(SubmenuSetting::new(5, 6, " audio")));
        assert_eq!(item.title_id(), 5);
        assert_eq!(item.description_id(), 6);
        assert_eq!(item.menu_key(), Some(" audio"));
        assert_eq!(item.item_type().tag(), 4);
    }

    #[test]
    fn test_item_tags_are_distinct() {
        let tags = [
            ItemType::Header,
            ItemType::Switch,
            ItemType::SingleChoice,
            ItemType::Slider,
            ItemType::Submenu,
            ItemType::StringSingleChoice,
            ItemType::DateTime,
            ItemType::Runnable,
        ]
        .map(ItemType::tag);
        assert_eq!(tags, [0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_deserialize_tagged_rows() {
        #[derive(Deserialize)]
        struct Rows {
            items: Vec<SettingsItem>,
        }

        let rows: Rows = toml::from_str(
            r#"
            items = [
                { type = "submenu", title_id = 1, menu_key = "audio" },
                { type = "switch", title_id = 2, description_id = 3, setting = "docked", default = true },
                { type = "slider", title_id = 4, setting = "volume", min = 0, max = 100, default = 100, units = "%" },
            ]
            "#,
        )
        .unwrap();

        assert_eq!(
            rows.items[0],
            SettingsItem::Submenu(SubmenuSetting::new(1, 0, "audio"))
        );
        assert_eq!(rows.items[1].item_type(), ItemType::Switch);
        assert_eq!(rows.items[1].setting_key(), Some("docked"));
        match &rows.items[2] {
            SettingsItem::Slider(slider) => {
                assert!(slider.contains(0));
                assert!(slider.contains(100));
                assert!(!slider.contains(101));
            }
            other => panic!("expected slider, got {:?}", other),
        }
    }

    #[test]
    fn test_single_choice_lookup() {
        let item = SingleChoiceSetting {
            title_id: 1,
            description_id: 0,
            setting: "resolution".to_string(),
            choices: vec![20, 21, 22],
            values: vec![1, 2, 3],
            default: 2,
        };
        assert_eq!(item.choice_for(2), Some(21));
        assert_eq!(item.choice_for(9), None);
    }

    #[test]
    fn test_date_time_default_format() {
        let item = DateTimeSetting {
            title_id: 1,
            description_id: 0,
            setting: "custom_rtc".to_string(),
            default: 0,
        };
        assert_eq!(item.format_default().as_deref(), Some("1970-01-01 00:00:00"));
    }

    #[test]
    fn test_string_choice_default() {
        let item = StringSingleChoiceSetting {
            title_id: 1,
            description_id: 0,
            setting: "driver".to_string(),
            choices: vec!["System".to_string(), "Custom".to_string()],
            default_index: 1,
        };
        assert_eq!(item.default_choice(), Some("Custom"));
    }
}
