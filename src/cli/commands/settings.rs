//! Settings menu commands

use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;

use crate::app_data;
use crate::cli::output::{print_formatted, print_problem, print_success, OutputFormat};
use crate::cli::shell;
use crate::config::Config;
use crate::settings::{MenuTree, SettingsItem};
use crate::strings::StringTable;

#[derive(Subcommand, Debug)]
pub enum SettingsCommands {
    /// Print the menu hierarchy
    Tree {
        /// Menu to start from (defaults to the root menu)
        #[arg(long)]
        menu: Option<String>,
    },

    /// List the rows of one menu
    Show {
        /// Menu key (e.g., "audio", "renderer")
        key: String,
    },

    /// Validate the menu layout
    Check,

    /// Browse the menus interactively
    Browse,
}

/// JSON-serializable settings row
#[derive(Serialize)]
struct RowResult {
    depth: usize,
    #[serde(rename = "type")]
    item_type: &'static str,
    tag: u8,
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    menu_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    setting: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

#[derive(Serialize)]
struct MenuResult {
    key: String,
    title: String,
    rows: Vec<RowResult>,
}

#[derive(Serialize)]
struct CheckResult {
    valid: bool,
    menus: usize,
    problems: Vec<String>,
}

pub async fn run(command: SettingsCommands, format: OutputFormat, quiet: bool) -> Result<()> {
    let config = Config::load()?;
    let locale = config.frontend.locale.as_str();

    match command {
        SettingsCommands::Tree { menu } => tree(menu.as_deref(), locale, format),
        SettingsCommands::Show { key } => show(&key, locale, format),
        SettingsCommands::Check => check(format, quiet),
        SettingsCommands::Browse => shell::run(&config).await,
    }
}

fn tree(from: Option<&str>, locale: &str, format: OutputFormat) -> Result<()> {
    let rows = tree_rows(app_data::settings_menu(), from, app_data::strings(), locale)?;

    print_formatted(&rows, format, |rows| {
        rows.iter()
            .map(|row| {
                let mut line = format!("{}{} [{}]", "  ".repeat(row.depth), row.title, row.item_type);
                if let Some(key) = &row.menu_key {
                    line.push_str(&format!(" -> {}", key));
                }
                line
            })
            .collect::<Vec<_>>()
            .join("\n")
    });

    Ok(())
}

/// Rows below `from` (or the root), depth first
fn tree_rows(
    menus: &MenuTree,
    from: Option<&str>,
    strings: &StringTable,
    locale: &str,
) -> Result<Vec<RowResult>> {
    let from = from.unwrap_or(menus.root());
    if !menus.contains(from) {
        anyhow::bail!("Unknown menu: {}", from);
    }

    Ok(menus
        .walk(from)
        .into_iter()
        .map(|(depth, item)| row_result(depth, item, strings, locale))
        .collect())
}

fn show(key: &str, locale: &str, format: OutputFormat) -> Result<()> {
    let menus = app_data::settings_menu();
    let strings = app_data::strings();

    let menu = menus
        .get(key)
        .ok_or_else(|| anyhow::anyhow!("Unknown menu: {}", key))?;

    let result = MenuResult {
        key: menu.key.clone(),
        title: strings.text(locale, menu.title_id).into_owned(),
        rows: menu
            .items
            .iter()
            .map(|item| row_result(0, item, strings, locale))
            .collect(),
    };

    print_formatted(&result, format, |r| format_menu_text(r));

    Ok(())
}

fn check(format: OutputFormat, quiet: bool) -> Result<()> {
    let menus = app_data::settings_menu();
    let result = check_layout(menus);

    match format {
        OutputFormat::Json => print_formatted(&result, format, |_| String::new()),
        OutputFormat::Text => {
            if result.valid {
                print_success(
                    &format!("Menu layout OK ({} menus)", result.menus),
                    quiet,
                );
            } else {
                for problem in &result.problems {
                    print_problem(problem);
                }
            }
        }
    }

    if !result.valid {
        anyhow::bail!("Menu layout has {} problem(s)", result.problems.len());
    }

    Ok(())
}

fn check_layout(menus: &MenuTree) -> CheckResult {
    let problems = match menus.validate() {
        Ok(()) => Vec::new(),
        Err(errors) => errors.iter().map(ToString::to_string).collect(),
    };

    CheckResult {
        valid: problems.is_empty(),
        menus: menus.menus().len(),
        problems,
    }
}

fn row_result(depth: usize, item: &SettingsItem, strings: &StringTable, locale: &str) -> RowResult {
    RowResult {
        depth,
        item_type: item.item_type().name(),
        tag: item.item_type().tag(),
        title: strings.text(locale, item.title_id()).into_owned(),
        description: strings
            .resolve(locale, item.description_id())
            .map(str::to_string),
        menu_key: item.menu_key().map(str::to_string),
        setting: item.setting_key().map(str::to_string),
        detail: row_detail(item, strings, locale),
    }
}

/// One-line summary of what a row edits or does
pub(crate) fn row_detail(item: &SettingsItem, strings: &StringTable, locale: &str) -> Option<String> {
    match item {
        SettingsItem::Header(_) | SettingsItem::Submenu(_) => None,
        SettingsItem::Switch(switch) => Some(format!(
            "{} (default {})",
            switch.setting,
            if switch.default { "on" } else { "off" }
        )),
        SettingsItem::SingleChoice(choice) => {
            let default = choice
                .choice_for(choice.default)
                .map(|id| strings.text(locale, id).into_owned())
                .unwrap_or_else(|| choice.default.to_string());
            Some(format!("{} (default {})", choice.setting, default))
        }
        SettingsItem::Slider(slider) => Some(format!(
            "{} ({}-{}{}, default {})",
            slider.setting, slider.min, slider.max, slider.units, slider.default
        )),
        SettingsItem::StringSingleChoice(choice) => Some(format!(
            "{} (default {})",
            choice.setting,
            choice.default_choice().unwrap_or("<none>")
        )),
        SettingsItem::DateTime(date_time) => Some(format!(
            "{} (default {})",
            date_time.setting,
            date_time
                .format_default()
                .unwrap_or_else(|| date_time.default.to_string())
        )),
        SettingsItem::Runnable(runnable) => Some(format!("runs {}", runnable.action)),
    }
}

fn format_menu_text(menu: &MenuResult) -> String {
    let mut lines = vec![format!("{} ({})", menu.title, menu.key)];

    for (index, row) in menu.rows.iter().enumerate() {
        let mut line = format!("  [{}] {} <{}>", index, row.title, row.item_type);
        if let Some(key) = &row.menu_key {
            line.push_str(&format!(" -> {}", key));
        }
        if let Some(detail) = &row.detail {
            line.push_str(&format!(": {}", detail));
        }
        lines.push(line);

        if let Some(description) = &row.description {
            lines.push(format!("      {}", description));
        }
    }

    lines.join("\n")
}
