//! Interactive settings browser
//!
//! Provides a REPL over the settings menus with command history and tab
//! completion of commands and menu keys.

use anyhow::Result;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Config as EditorConfig, Editor, Helper};

use super::commands::settings::row_detail;
use crate::app_data;
use crate::config::Config;
use crate::settings::{Activation, MenuTree, Navigator};
use crate::strings::StringTable;

const COMMANDS: &[&str] = &["ls", "open", "back", "home", "path", "help", "exit", "quit"];

/// Completes browser commands, and menu keys after `open`
struct BrowseCompleter {
    menu_keys: Vec<String>,
}

impl BrowseCompleter {
    fn new(tree: &MenuTree) -> Self {
        Self {
            menu_keys: tree.menus().iter().map(|menu| menu.key.clone()).collect(),
        }
    }

    fn candidates<'a>(options: impl Iterator<Item = &'a str>, prefix: &str) -> Vec<Pair> {
        options
            .filter(|option| option.starts_with(prefix))
            .map(|option| Pair {
                display: option.to_string(),
                replacement: option.to_string(),
            })
            .collect()
    }
}

impl Completer for BrowseCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        let words: Vec<&str> = line.split_whitespace().collect();
        let start = line.rfind(' ').map(|i| i + 1).unwrap_or(0);

        match (words.as_slice(), line.ends_with(' ')) {
            ([], _) => Ok((0, Self::candidates(COMMANDS.iter().copied(), ""))),
            ([command], false) => Ok((start, Self::candidates(COMMANDS.iter().copied(), command))),
            (["open"], true) => Ok((
                pos,
                Self::candidates(self.menu_keys.iter().map(String::as_str), ""),
            )),
            (["open", prefix], false) => Ok((
                start,
                Self::candidates(self.menu_keys.iter().map(String::as_str), prefix),
            )),
            _ => Ok((pos, vec![])),
        }
    }
}

impl Hinter for BrowseCompleter {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &rustyline::Context<'_>) -> Option<String> {
        None
    }
}

impl Highlighter for BrowseCompleter {}
impl Validator for BrowseCompleter {}
impl Helper for BrowseCompleter {}

/// Browser state: the navigator plus what is needed to print rows
struct Browser<'a> {
    nav: Navigator<'a>,
    strings: &'a StringTable,
    locale: &'a str,
}

impl Browser<'_> {
    /// Render the current menu
    fn listing(&self) -> String {
        let menu = self.nav.current();
        let mut lines = vec![format!(
            "{} ({})",
            self.strings.text(self.locale, menu.title_id),
            menu.key
        )];

        for (index, item) in menu.items.iter().enumerate() {
            let title = self.strings.text(self.locale, item.title_id());
            let mut line = format!("  [{}] {}", index, title);
            if let Some(key) = item.menu_key() {
                line.push_str(&format!(" >  {}", key));
            } else if let Some(detail) = row_detail(item, self.strings, self.locale) {
                line.push_str(&format!(": {}", detail));
            }
            lines.push(line);
        }

        lines.join("\n")
    }

    /// Run one command. Returns Ok(false) to exit.
    fn run_command(&mut self, line: &str) -> Result<bool> {
        let words: Vec<&str> = line.split_whitespace().collect();

        match words.as_slice() {
            [] => {}
            ["help"] => print_help(),
            ["exit"] | ["quit"] => return Ok(false),
            ["ls"] => println!("{}", self.listing()),
            ["path"] => println!("{}", self.nav.breadcrumbs().join(" / ")),
            ["back"] => {
                if self.nav.back() {
                    println!("{}", self.listing());
                } else {
                    println!("Already at the top menu.");
                }
            }
            ["home"] => {
                self.nav.home();
                println!("{}", self.listing());
            }
            ["open", target] => self.open(target)?,
            _ => println!("Unknown command: {}. Type 'help' for commands.", line),
        }

        Ok(true)
    }

    /// Open a row by index, or a menu by key
    fn open(&mut self, target: &str) -> Result<()> {
        if let Ok(index) = target.parse::<usize>() {
            match self.nav.activate(index)? {
                Activation::Opened(_) => println!("{}", self.listing()),
                Activation::Edit(item) => {
                    let detail = row_detail(item, self.strings, self.locale).unwrap_or_default();
                    println!(
                        "{}: {}",
                        self.strings.text(self.locale, item.title_id()),
                        detail
                    );
                    if let Some(description) =
                        self.strings.resolve(self.locale, item.description_id())
                    {
                        println!("  {}", description);
                    }
                }
                Activation::Run(action) => println!("Action: {}", action),
                Activation::Inert => {}
            }
        } else {
            self.nav.open(target)?;
            println!("{}", self.listing());
        }

        Ok(())
    }
}

fn print_help() {
    println!(
        r#"Settings Browser

Commands:
  ls                List rows of the current menu
  open <n>          Activate row n (opens submenus)
  open <key>        Jump to a menu by key
  back              Return to the previous menu
  home              Return to the first menu
  path              Show the menus opened so far

  help              Show this help
  exit, quit        Leave the browser
"#
    );
}

/// Get the history file path
fn history_path() -> Option<std::path::PathBuf> {
    directories::ProjectDirs::from("org", "ember", "Ember")
        .map(|dirs| dirs.data_dir().join("browse_history"))
}

/// Run the interactive browser
pub async fn run(config: &Config) -> Result<()> {
    let tree = app_data::settings_menu();

    let nav = match Navigator::starting_at(tree, &config.frontend.start_menu) {
        Ok(nav) => nav,
        Err(e) => {
            tracing::warn!("{}, starting at the root menu", e);
            Navigator::new(tree)?
        }
    };

    let mut browser = Browser {
        nav,
        strings: app_data::strings(),
        locale: &config.frontend.locale,
    };

    println!("Ember Settings Browser v{}", env!("CARGO_PKG_VERSION"));
    println!("Type 'help' for available commands, 'exit' to quit.\n");
    println!("{}", browser.listing());

    let editor_config = EditorConfig::builder()
        .history_ignore_space(true)
        .completion_type(rustyline::CompletionType::List)
        .build();

    let mut rl = Editor::with_config(editor_config)?;
    rl.set_helper(Some(BrowseCompleter::new(tree)));

    // Load history
    if let Some(path) = history_path() {
        let _ = rl.load_history(&path);
    }

    loop {
        let prompt = format!("{}> ", browser.nav.current_key());
        match rl.readline(&prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                rl.add_history_entry(line)?;

                match browser.run_command(line) {
                    Ok(true) => continue,
                    Ok(false) => break,
                    Err(e) => eprintln!("Error: {}", e),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("exit");
                break;
            }
            Err(err) => {
                eprintln!("Error: {:?}", err);
                break;
            }
        }
    }

    // Save history
    if let Some(path) = history_path() {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let _ = rl.save_history(&path);
    }

    Ok(())
}
