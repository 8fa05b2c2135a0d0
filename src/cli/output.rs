//! Output formatting utilities for CLI
//!
//! Command results go to stdout; logging goes to stderr so `--json` output
//! stays machine-readable.

use serde::Serialize;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Render a result as pretty JSON or with a text formatter
pub fn render<T, F>(value: &T, format: OutputFormat, text_formatter: F) -> String
where
    T: Serialize,
    F: FnOnce(&T) -> String,
{
    match format {
        OutputFormat::Text => text_formatter(value),
        OutputFormat::Json => serde_json::to_string_pretty(value).unwrap_or_else(|e| {
            tracing::error!("Failed to serialize output: {}", e);
            String::from("null")
        }),
    }
}

/// Print a result in the requested format
pub fn print_formatted<T, F>(value: &T, format: OutputFormat, text_formatter: F)
where
    T: Serialize,
    F: FnOnce(&T) -> String,
{
    println!("{}", render(value, format, text_formatter));
}

/// Print a confirmation line (suppressed in quiet mode)
pub fn print_success(message: &str, quiet: bool) {
    if !quiet {
        println!("{}", message);
    }
}

/// Print a problem line; never suppressed
pub fn print_problem(message: &str) {
    println!("[!!] {}", message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Sample {
        code: i32,
    }

    #[test]
    fn test_render_text() {
        let sample = Sample { code: 2 };
        assert_eq!(
            render(&sample, OutputFormat::Text, |s| format!("code {}", s.code)),
            "code 2"
        );
    }

    #[test]
    fn test_render_json() {
        let sample = Sample { code: 2 };
        let json = render(&sample, OutputFormat::Json, |_| unreachable!());
        assert_eq!(json, "{\n  \"code\": 2\n}");
    }
}
