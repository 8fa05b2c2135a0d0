//! Install result commands

use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;

use crate::cli::output::{print_formatted, OutputFormat};
use crate::config::Config;
use crate::install::{InstallReport, InstallResult};

#[derive(Subcommand, Debug)]
pub enum InstallCommands {
    /// Explain a single install result code
    Explain {
        /// Result code reported by the installer
        #[arg(allow_negative_numbers = true)]
        code: i32,

        /// Fail on unknown codes instead of reading them as success
        #[arg(long)]
        strict: bool,
    },

    /// Summarize the result codes of a batch install
    Summarize {
        /// Result codes, one per installed package
        #[arg(required = true, allow_negative_numbers = true)]
        codes: Vec<i32>,

        /// Fail on unknown codes instead of reading them as success
        #[arg(long)]
        strict: bool,
    },
}

#[derive(Serialize)]
struct ExplainResult {
    code: i32,
    result: InstallResult,
    message: &'static str,
    is_error: bool,
}

#[derive(Serialize)]
struct SummaryResult {
    #[serde(flatten)]
    report: InstallReport,
    total: u32,
    has_errors: bool,
    summary: String,
}

pub async fn run(command: InstallCommands, format: OutputFormat, quiet: bool) -> Result<()> {
    let config = Config::load()?;

    match command {
        InstallCommands::Explain { code, strict } => {
            explain(code, strict || config.install.strict_codes, format)
        }
        InstallCommands::Summarize { codes, strict } => {
            summarize(&codes, strict || config.install.strict_codes, format, quiet)
        }
    }
}

fn explain(code: i32, strict: bool, format: OutputFormat) -> Result<()> {
    let result = lookup(code, strict)?;

    let explained = ExplainResult {
        code,
        result,
        message: result.message(),
        is_error: result.is_error(),
    };

    print_formatted(&explained, format, |r| {
        format!("{:?} ({}): {}", r.result, r.result.code(), r.message)
    });

    Ok(())
}

fn summarize(codes: &[i32], strict: bool, format: OutputFormat, quiet: bool) -> Result<()> {
    let report = codes
        .iter()
        .map(|code| lookup(*code, strict))
        .collect::<Result<InstallReport>>()?;

    if !prints_summary(&report, format, quiet) {
        return Ok(());
    }

    let summary = SummaryResult {
        report,
        total: report.total(),
        has_errors: report.has_errors(),
        summary: report.summary(),
    };

    print_formatted(&summary, format, |r| r.summary.clone());

    Ok(())
}

/// Quiet text output stays silent unless something failed
fn prints_summary(report: &InstallReport, format: OutputFormat, quiet: bool) -> bool {
    !(quiet && format == OutputFormat::Text && !report.has_errors())
}

/// Map a code to a result, honouring strict mode
fn lookup(code: i32, strict: bool) -> Result<InstallResult> {
    match InstallResult::try_from(code) {
        Ok(result) => Ok(result),
        Err(e) if strict => Err(e.into()),
        Err(_) => {
            tracing::warn!("Unknown install result code {}, treating as success", code);
            Ok(InstallResult::from_code(code))
        }
    }
}
