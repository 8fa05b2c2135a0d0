//! Content package install results.
//!
//! The install routine reports its outcome as a small integer. This module
//! maps those codes to [`InstallResult`] and aggregates the results of a
//! batch install into an [`InstallReport`] for display.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Outcome of installing a single content package.
///
/// The integer codes are shared with the native install routine and must
/// never be renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum InstallResult {
    Success,
    Overwrite,
    Failure,
    BaseInstallAttempted,
}

/// Returned by the strict `TryFrom<i32>` lookup when no variant has the code.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Unknown install result code: {0}")]
pub struct UnknownInstallCode(pub i32);

impl InstallResult {
    /// Every variant, in declaration order.
    pub const ALL: [InstallResult; 4] = [
        InstallResult::Success,
        InstallResult::Overwrite,
        InstallResult::Failure,
        InstallResult::BaseInstallAttempted,
    ];

    /// The stable integer code for this result
    pub const fn code(self) -> i32 {
        match self {
            InstallResult::Success => 0,
            InstallResult::Overwrite => 1,
            InstallResult::Failure => 2,
            InstallResult::BaseInstallAttempted => 3,
        }
    }

    /// Look up a result by code.
    ///
    /// Codes with no matching variant map to `Success`. Use `TryFrom` when
    /// an unknown code should be treated as an error instead.
    pub fn from_code(code: i32) -> Self {
        Self::ALL
            .into_iter()
            .find(|result| result.code() == code)
            .unwrap_or(InstallResult::Success)
    }

    /// Whether the package did not end up installed
    pub fn is_error(self) -> bool {
        matches!(
            self,
            InstallResult::Failure | InstallResult::BaseInstallAttempted
        )
    }

    /// Message shown to the user after a single install
    pub fn message(self) -> &'static str {
        match self {
            InstallResult::Success => "Content installed successfully",
            InstallResult::Overwrite => "Content installed, replacing the existing copy",
            InstallResult::Failure => "Content could not be installed",
            InstallResult::BaseInstallAttempted => {
                "Base games cannot be installed to NAND. Only updates and DLC can be installed; add base games to a game folder instead"
            }
        }
    }
}

impl TryFrom<i32> for InstallResult {
    type Error = UnknownInstallCode;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|result| result.code() == code)
            .ok_or(UnknownInstallCode(code))
    }
}

impl From<InstallResult> for i32 {
    fn from(result: InstallResult) -> Self {
        result.code()
    }
}

impl fmt::Display for InstallResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Tally of results from installing several packages in one go
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InstallReport {
    pub installed: u32,
    pub overwritten: u32,
    pub failed: u32,
    pub base_install_attempted: u32,
}

impl InstallReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more result
    pub fn record(&mut self, result: InstallResult) {
        match result {
            InstallResult::Success => self.installed += 1,
            InstallResult::Overwrite => self.overwritten += 1,
            InstallResult::Failure => self.failed += 1,
            InstallResult::BaseInstallAttempted => self.base_install_attempted += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.installed + self.overwritten + self.failed + self.base_install_attempted
    }

    pub fn has_errors(&self) -> bool {
        self.failed > 0 || self.base_install_attempted > 0
    }

    /// Multi-line summary for the end of a batch install.
    ///
    /// Only non-zero counts are listed. Base game attempts count as failures
    /// and add an explanatory note.
    pub fn summary(&self) -> String {
        if self.total() == 0 {
            return "No content was installed".to_string();
        }

        let mut lines = Vec::new();
        if self.installed > 0 {
            lines.push(format!("{} file(s) installed successfully", self.installed));
        }
        if self.overwritten > 0 {
            lines.push(format!(
                "{} file(s) overwritten successfully",
                self.overwritten
            ));
        }

        let failed = self.failed + self.base_install_attempted;
        if failed > 0 {
            lines.push(format!("{} file(s) failed to install", failed));
        }
        if self.base_install_attempted > 0 {
            lines.push(InstallResult::BaseInstallAttempted.message().to_string());
        }

        lines.join("\n")
    }
}

impl FromIterator<InstallResult> for InstallReport {
    fn from_iter<I: IntoIterator<Item = InstallResult>>(iter: I) -> Self {
        let mut report = InstallReport::new();
        for result in iter {
            report.record(result);
        }
        report
    }
}

impl Extend<InstallResult> for InstallReport {
    fn extend<I: IntoIterator<Item = InstallResult>>(&mut self, iter: I) {
        for result in iter {
            self.record(result);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(InstallResult::from_code(0), InstallResult::Success);
        assert_eq!(InstallResult::from_code(1), InstallResult::Overwrite);
        assert_eq!(InstallResult::from_code(2), InstallResult::Failure);
        assert_eq!(
            InstallResult::from_code(3),
            InstallResult::BaseInstallAttempted
        );
    }

    #[test]
    fn test_unknown_codes_default_to_success() {
        for code in [-1, 4, 10, 999, i32::MIN, i32::MAX] {
            assert_eq!(InstallResult::from_code(code), InstallResult::Success);
        }
    }

    #[test]
    fn test_code_round_trip() {
        for result in InstallResult::ALL {
            assert_eq!(InstallResult::from_code(result.code()), result);
            assert_eq!(InstallResult::try_from(result.code()), Ok(result));
            assert_eq!(i32::from(result), result.code());
        }
    }

    #[test]
    fn test_codes_are_stable() {
        let codes: Vec<i32> = InstallResult::ALL.iter().map(|r| r.code()).collect();
        assert_eq!(codes, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_strict_lookup_rejects_unknown() {
        assert_eq!(InstallResult::try_from(10), Err(UnknownInstallCode(10)));
        assert_eq!(
            UnknownInstallCode(-1).to_string(),
            "Unknown install result code: -1"
        );
    }

    #[test]
    fn test_is_error() {
        assert!(!InstallResult::Success.is_error());
        assert!(!InstallResult::Overwrite.is_error());
        assert!(InstallResult::Failure.is_error());
        assert!(InstallResult::BaseInstallAttempted.is_error());
    }

    #[test]
    fn test_empty_report() {
        let report = InstallReport::new();
        assert_eq!(report.total(), 0);
        assert!(!report.has_errors());
        assert_eq!(report.summary(), "No content was installed");
    }

    #[test]
    fn test_report_summary() {
        let report: InstallReport = [0, 0, 1, 2]
            .into_iter()
            .map(InstallResult::from_code)
            .collect();

        assert_eq!(report.installed, 2);
        assert_eq!(report.overwritten, 1);
        assert_eq!(report.failed, 1);
        assert!(report.has_errors());
        assert_eq!(
            report.summary(),
            "2 file(s) installed successfully\n\
             1 file(s) overwritten successfully\n\
             1 file(s) failed to install"
        );
    }

    #[test]
    fn test_report_base_install_note() {
        let mut report = InstallReport::new();
        report.extend([InstallResult::BaseInstallAttempted, InstallResult::Failure]);

        let summary = report.summary();
        assert!(summary.starts_with("2 file(s) failed to install"));
        assert!(summary.contains("Base games cannot be installed"));
        assert_eq!(report.total(), 2);
    }
}
