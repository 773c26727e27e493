//! Conformance report generation.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::checks::CheckResult;
use crate::error::HarnessError;

/// Aggregated outcome of one conformance run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConformanceReport {
    /// Name of the run, recorded for report consumers.
    pub campaign: String,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub results: Vec<CheckResult>,
}

impl ConformanceReport {
    #[must_use]
    pub fn new(campaign: impl Into<String>, results: Vec<CheckResult>) -> Self {
        let passed = results.iter().filter(|r| r.passed).count();
        Self {
            campaign: campaign.into(),
            total: results.len(),
            passed,
            failed: results.len() - passed,
            results,
        }
    }

    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Serialize the report to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write the JSON report to a file.
    pub fn write_json(&self, path: &Path) -> Result<(), HarnessError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Human-readable rendering; failures include both transcripts.
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = format!("campaign: {}\n", self.campaign);
        for result in &self.results {
            let mark = if result.passed { "PASS" } else { "FAIL" };
            out.push_str(&format!("  [{mark}] {}\n", result.name));
            if !result.passed {
                out.push_str(&format!(
                    "    expected: {}\n    actual:   {}\n",
                    result.expected, result.actual
                ));
            }
        }
        out.push_str(&format!(
            "{} checks, {} passed, {} failed\n",
            self.total, self.passed, self.failed
        ));
        out
    }
}
