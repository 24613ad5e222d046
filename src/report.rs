// SPDX-License-Identifier: PMPL-1.0-or-later
//! Report generation for lint diagnostics.
//!
//! Supports multiple output formats:
//! - Text: one `<file>:<line> <message>` line per diagnostic (the default)
//! - JSON: the diagnostic set for programmatic consumption
//! - SARIF: Static Analysis Results Interchange Format for IDE/CI integration

use crate::diagnostic::DiagnosticSet;
use serde::Serialize;

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain diagnostic lines
    Text,
    /// Structured JSON
    Json,
    /// SARIF for IDE/CI integration
    Sarif,
}

/// Render a report, or `None` when there is nothing to print.
///
/// Text output stays silent on a clean run; the structured formats always
/// produce a document.
pub fn generate_report(diagnostics: &DiagnosticSet, format: OutputFormat) -> Option<String> {
    match format {
        OutputFormat::Text if diagnostics.is_empty() => None,
        OutputFormat::Text => Some(diagnostics.lines().join("\n")),
        OutputFormat::Json => Some(generate_json_report(diagnostics)),
        OutputFormat::Sarif => Some(generate_sarif_report(diagnostics)),
    }
}

fn generate_json_report(diagnostics: &DiagnosticSet) -> String {
    serde_json::to_string_pretty(diagnostics).unwrap_or_else(|e| {
        format!("{{\"error\": \"Failed to serialize diagnostics: {}\"}}", e)
    })
}

/// SARIF report structure (simplified)
#[derive(Debug, Serialize)]
struct SarifReport {
    #[serde(rename = "$schema")]
    schema: String,
    version: String,
    runs: Vec<SarifRun>,
}

#[derive(Debug, Serialize)]
struct SarifRun {
    tool: SarifTool,
    results: Vec<SarifResult>,
}

#[derive(Debug, Serialize)]
struct SarifTool {
    driver: SarifDriver,
}

#[derive(Debug, Serialize)]
struct SarifDriver {
    name: String,
    version: String,
}

#[derive(Debug, Serialize)]
struct SarifResult {
    #[serde(rename = "ruleId")]
    rule_id: String,
    level: String,
    message: SarifMessage,
    locations: Vec<SarifLocation>,
}

#[derive(Debug, Serialize)]
struct SarifMessage {
    text: String,
}

#[derive(Debug, Serialize)]
struct SarifLocation {
    #[serde(rename = "physicalLocation")]
    physical_location: SarifPhysicalLocation,
}

#[derive(Debug, Serialize)]
struct SarifPhysicalLocation {
    #[serde(rename = "artifactLocation")]
    artifact_location: SarifArtifactLocation,
    #[serde(skip_serializing_if = "Option::is_none")]
    region: Option<SarifRegion>,
}

#[derive(Debug, Serialize)]
struct SarifArtifactLocation {
    uri: String,
}

#[derive(Debug, Serialize)]
struct SarifRegion {
    #[serde(rename = "startLine")]
    start_line: usize,
}

fn generate_sarif_report(diagnostics: &DiagnosticSet) -> String {
    let results = diagnostics
        .iter()
        .map(|d| SarifResult {
            rule_id: d.rule_id.clone(),
            level: "error".to_string(),
            message: SarifMessage { text: d.message.clone() },
            locations: vec![SarifLocation {
                physical_location: SarifPhysicalLocation {
                    artifact_location: SarifArtifactLocation {
                        uri: d.file.display().to_string(),
                    },
                    region: d.line.map(|l| SarifRegion { start_line: l }),
                },
            }],
        })
        .collect();

    let report = SarifReport {
        schema: "https://json.schemastore.org/sarif-2.1.0.json".to_string(),
        version: "2.1.0".to_string(),
        runs: vec![SarifRun {
            tool: SarifTool {
                driver: SarifDriver {
                    name: env!("CARGO_PKG_NAME").to_string(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                },
            },
            results,
        }],
    };

    serde_json::to_string_pretty(&report).unwrap_or_else(|e| {
        format!("{{\"error\": \"Failed to serialize SARIF report: {}\"}}", e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::Diagnostic;
    use std::path::Path;

    fn sample_set() -> DiagnosticSet {
        let mut set = DiagnosticSet::new();
        set.add(Diagnostic::new(
            Path::new("page.pt"),
            10,
            "missing-image-description",
            "The <img> element requires an alt attribute.",
        ));
        set.add(Diagnostic::syntax(
            Path::new("broken.pt"),
            "unknown token, line 1, column 1".to_string(),
        ));
        set
    }

    #[test]
    fn test_text_report_empty() {
        assert_eq!(generate_report(&DiagnosticSet::new(), OutputFormat::Text), None);
    }

    #[test]
    fn test_text_report_lines() {
        let report = generate_report(&sample_set(), OutputFormat::Text).expect("report");
        assert_eq!(
            report,
            "page.pt:10 The <img> element requires an alt attribute.\n\
             broken.pt: unknown token, line 1, column 1"
        );
    }

    #[test]
    fn test_json_report() {
        let report = generate_report(&sample_set(), OutputFormat::Json).expect("report");
        let parsed: serde_json::Value = serde_json::from_str(&report).expect("valid JSON");
        assert_eq!(parsed["diagnostics"].as_array().map(Vec::len), Some(2));
        assert_eq!(parsed["diagnostics"][0]["line"], 10);
        assert!(parsed["diagnostics"][1]["line"].is_null());
    }

    #[test]
    fn test_json_report_empty_is_still_printed() {
        let report = generate_report(&DiagnosticSet::new(), OutputFormat::Json).expect("report");
        let parsed: serde_json::Value = serde_json::from_str(&report).expect("valid JSON");
        assert!(parsed["diagnostics"].as_array().is_some_and(|a| a.is_empty()));
    }

    #[test]
    fn test_sarif_report() {
        let report = generate_report(&sample_set(), OutputFormat::Sarif).expect("report");
        let parsed: serde_json::Value = serde_json::from_str(&report).expect("valid JSON");
        assert_eq!(parsed["version"], "2.1.0");
        let results = &parsed["runs"][0]["results"];
        assert_eq!(results[0]["ruleId"], "missing-image-description");
        assert_eq!(
            results[0]["locations"][0]["physicalLocation"]["region"]["startLine"],
            10
        );
        assert_eq!(results[1]["ruleId"], "syntax-error");
    }
}
