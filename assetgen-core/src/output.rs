//! Run reports for build scripts and humans

use std::io::Write;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{AssetError, Result};

/// Summary of one embedding run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedReport {
    pub inputs: Vec<PathBuf>,
    pub symbols: Vec<String>,
    pub bytes: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subset: Option<String>,
    pub definition: PathBuf,
    pub declaration: PathBuf,
}

/// Write the report as prettified JSON followed by a newline.
pub fn write_report_json(report: &EmbedReport, mut w: impl Write) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    w.write_all(json.as_bytes())
        .and_then(|_| w.write_all(b"\n"))
        .map_err(|e| AssetError::io("write", "<report output>", e))
}

/// Write the one-line human summary.
pub fn write_report_plain(report: &EmbedReport, mut w: impl Write) -> Result<()> {
    writeln!(
        w,
        "Done: embedded {} bytes into {} and {}",
        report.bytes,
        report.definition.display(),
        report.declaration.display()
    )
    .map_err(|e| AssetError::io("write", "<report output>", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> EmbedReport {
        EmbedReport {
            inputs: vec![PathBuf::from("icons.ttf")],
            symbols: vec!["icons_data".to_string()],
            bytes: 1234,
            subset: Some("\u{e900}".to_string()),
            definition: PathBuf::from("icons.cpp"),
            declaration: PathBuf::from("icons.hpp"),
        }
    }

    #[test]
    fn json_report_parses_back() {
        let mut buf = Vec::new();
        write_report_json(&sample_report(), &mut buf).expect("write json");

        let parsed: EmbedReport = serde_json::from_slice(&buf).expect("parse");
        assert_eq!(parsed, sample_report());
    }

    #[test]
    fn json_report_omits_missing_subset() {
        let mut report = sample_report();
        report.subset = None;
        let mut buf = Vec::new();
        write_report_json(&report, &mut buf).expect("write json");

        let text = String::from_utf8(buf).expect("utf8");
        assert!(!text.contains("subset"));
    }

    #[test]
    fn plain_report_names_both_outputs() {
        let mut buf = Vec::new();
        write_report_plain(&sample_report(), &mut buf).expect("write plain");

        let text = String::from_utf8(buf).expect("utf8");
        assert_eq!(text, "Done: embedded 1234 bytes into icons.cpp and icons.hpp\n");
    }
}
