//! Model — AnalyzerConfig.

use std::path::PathBuf;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Append-only file receiving one result block per run
    pub result_path: PathBuf,
    /// Trim the delimiter captured after the request path
    pub normalize_path: bool,
    /// Also write the result block to stdout
    pub echo_stdout: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            result_path: PathBuf::from("analysis_result.txt"),
            normalize_path: false,
            echo_stdout: true,
        }
    }
}
