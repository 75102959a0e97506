//! Report — render statistics and append them to the result sinks.

pub mod render;

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use tracing::info;

use crate::error::AnalyzerError;
use crate::stats::AggregateStatistics;

pub use render::render;

/// Writes one rendered block per run to the result file, and optionally to a console.
///
/// The result file is opened in append mode and created if missing; earlier
/// runs are never truncated.
pub struct Reporter<W> {
    result_path: PathBuf,
    console: Option<W>,
}

impl<W: Write> Reporter<W> {
    pub fn new(result_path: impl Into<PathBuf>, console: Option<W>) -> Self {
        Self {
            result_path: result_path.into(),
            console,
        }
    }

    pub fn console(&self) -> Option<&W> {
        self.console.as_ref()
    }

    pub fn report(&mut self, stats: &AggregateStatistics) -> Result<(), AnalyzerError> {
        let block = render(stats);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.result_path)?;
        file.write_all(block.as_bytes())?;

        if let Some(console) = self.console.as_mut() {
            console.write_all(block.as_bytes())?;
            console.flush()?;
        }

        info!(
            records = stats.total_records,
            average_response_size = stats.average_response_size,
            "Appended analysis to {}",
            self.result_path.display()
        );
        Ok(())
    }
}
