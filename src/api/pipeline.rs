use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::TabularDataset;
use crate::error::ChartResult;
use crate::telemetry::PipelineLogger;
use crate::workbook::load_workbook;

use super::StyleConfig;

/// Destination for one rendered dataset.
pub trait ChartSink {
    fn render(
        &mut self,
        dataset: &TabularDataset,
        output_dir: &Path,
        style: &StyleConfig,
    ) -> ChartResult<PathBuf>;
}

/// Renders datasets one after another and reduces the outcome to a flag.
///
/// A failure stops the run; charts written before it stay on disk.
#[derive(Debug)]
pub struct ChartPipeline<S, L> {
    sink: S,
    logger: L,
}

impl<S: ChartSink, L: PipelineLogger> ChartPipeline<S, L> {
    #[must_use]
    pub fn new(sink: S, logger: L) -> Self {
        Self { sink, logger }
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    #[must_use]
    pub fn logger(&self) -> &L {
        &self.logger
    }

    #[must_use]
    pub fn into_parts(self) -> (S, L) {
        (self.sink, self.logger)
    }

    /// Returns `true` when every dataset rendered.
    pub fn run(&mut self, datasets: &[TabularDataset], output_dir: &Path, style: &StyleConfig) -> bool {
        for (index, dataset) in datasets.iter().enumerate() {
            match self.sink.render(dataset, output_dir, style) {
                Ok(path) => {
                    debug!(index, sheet = %dataset.sheet_name(), path = %path.display(), "rendered dataset");
                }
                Err(err) => {
                    self.logger.error(&format!(
                        "chart for sheet `{}` failed: {err}",
                        dataset.sheet_name()
                    ));
                    return false;
                }
            }
        }

        self.logger.info(&format!(
            "rendered {} chart(s) into {}",
            datasets.len(),
            output_dir.display()
        ));
        true
    }

    /// Loads the workbook at `workbook_path` and renders all of its sheets.
    pub fn run_workbook(
        &mut self,
        workbook_path: &Path,
        output_dir: &Path,
        style: &StyleConfig,
    ) -> bool {
        self.logger
            .info(&format!("loading workbook {}", workbook_path.display()));
        match load_workbook(workbook_path) {
            Ok(datasets) => self.run(&datasets, output_dir, style),
            Err(err) => {
                self.logger.error(&err.to_string());
                false
            }
        }
    }
}
