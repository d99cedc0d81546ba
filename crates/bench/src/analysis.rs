use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use hybrid_sort::SortAlgorithm;
use tracing::info;

use crate::HarnessError;
use crate::config::{AnalysisConfig, OutputConfig};
use crate::report::{SIZE_HEADER, THRESHOLD_HEADER, write_table};
use crate::sweep::{BaseArrays, BenchmarkRecord, size_sweep, threshold_sweep};

#[derive(Clone, Debug, Default)]
pub struct AnalysisReport {
    pub merge_sort: Vec<BenchmarkRecord>,
    pub hybrid_sort: Vec<BenchmarkRecord>,
    pub thresholds: Vec<BenchmarkRecord>,
}

/// Runs the merge sort size sweep, the threshold sweep and the hybrid size
/// sweep, in that order, over one set of base arrays.
pub fn run_analysis(config: &AnalysisConfig) -> Result<AnalysisReport, HarnessError> {
    config.validate()?;
    let sweep = &config.sweep;

    let mut generator = config.build_generator()?;
    let bases = BaseArrays::generate(&mut generator, config.generator.base_len);

    info!("testing standard merge sort");
    let merge_sort = size_sweep(&bases, SortAlgorithm::MergeSort, sweep)?;

    info!("testing threshold analysis");
    let thresholds = threshold_sweep(&bases, sweep)?;

    let hybrid_threshold = sweep.hybrid_threshold()?;
    info!(threshold = %hybrid_threshold, "testing hybrid sort");
    let hybrid_sort = size_sweep(&bases, SortAlgorithm::HybridSort(hybrid_threshold), sweep)?;

    Ok(AnalysisReport {
        merge_sort,
        hybrid_sort,
        thresholds,
    })
}

impl AnalysisReport {
    /// Writes the three tables into `dir`, creating it if needed, and returns
    /// the paths written.
    pub fn write_to_dir(
        &self,
        dir: &Path,
        output: &OutputConfig,
    ) -> Result<Vec<PathBuf>, HarnessError> {
        fs::create_dir_all(dir).map_err(|source| HarnessError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let tables = [
            (&output.merge_file, SIZE_HEADER, &self.merge_sort),
            (&output.hybrid_file, SIZE_HEADER, &self.hybrid_sort),
            (&output.threshold_file, THRESHOLD_HEADER, &self.thresholds),
        ];

        let mut written = Vec::with_capacity(tables.len());
        for (name, header, records) in tables {
            let path = dir.join(name);
            write_file(&path, header, records).map_err(|source| HarnessError::Io {
                path: path.clone(),
                source,
            })?;
            info!(path = %path.display(), rows = records.len(), "wrote report");
            written.push(path);
        }
        Ok(written)
    }
}

fn write_file(path: &Path, header: &str, records: &[BenchmarkRecord]) -> std::io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_table(&mut out, header, records)?;
    out.flush()
}
