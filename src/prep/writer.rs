use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::segment::Segmentation;

// ---------------------------------------------------------------------------
// OutputLayout – where a run's artifacts live
// ---------------------------------------------------------------------------

/// File layout rooted at the save directory: the shared metadata file, the
/// per-window timeseries directory, and the path the solver will write its
/// results to.
#[derive(Debug, Clone)]
pub struct OutputLayout {
    pub metadata_path: PathBuf,
    pub timeseries_dir: PathBuf,
    pub results_path: PathBuf,
}

impl OutputLayout {
    pub fn new(save_path: &Path) -> Self {
        Self {
            metadata_path: save_path.join("metadata.txt"),
            timeseries_dir: save_path.join("timeseries"),
            results_path: save_path.join("results.txt"),
        }
    }

    /// Timeseries file for one window.
    pub fn umbrella_file(&self, index: usize) -> PathBuf {
        self.timeseries_dir.join(format!("umbrella{index}.txt"))
    }
}

/// One metadata line: where a window's timeseries lives, its bias-potential
/// center, and the scaled spring constant.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSummary {
    pub file_name: PathBuf,
    pub center: f64,
    pub spring_constant: f64,
}

/// Persist every window, in index order.
///
/// Each window gets its own `umbrella<i>.txt` (tab-separated
/// `index<TAB>tsd` lines, opened, written, and closed before the next
/// window) and one tab-separated metadata line. Metadata line `i` always
/// refers to `umbrella<i>.txt`.
pub fn write_windows(
    layout: &OutputLayout,
    segmentation: &Segmentation<'_>,
    spring_constant: f64,
) -> Result<Vec<WindowSummary>> {
    fs::create_dir(&layout.timeseries_dir)
        .with_context(|| format!("creating {}", layout.timeseries_dir.display()))?;

    let metadata_file = File::create(&layout.metadata_path)
        .with_context(|| format!("creating {}", layout.metadata_path.display()))?;
    let mut metadata = BufWriter::new(metadata_file);

    let mut summaries = Vec::with_capacity(segmentation.windows.len());
    for window in &segmentation.windows {
        let file_name = layout.umbrella_file(window.index);
        let file = File::create(&file_name)
            .with_context(|| format!("creating {}", file_name.display()))?;
        let mut writer = BufWriter::new(file);
        for sample in window.samples {
            writeln!(writer, "{}\t{}", sample.index, sample.tsd_nm)
                .with_context(|| format!("writing {}", file_name.display()))?;
        }
        writer
            .flush()
            .with_context(|| format!("flushing {}", file_name.display()))?;

        let center = window.mean_tsd();
        writeln!(
            metadata,
            "{}\t{}\t{}",
            file_name.display(),
            center,
            spring_constant
        )
        .context("writing metadata line")?;

        summaries.push(WindowSummary {
            file_name,
            center,
            spring_constant,
        });
    }
    metadata.flush().context("flushing metadata file")?;

    log::debug!(
        "wrote {} umbrella files under {}",
        summaries.len(),
        layout.timeseries_dir.display()
    );
    Ok(summaries)
}
