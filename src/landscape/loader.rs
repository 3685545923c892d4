use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::error::Error;

// ---------------------------------------------------------------------------
// FreeEnergyProfile – the solver's output table
// ---------------------------------------------------------------------------

/// Parsed solver output: named columns of equal length, column-major. The
/// first column is the reaction coordinate and the second the free energy;
/// further columns (probabilities, uncertainties) ride along untouched.
#[derive(Debug, Clone)]
pub struct FreeEnergyProfile {
    pub columns: Vec<String>,
    pub data: Vec<Vec<f64>>,
}

impl FreeEnergyProfile {
    /// Number of rows.
    pub fn len(&self) -> usize {
        self.data.first().map_or(0, |c| c.len())
    }

    /// Whether the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reaction coordinate (first column).
    pub fn position(&self) -> &[f64] {
        &self.data[0]
    }

    /// Free energy (second column).
    pub fn free_energy(&self) -> &[f64] {
        &self.data[1]
    }
}

/// Load a solver result file.
///
/// The preamble ends with the *second* line whose first character is `#`;
/// everything up to and including that line is discarded. The first
/// retained line names the columns; the rest is a tab-separated numeric
/// table. Later `#` lines are per-window diagnostics some solvers append
/// and are skipped. Fewer than two `#` lines means the file is not a
/// result file at all.
pub fn load_results(path: &Path) -> Result<FreeEnergyProfile> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let mut lines = text.lines();

    let mut markers_found = 0;
    for line in lines.by_ref() {
        if line.starts_with('#') {
            markers_found += 1;
            if markers_found == 2 {
                break;
            }
        }
    }
    if markers_found < 2 {
        return Err(Error::MalformedResults {
            path: path.to_path_buf(),
            markers_found,
        }
        .into());
    }

    let header = lines
        .next()
        .context("result file ends right after its header block")?;
    let columns: Vec<String> = header.split('\t').map(|c| c.trim().to_string()).collect();
    if columns.len() < 2 {
        bail!(
            "expected at least position and free-energy columns, got {}",
            columns.len()
        );
    }

    let mut data = vec![Vec::new(); columns.len()];
    for (row_no, line) in lines.enumerate() {
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != columns.len() {
            bail!(
                "row {row_no}: expected {} columns, got {}",
                columns.len(),
                fields.len()
            );
        }
        for (column, field) in data.iter_mut().zip(&fields) {
            let value: f64 = field
                .trim()
                .parse()
                .with_context(|| format!("row {row_no}: '{field}' is not a number"))?;
            column.push(value);
        }
    }

    log::debug!(
        "loaded {} rows x {} columns from {}",
        data[0].len(),
        columns.len(),
        path.display()
    );
    Ok(FreeEnergyProfile { columns, data })
}
