//! Umbrella-sampling preparation: raw trace → solver inputs.
//!
//! ```text
//!  instrument .csv  (zSensr, defl — meters)
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse, m→nm, tsd derivation → ForceCurve
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ segment   │  fixed-size windows + histogram-bounds fold
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  writer   │  timeseries/umbrella<N>.txt + metadata.txt
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ command   │  SolverInvocation → command.txt
//!   └──────────┘
//! ```

pub mod command;
pub mod loader;
pub mod model;
pub mod segment;
pub mod writer;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::error::Error;

use self::command::SolverInvocation;
use self::writer::OutputLayout;

/// Prepare a raw force-spectroscopy trace for the external WHAM solver.
///
/// Loads the CSV at `data_path`, carves it into umbrella windows of
/// `win_size - 1` samples, writes the solver's file layout under
/// `save_path`, and returns the solver invocation (also persisted to
/// `<save_path>/command.txt`). The spring constant is given in N/m and
/// scaled to kJ/(mol·nm²) in the metadata; `bin_width` is in nanometers.
///
/// Fails before writing anything if `save_path` already exists, so a prior
/// run is never overwritten.
pub fn create_files(
    data_path: &Path,
    save_path: &Path,
    win_size: usize,
    temperature: f64,
    spring_constant: f64,
    bin_width: f64,
    tolerance: f64,
) -> Result<SolverInvocation> {
    if save_path.exists() {
        return Err(Error::DestinationExists(save_path.to_path_buf()).into());
    }

    let curve = loader::load_force_curve(data_path)?;
    let segmentation = segment::segment(&curve, win_size)?;

    fs::create_dir(save_path).with_context(|| format!("creating {}", save_path.display()))?;
    let layout = OutputLayout::new(save_path);
    let k_scaled = command::scale_spring_constant(spring_constant);
    writer::write_windows(&layout, &segmentation, k_scaled)?;

    let invocation = SolverInvocation {
        hist_min: segmentation.bounds.min,
        hist_max: segmentation.bounds.max,
        num_bins: command::num_bins(segmentation.bounds, bin_width),
        tolerance,
        temperature,
        num_pad: 0,
        metadata_path: layout.metadata_path,
        output_path: layout.results_path,
    };

    let command_path = save_path.join("command.txt");
    fs::write(&command_path, format!("{invocation}\n"))
        .with_context(|| format!("writing {}", command_path.display()))?;
    log::info!("solver invocation: {invocation}");

    Ok(invocation)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn scratch(name: &str) -> (PathBuf, PathBuf) {
        let root = std::env::temp_dir().join(format!(
            "umbrella-prep-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&root);
        fs::create_dir_all(&root).unwrap();
        (root.join("trace.csv"), root)
    }

    /// Ten rows, win_size 4: two windows of three samples, two boundary
    /// samples consumed unseen, two remainder rows dropped.
    fn ten_row_csv(path: &Path) {
        let mut text = String::from("zSensr,defl\n");
        for i in 0..10 {
            // tsd ends up at (2 - i) nm.
            text.push_str(&format!("{}e-9,2e-9\n", i));
        }
        fs::write(path, text).unwrap();
    }

    #[test]
    fn create_files_emits_the_full_layout() {
        let (csv_path, root) = scratch("pipeline");
        ten_row_csv(&csv_path);
        let save = root.join("run");

        let invocation =
            create_files(&csv_path, &save, 4, 298.0, 0.05, 0.7, 1e-12).unwrap();

        // Included tsd values: 2,1,0 (window 0) and -2,-3,-4 (window 1).
        assert!((invocation.hist_min - (-4.0)).abs() < 1e-9);
        assert!((invocation.hist_max - 2.0).abs() < 1e-9);
        // span 6 nm at 0.7 nm bins rounds up to 9.
        assert_eq!(invocation.num_bins, 9);
        assert_eq!(invocation.num_pad, 0);

        let metadata = fs::read_to_string(save.join("metadata.txt")).unwrap();
        assert_eq!(metadata.lines().count(), 2);
        assert!(save.join("timeseries/umbrella0.txt").is_file());
        assert!(save.join("timeseries/umbrella1.txt").is_file());
        assert!(!save.join("timeseries/umbrella2.txt").exists());

        let command = fs::read_to_string(save.join("command.txt")).unwrap();
        assert_eq!(command, format!("{invocation}\n"));
        assert!(command.starts_with("wham "));
        assert!(command.contains(" 9 1e-12 298 0 "));
        assert!(command.trim_end().ends_with("results.txt"));

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn existing_destination_aborts_before_output() {
        let (csv_path, root) = scratch("destination");
        ten_row_csv(&csv_path);
        let save = root.join("run");
        fs::create_dir(&save).unwrap();

        let err = create_files(&csv_path, &save, 4, 298.0, 0.05, 0.5, 1e-12).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::DestinationExists(_))
        ));
        // Nothing was written into the pre-existing directory.
        assert!(fs::read_dir(&save).unwrap().next().is_none());

        fs::remove_dir_all(&root).unwrap();
    }
}
