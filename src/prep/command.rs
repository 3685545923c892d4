use std::fmt;
use std::path::PathBuf;

use super::segment::HistogramBounds;

/// Avogadro's number, to the precision the solver's unit convention uses.
const AVOGADRO: f64 = 6.0221409e23;

/// Scale a cantilever spring constant from N/m to kJ/(mol·nm²), the unit
/// the solver expects in the metadata file.
///
/// N/m = J/m² = 1e-21 kJ/nm²; multiplying by Avogadro's number makes it
/// molar. The factor is exact, not an approximation.
pub fn scale_spring_constant(k_newtons_per_m: f64) -> f64 {
    k_newtons_per_m * 1e-21 * AVOGADRO
}

/// Number of histogram bins covering the bounds at the requested bin width
/// (nanometers).
pub fn num_bins(bounds: HistogramBounds, bin_width_nm: f64) -> usize {
    ((bounds.max - bounds.min) / bin_width_nm).ceil() as usize
}

// ---------------------------------------------------------------------------
// SolverInvocation – the external wham command, as a value
// ---------------------------------------------------------------------------

/// Everything the external solver needs, fully determined once segmentation
/// completes. The textual command line is produced only by the `Display`
/// impl:
///
/// `wham <min> <max> <bins> <tolerance> <temperature> <pad> <metadata> <output>`
#[derive(Debug, Clone, PartialEq)]
pub struct SolverInvocation {
    pub hist_min: f64,
    pub hist_max: f64,
    pub num_bins: usize,
    pub tolerance: f64,
    pub temperature: f64,
    /// Padding bins; always 0 for a non-periodic reaction coordinate.
    pub num_pad: usize,
    pub metadata_path: PathBuf,
    pub output_path: PathBuf,
}

impl fmt::Display for SolverInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "wham {} {} {} {:e} {} {} {} {}",
            self.hist_min,
            self.hist_max,
            self.num_bins,
            self.tolerance,
            self.temperature,
            self.num_pad,
            self.metadata_path.display(),
            self.output_path.display()
        )
    }
}
