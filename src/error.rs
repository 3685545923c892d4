use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Domain errors
// ---------------------------------------------------------------------------

/// Failures a caller may want to match on. Plumbing errors (file I/O, CSV
/// records, float parsing, plot backends) flow through `anyhow` with context
/// at the call site instead.
#[derive(Debug, Error)]
pub enum Error {
    /// The output directory already exists; refusing to overwrite a prior
    /// run. Raised before anything is written.
    #[error("{} already exists, please choose another save location", .0.display())]
    DestinationExists(PathBuf),

    /// A solver result file without the two `#`-marked header lines that
    /// delimit its preamble.
    #[error("{}: expected two '#' header lines, found {markers_found}", .path.display())]
    MalformedResults { path: PathBuf, markers_found: usize },

    /// Model parameter slices of unequal length; one depth, width, and
    /// center is required per well.
    #[error("model parameter count mismatch: {depths} depths, {widths} widths, {centers} centers")]
    ParameterShape {
        depths: usize,
        widths: usize,
        centers: usize,
    },

    /// A window of fewer than two samples holds no data at all.
    #[error("window size must be at least 2, got {0}")]
    InvalidWindowSize(usize),

    /// The trace is too short to fill even one window, so no histogram
    /// bounds exist.
    #[error("{samples} samples cannot fill a single window of {win_size}")]
    EmptySegmentation { samples: usize, win_size: usize },

    /// Moving-average window that is even, too small, or longer than the
    /// series it should smooth.
    #[error("smoothing window must be odd, at least 3, and no longer than the series (length {len}), got {window}")]
    InvalidSmoothWindow { window: usize, len: usize },
}
