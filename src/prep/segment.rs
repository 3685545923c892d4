use crate::error::Error;

use super::model::{ForceCurve, Sample};

// ---------------------------------------------------------------------------
// Window – one umbrella segment of the trace
// ---------------------------------------------------------------------------

/// A contiguous umbrella window: `win_size - 1` consecutive samples,
/// identified by its zero-based position in the trace.
#[derive(Debug, Clone)]
pub struct Window<'a> {
    pub index: usize,
    pub samples: &'a [Sample],
}

impl Window<'_> {
    /// Mean tip-sample distance: the window's bias-potential center
    /// estimate written to the metadata file.
    pub fn mean_tsd(&self) -> f64 {
        let sum: f64 = self.samples.iter().map(|s| s.tsd_nm).sum();
        sum / self.samples.len() as f64
    }

    fn min_tsd(&self) -> f64 {
        self.samples
            .iter()
            .map(|s| s.tsd_nm)
            .fold(f64::INFINITY, f64::min)
    }

    fn max_tsd(&self) -> f64 {
        self.samples
            .iter()
            .map(|s| s.tsd_nm)
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

// ---------------------------------------------------------------------------
// HistogramBounds – global extrema over the windowed samples
// ---------------------------------------------------------------------------

/// Extrema of the tip-sample distance restricted to samples that made it
/// into a window. Dropped boundary and remainder samples contribute
/// nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBounds {
    pub min: f64,
    pub max: f64,
}

/// The windows carved from a trace together with the bounds folded over
/// them.
#[derive(Debug)]
pub struct Segmentation<'a> {
    pub windows: Vec<Window<'a>>,
    pub bounds: HistogramBounds,
}

/// Carve consecutive umbrella windows from the front of the trace.
///
/// Each iteration takes `win_size - 1` samples and advances the cursor by
/// `win_size`: the boundary sample between windows is consumed but appears
/// in no window. Segmentation stops once fewer than `win_size` samples
/// remain; the remainder is dropped. A trace shorter than one window is an
/// error rather than a sentinel-bounds result.
pub fn segment(curve: &ForceCurve, win_size: usize) -> Result<Segmentation<'_>, Error> {
    if win_size < 2 {
        return Err(Error::InvalidWindowSize(win_size));
    }

    let mut windows = Vec::with_capacity(curve.len() / win_size);
    let mut cursor = 0;
    while curve.len() - cursor >= win_size {
        let index = windows.len();
        windows.push(Window {
            index,
            samples: &curve.samples[cursor..cursor + win_size - 1],
        });
        cursor += win_size;
    }

    let bounds = windows
        .iter()
        .map(|w| (w.min_tsd(), w.max_tsd()))
        .reduce(|(min, max), (w_min, w_max)| (min.min(w_min), max.max(w_max)))
        .map(|(min, max)| HistogramBounds { min, max })
        .ok_or(Error::EmptySegmentation {
            samples: curve.len(),
            win_size,
        })?;

    log::info!(
        "segmented {} samples into {} windows of {} ({} samples dropped)",
        curve.len(),
        windows.len(),
        win_size - 1,
        curve.len() - windows.len() * (win_size - 1)
    );

    Ok(Segmentation { windows, bounds })
}
