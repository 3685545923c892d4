use std::path::Path;

use anyhow::Result;

use crate::error::Error;

use super::loader;

/// Centered moving average over an odd window. Edge samples are dropped
/// rather than padded: the output is `window - 1` shorter than the input.
pub fn smooth(series: &[f64], window: usize) -> Result<Vec<f64>, Error> {
    if window < 3 || window % 2 == 0 || window > series.len() {
        return Err(Error::InvalidSmoothWindow {
            window,
            len: series.len(),
        });
    }
    Ok(series
        .windows(window)
        .map(|w| w.iter().sum::<f64>() / window as f64)
        .collect())
}

/// Discrete central second difference `f[i+1] - 2 f[i] + f[i-1]`, two
/// samples shorter than its input.
pub fn second_derivative(series: &[f64]) -> Vec<f64> {
    series.windows(3).map(|w| w[2] - 2.0 * w[1] + w[0]).collect()
}

// ---------------------------------------------------------------------------
// LandscapeFit – smoothed profile plus curvature
// ---------------------------------------------------------------------------

/// Smoothed free-energy profile and its discrete curvature, for feature
/// inspection and as input to external fitting routines.
#[derive(Debug, Clone)]
pub struct LandscapeFit {
    /// Reaction coordinate, trimmed to align with `energy`.
    pub position: Vec<f64>,
    /// Smoothed free energy.
    pub energy: Vec<f64>,
    /// Second derivative of `energy`, aligned with `position[1..len-1]`.
    pub curvature: Vec<f64>,
}

impl LandscapeFit {
    /// Positions the curvature samples refer to.
    pub fn curvature_position(&self) -> &[f64] {
        if self.position.len() < 3 {
            &[]
        } else {
            &self.position[1..self.position.len() - 1]
        }
    }
}

/// Load a result file, smooth its energy column, and compute the discrete
/// curvature. Each step trims samples from both ends; the returned position
/// axis is trimmed to match.
pub fn fit_landscape(path: &Path, smooth_window: usize) -> Result<LandscapeFit> {
    let profile = loader::load_results(path)?;
    let energy = smooth(profile.free_energy(), smooth_window)?;
    let curvature = second_derivative(&energy);

    let half = (smooth_window - 1) / 2;
    let position = profile.position()[half..profile.len() - half].to_vec();

    Ok(LandscapeFit {
        position,
        energy,
        curvature,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn smoothing_drops_window_minus_one_samples() {
        let series: Vec<f64> = (0..20).map(|i| i as f64).collect();
        let smoothed = smooth(&series, 5).unwrap();
        assert_eq!(smoothed.len(), series.len() - 4);
        // Moving average of a linear series stays linear, shifted to the
        // window center.
        assert!((smoothed[0] - 2.0).abs() < 1e-12);
        assert!((smoothed[1] - 3.0).abs() < 1e-12);
    }

    #[test]
    fn even_or_oversized_windows_are_rejected() {
        let series = vec![1.0, 2.0, 3.0, 4.0];
        assert!(matches!(
            smooth(&series, 4).unwrap_err(),
            Error::InvalidSmoothWindow { window: 4, .. }
        ));
        assert!(matches!(
            smooth(&series, 1).unwrap_err(),
            Error::InvalidSmoothWindow { window: 1, .. }
        ));
        assert!(matches!(
            smooth(&series, 5).unwrap_err(),
            Error::InvalidSmoothWindow { window: 5, len: 4 }
        ));
    }

    #[test]
    fn second_derivative_of_linear_series_is_zero() {
        let series: Vec<f64> = (0..30).map(|i| 0.5 * i as f64 - 3.0).collect();
        let smoothed = smooth(&series, 5).unwrap();
        let curvature = second_derivative(&smoothed);
        assert_eq!(curvature.len(), smoothed.len() - 2);
        for value in curvature {
            assert!(value.abs() < 1e-12);
        }
    }

    #[test]
    fn second_derivative_of_parabola_is_constant() {
        let series: Vec<f64> = (0..10).map(|i| (i * i) as f64).collect();
        let curvature = second_derivative(&series);
        for value in curvature {
            assert!((value - 2.0).abs() < 1e-12);
        }
    }

    #[test]
    fn fit_landscape_aligns_all_axes() {
        let path: PathBuf = std::env::temp_dir().join(format!(
            "umbrella-prep-fit-{}.txt",
            std::process::id()
        ));
        let mut text = String::from("#a\n#b\nCoor\tFree\n");
        for i in 0..12 {
            text.push_str(&format!("{}\t{}\n", i as f64 * 0.5, (i * i) as f64));
        }
        fs::write(&path, text).unwrap();

        let fit = fit_landscape(&path, 3).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(fit.energy.len(), 10);
        assert_eq!(fit.position.len(), 10);
        assert_eq!(fit.curvature.len(), 8);
        assert_eq!(fit.curvature_position().len(), 8);
        // Position axis is the original one minus one sample at each end.
        assert!((fit.position[0] - 0.5).abs() < 1e-12);
        assert!((fit.position[9] - 5.0).abs() < 1e-12);
        // Smoothed parabola keeps a constant second difference.
        for value in &fit.curvature {
            assert!((value - 2.0).abs() < 1e-12);
        }
    }
}
