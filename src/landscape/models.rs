use crate::error::Error;

/// Standard logistic function, 0.5 at the origin.
fn logistic(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

fn check_shape(depths: &[f64], widths: &[f64], centers: &[f64]) -> Result<(), Error> {
    if depths.len() != widths.len() || widths.len() != centers.len() {
        return Err(Error::ParameterShape {
            depths: depths.len(),
            widths: widths.len(),
            centers: centers.len(),
        });
    }
    Ok(())
}

/// Multi-well potential built from logistic sigmoids.
///
/// Each well contributes `-depth * (logistic((z - center) / width) - 1)`:
/// exactly `depth / 2` at its center, `depth` far below it, and 0 far
/// above. One depth, width, and center per well.
pub fn multi_sigmoid(
    positions: &[f64],
    depths: &[f64],
    widths: &[f64],
    centers: &[f64],
) -> Result<Vec<f64>, Error> {
    check_shape(depths, widths, centers)?;
    Ok(positions
        .iter()
        .map(|&z| {
            depths
                .iter()
                .zip(widths)
                .zip(centers)
                .map(|((&d, &w), &c)| -d * (logistic((z - c) / w) - 1.0))
                .sum()
        })
        .collect())
}

/// Multi-well potential built from hyperbolic tangents.
///
/// Each well contributes `-0.5 * depth * (tanh((z - center) / width) - 1)`,
/// with the same asymptotics as [`multi_sigmoid`] and a sharper shoulder.
pub fn multi_tanh(
    positions: &[f64],
    depths: &[f64],
    widths: &[f64],
    centers: &[f64],
) -> Result<Vec<f64>, Error> {
    check_shape(depths, widths, centers)?;
    Ok(positions
        .iter()
        .map(|&z| {
            depths
                .iter()
                .zip(widths)
                .zip(centers)
                .map(|((&d, &w), &c)| -0.5 * d * (((z - c) / w).tanh() - 1.0))
                .sum()
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_depth_at_the_well_center() {
        let sig = multi_sigmoid(&[1.5], &[4.0], &[0.3], &[1.5]).unwrap();
        assert!((sig[0] - 2.0).abs() < 1e-12);

        let tanh = multi_tanh(&[1.5], &[4.0], &[0.3], &[1.5]).unwrap();
        assert!((tanh[0] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn wells_saturate_at_zero_and_depth() {
        // Far above the center each well vanishes; far below it contributes
        // its full depth.
        type Model = fn(&[f64], &[f64], &[f64], &[f64]) -> Result<Vec<f64>, Error>;
        for f in [multi_sigmoid as Model, multi_tanh as Model] {
            let values = f(&[-1e4, 1e4], &[3.0], &[0.5], &[0.0]).unwrap();
            assert!((values[0] - 3.0).abs() < 1e-9);
            assert!(values[1].abs() < 1e-9);
        }
    }

    #[test]
    fn wells_sum() {
        let depths = [2.0, 6.0];
        let widths = [0.5, 0.5];
        let centers = [-5.0, 5.0];
        // At either center the other well is saturated one way or the
        // other, so the sum is d/2 plus that plateau.
        let values = multi_sigmoid(&[-5.0, 5.0], &depths, &widths, &centers).unwrap();
        assert!((values[0] - (1.0 + 6.0)).abs() < 1e-6);
        assert!((values[1] - 3.0).abs() < 1e-6);
    }

    #[test]
    fn mismatched_parameter_counts_are_rejected() {
        let err = multi_sigmoid(&[0.0], &[1.0, 2.0], &[0.5], &[0.0]).unwrap_err();
        assert!(matches!(
            err,
            Error::ParameterShape {
                depths: 2,
                widths: 1,
                centers: 1
            }
        ));
        assert!(multi_tanh(&[0.0], &[1.0], &[0.5], &[0.0, 1.0]).is_err());
    }
}
