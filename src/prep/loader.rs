use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use super::model::{ForceCurve, Sample};

/// Meters → nanometers; applied to both position columns before the
/// tip-sample distance is derived.
const NM_PER_M: f64 = 1e9;

/// One CSV row as the instrument writes it (SI units, meters). Any other
/// columns are ignored.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "zSensr")]
    z_sensor_m: f64,
    #[serde(rename = "defl")]
    deflection_m: f64,
}

/// Load a force-spectroscopy trace from a CSV file.
///
/// Required columns: `zSensr` and `defl`, both in meters. Rows keep their
/// file order and carry their row number as the time axis.
pub fn load_force_curve(path: &Path) -> Result<ForceCurve> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening CSV {}", path.display()))?;

    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();
    for required in ["zSensr", "defl"] {
        if !headers.iter().any(|h| h == required) {
            bail!("CSV missing '{required}' column");
        }
    }

    let mut samples = Vec::new();
    for (row_no, result) in reader.deserialize::<RawRecord>().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        let z_sensor_nm = record.z_sensor_m * NM_PER_M;
        let deflection_nm = record.deflection_m * NM_PER_M;
        samples.push(Sample {
            index: row_no,
            z_sensor_nm,
            deflection_nm,
            tsd_nm: deflection_nm - z_sensor_nm,
        });
    }

    log::debug!("loaded {} samples from {}", samples.len(), path.display());
    Ok(ForceCurve { samples })
}
