// ---------------------------------------------------------------------------
// Sample – one point of the displacement time series
// ---------------------------------------------------------------------------

/// A single trace point, in nanometers.
///
/// Sign convention: `tsd_nm = deflection_nm - z_sensor_nm`. This is the
/// displacement-only form of the tip-sample distance and fixes the sign of
/// every downstream energy.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Row number in the source file; the "time" axis of the series.
    pub index: usize,
    /// Sensor position, converted from meters at load time.
    pub z_sensor_nm: f64,
    /// Cantilever deflection, converted from meters at load time.
    pub deflection_nm: f64,
    /// Tip-sample distance, derived at load time.
    pub tsd_nm: f64,
}

// ---------------------------------------------------------------------------
// ForceCurve – the complete loaded trace
// ---------------------------------------------------------------------------

/// The full trace in file order. The order is semantic: this is a time
/// series, and windowing consumes it from the front.
#[derive(Debug, Clone, Default)]
pub struct ForceCurve {
    pub samples: Vec<Sample>,
}

impl ForceCurve {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the trace holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
