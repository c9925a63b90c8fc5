use std::fmt;

/// A single telemetry sample positioned in geographic space.
#[derive(Clone, Debug, PartialEq)]
pub struct PointFeature {
    pub longitude: f64,
    pub latitude: f64,
    pub signal_strength: f64,
    pub altitude: f64,
    /// Recording time, kept verbatim from the source document.
    pub timestamp: String,
    pub frequency: f64,
    /// Compass bearing in degrees, clockwise from true north.
    pub bearing_degrees: f64,
}

impl PointFeature {
    /// Detail view shown when the feature is selected.
    pub fn details(&self) -> FeatureDetails<'_> {
        FeatureDetails { feature: self }
    }

    /// One-line summary used for hover tooltips.
    pub fn tooltip(&self) -> String {
        format!(
            "{} | Signal {} | Bearing {}°",
            self.timestamp, self.signal_strength, self.bearing_degrees
        )
    }
}

/// Multi-line, human-readable rendering of a [`PointFeature`].
pub struct FeatureDetails<'a> {
    feature: &'a PointFeature,
}

impl fmt::Display for FeatureDetails<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.feature;
        writeln!(f, "Location: {}, {}", p.latitude, p.longitude)?;
        writeln!(f, "Signal Strength: {}", p.signal_strength)?;
        writeln!(f, "Altitude: {}", p.altitude)?;
        writeln!(f, "Date & Time: {}", p.timestamp)?;
        writeln!(f, "Frequency: {}", p.frequency)?;
        write!(f, "TN Bearing: {}°", p.bearing_degrees)
    }
}
