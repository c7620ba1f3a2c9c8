use crate::quantity::energy::{CubicMeters, KilowattHours};

quantity!(
    /// Metric tons of CO₂.
    Tons,
    "t CO₂"
);

impl Tons {
    pub const fn from_kilograms(kilograms: f64) -> Self {
        Self(kilograms / 1000.0)
    }

    pub fn round_to_tenths(self) -> Self {
        Self(super::round_to_tenths(self.0))
    }
}

/// Grid electricity emission factor, kilograms CO₂ per kilowatt-hour.
pub const ELECTRICITY_KILOGRAMS_PER_KILOWATT_HOUR: f64 = 0.4;

/// Natural gas emission factor, kilograms CO₂ per cubic meter.
pub const GAS_KILOGRAMS_PER_CUBIC_METER: f64 = 1.8;

impl KilowattHours {
    pub const fn emissions(self) -> Tons {
        Tons::from_kilograms(self.0 * ELECTRICITY_KILOGRAMS_PER_KILOWATT_HOUR)
    }
}

impl CubicMeters {
    pub const fn emissions(self) -> Tons {
        Tons::from_kilograms(self.0 * GAS_KILOGRAMS_PER_CUBIC_METER)
    }
}
