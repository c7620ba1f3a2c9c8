use crate::quantity::{
    cost::Cost,
    rate::{CubicMeterRate, KilowattHourRate},
};

quantity!(
    /// Electrical energy.
    KilowattHours,
    "kWh"
);

quantity!(
    /// Natural gas volume.
    CubicMeters,
    "m³"
);

impl CubicMeters {
    /// Thermal energy content of one cubic meter of Groningen-quality gas.
    pub const KILOWATT_HOURS_PER_CUBIC_METER: f64 = 9.77;

    pub const fn thermal_energy(self) -> KilowattHours {
        KilowattHours(self.0 * Self::KILOWATT_HOURS_PER_CUBIC_METER)
    }
}

product!(KilowattHours, KilowattHourRate, Cost);
product!(CubicMeters, CubicMeterRate, Cost);
