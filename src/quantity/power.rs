use crate::quantity::{cost::Cost, energy::KilowattHours, rate::KilowattPeakRate};

quantity!(
    /// Nameplate photovoltaic capacity.
    KilowattsPeak,
    "kWp"
);

impl KilowattsPeak {
    /// Annual production given the specific yield in kilowatt-hours per kilowatt-peak.
    pub const fn annual_production(self, specific_yield: f64) -> KilowattHours {
        KilowattHours(self.0 * specific_yield)
    }
}

product!(KilowattsPeak, KilowattPeakRate, Cost);
