use crate::{
    estimator::{Context, Measure, Priority, Recommendation},
    profile::Installation,
    quantity::{cost::Cost, energy::CubicMeters},
};

#[derive(Copy, Clone, Debug)]
pub struct SmartThermostat {
    pub min_gas_usage: CubicMeters,
    pub heating_share: f64,

    /// Share of the heating cost saved.
    pub savings_fraction: f64,

    pub investment: Cost,
    pub min_yearly_savings: Cost,
}

impl SmartThermostat {
    /// Moot once there is a heat pump, installed or recommended.
    #[must_use]
    pub fn evaluate(
        &self,
        context: &Context,
        is_heat_pump_recommended: bool,
    ) -> Option<Recommendation> {
        let profile = context.profile;
        if is_heat_pump_recommended
            || profile.has(Installation::HeatPump)
            || profile.gas_usage <= self.min_gas_usage
        {
            return None;
        }
        let heating_gas = profile.gas_usage * self.heating_share;
        let yearly_savings = heating_gas * context.prices.gas * self.savings_fraction;
        if yearly_savings <= self.min_yearly_savings {
            return None;
        }
        Some(Recommendation::new(
            Measure::SmartThermostat,
            yearly_savings,
            self.investment,
            (heating_gas * self.savings_fraction).emissions(),
            Priority::Low,
        ))
    }
}
