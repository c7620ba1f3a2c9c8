use crate::{
    estimator::{Context, Measure, Priority, Recommendation},
    profile::Installation,
    quantity::{cost::Cost, emissions::Tons, energy::CubicMeters, rate::SquareMeterRate},
};

/// Replacing the gas boiler with an electric heat pump.
#[derive(Copy, Clone, Debug)]
pub struct HeatPump {
    pub excluded_by: Installation,

    /// Below this consumption a heat pump does not pay off.
    pub min_gas_usage: CubicMeters,

    pub heating_share: f64,

    /// Share of the heating gas replaced.
    pub savings_fraction: f64,

    pub coefficient_of_performance: f64,
    pub base_cost: Cost,

    /// Per floor area, on top of the base cost.
    pub cost: SquareMeterRate,

    pub min_yearly_savings: Cost,
    pub high_priority_reduction: Tons,
}

impl HeatPump {
    #[must_use]
    pub fn evaluate(&self, context: &Context) -> Option<Recommendation> {
        let profile = context.profile;
        if profile.has(self.excluded_by) || profile.gas_usage <= self.min_gas_usage {
            return None;
        }
        let saved_gas = profile.gas_usage * self.heating_share * self.savings_fraction;
        let extra_electricity = saved_gas.thermal_energy() / self.coefficient_of_performance;
        let yearly_savings =
            saved_gas * context.prices.gas - extra_electricity * context.prices.electricity;
        if yearly_savings <= self.min_yearly_savings {
            return None;
        }
        let co2_reduction = saved_gas.emissions() - extra_electricity.emissions();
        let priority = if co2_reduction > self.high_priority_reduction {
            Priority::High
        } else {
            Priority::Medium
        };
        Some(Recommendation::new(
            Measure::HeatPump,
            yearly_savings,
            self.base_cost + profile.building_size * self.cost,
            co2_reduction,
            priority,
        ))
    }
}
