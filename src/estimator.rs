//! Turns a business profile and current prices into ranked efficiency measures.

pub mod catalog;
mod measure;
mod recommendation;
mod report;

use std::cmp::Reverse;

use itertools::Itertools;

pub use self::{
    catalog::Catalog,
    measure::Measure,
    recommendation::{Priority, Recommendation},
    report::{CurrentCosts, SavingsReport},
};
use crate::{
    defaults::SectorProfile,
    prelude::*,
    prices::EnergyPrices,
    profile::BusinessProfile,
    quantity::emissions::Tons,
};

/// Only the best measures make it into the report.
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Everything a measure needs to evaluate itself.
pub struct Context<'a> {
    pub profile: &'a BusinessProfile,
    pub prices: &'a EnergyPrices,
    pub sector: &'static SectorProfile,
    pub current_costs: CurrentCosts,
    pub current_emissions: Tons,
}

impl<'a> Context<'a> {
    pub fn new(profile: &'a BusinessProfile, prices: &'a EnergyPrices) -> Self {
        let electricity = profile.electricity_usage * prices.electricity;
        let gas = profile.gas_usage * prices.gas;
        Self {
            profile,
            prices,
            sector: &profile.defaults().sector,
            current_costs: CurrentCosts { electricity, gas, total: electricity + gas },
            current_emissions: profile.electricity_usage.emissions()
                + profile.gas_usage.emissions(),
        }
    }
}

/// Estimate the savings with the default measure catalog.
pub fn estimate(profile: &BusinessProfile, prices: &EnergyPrices) -> SavingsReport {
    Catalog::DEFAULT.estimate(profile, prices)
}

impl Catalog {
    #[instrument(skip_all, fields(category = ?profile.category))]
    pub fn estimate(&self, profile: &BusinessProfile, prices: &EnergyPrices) -> SavingsReport {
        let context = Context::new(profile, prices);
        let candidates = self.candidates(&context);
        debug!(n_candidates = candidates.len(), "evaluated the measures");
        let recommendations = candidates
            .into_iter()
            .sorted_by_key(|recommendation| Reverse(recommendation.yearly_savings))
            .take(MAX_RECOMMENDATIONS)
            .collect_vec();
        SavingsReport::new(context.current_costs, context.current_emissions, recommendations)
    }

    /// All applicable measures that clear their materiality thresholds, unranked.
    pub fn candidates(&self, context: &Context) -> Vec<Recommendation> {
        let heat_pump = self.heat_pump.evaluate(context);
        let smart_thermostat = self.smart_thermostat.evaluate(context, heat_pump.is_some());
        [
            self.led_retrofit.evaluate(context),
            self.solar_pv.evaluate(context),
            heat_pump,
            self.energy_management_system.evaluate(context),
            smart_thermostat,
            self.dynamic_contract.evaluate(context),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}
