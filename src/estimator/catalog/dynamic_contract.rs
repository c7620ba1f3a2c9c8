use crate::{
    estimator::{Context, Measure, Priority, Recommendation},
    profile::ContractType,
    quantity::{cost::Cost, emissions::Tons},
};

/// Switching to an hourly-priced energy contract and shifting the flexible load.
///
/// No upfront investment, and the emission effect is left unquantified.
#[derive(Copy, Clone, Debug)]
pub struct DynamicContract {
    /// Share of the electricity bill saved when all of the load is shiftable.
    pub base_fraction: f64,

    pub min_yearly_savings: Cost,
    pub high_priority_savings: Cost,
}

impl DynamicContract {
    #[must_use]
    pub fn evaluate(&self, context: &Context) -> Option<Recommendation> {
        if context.profile.contract_type == Some(ContractType::Dynamic) {
            return None;
        }
        let yearly_savings = context.current_costs.electricity
            * self.base_fraction
            * context.sector.peak_load_factor;
        if yearly_savings <= self.min_yearly_savings {
            return None;
        }
        let priority = if yearly_savings > self.high_priority_savings {
            Priority::High
        } else {
            Priority::Medium
        };
        Some(Recommendation::new(
            Measure::DynamicContract,
            yearly_savings,
            Cost::ZERO,
            Tons::ZERO,
            priority,
        ))
    }
}
