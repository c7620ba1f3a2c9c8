use crate::{
    estimator::{Context, Measure, Priority, Recommendation},
    profile::Installation,
    quantity::{cost::Cost, rate::SquareMeterRate},
};

/// Monitoring and automated control of the building installations.
#[derive(Copy, Clone, Debug)]
pub struct EnergyManagementSystem {
    pub excluded_by: Installation,

    /// Minimal annual energy bill to consider the system.
    pub min_current_cost: Cost,

    /// Share of the whole energy bill saved.
    pub savings_fraction: f64,

    pub base_cost: Cost,
    pub cost: SquareMeterRate,
    pub high_priority_current_cost: Cost,
}

impl EnergyManagementSystem {
    #[must_use]
    pub fn evaluate(&self, context: &Context) -> Option<Recommendation> {
        let current_cost = context.current_costs.total;
        if context.profile.has(self.excluded_by) || current_cost <= self.min_current_cost {
            return None;
        }
        let priority = if current_cost > self.high_priority_current_cost {
            Priority::High
        } else {
            Priority::Medium
        };
        Some(Recommendation::new(
            Measure::EnergyManagementSystem,
            current_cost * self.savings_fraction,
            self.base_cost + context.profile.building_size * self.cost,
            context.current_emissions * self.savings_fraction,
            priority,
        ))
    }
}
