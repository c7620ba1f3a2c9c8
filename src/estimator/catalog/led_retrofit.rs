use crate::{
    estimator::{Context, Measure, Priority, Recommendation},
    quantity::{cost::Cost, rate::SquareMeterRate},
};

/// Replacing the existing lighting with LED fixtures.
///
/// There is no «LED» installation tag, so the retrofit is always considered.
#[derive(Copy, Clone, Debug)]
pub struct LedRetrofit {
    /// Share of the lighting consumption saved.
    pub savings_fraction: f64,

    /// Per floor area.
    pub cost: SquareMeterRate,

    pub min_yearly_savings: Cost,
    pub high_priority_savings: Cost,
}

impl LedRetrofit {
    #[must_use]
    pub fn evaluate(&self, context: &Context) -> Option<Recommendation> {
        let lighting_usage = context.profile.electricity_usage * context.sector.lighting;
        let saved_energy = lighting_usage * self.savings_fraction;
        let yearly_savings = saved_energy * context.prices.electricity;
        if yearly_savings <= self.min_yearly_savings {
            return None;
        }
        let priority = if yearly_savings > self.high_priority_savings {
            Priority::High
        } else {
            Priority::Medium
        };
        Some(Recommendation::new(
            Measure::LedRetrofit,
            yearly_savings,
            context.profile.building_size * self.cost,
            saved_energy.emissions(),
            priority,
        ))
    }
}
