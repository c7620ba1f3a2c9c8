use enumset::EnumSet;
use itertools::Itertools;
use serde::Serialize;

use crate::{
    estimator::recommendation::Recommendation,
    profile::Preference,
    quantity::{cost::Cost, emissions::Tons, time::Years},
};

/// Annual energy bill before any measures.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct CurrentCosts {
    pub electricity: Cost,
    pub gas: Cost,
    pub total: Cost,
}

#[must_use]
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SavingsReport {
    pub current_costs: CurrentCosts,

    /// Annual emissions before any measures.
    pub current_emissions: Tons,

    /// Total over the kept recommendations.
    pub yearly_savings: Cost,

    /// Total over the kept recommendations, rounded to 0.1 ton.
    pub co2_reduction: Tons,

    /// Total investment over total savings, rounded to 0.1 year.
    pub payback_period: Years,

    /// Ordered by the yearly savings, best first.
    pub recommendations: Vec<Recommendation>,

    pub total_investment: Cost,
}

impl SavingsReport {
    pub(super) fn new(
        current_costs: CurrentCosts,
        current_emissions: Tons,
        recommendations: Vec<Recommendation>,
    ) -> Self {
        let yearly_savings: Cost =
            recommendations.iter().map(|recommendation| recommendation.yearly_savings).sum();
        let total_investment: Cost =
            recommendations.iter().map(|recommendation| recommendation.investment).sum();
        let co2_reduction = recommendations
            .iter()
            .map(|recommendation| recommendation.co2_reduction)
            .sum::<Tons>()
            .round_to_tenths();
        let payback_period = if total_investment > Cost::ZERO && yearly_savings > Cost::ZERO {
            Years(total_investment / yearly_savings).round_to_tenths()
        } else {
            Years::ZERO
        };
        Self {
            current_costs,
            current_emissions,
            yearly_savings,
            co2_reduction,
            payback_period,
            recommendations,
            total_investment,
        }
    }

    /// Recommendations serving any of the stated priorities, in report order.
    pub fn addressing(&self, priorities: EnumSet<Preference>) -> Vec<&Recommendation> {
        self.recommendations
            .iter()
            .filter(|recommendation| !recommendation.measure.addresses().is_disjoint(priorities))
            .collect_vec()
    }
}
