use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::{
    estimator::measure::Measure,
    quantity::{cost::Cost, emissions::Tons, time::Years},
};

#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "hoog"),
            Self::Medium => write!(f, "gemiddeld"),
            Self::Low => write!(f, "laag"),
        }
    }
}

#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Recommendation {
    pub measure: Measure,
    pub yearly_savings: Cost,

    /// Zero for measures without an upfront cost.
    pub investment: Cost,

    /// Zero when there is no investment.
    pub payback_years: Years,

    pub co2_reduction: Tons,
    pub priority: Priority,
}

impl Recommendation {
    pub fn new(
        measure: Measure,
        yearly_savings: Cost,
        investment: Cost,
        co2_reduction: Tons,
        priority: Priority,
    ) -> Self {
        let payback_years = if investment > Cost::ZERO && yearly_savings > Cost::ZERO {
            Years(investment / yearly_savings).round_to_tenths()
        } else {
            Years::ZERO
        };
        Self { measure, yearly_savings, investment, payback_years, co2_reduction, priority }
    }
}
