use crate::{
    estimator::{Context, Measure, Priority, Recommendation},
    profile::{BusinessProfile, Installation},
    quantity::{cost::Cost, energy::KilowattHours, power::KilowattsPeak, rate::KilowattPeakRate},
};

/// Rooftop photovoltaic system.
#[derive(Copy, Clone, Debug)]
pub struct SolarPv {
    pub excluded_by: Installation,

    /// Share of the floor area usable as roof surface for panels.
    pub usable_roof_fraction: f64,

    /// Kilowatt-peak per square meter of usable roof.
    pub capacity_per_square_meter: f64,

    /// Annual kilowatt-hours per kilowatt-peak.
    pub specific_yield: f64,

    /// Share of the production consumed on site, the rest is exported.
    pub self_consumption_fraction: f64,

    pub cost: KilowattPeakRate,
    pub min_capacity: KilowattsPeak,
    pub min_yearly_savings: Cost,
}

#[derive(Copy, Clone, Debug)]
pub struct SolarSizing {
    pub capacity: KilowattsPeak,
    pub production: KilowattHours,
}

impl SolarPv {
    /// Size the system by the roof, but never beyond the annual consumption.
    pub fn size(&self, profile: &BusinessProfile) -> SolarSizing {
        let roof_capacity = KilowattsPeak(
            profile.building_size.0 * self.usable_roof_fraction * self.capacity_per_square_meter,
        );
        let consumption_capacity = KilowattsPeak(profile.electricity_usage.0 / self.specific_yield);
        let capacity = roof_capacity.min(consumption_capacity);
        let production =
            capacity.annual_production(self.specific_yield).min(profile.electricity_usage);
        SolarSizing { capacity, production }
    }

    #[must_use]
    pub fn evaluate(&self, context: &Context) -> Option<Recommendation> {
        if context.profile.has(self.excluded_by) {
            return None;
        }
        let SolarSizing { capacity, production } = self.size(context.profile);
        let self_consumed = production * self.self_consumption_fraction;
        let exported = production - self_consumed;
        let yearly_savings =
            self_consumed * context.prices.electricity + exported * context.prices.feed_in_tariff;
        if capacity <= self.min_capacity || yearly_savings <= self.min_yearly_savings {
            return None;
        }
        Some(Recommendation::new(
            Measure::SolarPv,
            yearly_savings,
            capacity * self.cost,
            production.emissions(),
            Priority::High,
        ))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{
        estimator::Catalog,
        profile::BusinessCategory,
        quantity::{area::SquareMeters, energy::CubicMeters},
    };

    fn profile(building_size: f64, electricity_usage: f64) -> BusinessProfile {
        BusinessProfile::builder()
            .category(BusinessCategory::Warehouse)
            .building_size(SquareMeters(building_size))
            .electricity_usage(KilowattHours(electricity_usage))
            .gas_usage(CubicMeters::ZERO)
            .build()
    }

    #[test]
    fn test_size_by_roof() {
        let sizing = Catalog::DEFAULT.solar_pv.size(&profile(500.0, 100_000.0));
        assert_abs_diff_eq!(sizing.capacity.0, 45.0, epsilon = 1e-9);
        assert_abs_diff_eq!(sizing.production.0, 40_500.0, epsilon = 1e-6);
    }

    #[test]
    fn test_size_by_consumption() {
        let sizing = Catalog::DEFAULT.solar_pv.size(&profile(500.0, 25_000.0));
        assert_abs_diff_eq!(sizing.capacity.0, 27.777_777, epsilon = 1e-6);
        assert_abs_diff_eq!(sizing.production.0, 25_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_production_never_exceeds_consumption() {
        let solar_pv = Catalog::DEFAULT.solar_pv;
        for building_size in [50.0, 250.0, 1_000.0, 7_500.0, 50_000.0] {
            for electricity_usage in [0.0, 1.0, 5_000.0, 33_333.0, 123_457.0, 2_000_000.0] {
                let profile = profile(building_size, electricity_usage);
                assert!(solar_pv.size(&profile).production <= profile.electricity_usage);
            }
        }
    }
}
