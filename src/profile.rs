//! The business being assessed.

mod category;
mod contract;
mod installation;
mod preference;

use bon::Builder;
use enumset::EnumSet;

pub use self::{
    category::BusinessCategory,
    contract::ContractType,
    installation::Installation,
    preference::Preference,
};
use crate::{
    defaults::CategoryDefaults,
    quantity::{
        area::SquareMeters,
        energy::{CubicMeters, KilowattHours},
    },
};

#[must_use]
#[derive(Clone, Debug, PartialEq, Eq, Builder)]
pub struct BusinessProfile {
    /// `None` until the visitor picks a category.
    pub category: Option<BusinessCategory>,

    pub building_size: SquareMeters,

    /// Annual electricity consumption.
    pub electricity_usage: KilowattHours,

    /// Annual gas consumption.
    pub gas_usage: CubicMeters,

    #[builder(default)]
    pub existing_installations: EnumSet<Installation>,

    pub contract_type: Option<ContractType>,

    #[builder(default)]
    pub priorities: EnumSet<Preference>,
}

impl BusinessProfile {
    /// Profile pre-populated with the category defaults.
    pub fn for_category(category: Option<BusinessCategory>) -> Self {
        let defaults = CategoryDefaults::of(category);
        Self {
            category,
            building_size: defaults.building_size.default,
            electricity_usage: defaults.electricity_usage.default,
            gas_usage: defaults.gas_usage.default,
            existing_installations: EnumSet::empty(),
            contract_type: None,
            priorities: EnumSet::empty(),
        }
    }

    /// Switch the category, resetting the numeric fields to the new category defaults.
    pub fn with_category(self, category: Option<BusinessCategory>) -> Self {
        Self {
            existing_installations: self.existing_installations,
            contract_type: self.contract_type,
            priorities: self.priorities,
            ..Self::for_category(category)
        }
    }

    /// Clamp the numeric fields into the category ranges.
    pub fn clamped(self) -> Self {
        let defaults = self.defaults();
        Self {
            building_size: defaults.building_size.clamp(self.building_size),
            electricity_usage: defaults.electricity_usage.clamp(self.electricity_usage),
            gas_usage: defaults.gas_usage.clamp(self.gas_usage),
            ..self
        }
    }

    pub fn defaults(&self) -> &'static CategoryDefaults {
        CategoryDefaults::of(self.category)
    }

    #[must_use]
    pub fn has(&self, installation: Installation) -> bool {
        self.existing_installations.contains(installation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_category() {
        let profile = BusinessProfile::for_category(Some(BusinessCategory::Warehouse));
        assert_eq!(profile.building_size, SquareMeters(3000.0));
        assert_eq!(profile.electricity_usage, KilowattHours(150_000.0));
        assert_eq!(profile.gas_usage, CubicMeters(40_000.0));
        assert!(profile.existing_installations.is_empty());
    }

    #[test]
    fn test_for_no_category() {
        let profile = BusinessProfile::for_category(None);
        assert_eq!(profile.building_size, SquareMeters(500.0));
        assert_eq!(profile.electricity_usage, KilowattHours(50_000.0));
        assert_eq!(profile.gas_usage, CubicMeters(15_000.0));
    }

    #[test]
    fn test_with_category_resets_numbers_and_keeps_tags() {
        let profile = BusinessProfile::builder()
            .category(BusinessCategory::Office)
            .building_size(SquareMeters(750.0))
            .electricity_usage(KilowattHours(80_000.0))
            .gas_usage(CubicMeters(9_000.0))
            .existing_installations(Installation::Solar | Installation::Battery)
            .contract_type(ContractType::Fixed)
            .priorities(EnumSet::only(Preference::Comfort))
            .build()
            .with_category(Some(BusinessCategory::Retail));
        assert_eq!(profile.category, Some(BusinessCategory::Retail));
        assert_eq!(profile.building_size, SquareMeters(250.0));
        assert_eq!(profile.electricity_usage, KilowattHours(35_000.0));
        assert_eq!(profile.gas_usage, CubicMeters(8_000.0));
        assert_eq!(profile.existing_installations, Installation::Solar | Installation::Battery);
        assert_eq!(profile.contract_type, Some(ContractType::Fixed));
        assert!(profile.priorities.contains(Preference::Comfort));
    }

    #[test]
    fn test_clamped() {
        let profile = BusinessProfile::builder()
            .category(BusinessCategory::Hospitality)
            .building_size(SquareMeters(10.0))
            .electricity_usage(KilowattHours(1_000_000.0))
            .gas_usage(CubicMeters(20_000.0))
            .build()
            .clamped();
        assert_eq!(profile.building_size, SquareMeters(50.0));
        assert_eq!(profile.electricity_usage, KilowattHours(200_000.0));
        assert_eq!(profile.gas_usage, CubicMeters(20_000.0));
    }
}
