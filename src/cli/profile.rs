use std::{fs, path::Path};

use clap::Parser;
use serde::Deserialize;
use spaarwijzer::{
    prelude::*,
    profile::{BusinessCategory, BusinessProfile, ContractType, Installation, Preference},
    quantity::{
        area::SquareMeters,
        energy::{CubicMeters, KilowattHours},
    },
};

/// Business profile as entered on the command line or in a TOML file.
///
/// Unset numbers default to the category defaults.
#[derive(Default, Parser, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileArgs {
    /// Business category.
    #[clap(long, env = "BUSINESS_CATEGORY")]
    pub category: Option<BusinessCategory>,

    /// Floor area, square meters.
    #[clap(long = "building-size", env = "BUILDING_SIZE")]
    pub building_size: Option<SquareMeters>,

    /// Annual electricity consumption, kilowatt-hours.
    #[clap(long = "electricity-usage", env = "ELECTRICITY_USAGE")]
    pub electricity_usage: Option<KilowattHours>,

    /// Annual gas consumption, cubic meters.
    #[clap(long = "gas-usage", env = "GAS_USAGE")]
    pub gas_usage: Option<CubicMeters>,

    /// Installations already on site.
    #[clap(long, env = "INSTALLATIONS", value_delimiter = ',')]
    #[serde(default)]
    pub installations: Vec<Installation>,

    #[clap(long = "contract", env = "CONTRACT_TYPE")]
    #[serde(rename = "contract")]
    pub contract_type: Option<ContractType>,

    /// What matters most to the business.
    #[clap(long, env = "PRIORITIES", value_delimiter = ',')]
    #[serde(default)]
    pub priorities: Vec<Preference>,
}

impl ProfileArgs {
    pub fn read_from(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        toml::from_str(&text).with_context(|| format!("failed to parse `{}`", path.display()))
    }

    /// Take the unset fields from `fallback`.
    pub fn or(self, fallback: Self) -> Self {
        Self {
            category: self.category.or(fallback.category),
            building_size: self.building_size.or(fallback.building_size),
            electricity_usage: self.electricity_usage.or(fallback.electricity_usage),
            gas_usage: self.gas_usage.or(fallback.gas_usage),
            installations: if self.installations.is_empty() {
                fallback.installations
            } else {
                self.installations
            },
            contract_type: self.contract_type.or(fallback.contract_type),
            priorities: if self.priorities.is_empty() {
                fallback.priorities
            } else {
                self.priorities
            },
        }
    }

    /// Build the profile, clamping the numbers into the category ranges.
    pub fn into_profile(self) -> BusinessProfile {
        let defaults = BusinessProfile::for_category(self.category);
        let profile = BusinessProfile {
            building_size: self.building_size.unwrap_or(defaults.building_size),
            electricity_usage: self.electricity_usage.unwrap_or(defaults.electricity_usage),
            gas_usage: self.gas_usage.unwrap_or(defaults.gas_usage),
            existing_installations: self.installations.into_iter().collect(),
            contract_type: self.contract_type,
            priorities: self.priorities.into_iter().collect(),
            ..defaults
        };
        let clamped = profile.clone().clamped();
        if clamped != profile {
            warn!(
                building_size = %clamped.building_size,
                electricity_usage = %clamped.electricity_usage,
                gas_usage = %clamped.gas_usage,
                "clamped the profile into the category ranges",
            );
        }
        clamped
    }
}

#[cfg(test)]
mod tests {
    use enumset::EnumSet;

    use super::*;

    #[test]
    fn test_parse_toml() -> Result {
        let args: ProfileArgs = toml::from_str(
            r#"
                category = "hospitality"
                building_size = 300
                gas_usage = 25000.0
                installations = ["solar", "ems"]
                contract = "dynamic"
                priorities = ["sustainability"]
            "#,
        )?;
        assert_eq!(args.category, Some(BusinessCategory::Hospitality));
        assert_eq!(args.building_size, Some(SquareMeters(300.0)));
        assert_eq!(args.electricity_usage, None);
        assert_eq!(args.installations, [Installation::Solar, Installation::EnergyManagementSystem]);
        assert_eq!(args.contract_type, Some(ContractType::Dynamic));
        Ok(())
    }

    #[test]
    fn test_parse_toml_rejects_unknown_fields() {
        assert!(toml::from_str::<ProfileArgs>("roof_size = 100").is_err());
    }

    #[test]
    fn test_flags_take_precedence() {
        let flags = ProfileArgs {
            gas_usage: Some(CubicMeters(9_000.0)),
            priorities: vec![Preference::Comfort],
            ..ProfileArgs::default()
        };
        let file = ProfileArgs {
            category: Some(BusinessCategory::Office),
            gas_usage: Some(CubicMeters(1_000.0)),
            installations: vec![Installation::Battery],
            priorities: vec![Preference::Cost],
            ..ProfileArgs::default()
        };
        let merged = flags.or(file);
        assert_eq!(merged.category, Some(BusinessCategory::Office));
        assert_eq!(merged.gas_usage, Some(CubicMeters(9_000.0)));
        assert_eq!(merged.installations, [Installation::Battery]);
        assert_eq!(merged.priorities, [Preference::Comfort]);
    }

    #[test]
    fn test_into_profile_uses_category_defaults() {
        let profile = ProfileArgs {
            category: Some(BusinessCategory::Retail),
            electricity_usage: Some(KilowattHours(40_000.0)),
            installations: vec![Installation::Solar, Installation::Solar],
            ..ProfileArgs::default()
        }
        .into_profile();
        assert_eq!(profile.building_size, SquareMeters(250.0));
        assert_eq!(profile.electricity_usage, KilowattHours(40_000.0));
        assert_eq!(profile.gas_usage, CubicMeters(8_000.0));
        assert_eq!(profile.existing_installations, EnumSet::only(Installation::Solar));
    }

    #[test]
    fn test_into_profile_clamps() {
        let profile = ProfileArgs {
            category: Some(BusinessCategory::Office),
            building_size: Some(SquareMeters(10.0)),
            gas_usage: Some(CubicMeters(1e6)),
            ..ProfileArgs::default()
        }
        .into_profile();
        assert_eq!(profile.building_size, SquareMeters(100.0));
        assert_eq!(profile.gas_usage, CubicMeters(50_000.0));
    }
}
