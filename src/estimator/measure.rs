use std::fmt::{Display, Formatter};

use enumset::{EnumSet, enum_set};
use serde::Serialize;

use crate::profile::Preference;

#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Measure {
    LedRetrofit,
    SolarPv,
    HeatPump,
    EnergyManagementSystem,
    SmartThermostat,
    DynamicContract,
}

impl Measure {
    /// Stated priorities the measure serves.
    pub const fn addresses(self) -> EnumSet<Preference> {
        match self {
            Self::LedRetrofit => enum_set!(Preference::Cost | Preference::Sustainability),
            Self::SolarPv => enum_set!(
                Preference::Cost | Preference::Sustainability | Preference::Independence
            ),
            Self::HeatPump => enum_set!(Preference::Sustainability | Preference::Comfort),
            Self::EnergyManagementSystem => enum_set!(Preference::Cost | Preference::Independence),
            Self::SmartThermostat => enum_set!(Preference::Comfort | Preference::Cost),
            Self::DynamicContract => enum_set!(Preference::Cost),
        }
    }
}

impl Display for Measure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LedRetrofit => write!(f, "LED-verlichting"),
            Self::SolarPv => write!(f, "Zonnepanelen"),
            Self::HeatPump => write!(f, "Warmtepomp"),
            Self::EnergyManagementSystem => write!(f, "Energiemanagementsysteem"),
            Self::SmartThermostat => write!(f, "Slimme thermostaat"),
            Self::DynamicContract => write!(f, "Dynamisch energiecontract"),
        }
    }
}
