use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Equipment the business already has on site.
#[derive(Debug, Hash, clap::ValueEnum, enumset::EnumSetType, Serialize, Deserialize)]
pub enum Installation {
    /// Rooftop photovoltaic panels.
    #[value(name = "solar")]
    #[serde(rename = "solar")]
    Solar,

    #[value(name = "heatpump")]
    #[serde(rename = "heatpump")]
    HeatPump,

    /// Electric vehicle charging points.
    #[value(name = "charging")]
    #[serde(rename = "charging")]
    EvCharging,

    /// Stationary battery storage.
    #[value(name = "battery")]
    #[serde(rename = "battery")]
    Battery,

    /// Energy management system.
    #[value(name = "ems")]
    #[serde(rename = "ems")]
    EnergyManagementSystem,
}

impl Display for Installation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Solar => write!(f, "Zonnepanelen"),
            Self::HeatPump => write!(f, "Warmtepomp"),
            Self::EvCharging => write!(f, "Laadpalen"),
            Self::Battery => write!(f, "Batterijopslag"),
            Self::EnergyManagementSystem => write!(f, "EMS Systeem"),
        }
    }
}
