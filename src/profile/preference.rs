use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// What the visitor says matters most to them.
#[derive(Debug, Hash, clap::ValueEnum, enumset::EnumSetType, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preference {
    /// Lower energy bill.
    Cost,

    /// Smaller carbon footprint.
    Sustainability,

    /// Generating energy on site.
    Independence,

    /// Indoor climate.
    Comfort,
}

impl Display for Preference {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cost => write!(f, "Kostenbesparing"),
            Self::Sustainability => write!(f, "Duurzaamheid"),
            Self::Independence => write!(f, "Onafhankelijkheid"),
            Self::Comfort => write!(f, "Comfort"),
        }
    }
}
