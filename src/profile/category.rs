use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

#[derive(
    Copy, Clone, Debug, Hash, Eq, PartialEq, clap::ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum BusinessCategory {
    Retail,
    Office,
    Warehouse,
    Production,
    Hospitality,
    Healthcare,
    Other,
}

impl BusinessCategory {
    pub const ALL: [Self; 7] = [
        Self::Retail,
        Self::Office,
        Self::Warehouse,
        Self::Production,
        Self::Hospitality,
        Self::Healthcare,
        Self::Other,
    ];

    /// Parse the wizard key. Unknown and empty keys mean «not categorized».
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim() {
            "retail" => Some(Self::Retail),
            "office" => Some(Self::Office),
            "warehouse" => Some(Self::Warehouse),
            "production" => Some(Self::Production),
            "hospitality" => Some(Self::Hospitality),
            "healthcare" => Some(Self::Healthcare),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Retail => "retail",
            Self::Office => "office",
            Self::Warehouse => "warehouse",
            Self::Production => "production",
            Self::Hospitality => "hospitality",
            Self::Healthcare => "healthcare",
            Self::Other => "other",
        }
    }

    /// Dutch label shown to the visitor.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Retail => "Retail / Winkel",
            Self::Office => "Kantoor",
            Self::Warehouse => "Magazijn / Logistiek",
            Self::Production => "Productie / Industrie",
            Self::Hospitality => "Horeca",
            Self::Healthcare => "Zorg",
            Self::Other => "Anders",
        }
    }
}

impl Display for BusinessCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key_round_trips() {
        for category in BusinessCategory::ALL {
            assert_eq!(BusinessCategory::from_key(category.key()), Some(category));
        }
    }

    #[test]
    fn test_from_unknown_key() {
        assert_eq!(BusinessCategory::from_key(""), None);
        assert_eq!(BusinessCategory::from_key("bakery"), None);
    }
}
