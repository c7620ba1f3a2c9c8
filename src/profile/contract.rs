use serde::{Deserialize, Serialize};

#[derive(
    Copy, Clone, Debug, Hash, Eq, PartialEq, clap::ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ContractType {
    /// Price follows the market, adjusted periodically.
    Variable,

    /// Fixed price for the contract period.
    Fixed,

    /// Hourly day-ahead prices.
    Dynamic,
}
