#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

pub mod api;
pub mod defaults;
pub mod estimator;
pub mod prelude;
pub mod prices;
pub mod profile;
pub mod quantity;

pub use self::{
    estimator::{SavingsReport, estimate},
    prices::{EnergyPrices, fetch_current_prices},
    profile::BusinessProfile,
};
