//! Strongly-typed physical and monetary quantities.

#[macro_use]
mod macros;

pub mod area;
pub mod cost;
pub mod emissions;
pub mod energy;
pub mod power;
pub mod rate;
pub mod time;

/// Round to one decimal place, the way the report presents tons and years.
pub(crate) fn round_to_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
