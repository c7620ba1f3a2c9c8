pub mod client;
pub mod energy_zero;
