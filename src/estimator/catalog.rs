//! Coefficients behind each efficiency measure.

mod dynamic_contract;
mod energy_management_system;
mod heat_pump;
mod led_retrofit;
mod smart_thermostat;
mod solar_pv;

pub use self::{
    dynamic_contract::DynamicContract,
    energy_management_system::EnergyManagementSystem,
    heat_pump::HeatPump,
    led_retrofit::LedRetrofit,
    smart_thermostat::SmartThermostat,
    solar_pv::{SolarPv, SolarSizing},
};
use crate::{
    profile::Installation,
    quantity::{
        cost::Cost,
        emissions::Tons,
        energy::CubicMeters,
        power::KilowattsPeak,
        rate::{KilowattPeakRate, SquareMeterRate},
    },
};

/// Share of the gas consumption that goes into space heating.
const GAS_HEATING_SHARE: f64 = 0.85;

#[derive(Copy, Clone, Debug)]
pub struct Catalog {
    pub led_retrofit: LedRetrofit,
    pub solar_pv: SolarPv,
    pub heat_pump: HeatPump,
    pub energy_management_system: EnergyManagementSystem,
    pub smart_thermostat: SmartThermostat,
    pub dynamic_contract: DynamicContract,
}

impl Catalog {
    pub const DEFAULT: Self = Self {
        led_retrofit: LedRetrofit {
            savings_fraction: 0.60,
            cost: SquareMeterRate(12.0),
            min_yearly_savings: Cost(200.0),
            high_priority_savings: Cost(1000.0),
        },
        solar_pv: SolarPv {
            excluded_by: Installation::Solar,
            usable_roof_fraction: 0.6,
            capacity_per_square_meter: 0.15,
            specific_yield: 900.0,
            self_consumption_fraction: 0.7,
            cost: KilowattPeakRate(1000.0),
            min_capacity: KilowattsPeak(5.0),
            min_yearly_savings: Cost(500.0),
        },
        heat_pump: HeatPump {
            excluded_by: Installation::HeatPump,
            min_gas_usage: CubicMeters(2000.0),
            heating_share: GAS_HEATING_SHARE,
            savings_fraction: 0.85,
            coefficient_of_performance: 4.0,
            base_cost: Cost(15_000.0),
            cost: SquareMeterRate(30.0),
            min_yearly_savings: Cost(500.0),
            high_priority_reduction: Tons(5.0),
        },
        energy_management_system: EnergyManagementSystem {
            excluded_by: Installation::EnergyManagementSystem,
            min_current_cost: Cost(10_000.0),
            savings_fraction: 0.12,
            base_cost: Cost(3000.0),
            cost: SquareMeterRate(5.0),
            high_priority_current_cost: Cost(25_000.0),
        },
        smart_thermostat: SmartThermostat {
            min_gas_usage: CubicMeters(1000.0),
            heating_share: GAS_HEATING_SHARE,
            savings_fraction: 0.12,
            investment: Cost(500.0),
            min_yearly_savings: Cost(100.0),
        },
        dynamic_contract: DynamicContract {
            base_fraction: 0.15,
            min_yearly_savings: Cost(200.0),
            high_priority_savings: Cost(1000.0),
        },
    };
}

impl Default for Catalog {
    fn default() -> Self {
        Self::DEFAULT
    }
}
