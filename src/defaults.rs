//! Per-category input ranges and sector energy-use profiles.

use crate::{
    profile::BusinessCategory,
    quantity::{
        area::SquareMeters,
        energy::{CubicMeters, KilowattHours},
    },
};

#[derive(Copy, Clone, Debug)]
pub struct Range<T> {
    pub min: T,
    pub max: T,
    pub default: T,

    /// Input granularity for sliders and prompts.
    pub step: T,
}

impl<T: Copy + Ord> Range<T> {
    pub fn clamp(&self, value: T) -> T {
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }
}

/// How a sector splits its electricity use, and how much of it may move to cheaper hours.
#[derive(Copy, Clone, Debug)]
pub struct SectorProfile {
    pub lighting: f64,
    pub cooling: f64,
    pub heating: f64,
    pub equipment: f64,

    /// Share of the consumption that can shift to off-peak hours, in `[0, 1]`.
    pub peak_load_factor: f64,
}

#[derive(Copy, Clone, Debug)]
pub struct CategoryDefaults {
    pub building_size: Range<SquareMeters>,
    pub electricity_usage: Range<KilowattHours>,
    pub gas_usage: Range<CubicMeters>,
    pub sector: SectorProfile,
}

impl CategoryDefaults {
    /// Defaults for the category, or the generic ones when there is no category.
    #[must_use]
    pub fn of(category: Option<BusinessCategory>) -> &'static Self {
        match category {
            None => &UNCATEGORIZED,
            Some(BusinessCategory::Retail) => &RETAIL,
            Some(BusinessCategory::Office) => &OFFICE,
            Some(BusinessCategory::Warehouse) => &WAREHOUSE,
            Some(BusinessCategory::Production) => &PRODUCTION,
            Some(BusinessCategory::Hospitality) => &HOSPITALITY,
            Some(BusinessCategory::Healthcare) => &HEALTHCARE,
            Some(BusinessCategory::Other) => &OTHER,
        }
    }

    /// Look up by the wizard key, falling back to the generic defaults.
    #[must_use]
    pub fn lookup(key: &str) -> &'static Self {
        Self::of(BusinessCategory::from_key(key))
    }
}

const fn ranges(
    building_size: [f64; 4],
    electricity_usage: [f64; 4],
    gas_usage: [f64; 4],
    sector: SectorProfile,
) -> CategoryDefaults {
    let [min, max, default, step] = building_size;
    let building_size = Range {
        min: SquareMeters(min),
        max: SquareMeters(max),
        default: SquareMeters(default),
        step: SquareMeters(step),
    };
    let [min, max, default, step] = electricity_usage;
    let electricity_usage = Range {
        min: KilowattHours(min),
        max: KilowattHours(max),
        default: KilowattHours(default),
        step: KilowattHours(step),
    };
    let [min, max, default, step] = gas_usage;
    let gas_usage = Range {
        min: CubicMeters(min),
        max: CubicMeters(max),
        default: CubicMeters(default),
        step: CubicMeters(step),
    };
    CategoryDefaults { building_size, electricity_usage, gas_usage, sector }
}

const GENERIC_SECTOR: SectorProfile = SectorProfile {
    lighting: 0.25,
    cooling: 0.20,
    heating: 0.10,
    equipment: 0.45,
    peak_load_factor: 0.5,
};

const UNCATEGORIZED: CategoryDefaults = ranges(
    [50.0, 5_000.0, 500.0, 50.0],
    [5_000.0, 500_000.0, 50_000.0, 5_000.0],
    [0.0, 100_000.0, 15_000.0, 1_000.0],
    GENERIC_SECTOR,
);

const RETAIL: CategoryDefaults = ranges(
    [50.0, 2_000.0, 250.0, 25.0],
    [5_000.0, 150_000.0, 35_000.0, 2_500.0],
    [0.0, 30_000.0, 8_000.0, 500.0],
    SectorProfile {
        lighting: 0.35,
        cooling: 0.20,
        heating: 0.10,
        equipment: 0.35,
        peak_load_factor: 0.5,
    },
);

const OFFICE: CategoryDefaults = ranges(
    [100.0, 5_000.0, 500.0, 50.0],
    [10_000.0, 300_000.0, 60_000.0, 5_000.0],
    [0.0, 50_000.0, 12_000.0, 1_000.0],
    SectorProfile {
        lighting: 0.30,
        cooling: 0.25,
        heating: 0.10,
        equipment: 0.35,
        peak_load_factor: 0.4,
    },
);

const WAREHOUSE: CategoryDefaults = ranges(
    [500.0, 25_000.0, 3_000.0, 250.0],
    [25_000.0, 750_000.0, 150_000.0, 10_000.0],
    [0.0, 150_000.0, 40_000.0, 2_500.0],
    SectorProfile {
        lighting: 0.45,
        cooling: 0.10,
        heating: 0.10,
        equipment: 0.35,
        peak_load_factor: 0.6,
    },
);

const PRODUCTION: CategoryDefaults = ranges(
    [1_000.0, 50_000.0, 5_000.0, 500.0],
    [100_000.0, 2_000_000.0, 500_000.0, 25_000.0],
    [10_000.0, 500_000.0, 100_000.0, 5_000.0],
    SectorProfile {
        lighting: 0.15,
        cooling: 0.10,
        heating: 0.05,
        equipment: 0.70,
        peak_load_factor: 0.7,
    },
);

const HOSPITALITY: CategoryDefaults = ranges(
    [50.0, 1_500.0, 200.0, 25.0],
    [10_000.0, 200_000.0, 45_000.0, 2_500.0],
    [5_000.0, 75_000.0, 20_000.0, 1_000.0],
    SectorProfile {
        lighting: 0.20,
        cooling: 0.25,
        heating: 0.15,
        equipment: 0.40,
        peak_load_factor: 0.3,
    },
);

const HEALTHCARE: CategoryDefaults = ranges(
    [200.0, 15_000.0, 1_500.0, 100.0],
    [50_000.0, 1_000_000.0, 200_000.0, 10_000.0],
    [10_000.0, 200_000.0, 50_000.0, 2_500.0],
    SectorProfile {
        lighting: 0.25,
        cooling: 0.25,
        heating: 0.15,
        equipment: 0.35,
        peak_load_factor: 0.3,
    },
);

/// Same as the generic defaults, but for larger buildings.
const OTHER: CategoryDefaults = ranges(
    [50.0, 10_000.0, 500.0, 50.0],
    [5_000.0, 500_000.0, 50_000.0, 5_000.0],
    [0.0, 100_000.0, 15_000.0, 1_000.0],
    GENERIC_SECTOR,
);
