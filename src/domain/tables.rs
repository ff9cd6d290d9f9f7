use serde::{Deserialize, Serialize};

/// Acquisition and per-event prices, in dollars per unit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostTable {
    pub screen_unit: f64,
    pub textile_unit: f64,
    pub disposable_unit: f64,
    pub textile_cleaning: f64,
    pub screen_cleaning: f64,
    /// Disposables are never cleaned; each cycle buys a new curtain.
    pub disposable_replacement: f64,
    /// Useful life of the screen product. Break-even beyond it is shown as overflow.
    pub screen_lifespan_years: f64,
}

impl Default for CostTable {
    fn default() -> Self {
        Self {
            screen_unit: 1310.0,
            textile_unit: 800.0,
            disposable_unit: 700.0,
            textile_cleaning: 48.0,
            screen_cleaning: 5.0,
            disposable_replacement: 700.0,
            screen_lifespan_years: 10.0,
        }
    }
}

/// Wipes consumed per screen cleaning, either counted or weighed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", content = "per_cleaning", rename_all = "lowercase")]
pub enum WipeRate {
    Count(f64),
    Kilograms(f64),
}

impl WipeRate {
    pub fn per_cleaning(&self) -> f64 {
        match self {
            WipeRate::Count(value) | WipeRate::Kilograms(value) => *value,
        }
    }

    pub fn unit(&self) -> WipeUnit {
        match self {
            WipeRate::Count(_) => WipeUnit::Wipes,
            WipeRate::Kilograms(_) => WipeUnit::Kilograms,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WipeUnit {
    Wipes,
    Kilograms,
}

impl WipeUnit {
    pub fn label(&self) -> &'static str {
        match self {
            WipeUnit::Wipes => "wipes",
            WipeUnit::Kilograms => "kg",
        }
    }
}

/// Consumption per unit and cleaning (or replacement) event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceTable {
    pub textile_energy_kwh: f64,
    pub textile_water_liters: f64,
    pub disposable_plastic_kg: f64,
    pub screen_disinfectant_liters: f64,
    pub screen_wipes: WipeRate,
}

impl ResourceTable {
    /// Energy and water per screen cleaning. Screens are wiped, not laundered.
    pub const SCREEN_ENERGY_KWH: f64 = 0.0;
    pub const SCREEN_WATER_LITERS: f64 = 0.0;

    /// One wipe per screen cleaning.
    pub fn wipe_count() -> Self {
        Self {
            textile_energy_kwh: 1.8,
            textile_water_liters: 45.0,
            disposable_plastic_kg: 0.35,
            screen_disinfectant_liters: 0.05,
            screen_wipes: WipeRate::Count(1.0),
        }
    }

    /// Wipes weighed at 15 g per screen cleaning.
    pub fn wipe_mass() -> Self {
        Self {
            screen_wipes: WipeRate::Kilograms(0.015),
            ..Self::wipe_count()
        }
    }
}

impl Default for ResourceTable {
    fn default() -> Self {
        Self::wipe_count()
    }
}

/// Both tables as one configuration unit.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tables {
    pub costs: CostTable,
    pub resources: ResourceTable,
}
