use super::{
    params::{MaterialType, Parameters},
    tables::{ResourceTable, WipeUnit},
};

/// Annual consumption of both options. Bulk amounts are whole numbers,
/// consumables carry two decimals.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ResourceResult {
    Textile {
        curtain_energy: f64,
        curtain_water: f64,
        screen_disinfectant: f64,
        screen_wipes: f64,
        saved_energy: f64,
        saved_water: f64,
        wipe_unit: WipeUnit,
    },
    Disposable {
        plastic_waste: f64,
        screen_disinfectant: f64,
        screen_wipes: f64,
        saved_plastic: f64,
        wipe_unit: WipeUnit,
    },
}

impl ResourceResult {
    pub fn material(&self) -> MaterialType {
        match self {
            ResourceResult::Textile { .. } => MaterialType::Textile,
            ResourceResult::Disposable { .. } => MaterialType::Disposable,
        }
    }

    /// `(disinfectant liters, wipes)` used by the screens, whatever the alternative.
    pub fn screen_consumables(&self) -> (f64, f64) {
        match *self {
            ResourceResult::Textile {
                screen_disinfectant,
                screen_wipes,
                ..
            }
            | ResourceResult::Disposable {
                screen_disinfectant,
                screen_wipes,
                ..
            } => (screen_disinfectant, screen_wipes),
        }
    }

    pub fn wipe_unit(&self) -> WipeUnit {
        match *self {
            ResourceResult::Textile { wipe_unit, .. }
            | ResourceResult::Disposable { wipe_unit, .. } => wipe_unit,
        }
    }
}

/// Returns `None` when the quantity is not positive.
pub fn compute_resources(params: &Parameters, table: &ResourceTable) -> Option<ResourceResult> {
    if !params.is_valid() {
        return None;
    }

    let events = params.unit_events_per_year();
    let screen_disinfectant = round_to(events * table.screen_disinfectant_liters, 2);
    let screen_wipes = round_to(events * table.screen_wipes.per_cleaning(), 2);
    let wipe_unit = table.screen_wipes.unit();

    let result = match params.material {
        MaterialType::Textile => {
            let curtain_energy = events * table.textile_energy_kwh;
            let curtain_water = events * table.textile_water_liters;
            let screen_energy = events * ResourceTable::SCREEN_ENERGY_KWH;
            let screen_water = events * ResourceTable::SCREEN_WATER_LITERS;
            ResourceResult::Textile {
                curtain_energy: curtain_energy.round(),
                curtain_water: curtain_water.round(),
                screen_disinfectant,
                screen_wipes,
                saved_energy: (curtain_energy - screen_energy).round(),
                saved_water: (curtain_water - screen_water).round(),
                wipe_unit,
            }
        }
        MaterialType::Disposable => {
            // Screens produce no plastic waste, so every replaced curtain is saved.
            let plastic_waste = (events * table.disposable_plastic_kg).round();
            ResourceResult::Disposable {
                plastic_waste,
                screen_disinfectant,
                screen_wipes,
                saved_plastic: plastic_waste,
                wipe_unit,
            }
        }
    };

    Some(result)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::params::CleaningFrequency;

    #[test]
    fn textile_totals_scale_with_quantity_and_frequency() {
        let params = Parameters::new(MaterialType::Textile, CleaningFrequency::Quarterly, 100);
        let result = compute_resources(&params, &ResourceTable::default());

        assert_eq!(
            result,
            Some(ResourceResult::Textile {
                curtain_energy: 720.0,
                curtain_water: 18_000.0,
                screen_disinfectant: 20.0,
                screen_wipes: 400.0,
                saved_energy: 720.0,
                saved_water: 18_000.0,
                wipe_unit: WipeUnit::Wipes,
            })
        );
    }

    #[test]
    fn disposable_saves_all_plastic() {
        let params = Parameters::new(MaterialType::Disposable, CleaningFrequency::Weekly, 50);
        let Some(ResourceResult::Disposable {
            plastic_waste,
            saved_plastic,
            ..
        }) = compute_resources(&params, &ResourceTable::default())
        else {
            panic!("expected a disposable result");
        };

        assert_eq!(plastic_waste, 910.0);
        assert_eq!(saved_plastic, plastic_waste);
    }

    #[test]
    fn wipe_mass_preset_keeps_two_decimals() {
        let params = Parameters::new(MaterialType::Textile, CleaningFrequency::Monthly, 7);
        let result = compute_resources(&params, &ResourceTable::wipe_mass()).unwrap();

        assert_eq!(result.screen_consumables(), (4.2, 1.26));
        assert_eq!(result.wipe_unit(), WipeUnit::Kilograms);
    }

    #[test]
    fn non_positive_quantity_has_no_data() {
        for quantity in [0, -4] {
            let params = Parameters::new(MaterialType::Disposable, CleaningFrequency::Daily, quantity);
            assert_eq!(compute_resources(&params, &ResourceTable::default()), None);
        }
    }

    #[test]
    fn rounding_helper() {
        assert_eq!(round_to(1.235_1, 2), 1.24);
        assert_eq!(round_to(0.004, 2), 0.0);
    }
}
