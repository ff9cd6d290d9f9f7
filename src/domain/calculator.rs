use super::{
    duration::{format_break_even, DisplayDuration},
    economics::{compute_break_even, EconomicsResult},
    params::{CleaningFrequency, MaterialType, Parameters},
    proportion::{cost_chart, resource_chart, CostChart, ResourceBars},
    resources::{compute_resources, ResourceResult},
    tables::{Tables, WipeRate},
};

/// The current selection plus the tables it is evaluated against.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CalculatorState {
    params: Parameters,
    pub tables: Tables,
}

impl CalculatorState {
    pub fn new(tables: Tables) -> Self {
        Self {
            params: Parameters::default(),
            tables,
        }
    }

    pub fn snapshot(&self) -> Parameters {
        self.params
    }

    pub fn set_material(&mut self, material: MaterialType) {
        self.params.material = material;
    }

    pub fn set_frequency(&mut self, frequency: CleaningFrequency) {
        self.params.frequency = frequency;
    }

    pub fn set_quantity(&mut self, quantity: i64) {
        self.params.quantity = quantity;
    }

    pub fn set_wipe_rate(&mut self, rate: WipeRate) {
        self.tables.resources.screen_wipes = rate;
    }

    /// Runs both engines against the current snapshot.
    pub fn calculate(&self) -> Option<Calculation> {
        Calculation::run(&self.params, &self.tables)
    }
}

/// Everything the presentation layer renders for one snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct Calculation {
    pub params: Parameters,
    pub economics: EconomicsResult,
    pub resources: ResourceResult,
    pub break_even: DisplayDuration,
    pub cost_chart: CostChart,
    pub resource_chart: Vec<ResourceBars>,
}

impl Calculation {
    /// `None` when the quantity is not positive.
    pub fn run(params: &Parameters, tables: &Tables) -> Option<Self> {
        let resources = compute_resources(params, &tables.resources)?;
        let economics = compute_break_even(params, &tables.costs);
        let lifespan = tables.costs.screen_lifespan_years;

        Some(Self {
            params: *params,
            economics,
            resources,
            break_even: format_break_even(&economics, lifespan),
            cost_chart: cost_chart(&economics, lifespan),
            resource_chart: resource_chart(&resources),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tables::{ResourceTable, WipeUnit};

    #[test]
    fn setters_replace_single_fields() {
        let mut state = CalculatorState::default();
        state.set_material(MaterialType::Disposable);
        state.set_frequency(CleaningFrequency::Daily);
        state.set_quantity(42);

        assert_eq!(
            state.snapshot(),
            Parameters::new(MaterialType::Disposable, CleaningFrequency::Daily, 42)
        );
    }

    #[test]
    fn invalid_quantity_skips_calculation() {
        let mut state = CalculatorState::default();
        state.set_quantity(0);
        assert_eq!(state.calculate(), None);
    }

    #[test]
    fn calculation_uses_active_tables() {
        let mut state = CalculatorState::default();
        state.set_wipe_rate(ResourceTable::wipe_mass().screen_wipes);
        let calculation = state.calculate().unwrap();

        assert_eq!(calculation.resources.wipe_unit(), WipeUnit::Kilograms);
        assert_eq!(calculation.cost_chart.years, 10.0);
        assert_eq!(calculation.params, state.snapshot());
        assert_eq!(state.tables.resources, ResourceTable::wipe_mass());
    }
}
