use super::{
    params::{MaterialType, Parameters},
    tables::CostTable,
};

/// Outcome of the break-even search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BreakEven {
    /// Quantity was zero or negative; nothing was computed.
    Invalid,
    /// Operating savings never repay the price difference.
    Never,
    /// Years until cumulative costs meet. Zero when the screen is cheaper up front.
    After(f64),
}

/// Initial and annual costs of both options for one parameter snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CostBreakdown {
    pub reusable_initial: f64,
    pub alternative_initial: f64,
    pub reusable_annual: f64,
    pub alternative_annual: f64,
}

impl CostBreakdown {
    /// Cumulative `(reusable, alternative)` spend after `years` of operation.
    pub fn cumulative_at(&self, years: f64) -> (f64, f64) {
        let years = years.max(0.0);
        (
            self.reusable_initial + self.reusable_annual * years,
            self.alternative_initial + self.alternative_annual * years,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EconomicsResult {
    pub break_even: BreakEven,
    /// Alternative annual cost minus reusable annual cost.
    pub annual_savings: f64,
    /// Reusable initial cost minus alternative initial cost.
    pub initial_cost_difference: f64,
    pub costs: CostBreakdown,
}

impl EconomicsResult {
    fn invalid() -> Self {
        Self {
            break_even: BreakEven::Invalid,
            annual_savings: 0.0,
            initial_cost_difference: 0.0,
            costs: CostBreakdown::default(),
        }
    }

    pub fn break_even_years(&self) -> f64 {
        match self.break_even {
            BreakEven::Invalid => 0.0,
            BreakEven::Never => f64::INFINITY,
            BreakEven::After(years) => years,
        }
    }

    pub fn is_finite(&self) -> bool {
        matches!(self.break_even, BreakEven::After(_))
    }
}

pub fn compute_break_even(params: &Parameters, costs: &CostTable) -> EconomicsResult {
    if !params.is_valid() {
        return EconomicsResult::invalid();
    }

    let quantity = params.quantity as f64;
    let events = params.unit_events_per_year();

    let reusable_initial = quantity * costs.screen_unit;
    let reusable_annual = events * costs.screen_cleaning;
    let (alternative_initial, alternative_annual) = match params.material {
        MaterialType::Textile => (
            quantity * costs.textile_unit,
            events * costs.textile_cleaning,
        ),
        MaterialType::Disposable => (
            quantity * costs.disposable_unit,
            events * costs.disposable_replacement,
        ),
    };

    let initial_cost_difference = reusable_initial - alternative_initial;
    let annual_savings = alternative_annual - reusable_annual;

    let break_even = if annual_savings <= 0.0 {
        BreakEven::Never
    } else {
        BreakEven::After((initial_cost_difference / annual_savings).max(0.0))
    };

    EconomicsResult {
        break_even,
        annual_savings,
        initial_cost_difference,
        costs: CostBreakdown {
            reusable_initial,
            alternative_initial,
            reusable_annual,
            alternative_annual,
        },
    }
}
