//! Pure calculation core: economics, resources, duration labels and bar widths.

pub mod calculator;
pub mod duration;
pub mod economics;
pub mod error;
pub mod money;
pub mod params;
pub mod proportion;
pub mod resources;
pub mod tables;

pub use calculator::{Calculation, CalculatorState};
pub use duration::{format_break_even, format_duration, DisplayDuration, DurationUnit, Magnitude};
pub use economics::{compute_break_even, BreakEven, CostBreakdown, EconomicsResult};
pub use error::ParameterError;
pub use money::{format_amount, format_currency};
pub use params::{parse_quantity, CleaningFrequency, MaterialType, Parameters};
pub use proportion::{
    cost_chart, resource_chart, share_of_max, share_of_sum, Bar, CostChart, ResourceBars, Segment,
};
pub use resources::{compute_resources, ResourceResult};
pub use tables::{CostTable, ResourceTable, Tables, WipeRate, WipeUnit};
