//! Bar widths for the comparison charts.
//!
//! All widths are percentages in `[0, 100]`. A zero denominator yields zero
//! widths rather than `NaN`.

use super::{economics::EconomicsResult, resources::ResourceResult};

fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

fn percentages(values: &[f64], denominator: f64) -> Vec<f64> {
    if denominator <= 0.0 {
        return vec![0.0; values.len()];
    }
    values
        .iter()
        .map(|value| (sanitize(*value) / denominator * 100.0).clamp(0.0, 100.0))
        .collect()
}

/// Each value as a percentage of the largest one. Used between bars.
pub fn share_of_max(values: &[f64]) -> Vec<f64> {
    let max = values.iter().copied().map(sanitize).fold(0.0, f64::max);
    percentages(values, max)
}

/// Each value as a percentage of the total. Used for segments within a bar.
pub fn share_of_sum(values: &[f64]) -> Vec<f64> {
    let sum: f64 = values.iter().copied().map(sanitize).sum();
    percentages(values, sum)
}

#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub label: &'static str,
    pub value: f64,
    /// Share of the bar this segment belongs to.
    pub share: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub label: &'static str,
    pub total: f64,
    /// Width relative to the widest bar in the same chart.
    pub width: f64,
    pub segments: Vec<Segment>,
}

/// Cumulative cost of both options over a horizon, split into purchase and operation.
#[derive(Clone, Debug, PartialEq)]
pub struct CostChart {
    pub years: f64,
    pub reusable: Bar,
    pub alternative: Bar,
}

pub fn cost_chart(economics: &EconomicsResult, years: f64) -> CostChart {
    let years = sanitize(years);
    let costs = &economics.costs;
    let reusable_parts = [costs.reusable_initial, costs.reusable_annual * years];
    let alternative_parts = [costs.alternative_initial, costs.alternative_annual * years];
    let (reusable_total, alternative_total) = costs.cumulative_at(years);
    let widths = share_of_max(&[reusable_total, alternative_total]);

    CostChart {
        years,
        reusable: stacked_bar("Screen", reusable_total, widths[0], &reusable_parts),
        alternative: stacked_bar(
            "Current barrier",
            alternative_total,
            widths[1],
            &alternative_parts,
        ),
    }
}

fn stacked_bar(label: &'static str, total: f64, width: f64, parts: &[f64; 2]) -> Bar {
    let shares = share_of_sum(parts);
    Bar {
        label,
        total,
        width,
        segments: vec![
            Segment {
                label: "Purchase",
                value: parts[0],
                share: shares[0],
            },
            Segment {
                label: "Operation",
                value: parts[1],
                share: shares[1],
            },
        ],
    }
}

/// One resource dimension compared side by side.
#[derive(Clone, Debug, PartialEq)]
pub struct ResourceBars {
    pub resource: &'static str,
    pub unit: &'static str,
    /// Display precision matching the resource engine's rounding.
    pub decimals: usize,
    pub alternative: Bar,
    pub reusable: Bar,
}

fn resource_pair(
    resource: &'static str,
    unit: &'static str,
    decimals: usize,
    alternative: f64,
    reusable: f64,
) -> ResourceBars {
    let widths = share_of_max(&[alternative, reusable]);
    ResourceBars {
        resource,
        unit,
        decimals,
        alternative: Bar {
            label: "Current barrier",
            total: alternative,
            width: widths[0],
            segments: Vec::new(),
        },
        reusable: Bar {
            label: "Screen",
            total: reusable,
            width: widths[1],
            segments: Vec::new(),
        },
    }
}

pub fn resource_chart(resources: &ResourceResult) -> Vec<ResourceBars> {
    let (disinfectant, wipes) = resources.screen_consumables();
    let wipe_unit = resources.wipe_unit().label();

    let mut chart = match *resources {
        ResourceResult::Textile {
            curtain_energy,
            curtain_water,
            ..
        } => vec![
            resource_pair("Energy", "kWh", 0, curtain_energy, 0.0),
            resource_pair("Water", "L", 0, curtain_water, 0.0),
        ],
        ResourceResult::Disposable { plastic_waste, .. } => {
            vec![resource_pair("Plastic waste", "kg", 0, plastic_waste, 0.0)]
        }
    };
    chart.push(resource_pair("Disinfectant", "L", 2, 0.0, disinfectant));
    chart.push(resource_pair("Wipes", wipe_unit, 2, 0.0, wipes));
    chart
}
