// tests/calculator.rs
use barrier_calculator::domain::{
    compute_break_even, compute_resources, format_break_even, format_duration, BreakEven,
    Calculation, CleaningFrequency, CostTable, DurationUnit, Magnitude, MaterialType, Parameters,
    ResourceResult, ResourceTable, Tables,
};
use pretty_assertions::assert_eq;

const LIFESPAN: f64 = 10.0;

fn all_params(quantities: &[i64]) -> Vec<Parameters> {
    let mut out = Vec::new();
    for material in MaterialType::ALL {
        for frequency in CleaningFrequency::ALL {
            for &quantity in quantities {
                out.push(Parameters::new(material, frequency, quantity));
            }
        }
    }
    out
}

/* ──────────────────────────────────────────────────────────────────────────
1) Worked examples
────────────────────────────────────────────────────────────────────────── */

#[test]
fn hundred_textile_curtains_cleaned_quarterly() {
    let params = Parameters::new(MaterialType::Textile, CleaningFrequency::Quarterly, 100);
    let economics = compute_break_even(&params, &CostTable::default());

    assert_eq!(economics.initial_cost_difference, 51_000.0);
    assert_eq!(economics.annual_savings, 17_200.0);

    let display = format_break_even(&economics, LIFESPAN);
    assert_eq!(display.magnitude, Magnitude::Whole(3));
    assert_eq!(display.unit_label(), "YEARS");
}

#[test]
fn fifty_disposables_replaced_weekly() {
    let params = Parameters::new(MaterialType::Disposable, CleaningFrequency::Weekly, 50);
    let economics = compute_break_even(&params, &CostTable::default());

    assert_eq!(economics.annual_savings, 1_807_000.0);
    assert_eq!(economics.initial_cost_difference, 30_500.0);

    let display = format_break_even(&economics, LIFESPAN);
    assert_eq!(display.to_string(), "6 DAYS");
}

#[test]
fn yearly_textile_cleaning_overflows_lifespan() {
    // 5 × 1310 − 5 × 800 = 2550 against (48 − 5) × 5 = 215 per year → ~11.9 years.
    let params = Parameters::new(MaterialType::Textile, CleaningFrequency::Yearly, 5);
    let economics = compute_break_even(&params, &CostTable::default());

    assert!(economics.break_even_years() > LIFESPAN);
    assert_eq!(format_break_even(&economics, LIFESPAN).to_string(), "10+ YEARS");
}

/* ──────────────────────────────────────────────────────────────────────────
2) Degenerate inputs map to distinguished states
────────────────────────────────────────────────────────────────────────── */

#[test]
fn non_positive_quantities_are_invalid_everywhere() {
    let tables = Tables::default();
    for params in all_params(&[0, -1, -1000]) {
        let economics = compute_break_even(&params, &tables.costs);
        assert_eq!(economics.break_even, BreakEven::Invalid);
        assert!(!economics.is_finite());
        assert_eq!(economics.break_even_years(), 0.0);
        assert_eq!(compute_resources(&params, &tables.resources), None);
        assert_eq!(Calculation::run(&params, &tables), None);

        let display = format_break_even(&economics, LIFESPAN);
        assert_eq!(display.to_string(), "-- YEAR");
    }
}

#[test]
fn equal_operating_costs_never_break_even() {
    let costs = CostTable {
        disposable_replacement: 5.0,
        ..CostTable::default()
    };
    let params = Parameters::new(MaterialType::Disposable, CleaningFrequency::Daily, 8);
    let economics = compute_break_even(&params, &costs);

    assert_eq!(economics.break_even, BreakEven::Never);
    assert_eq!(format_break_even(&economics, LIFESPAN).to_string(), "N/A YEARS");
}

/* ──────────────────────────────────────────────────────────────────────────
3) Properties
────────────────────────────────────────────────────────────────────────── */

#[test]
fn break_even_is_independent_of_quantity() {
    let costs = CostTable::default();
    for material in MaterialType::ALL {
        for frequency in CleaningFrequency::ALL {
            let reference =
                compute_break_even(&Parameters::new(material, frequency, 1), &costs).break_even_years();
            for quantity in [2, 7, 100, 4_321, 1_000_000] {
                let years = compute_break_even(&Parameters::new(material, frequency, quantity), &costs)
                    .break_even_years();
                assert!(
                    (years - reference).abs() <= 1e-9 * reference.max(1.0),
                    "{material:?}/{frequency:?}: {years} vs {reference} at quantity {quantity}"
                );
            }
        }
    }
}

#[test]
fn engines_are_idempotent() {
    let tables = Tables::default();
    for params in all_params(&[1, 13, 250]) {
        assert_eq!(
            compute_break_even(&params, &tables.costs),
            compute_break_even(&params, &tables.costs)
        );
        assert_eq!(
            compute_resources(&params, &tables.resources),
            compute_resources(&params, &tables.resources)
        );
        assert_eq!(Calculation::run(&params, &tables), Calculation::run(&params, &tables));
    }
}

#[test]
fn textile_saved_energy_equals_curtain_energy() {
    for table in [ResourceTable::wipe_count(), ResourceTable::wipe_mass()] {
        for frequency in CleaningFrequency::ALL {
            for quantity in [1, 3, 17, 99, 2_500] {
                let params = Parameters::new(MaterialType::Textile, frequency, quantity);
                let Some(ResourceResult::Textile {
                    curtain_energy,
                    curtain_water,
                    saved_energy,
                    saved_water,
                    ..
                }) = compute_resources(&params, &table)
                else {
                    panic!("expected textile resources for {params:?}");
                };
                assert_eq!(saved_energy, curtain_energy);
                assert_eq!(saved_water, curtain_water);
            }
        }
    }
}

#[test]
fn resources_scale_linearly_with_quantity() {
    let table = ResourceTable::default();
    let single = compute_resources(
        &Parameters::new(MaterialType::Disposable, CleaningFrequency::Monthly, 20),
        &table,
    );
    let double = compute_resources(
        &Parameters::new(MaterialType::Disposable, CleaningFrequency::Monthly, 40),
        &table,
    );
    let (
        Some(ResourceResult::Disposable { plastic_waste: a, .. }),
        Some(ResourceResult::Disposable { plastic_waste: b, .. }),
    ) = (single, double)
    else {
        panic!("expected disposable results");
    };
    assert_eq!(a, 84.0);
    assert_eq!(b, 168.0);
}

/* ──────────────────────────────────────────────────────────────────────────
4) Duration bucket boundaries use strict comparisons
────────────────────────────────────────────────────────────────────────── */

#[test]
fn bucket_boundaries_resolve_upwards() {
    assert_eq!(format_duration(1.0 / 52.0, LIFESPAN).to_string(), "1 WEEK");
    assert_eq!(format_duration(1.0 / 12.0, LIFESPAN).to_string(), "1 MONTH");
    assert_eq!(format_duration(1.0, LIFESPAN).to_string(), "1 YEAR");
    assert_eq!(format_duration(2.0, LIFESPAN).to_string(), "2 YEARS");
    assert_eq!(format_duration(LIFESPAN, LIFESPAN).to_string(), "10 YEARS");
}

#[test]
fn just_below_boundaries_stay_in_lower_bucket() {
    let below_week = format_duration(1.0 / 52.0 - 1e-9, LIFESPAN);
    assert_eq!(below_week.unit(), DurationUnit::Day);
    assert_eq!(below_week.to_string(), "7 DAYS");

    // Just under a month rounds to four weeks and is shown as a month.
    assert_eq!(format_duration(1.0 / 12.0 - 1e-9, LIFESPAN).to_string(), "1 MONTH");

    // Just under a year rounds to twelve months and is shown as a year.
    assert_eq!(format_duration(1.0 - 1e-9, LIFESPAN).to_string(), "1 YEAR");
}

/* ──────────────────────────────────────────────────────────────────────────
5) Charts
────────────────────────────────────────────────────────────────────────── */

#[test]
fn chart_widths_stay_within_bounds() {
    let tables = Tables::default();
    for params in all_params(&[1, 60]) {
        let calculation = Calculation::run(&params, &tables).expect("valid parameters");
        let cost = &calculation.cost_chart;
        for bar in [&cost.reusable, &cost.alternative] {
            assert!((0.0..=100.0).contains(&bar.width));
            for segment in &bar.segments {
                assert!((0.0..=100.0).contains(&segment.share));
            }
        }
        assert!(cost.reusable.width == 100.0 || cost.alternative.width == 100.0);

        for bars in &calculation.resource_chart {
            assert!((0.0..=100.0).contains(&bars.alternative.width));
            assert!((0.0..=100.0).contains(&bars.reusable.width));
        }
    }
}
