use std::fmt;

use super::economics::{BreakEven, EconomicsResult};

const WEEKS_PER_YEAR: f64 = 52.0;
const MONTHS_PER_YEAR: f64 = 12.0;
const DAYS_PER_YEAR: f64 = 365.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DurationUnit {
    Day,
    Week,
    Month,
    Year,
}

impl DurationUnit {
    pub fn label(&self, plural: bool) -> &'static str {
        match (self, plural) {
            (DurationUnit::Day, false) => "DAY",
            (DurationUnit::Day, true) => "DAYS",
            (DurationUnit::Week, false) => "WEEK",
            (DurationUnit::Week, true) => "WEEKS",
            (DurationUnit::Month, false) => "MONTH",
            (DurationUnit::Month, true) => "MONTHS",
            (DurationUnit::Year, false) => "YEAR",
            (DurationUnit::Year, true) => "YEARS",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Magnitude {
    Whole(u64),
    /// One decimal place, e.g. `2.4`.
    Tenths(f64),
    /// Beyond the product's useful life, e.g. `10+`.
    AtLeast(u64),
    /// Savings never repay the investment.
    NotApplicable,
    /// Nothing computed yet.
    Placeholder,
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Magnitude::Whole(value) => write!(f, "{value}"),
            Magnitude::Tenths(value) => write!(f, "{value:.1}"),
            Magnitude::AtLeast(value) => write!(f, "{value}+"),
            Magnitude::NotApplicable => f.write_str("N/A"),
            Magnitude::Placeholder => f.write_str("--"),
        }
    }
}

/// A duration ready for display: `magnitude` followed by `unit`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayDuration {
    pub magnitude: Magnitude,
    unit: DurationUnit,
    plural: bool,
}

impl DisplayDuration {
    fn counted(count: u64, unit: DurationUnit) -> Self {
        Self {
            magnitude: Magnitude::Whole(count),
            unit,
            plural: count != 1,
        }
    }

    pub fn unit(&self) -> DurationUnit {
        self.unit
    }

    pub fn unit_label(&self) -> &'static str {
        self.unit.label(self.plural)
    }
}

impl fmt::Display for DisplayDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.magnitude, self.unit_label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Bucket {
    Overflow,
    Days,
    Weeks,
    Months,
    Years,
}

enum Step {
    Done(DisplayDuration),
    Rebucket(Bucket),
}

struct Rule {
    applies: fn(f64, f64) -> bool,
    bucket: Bucket,
}

/// Evaluated top-down; the first matching rule picks the starting bucket.
const RULES: [Rule; 5] = [
    Rule {
        applies: |years, lifespan| years > lifespan,
        bucket: Bucket::Overflow,
    },
    Rule {
        applies: |years, _| years < 1.0 / WEEKS_PER_YEAR,
        bucket: Bucket::Days,
    },
    Rule {
        applies: |years, _| years < 1.0 / MONTHS_PER_YEAR,
        bucket: Bucket::Weeks,
    },
    Rule {
        applies: |years, _| years < 1.0,
        bucket: Bucket::Months,
    },
    Rule {
        applies: |_, _| true,
        bucket: Bucket::Years,
    },
];

fn resolve(bucket: Bucket, years: f64, lifespan: f64) -> Step {
    match bucket {
        Bucket::Overflow => Step::Done(DisplayDuration {
            magnitude: Magnitude::AtLeast(whole(lifespan)),
            unit: DurationUnit::Year,
            plural: true,
        }),
        Bucket::Days => {
            let days = whole(years * DAYS_PER_YEAR).max(1);
            Step::Done(DisplayDuration::counted(days, DurationUnit::Day))
        }
        Bucket::Weeks => {
            let weeks = whole(years * WEEKS_PER_YEAR);
            if weeks >= 4 {
                Step::Rebucket(Bucket::Months)
            } else if weeks < 1 {
                Step::Rebucket(Bucket::Days)
            } else {
                Step::Done(DisplayDuration::counted(weeks, DurationUnit::Week))
            }
        }
        Bucket::Months => {
            let months = whole(years * MONTHS_PER_YEAR);
            if months >= 12 {
                Step::Done(DisplayDuration::counted(1, DurationUnit::Year))
            } else {
                Step::Done(DisplayDuration::counted(months, DurationUnit::Month))
            }
        }
        Bucket::Years => {
            let rounded = (years * 10.0).round() / 10.0;
            let magnitude = if (rounded - rounded.round()).abs() < 0.01 {
                Magnitude::Whole(whole(rounded))
            } else {
                Magnitude::Tenths(rounded)
            };
            Step::Done(DisplayDuration {
                magnitude,
                unit: DurationUnit::Year,
                plural: rounded > 1.0,
            })
        }
    }
}

/// Picks the coarsest unit that does not round to zero.
///
/// Rounding can push a value across a unit boundary (four weeks, twelve
/// months); those cases are handed to the next bucket instead of being shown
/// as `4 WEEKS` or `12 MONTHS`.
pub fn format_duration(years: f64, lifespan_years: f64) -> DisplayDuration {
    let years = if years.is_nan() { 0.0 } else { years.max(0.0) };
    let mut bucket = RULES
        .iter()
        .find(|rule| (rule.applies)(years, lifespan_years))
        .map(|rule| rule.bucket)
        .unwrap_or(Bucket::Years);

    // Every rebucket moves to a bucket that always terminates.
    loop {
        match resolve(bucket, years, lifespan_years) {
            Step::Done(display) => return display,
            Step::Rebucket(next) => bucket = next,
        }
    }
}

pub fn format_break_even(result: &EconomicsResult, lifespan_years: f64) -> DisplayDuration {
    match result.break_even {
        BreakEven::Invalid => DisplayDuration {
            magnitude: Magnitude::Placeholder,
            unit: DurationUnit::Year,
            plural: false,
        },
        BreakEven::Never => DisplayDuration {
            magnitude: Magnitude::NotApplicable,
            unit: DurationUnit::Year,
            plural: true,
        },
        BreakEven::After(years) => format_duration(years, lifespan_years),
    }
}

fn whole(value: f64) -> u64 {
    value.round().max(0.0) as u64
}
