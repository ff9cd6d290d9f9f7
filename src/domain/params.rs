use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::ParameterError;

/// Barrier the screen product is compared against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialType {
    #[default]
    Textile,
    Disposable,
}

impl MaterialType {
    pub const ALL: [MaterialType; 2] = [MaterialType::Textile, MaterialType::Disposable];

    pub fn as_key(&self) -> &'static str {
        match self {
            MaterialType::Textile => "textile",
            MaterialType::Disposable => "disposable",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MaterialType::Textile => "Textile curtain",
            MaterialType::Disposable => "Disposable curtain",
        }
    }
}

impl FromStr for MaterialType {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MaterialType::ALL
            .into_iter()
            .find(|material| material.as_key() == s.trim())
            .ok_or_else(|| ParameterError::UnknownMaterial(s.to_string()))
    }
}

impl fmt::Display for MaterialType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How often each barrier is cleaned (or, for disposables, replaced).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CleaningFrequency {
    Yearly,
    #[default]
    Quarterly,
    Monthly,
    Weekly,
    Daily,
}

impl CleaningFrequency {
    pub const ALL: [CleaningFrequency; 5] = [
        CleaningFrequency::Yearly,
        CleaningFrequency::Quarterly,
        CleaningFrequency::Monthly,
        CleaningFrequency::Weekly,
        CleaningFrequency::Daily,
    ];

    pub fn cleanings_per_year(&self) -> u32 {
        match self {
            CleaningFrequency::Yearly => 1,
            CleaningFrequency::Quarterly => 4,
            CleaningFrequency::Monthly => 12,
            CleaningFrequency::Weekly => 52,
            CleaningFrequency::Daily => 365,
        }
    }

    pub fn as_key(&self) -> &'static str {
        match self {
            CleaningFrequency::Yearly => "yearly",
            CleaningFrequency::Quarterly => "quarterly",
            CleaningFrequency::Monthly => "monthly",
            CleaningFrequency::Weekly => "weekly",
            CleaningFrequency::Daily => "daily",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CleaningFrequency::Yearly => "Yearly",
            CleaningFrequency::Quarterly => "Quarterly",
            CleaningFrequency::Monthly => "Monthly",
            CleaningFrequency::Weekly => "Weekly",
            CleaningFrequency::Daily => "Daily",
        }
    }
}

impl FromStr for CleaningFrequency {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CleaningFrequency::ALL
            .into_iter()
            .find(|frequency| frequency.as_key() == s.trim())
            .ok_or_else(|| ParameterError::UnknownFrequency(s.to_string()))
    }
}

impl fmt::Display for CleaningFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One snapshot of the user's selection. Engines never mutate it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameters {
    pub material: MaterialType,
    pub frequency: CleaningFrequency,
    /// Zero or negative counts are carried as-is; the engines report them as invalid.
    pub quantity: i64,
}

impl Parameters {
    pub fn new(material: MaterialType, frequency: CleaningFrequency, quantity: i64) -> Self {
        Self {
            material,
            frequency,
            quantity,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.quantity > 0
    }

    /// Number of unit-events per year: quantity × cleanings per year.
    pub(crate) fn unit_events_per_year(&self) -> f64 {
        self.quantity as f64 * self.frequency.cleanings_per_year() as f64
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            material: MaterialType::default(),
            frequency: CleaningFrequency::default(),
            quantity: 10,
        }
    }
}

/// Parses the quantity field. Only positive whole numbers are accepted.
pub fn parse_quantity(input: &str) -> Result<i64, ParameterError> {
    let trimmed = input.trim();
    let quantity: i64 = trimmed
        .parse()
        .map_err(|_| ParameterError::NotANumber(trimmed.to_string()))?;
    if quantity <= 0 {
        return Err(ParameterError::NotPositive(quantity));
    }
    Ok(quantity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_keys_round_trip() {
        for frequency in CleaningFrequency::ALL {
            assert_eq!(frequency.as_key().parse::<CleaningFrequency>(), Ok(frequency));
        }
        assert_eq!(
            "fortnightly".parse::<CleaningFrequency>(),
            Err(ParameterError::UnknownFrequency("fortnightly".to_string()))
        );
    }

    #[test]
    fn material_keys_are_stable() {
        assert_eq!("textile".parse::<MaterialType>(), Ok(MaterialType::Textile));
        assert_eq!(" disposable ".parse::<MaterialType>(), Ok(MaterialType::Disposable));
        assert!("paper".parse::<MaterialType>().is_err());
    }

    #[test]
    fn cleanings_per_year_match_calendar() {
        let counts: Vec<u32> = CleaningFrequency::ALL
            .iter()
            .map(CleaningFrequency::cleanings_per_year)
            .collect();
        assert_eq!(counts, vec![1, 4, 12, 52, 365]);
    }

    #[test]
    fn quantity_must_be_positive() {
        assert_eq!(parse_quantity(" 25 "), Ok(25));
        assert_eq!(parse_quantity("0"), Err(ParameterError::NotPositive(0)));
        assert_eq!(parse_quantity("-3"), Err(ParameterError::NotPositive(-3)));
        assert_eq!(
            parse_quantity("ten"),
            Err(ParameterError::NotANumber("ten".to_string()))
        );
        assert_eq!(
            parse_quantity(""),
            Err(ParameterError::NotANumber(String::new()))
        );
    }
}
