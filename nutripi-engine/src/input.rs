//! Validation of raw text entered on the edit screens.

use std::str::FromStr;

use chrono::NaiveDate;
use nutripi_model::{
    nutrient::WeightUnit,
    profile::{ActivityLevel, Height},
};

use crate::{units, Error, Result};

/// Parses a body weight and normalizes it to kilograms.
pub fn parse_weight(input: &str, unit: WeightUnit) -> Result<f64> {
    let value = f64::from_str(input.trim()).map_err(|_| invalid(input))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(invalid(input));
    }

    Ok(units::to_kg(value, unit))
}

/// Parses a user override of a calorie or gram target.
pub fn parse_target(input: &str) -> Result<u32> {
    u32::from_str(input.trim()).map_err(|_| invalid(input))
}

/// An empty inches field counts as zero.
pub fn parse_height(feet: &str, inches: &str) -> Result<Height> {
    let feet = u32::from_str(feet.trim()).map_err(|_| invalid(feet))?;
    let inches = match inches.trim() {
        "" => 0,
        s => u32::from_str(s).map_err(|_| invalid(inches))?,
    };

    Height::new(feet, inches).ok_or(Error::InvalidHeight)
}

pub fn parse_activity_level(input: &str) -> Result<ActivityLevel> {
    ActivityLevel::from_str(input.trim()).map_err(|_| invalid(input))
}

/// Calendar dates are entered as `YYYY-MM-DD`.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| invalid(input))
}

fn invalid(input: &str) -> Error {
    Error::InvalidInput(input.to_owned())
}
