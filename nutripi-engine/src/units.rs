use nutripi_model::{nutrient::WeightUnit, profile::Height};

use crate::{Error, Result};

pub const KG_PER_LB: f64 = 0.453592;
pub const LBS_PER_KG: f64 = 2.20462;
pub const FEET_PER_CM: f64 = 0.0328084;

pub fn lbs_to_kg(lbs: f64) -> f64 {
    lbs * KG_PER_LB
}

pub fn kg_to_lbs(kg: f64) -> f64 {
    kg * LBS_PER_KG
}

pub fn to_kg(value: f64, unit: WeightUnit) -> f64 {
    match unit {
        WeightUnit::Kilograms => value,
        WeightUnit::Pounds => lbs_to_kg(value),
    }
}

pub fn from_kg(kg: f64, unit: WeightUnit) -> f64 {
    match unit {
        WeightUnit::Kilograms => kg,
        WeightUnit::Pounds => kg_to_lbs(kg),
    }
}

/// Converts a metric height to whole feet and inches, rounding to the nearest inch.
pub fn cm_to_height(cm: f64) -> Result<Height> {
    if !cm.is_finite() || cm <= 0.0 {
        return Err(Error::InvalidHeight);
    }

    let total_feet = cm * FEET_PER_CM;
    let mut feet = total_feet.floor();
    let mut inches = ((total_feet - feet) * 12.0).round();
    if inches >= 12.0 {
        feet += 1.0;
        inches = 0.0;
    }

    Height::new(feet as u32, inches as u32).ok_or(Error::InvalidHeight)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_conversions() {
        assert!((lbs_to_kg(154.0) - 69.853).abs() < 0.001);
        assert!((kg_to_lbs(70.0) - 154.3234).abs() < 0.001);
        assert_eq!(to_kg(70.0, WeightUnit::Kilograms), 70.0);
        assert_eq!(from_kg(70.0, WeightUnit::Kilograms), 70.0);
        assert!((from_kg(lbs_to_kg(200.0), WeightUnit::Pounds) - 200.0).abs() < 0.01);
    }

    #[test]
    fn cm_to_height_rounds_to_nearest_inch() {
        let test_data = [
            (170.18, (5, 7)),
            (180.0, (5, 11)),
            (182.88, (6, 0)),
            // 6'11.8" carries into the next foot
            (212.9, (7, 0)),
        ];

        for (i, (cm, (feet, inches))) in test_data.into_iter().enumerate() {
            assert_eq!(
                cm_to_height(cm),
                Ok(Height::new(feet, inches).unwrap()),
                "Test case #{}",
                i
            );
        }
    }

    #[test]
    fn cm_to_height_rejects_non_positive() {
        assert_eq!(cm_to_height(0.0), Err(Error::InvalidHeight));
        assert_eq!(cm_to_height(-12.0), Err(Error::InvalidHeight));
        assert_eq!(cm_to_height(f64::INFINITY), Err(Error::InvalidHeight));
    }
}
