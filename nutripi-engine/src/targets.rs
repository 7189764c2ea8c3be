//! Daily calorie and macronutrient targets derived from body metrics.
//!
//! Calories are anchored to an ideal body weight (a Broca index variant)
//! scaled by a per-activity multiplier. Each macro gets an advisory gram
//! range built from a fixed share of a ±300 kcal window around the target.

use log::debug;
use nutripi_model::{
    nutrient::{Macro, Nutrient},
    profile::{ActivityLevel, DailyRecommendation, Height, UserProfile},
};

use crate::{Error, Result};

pub const TOLERANCE_KCAL: f64 = 300.0;

const SEDENTARY_KCAL_PER_KG: f64 = 30.0;
const ACTIVE_KCAL_PER_KG: f64 = 35.0;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct GramRange {
    pub lower_grams: u32,
    pub upper_grams: u32,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CalorieRange {
    pub lower_kcal: u32,
    pub upper_kcal: u32,
}

pub fn ideal_body_weight_kg(height: Height) -> Result<f64> {
    if !height.is_valid() {
        return Err(Error::InvalidHeight);
    }

    let over_hundred = height.centimeters() - 100.0;
    if over_hundred <= 0.0 {
        return Err(Error::InvalidHeight);
    }

    Ok(over_hundred - 0.1 * over_hundred)
}

/// `None` stands for an unset or unrecognised activity level.
pub fn target_daily_calories(
    ideal_weight_kg: f64,
    activity_level: Option<ActivityLevel>,
) -> Result<f64> {
    match activity_level {
        Some(ActivityLevel::Sedentary) => Ok(ideal_weight_kg * SEDENTARY_KCAL_PER_KG),
        Some(ActivityLevel::Active) => Ok(ideal_weight_kg * ACTIVE_KCAL_PER_KG),
        None => Err(Error::Unavailable),
    }
}

pub fn macro_target_range_grams(
    target_calories: f64,
    macro_share: f64,
    calories_per_gram: f64,
    tolerance_kcal: f64,
) -> Result<GramRange> {
    if !target_calories.is_finite()
        || !macro_share.is_finite()
        || !tolerance_kcal.is_finite()
        || macro_share < 0.0
        || tolerance_kcal < 0.0
        || !(calories_per_gram > 0.0)
    {
        return Err(Error::Unavailable);
    }

    let grams = |kcal: f64| round_non_negative(macro_share * kcal / calories_per_gram);
    Ok(GramRange {
        lower_grams: grams(target_calories - tolerance_kcal),
        upper_grams: grams(target_calories + tolerance_kcal),
    })
}

pub fn macro_range(nutrient: Macro, target_calories: f64) -> Result<GramRange> {
    macro_target_range_grams(
        target_calories,
        nutrient.share(),
        nutrient.calories_per_gram(),
        TOLERANCE_KCAL,
    )
}

pub fn calorie_target_range(target_calories: f64) -> Result<CalorieRange> {
    if !target_calories.is_finite() {
        return Err(Error::Unavailable);
    }

    Ok(CalorieRange {
        lower_kcal: round_non_negative(target_calories - TOLERANCE_KCAL),
        upper_kcal: round_non_negative(target_calories + TOLERANCE_KCAL),
    })
}

/// Share of the daily calorie target covered so far, clamped to `[0, 100]`.
/// A non-positive target yields 0.
pub fn progress_percent(consumed_calorie_equivalent: f64, daily_calorie_target: f64) -> f64 {
    if !(daily_calorie_target > 0.0) {
        return 0.0;
    }

    let percent = 100.0 * consumed_calorie_equivalent / daily_calorie_target;
    if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0)
    }
}

/// `consumed` is in kcal for [`Nutrient::Calories`] and in grams for macros.
pub fn nutrient_progress(nutrient: Nutrient, consumed: f64, daily_calorie_target: f64) -> f64 {
    progress_percent(consumed * nutrient.calories_per_unit(), daily_calorie_target)
}

pub fn bmi(weight_kg: f64, height: Height) -> Result<f64> {
    if !height.is_valid() {
        return Err(Error::InvalidHeight);
    }

    let height_m = height.meters();
    if height_m <= 0.0 {
        return Err(Error::Unavailable);
    }

    Ok(weight_kg / height_m.powf(2.0))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Recommendation {
    pub ideal_weight_kg: f64,
    pub target_calories: f64,
    pub calories: CalorieRange,
    pub protein: GramRange,
    pub carbs: GramRange,
    pub fat: GramRange,
}

impl Recommendation {
    pub fn range(&self, nutrient: Macro) -> GramRange {
        match nutrient {
            Macro::Protein => self.protein,
            Macro::Carbs => self.carbs,
            Macro::Fat => self.fat,
        }
    }

    /// Targets to store when the user has not overridden anything.
    pub fn daily_recommendation(&self) -> DailyRecommendation {
        let grams =
            |m: Macro| round_non_negative(m.share() * self.target_calories / m.calories_per_gram());
        DailyRecommendation {
            calories: round_non_negative(self.target_calories),
            protein: grams(Macro::Protein),
            carbs: grams(Macro::Carbs),
            fat: grams(Macro::Fat),
        }
    }
}

pub fn recommend(profile: &UserProfile) -> Result<Recommendation> {
    let ideal_weight_kg = ideal_body_weight_kg(profile.height)?;
    let target_calories = target_daily_calories(ideal_weight_kg, profile.activity_level)?;
    debug!(
        "Ideal weight {:.2} kg, target {:.0} kcal",
        ideal_weight_kg, target_calories
    );

    Ok(Recommendation {
        ideal_weight_kg,
        target_calories,
        calories: calorie_target_range(target_calories)?,
        protein: macro_range(Macro::Protein, target_calories)?,
        carbs: macro_range(Macro::Carbs, target_calories)?,
        fat: macro_range(Macro::Fat, target_calories)?,
    })
}

fn round_non_negative(x: f64) -> u32 {
    x.round().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn height(feet: u32, inches: u32) -> Height {
        Height::new(feet, inches).unwrap()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 0.01,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn ideal_body_weight_for_five_foot_seven() {
        assert_close(ideal_body_weight_kg(height(5, 7)).unwrap(), 63.16);
    }

    #[test]
    fn ideal_body_weight_rejects_short_heights() {
        // 3'3" is 99.06 cm
        assert_eq!(ideal_body_weight_kg(height(3, 3)), Err(Error::InvalidHeight));
        assert_eq!(ideal_body_weight_kg(height(0, 0)), Err(Error::InvalidHeight));
        assert!(ideal_body_weight_kg(height(3, 4)).is_ok());
    }

    #[test]
    fn target_daily_calories_per_activity_level() {
        assert_eq!(
            target_daily_calories(60.0, Some(ActivityLevel::Sedentary)),
            Ok(1800.0)
        );
        assert_eq!(
            target_daily_calories(60.0, Some(ActivityLevel::Active)),
            Ok(2100.0)
        );
        assert_eq!(target_daily_calories(60.0, None), Err(Error::Unavailable));
    }

    #[test]
    fn macro_ranges_for_2000_kcal() {
        let test_data = [
            (Macro::Protein, 106, 144),
            (Macro::Carbs, 255, 345),
            (Macro::Fat, 28, 38),
        ];

        for (m, lower, upper) in test_data {
            assert_eq!(
                macro_range(m, 2000.0),
                Ok(GramRange {
                    lower_grams: lower,
                    upper_grams: upper
                }),
                "{}",
                m
            );
        }
    }

    #[test]
    fn macro_range_clamps_negative_lower_bound() {
        assert_eq!(
            macro_target_range_grams(100.0, 0.25, 4.0, 300.0),
            Ok(GramRange {
                lower_grams: 0,
                upper_grams: 25
            })
        );
    }

    #[test]
    fn macro_range_needs_positive_calories_per_gram() {
        assert_eq!(
            macro_target_range_grams(2000.0, 0.25, 0.0, 300.0),
            Err(Error::Unavailable)
        );
        assert_eq!(
            macro_target_range_grams(f64::NAN, 0.25, 4.0, 300.0),
            Err(Error::Unavailable)
        );
    }

    #[test]
    fn calorie_range() {
        assert_eq!(
            calorie_target_range(2210.6),
            Ok(CalorieRange {
                lower_kcal: 1911,
                upper_kcal: 2511
            })
        );
        assert_eq!(calorie_target_range(200.0).unwrap().lower_kcal, 0);
    }

    #[test]
    fn progress() {
        assert_eq!(progress_percent(2600.0, 2000.0), 100.0);
        assert_eq!(progress_percent(0.0, 0.0), 0.0);
        assert_eq!(progress_percent(500.0, 2000.0), 25.0);
        assert_eq!(progress_percent(-10.0, 2000.0), 0.0);
        assert_eq!(progress_percent(100.0, -5.0), 0.0);
        assert_eq!(progress_percent(f64::NAN, 2000.0), 0.0);
    }

    #[test]
    fn nutrient_progress_uses_calorie_equivalent() {
        assert_eq!(
            nutrient_progress(Nutrient::Macro(Macro::Fat), 50.0, 1800.0),
            25.0
        );
        assert_eq!(nutrient_progress(Nutrient::Calories, 900.0, 1800.0), 50.0);
    }

    #[test]
    fn bmi_for_five_foot_seven() {
        assert_close(bmi(70.0, height(5, 7)).unwrap(), 70.0 / 1.7018f64.powf(2.0));
        assert_close(bmi(70.0, height(5, 7)).unwrap(), 24.17);
    }

    #[test]
    fn bmi_needs_height() {
        assert_eq!(bmi(70.0, Height::default()), Err(Error::Unavailable));
    }

    #[test]
    fn huge_parsed_height_does_not_overflow() {
        let huge = crate::input::parse_height("400000000", "0").unwrap();

        let bmi = bmi(70.0, huge).unwrap();
        assert!(bmi >= 0.0 && bmi < 1e-12, "{}", bmi);
        assert!(ideal_body_weight_kg(huge).unwrap() > 0.0);
    }

    #[test]
    fn recommend_profile() {
        let profile = UserProfile {
            height: height(5, 7),
            weight_kg: 70.0,
            activity_level: Some(ActivityLevel::Active),
            ..Default::default()
        };

        let recommendation = recommend(&profile).unwrap();

        assert_close(recommendation.target_calories, 0.9 * 70.18 * 35.0);
        assert_eq!(
            recommendation.calories,
            CalorieRange {
                lower_kcal: 1911,
                upper_kcal: 2511
            }
        );
        assert_eq!(recommendation.range(Macro::Fat), recommendation.fat);
        assert_eq!(
            recommendation.daily_recommendation(),
            DailyRecommendation {
                calories: 2211,
                protein: 138,
                carbs: 332,
                fat: 37,
            }
        );
    }

    #[test]
    fn recommend_without_activity_level() {
        let profile = UserProfile {
            height: height(6, 0),
            weight_kg: 80.0,
            ..Default::default()
        };

        assert_eq!(recommend(&profile), Err(Error::Unavailable));
    }
}
