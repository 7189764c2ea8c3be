use chrono::NaiveDate;
use strum::{Display, EnumString};

const CM_PER_INCH: f64 = 2.54;
const M_PER_INCH: f64 = 0.0254;

#[derive(Clone, Copy, Debug, Display, EnumString, Eq, Hash, PartialEq)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ActivityLevel {
    Sedentary,
    Active,
}

/// Imperial height. Feet and inches are additive.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Height {
    #[cfg_attr(feature = "serde", serde(rename = "heightFeet"))]
    feet: u32,
    #[cfg_attr(feature = "serde", serde(rename = "heightInches"))]
    inches: u32,
}

impl Height {
    pub fn new(feet: u32, inches: u32) -> Option<Self> {
        if inches > 11 {
            None
        } else {
            Some(Self { feet, inches })
        }
    }

    pub fn feet(&self) -> u32 {
        self.feet
    }

    pub fn inches(&self) -> u32 {
        self.inches
    }

    /// Height decoded from the wire is not validated, so `inches` may be out of range.
    pub fn is_valid(&self) -> bool {
        self.inches <= 11
    }

    /// Widened so that any `u32` feet value fits.
    pub fn total_inches(&self) -> u64 {
        u64::from(self.feet) * 12 + u64::from(self.inches)
    }

    pub fn centimeters(&self) -> f64 {
        self.total_inches() as f64 * CM_PER_INCH
    }

    pub fn meters(&self) -> f64 {
        self.total_inches() as f64 * M_PER_INCH
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DailyRecommendation {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoggedWeight {
    pub date: NaiveDate,
    pub value: f64,
}

impl LoggedWeight {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// Snapshot of a user's body metrics as held by the account store.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct UserProfile {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub height: Height,
    pub weight_kg: f64,
    #[cfg_attr(
        feature = "serde",
        serde(
            deserialize_with = "serde_with::As::<serde_with::DefaultOnError>::deserialize",
            default
        )
    )]
    pub activity_level: Option<ActivityLevel>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub daily_recommendation: DailyRecommendation,
    #[cfg_attr(feature = "serde", serde(default))]
    pub logged_weights: Vec<LoggedWeight>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub bmi: Option<f64>,
}

/// Partial profile update. Unset fields are left untouched by the store.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ProfilePatch {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub height: Option<Height>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub weight_kg: Option<f64>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub activity_level: Option<ActivityLevel>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub daily_recommendation: Option<DailyRecommendation>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub logged_weights: Option<Vec<LoggedWeight>>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub bmi: Option<f64>,
}

impl ProfilePatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
