use strum::{Display, EnumIter, EnumString};

#[derive(Clone, Copy, Debug, Display, EnumIter, EnumString, Eq, Hash, PartialEq)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Macro {
    Protein,
    Carbs,
    Fat,
}

impl Macro {
    /// Fraction of the daily calories allocated to this macronutrient.
    ///
    /// The three shares are advisory and independent of each other.
    pub fn share(&self) -> f64 {
        match self {
            Macro::Protein => 0.25,
            Macro::Carbs => 0.60,
            Macro::Fat => 0.15,
        }
    }

    pub fn calories_per_gram(&self) -> f64 {
        match self {
            Macro::Protein | Macro::Carbs => 4.0,
            Macro::Fat => 9.0,
        }
    }
}

/// Anything tracked against the daily calorie target.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Nutrient {
    Calories,
    Macro(Macro),
}

impl Nutrient {
    /// Kilocalories per unit consumed (1 for calories themselves).
    pub fn calories_per_unit(&self) -> f64 {
        match self {
            Nutrient::Calories => 1.0,
            Nutrient::Macro(m) => m.calories_per_gram(),
        }
    }
}

impl From<Macro> for Nutrient {
    fn from(m: Macro) -> Self {
        Nutrient::Macro(m)
    }
}

#[derive(Clone, Copy, Debug, Display, EnumString, Eq, PartialEq)]
#[strum(ascii_case_insensitive)]
pub enum WeightUnit {
    #[strum(serialize = "kg")]
    Kilograms,
    #[strum(to_string = "lbs", serialize = "lb")]
    Pounds,
}
