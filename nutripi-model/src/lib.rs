pub mod nutrient;
pub mod profile;
