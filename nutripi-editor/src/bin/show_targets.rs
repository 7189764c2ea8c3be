use std::error::Error;

use log::info;
use nutripi_editor::{config::Config, ProfileEditor};
use nutripi_model::nutrient::Macro;
use strum::IntoEnumIterator;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    log4rs::init_file("log4rs.yml", Default::default())?;
    let config = Config::from_env()?;

    info!("Connecting to account store at {}", config.account_api_url);
    let store = nutripi_client::create(config.account_api_url, config.account_api_token);
    let mut editor = ProfileEditor::new(Box::new(store));

    let profile = editor.load().await?;
    match profile.bmi {
        Some(bmi) => println!("BMI: {:.1}", bmi),
        None => println!("BMI: unavailable"),
    }
    let current = profile.daily_recommendation;

    let recommendation = editor.recommendation()?;
    println!("Ideal weight: {:.1} kg", recommendation.ideal_weight_kg);
    println!(
        "Calories: {} kcal (recommended {}-{})",
        current.calories, recommendation.calories.lower_kcal, recommendation.calories.upper_kcal
    );
    for nutrient in Macro::iter() {
        let range = recommendation.range(nutrient);
        let target = match nutrient {
            Macro::Protein => current.protein,
            Macro::Carbs => current.carbs,
            Macro::Fat => current.fat,
        };
        println!(
            "{}: {} g (recommended {}-{})",
            nutrient, target, range.lower_grams, range.upper_grams
        );
    }

    Ok(())
}
