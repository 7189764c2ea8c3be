use std::{error::Error, fs::File, io::BufReader};

use log::info;
use nutripi_editor::{config::Config, ProfileEditor};
use nutripi_model::profile::LoggedWeight;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    log4rs::init_file("log4rs.yml", Default::default())?;
    let config = Config::from_env()?;

    let file = File::open("weights.json")?;
    let entries: Vec<LoggedWeight> = serde_json::from_reader(BufReader::new(file))?;
    info!("Loaded {} weight entries from file", entries.len());

    let store = nutripi_client::create(config.account_api_url, config.account_api_token);
    let mut editor = ProfileEditor::new(Box::new(store));
    editor.load().await?;
    let profile = editor.import_weights(&entries).await?;
    info!("History now holds {} entries", profile.logged_weights.len());

    Ok(())
}
