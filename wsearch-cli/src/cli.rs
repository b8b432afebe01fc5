use clap::{Parser, Subcommand};
use inquire::{Select, Text};

use wsearch_core::{Config, HttpWeatherApi, Unit};

use crate::controller::SearchController;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "wsearch", version, about = "Weather search client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Look up one city and exit.
    Search {
        /// City name to look up.
        city: String,

        /// Temperature unit, "celsius" or "fahrenheit". Defaults to the
        /// configured unit.
        #[arg(long)]
        unit: Option<String>,
    },

    /// Run the interactive search session. This is the default.
    Interactive,

    /// Edit endpoint, default unit and preset cities.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command.unwrap_or(Command::Interactive) {
            Command::Search { city, unit } => {
                let config = Config::load()?;
                let mut controller = controller_from(&config);

                if let Some(raw) = unit {
                    controller.set_unit(Unit::try_from(raw.as_str())?);
                }

                controller.search_once(&city).await
            }
            Command::Interactive => {
                let config = Config::load()?;
                controller_from(&config).run().await
            }
            Command::Configure => configure(),
        }
    }
}

fn controller_from(config: &Config) -> SearchController {
    SearchController::new(config, Box::new(HttpWeatherApi::new(&config.endpoint)))
}

/// Interactive configuration, prefilled with the current values.
fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let endpoint = Text::new("Server base URL:").with_initial_value(&config.endpoint).prompt()?;

    let units = Unit::all().to_vec();
    let start = units.iter().position(|unit| *unit == config.default_unit).unwrap_or(0);
    let default_unit = Select::new("Default unit:", units).with_starting_cursor(start).prompt()?;

    let presets = Text::new("Preset cities (comma-separated):")
        .with_initial_value(&config.preset_cities.join(", "))
        .prompt()?;

    config.endpoint = endpoint.trim().trim_end_matches('/').to_string();
    config.default_unit = default_unit;
    config.preset_cities = presets
        .split(',')
        .map(|city| city.trim().to_string())
        .filter(|city| !city.is_empty())
        .collect();

    config.save()?;
    println!("Saved to {}", Config::config_file_path()?.display());

    Ok(())
}
