use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{CustomType, InquireError, Text};
use weather_core::{
    Config, FetchOutcome, WeatherViewModel,
    wiring::{build_offline_view_model, build_view_model},
};

use crate::render::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Weather CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactively edit the saved configuration.
    Configure,

    /// Show current weather once.
    ///
    /// The configured coordinates are always queried; the city is only echoed
    /// through the pipeline.
    Show {
        /// City name; defaults to the configured city.
        #[arg(long)]
        city: Option<String>,

        /// Use built-in fake weather instead of calling the API.
        #[arg(long)]
        offline: bool,
    },

    /// Prompt for cities repeatedly, fetching weather after each entry.
    Interactive {
        /// Use built-in fake weather instead of calling the API.
        #[arg(long)]
        offline: bool,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city, offline } => {
                let view_model = view_model(offline)?;
                if let Some(city) = city {
                    view_model.set_city(city);
                }
                fetch_and_render(&view_model).await;
                Ok(())
            }
            Command::Interactive { offline } => interactive(&view_model(offline)?).await,
        }
    }
}

fn view_model(offline: bool) -> anyhow::Result<WeatherViewModel> {
    let config = Config::load()?;
    if offline {
        Ok(build_offline_view_model(&config))
    } else {
        build_view_model(&config)
    }
}

/// Runs one fetch, printing the loading line while it is in flight and the
/// final screen once it settles.
async fn fetch_and_render(view_model: &WeatherViewModel) -> FetchOutcome {
    let mut updates = view_model.subscribe();
    let fetch = view_model.fetch_weather();
    tokio::pin!(fetch);

    let outcome = loop {
        tokio::select! {
            outcome = &mut fetch => break outcome,
            Ok(()) = updates.changed() => {
                let state = updates.borrow_and_update().clone();
                if state.is_loading {
                    println!("{}", render(&state));
                }
            }
        }
    };

    println!("{}", render(&view_model.state()));
    outcome
}

/// Trimmed city from a prompt entry; blank entries end the session.
fn entered_city(input: &str) -> Option<&str> {
    let city = input.trim();
    (!city.is_empty()).then_some(city)
}

async fn interactive(view_model: &WeatherViewModel) -> anyhow::Result<()> {
    loop {
        let current = view_model.state().city;
        let input = match Text::new("Enter city (blank to quit):")
            .with_placeholder(&current)
            .prompt_skippable()
        {
            Ok(Some(input)) => input,
            Ok(None) | Err(InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err).context("Failed to read city"),
        };
        let Some(city) = entered_city(&input) else {
            break;
        };

        view_model.set_city(city);
        fetch_and_render(view_model).await;
    }

    Ok(())
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let default_city = Text::new("Default city:").with_default(&config.default_city).prompt()?;
    let latitude = CustomType::<f64>::new("Latitude:")
        .with_default(config.endpoint.latitude)
        .with_error_message("Please enter a number")
        .prompt()?;
    let longitude = CustomType::<f64>::new("Longitude:")
        .with_default(config.endpoint.longitude)
        .with_error_message("Please enter a number")
        .prompt()?;
    let base_url =
        Text::new("Weather API base URL:").with_default(&config.endpoint.base_url).prompt()?;
    let timeout_secs = CustomType::<u64>::new("Request timeout in seconds (0 for none):")
        .with_default(config.timeout_secs.unwrap_or(0))
        .with_error_message("Please enter a whole number of seconds")
        .prompt()?;

    config.default_city = default_city.trim().to_string();
    config.endpoint.latitude = latitude;
    config.endpoint.longitude = longitude;
    config.endpoint.base_url = base_url.trim().to_string();
    config.timeout_secs = (timeout_secs > 0).then_some(timeout_secs);

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}
