use anyhow::Context;
use clap::{Parser, Subcommand};
use geoweather_core::{
    App, Config, LookupOutcome,
    provider::{
        openweather::OpenWeatherClient, time_source_from_config, weather_source_from_config,
        worldtime::WorldTimeClient,
    },
};
use inquire::{Password, Select, Text};

use crate::terminal::{LinkMap, TerminalView};

type TerminalApp = App<OpenWeatherClient, WorldTimeClient, LinkMap, TerminalView>;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "geoweather", version, about = "Current weather for a coordinate")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key.
    Configure,

    /// Show weather for a single coordinate.
    Show {
        /// Latitude in decimal degrees, -90..90.
        #[arg(allow_hyphen_values = true)]
        latitude: String,

        /// Longitude in decimal degrees, -180..180.
        #[arg(allow_hyphen_values = true)]
        longitude: String,
    },

    /// Interactive session that keeps lookup history.
    Session,
}

const GET_WEATHER: &str = "Get weather";
const TOGGLE_HISTORY: &str = "Toggle history";
const QUIT: &str = "Quit";

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { latitude, longitude } => {
                let mut app = build_app(&Config::load()?)?;
                lookup(&mut app, &latitude, &longitude).await
            }
            Command::Session => session(build_app(&Config::load()?)?).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key.trim().to_string());
    config.save()?;

    println!("Saved to {}", Config::config_file_path()?.display());
    Ok(())
}

fn build_app(config: &Config) -> anyhow::Result<TerminalApp> {
    let weather = weather_source_from_config(config)?;
    let time = time_source_from_config(config);

    Ok(App::new(weather, time, LinkMap, TerminalView::default(), config.icon_url.clone()))
}

async fn lookup(app: &mut TerminalApp, latitude: &str, longitude: &str) -> anyhow::Result<()> {
    if app.get_weather(latitude, longitude).await? == LookupOutcome::Completed {
        app.view().print_report();
    }
    Ok(())
}

async fn session(mut app: TerminalApp) -> anyhow::Result<()> {
    loop {
        let choice = Select::new("Action:", vec![GET_WEATHER, TOGGLE_HISTORY, QUIT])
            .prompt()
            .context("Failed to read action")?;

        match choice {
            GET_WEATHER => {
                let latitude = Text::new("Latitude:").prompt().context("Failed to read latitude")?;
                let longitude =
                    Text::new("Longitude:").prompt().context("Failed to read longitude")?;

                if let Err(e) = lookup(&mut app, &latitude, &longitude).await {
                    tracing::error!(error = %e, "lookup failed");
                }
            }
            TOGGLE_HISTORY => app.toggle_history(),
            _ => return Ok(()),
        }
    }
}
