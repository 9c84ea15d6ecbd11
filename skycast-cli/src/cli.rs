use anyhow::Context;
use clap::{Parser, Subcommand};
use tokio::sync::watch;

use skycast_core::{Config, LookupState, WeatherLookup, providers_from_config};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Interactive city weather lookup")]
pub struct Cli {
    /// City to look up right away instead of prompting first.
    pub city: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the geocoding API key in the config file.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Command::Configure) => configure(),
            None => lookup_loop(self.city).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let key = inquire::Password::new("OpenCage API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    config.set_geocoding_api_key(key);
    config.save()?;

    println!("Saved to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn lookup_loop(initial_city: Option<String>) -> anyhow::Result<()> {
    let config = Config::load()?;
    let (geocoder, weather) = providers_from_config(&config);
    let mut flow = WeatherLookup::new(geocoder, weather);

    spawn_progress_printer(flow.subscribe());

    render::banner();

    let mut next_city = initial_city;
    loop {
        let city = match next_city.take() {
            Some(city) => city,
            None => inquire::Text::new("City:")
                .with_placeholder("e.g. Paris")
                .prompt()
                .context("Failed to read city input")?,
        };

        flow.set_query(city);
        flow.submit().await;

        if let Some(candidates) = flow.state().candidates() {
            let labels: Vec<String> = candidates.iter().map(|c| c.label.clone()).collect();
            let selection = inquire::Select::new("Select a city:", labels)
                .raw_prompt()
                .context("Failed to read city selection")?;
            flow.choose(selection.index).await;
        }

        match flow.state() {
            LookupState::WeatherReady(observation) => render::observation(observation),
            LookupState::Errored(err) => render::error(&err.to_string()),
            _ => {}
        }

        let again = inquire::Confirm::new("Look up another city?")
            .with_default(true)
            .prompt()
            .context("Failed to read confirmation")?;
        if !again {
            break;
        }
    }

    Ok(())
}

/// Prints the loading line whenever the lookup reports a weather fetch
/// in flight. The prompt loop itself never polls.
fn spawn_progress_printer(mut rx: watch::Receiver<LookupState>) {
    tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            if rx.borrow_and_update().is_fetching() {
                render::loading();
            }
        }
    });
}
