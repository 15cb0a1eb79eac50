use crate::api::DeviceApi;
use crate::config::read_config;
use crate::poller::{CycleOutcome, Poller};
use crate::settings::SettingsUpdate;
use crate::surface::LogSurface;
use clap::{Parser, Subcommand};
use shared::settings::DeviceSettings;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod api;
mod clock;
mod config;
mod poller;
mod sample_window;
mod settings;
mod storage;
mod surface;

/// Dashboard client for the tension logger: follows live measurements and
/// manages settings, clock and SD card storage over the device's HTTP API.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// path to the YAML config file
    #[arg(long, default_value = "config.yaml")]
    config: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// follow live measurements (default)
    Watch,
    /// fetch a single measurement
    Status,
    /// show or change the device settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
    /// show or set the device clock
    Datetime {
        #[command(subcommand)]
        action: DatetimeAction,
    },
    /// SD card usage and stored files
    Storage {
        #[command(subcommand)]
        action: StorageAction,
    },
    /// firmware version and board health
    Info,
}

#[derive(Subcommand, Debug)]
enum SettingsAction {
    Show,
    /// update settings, omitted values keep their current device value
    Set {
        /// live chart capacity, 0 disables the chart (0-100)
        #[arg(long)]
        graph_points: Option<u32>,
        /// seconds between two poll cycles (1-1800)
        #[arg(long)]
        refresh_rate: Option<u32>,
        /// reference value readings are expressed against
        #[arg(long)]
        set_point: Option<u32>,
        /// seconds between two SD card log entries (1-1800)
        #[arg(long)]
        interval: Option<u32>,
    },
}

#[derive(Subcommand, Debug)]
enum DatetimeAction {
    Get,
    /// set the clock, defaults to this machine's local time
    Set {
        /// "YYYY-MM-DD HH:MM", the HTML "T" separator is accepted too
        datetime: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
enum StorageAction {
    List,
    /// delete a stored file and list what remains
    Delete { file_name: String },
}

#[tokio::main]
async fn main() {
    let log_level = EnvFilter::try_from_default_env().unwrap_or(EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    let cli = Cli::parse();
    let config = match read_config(&cli.config) {
        Err(error) => {
            panic!("Critical error - config could not be processed: {error}");
        }
        Ok(config) => config,
    };
    let api = match DeviceApi::new(&config) {
        Err(error) => {
            panic!("Critical error - {error}");
        }
        Ok(api) => api,
    };

    let result = match cli.command.unwrap_or(Command::Watch) {
        Command::Watch => watch(&api).await,
        Command::Status => status(&api).await,
        Command::Settings {
            action: SettingsAction::Show,
        } => settings::show(&api).await,
        Command::Settings {
            action:
                SettingsAction::Set {
                    graph_points,
                    refresh_rate,
                    set_point,
                    interval,
                },
        } => {
            let update = SettingsUpdate {
                graph_points,
                refresh_rate,
                set_point,
                interval,
            };
            settings::apply(&api, update).await
        }
        Command::Datetime {
            action: DatetimeAction::Get,
        } => clock::show(&api).await,
        Command::Datetime {
            action: DatetimeAction::Set { datetime },
        } => clock::set(&api, datetime).await,
        Command::Storage {
            action: StorageAction::List,
        } => storage::show_snapshot(&api).await,
        Command::Storage {
            action: StorageAction::Delete { file_name },
        } => storage::delete_file(&api, &file_name).await,
        Command::Info => show_info(&api).await,
    };

    if let Err(error) = result {
        error!("{error}");
        std::process::exit(1);
    }
}

/// startup order: version banner (non-fatal), settings (fall back to
/// chart-disabled defaults), then the live loop
async fn watch(api: &DeviceApi) -> Result<(), String> {
    match api.info().await {
        Ok(device) => info!("Device version {}", device.version),
        Err(error) => warn!("Could not read device info - {error}"),
    }

    let settings = match api.settings().await {
        Ok(settings) => settings,
        Err(error) => {
            warn!("Could not read settings, live chart stays disabled - {error}");
            DeviceSettings::default()
        }
    };

    let stop = Arc::new(AtomicBool::new(false));
    let stop_signal = stop.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Ctrl-C received, stopping after the current cycle");
            stop_signal.store(true, Ordering::Relaxed);
        }
    });

    let mut poller = Poller::new(&settings, stop);
    poller.run(api, &LogSurface).await;
    Ok(())
}

/// one-shot poll cycle over the same code path the live loop uses
async fn status(api: &DeviceApi) -> Result<(), String> {
    let settings = match api.settings().await {
        Ok(settings) => settings,
        Err(error) => {
            warn!("Could not read settings - {error}");
            DeviceSettings::default()
        }
    };

    let mut poller = Poller::new(&settings, Arc::new(AtomicBool::new(false)));
    match poller.poll_once(api, &LogSurface).await {
        CycleOutcome::Failed => Err("Could not fetch a measurement from the device".to_string()),
        _ => Ok(()),
    }
}

async fn show_info(api: &DeviceApi) -> Result<(), String> {
    let device = api
        .info()
        .await
        .map_err(|e| format!("Failed to get device info - {e}"))?;
    info!("Version      {}", device.version);
    info!("Coincell     {} V", device.coincell);
    info!("Temperature  {} C", device.temperature);
    Ok(())
}
