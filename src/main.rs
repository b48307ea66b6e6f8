//! Pi Weather Station binary.
//!
//! Runs the sampler and web server, or the terminal dashboard.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use pi_weather_station::{
    dashboard::{self, DEFAULT_POLL_INTERVAL},
    millidegrees_to_celsius, start_web_server, DatabaseConfig, HttpSource, LibsqlStore,
    MemoryStore, ReadingStore, Sampler, TemperatureSensor, ThermalZoneSensor, WebConfig,
    DEFAULT_SAMPLE_INTERVAL, DEFAULT_STATIC_DIR, DEFAULT_WEB_PORT,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn, Level};
use tracing_subscriber::{filter::LevelFilter, EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "pi_weather_station")]
#[command(about = "🌡️ Pi Weather Station - temperature sampling and dashboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = "Samples the Raspberry Pi temperature sensor, stores readings and serves them over HTTP")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Serve options used when no subcommand is given
    #[command(flatten)]
    serve: ServeArgs,

    /// Web server bind address
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Web server port
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_WEB_PORT)]
    port: u16,

    /// Listen on a filesystem socket instead of a TCP port
    #[arg(long, env = "SOCKET_PATH")]
    socket: Option<PathBuf>,

    /// Sensor file holding millidegrees Celsius
    #[arg(long, env = "SENSOR_PATH", default_value = pi_weather_station::sampler::DEFAULT_SENSOR_PATH)]
    sensor_path: PathBuf,

    /// Sampling interval in seconds
    #[arg(short, long, default_value_t = DEFAULT_SAMPLE_INTERVAL.as_secs())]
    interval: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample the sensor and serve readings (default)
    Serve(ServeArgs),

    /// Show the polling dashboard in the terminal
    Watch(WatchArgs),

    /// Read the sensor once and exit
    Sample(SampleArgs),
}

#[derive(Args)]
struct ServeArgs {
    /// Static files directory
    #[arg(long, env = "STATIC_DIR", default_value = DEFAULT_STATIC_DIR)]
    static_dir: PathBuf,

    /// Enable CORS headers
    #[arg(long)]
    cors: bool,

    /// Keep readings in memory instead of the libSQL database
    #[arg(long)]
    memory_store: bool,
}

#[derive(Args)]
struct WatchArgs {
    /// Base URL of the station
    #[arg(default_value = "http://localhost:3000")]
    url: String,

    /// Poll interval in seconds
    #[arg(long, default_value_t = DEFAULT_POLL_INTERVAL.as_secs())]
    poll_interval: u64,
}

#[derive(Args)]
struct SampleArgs {
    /// Output format: json or pretty
    #[arg(short, long, default_value = "pretty")]
    format: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    // Initialize tracing/logging
    init_logging(&cli)?;

    match &cli.command {
        Some(Commands::Serve(args)) => serve_command(&cli, args).await?,
        Some(Commands::Watch(args)) => watch_command(args).await?,
        Some(Commands::Sample(args)) => sample_command(&cli, args).await?,
        // Default to serve command
        None => serve_command(&cli, &cli.serve).await?,
    }

    Ok(())
}

fn log_level(cli: &Cli) -> Level {
    if cli.debug {
        Level::DEBUG
    } else if cli.verbose {
        Level::INFO
    } else {
        Level::WARN
    }
}

/// `RUST_LOG`-style directives win; without any, `level` applies.
fn log_filter(level: Level, directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .parse_lossy(directives)
}

fn init_logging(cli: &Cli) -> anyhow::Result<()> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(log_filter(log_level(cli), &directives))
        .with_target(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

async fn open_store(args: &ServeArgs) -> anyhow::Result<Arc<dyn ReadingStore>> {
    if args.memory_store {
        warn!("Using in-memory store, readings are lost on exit");
        return Ok(Arc::new(MemoryStore::new()));
    }

    let config = DatabaseConfig::from_env().map_err(|e| {
        error!("{}", e);
        e
    })?;
    let store = LibsqlStore::connect(&config)
        .await
        .context("Failed to connect to the reading store")?;

    Ok(Arc::new(store))
}

async fn serve_command(cli: &Cli, args: &ServeArgs) -> anyhow::Result<()> {
    info!("Starting Pi Weather Station...");
    anyhow::ensure!(cli.interval > 0, "Sampling interval must be at least one second");

    let store = open_store(args).await?;

    let sensor = ThermalZoneSensor::new(&cli.sensor_path);
    let period = Duration::from_secs(cli.interval);
    let _sampler = Sampler::new(sensor, store.clone()).spawn(period);
    info!(
        "Sampling {} every {}s",
        cli.sensor_path.display(),
        cli.interval
    );

    let web_config = WebConfig::from_listen_options(&cli.host, cli.port, cli.socket.clone())
        .with_static_path(Some(args.static_dir.clone()))
        .with_cors(args.cors);

    info!("Web server configuration:");
    info!("  - Listen address: {}", web_config.listen);
    info!("  - Static files: {}", args.static_dir.display());
    info!("  - CORS enabled: {}", args.cors);

    start_web_server(web_config, store).await?;

    Ok(())
}

async fn watch_command(args: &WatchArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.poll_interval > 0, "Poll interval must be at least one second");
    let source = HttpSource::new(&args.url);
    info!("Polling {} every {}s", source.url(), args.poll_interval);

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    dashboard::watch_terminal(source, Duration::from_secs(args.poll_interval), shutdown).await;

    Ok(())
}

async fn sample_command(cli: &Cli, args: &SampleArgs) -> anyhow::Result<()> {
    let sensor = ThermalZoneSensor::new(&cli.sensor_path);
    let raw = sensor.read_raw().await?;
    let temperature = millidegrees_to_celsius(&raw)?;
    let timestamp = chrono::Utc::now();

    match args.format.as_str() {
        "json" => {
            let json = serde_json::json!({
                "temperature": temperature,
                "timestamp": timestamp,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        "pretty" => {
            println!(
                "🌡️  {} at {}",
                dashboard::format_temperature(temperature),
                dashboard::format_timestamp(&timestamp)
            );
        }
        _ => {
            anyhow::bail!("Unsupported format: {}. Use 'json' or 'pretty'", args.format);
        }
    }

    Ok(())
}
