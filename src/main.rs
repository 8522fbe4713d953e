use anyhow::Result;
use clap::{Parser, Subcommand};
use tripdeck_itinerary::{DataLoader, Dataset, Language, RouteOption};

/// tripdeck - day-by-day travel itinerary site
#[derive(Parser)]
#[command(name = "tripdeck")]
#[command(about = "Server-rendered travel itinerary with route options and a route map", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Load and validate the itinerary data files, then exit
    DataCheck,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = tripdeck::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    tripdeck::observability::init_observability(
        "tripdeck",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => serve_command(config, host, port).await,
        Commands::DataCheck => data_check_command(config).await,
    }
}

#[tracing::instrument(skip(config))]
async fn serve_command(
    config: tripdeck::config::Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting tripdeck server...");

    let host = host_override.unwrap_or_else(|| config.server.host.clone());
    let port = port_override.unwrap_or(config.server.port);

    let app = tripdeck::create_app(config).await?;

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Load every dataset once and report its state; exits non-zero when a
/// required English dataset is broken. The same check `serve` performs at
/// startup, without binding a socket.
#[tracing::instrument(skip(config))]
async fn data_check_command(config: tripdeck::config::Config) -> Result<()> {
    tracing::info!(dir = %config.data.dir, "Checking itinerary data files...");

    let store = DataLoader::new(&config.data.dir).load().await?;

    for option in [RouteOption::Option1, RouteOption::Option2] {
        for language in [Language::En, Language::De] {
            match store.dataset(option, language) {
                Dataset::Ready(days) => {
                    tracing::info!(%option, %language, days = days.len(), "dataset ready")
                }
                Dataset::Missing => tracing::info!(%option, %language, "dataset missing"),
                Dataset::Failed => tracing::warn!(%option, %language, "dataset failed to parse"),
            }
        }
    }

    tracing::info!("Data check completed");

    Ok(())
}
