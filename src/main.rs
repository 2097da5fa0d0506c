//! SupplyNet - supply-chain network simulation service
//!
//! Commands:
//! - `serve`: run the HTTP API (default)
//! - `run`: simulate a request file offline and print the response body
//!
//! Binary: supplynet

use std::error::Error;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use supplynet::api::{create_router, AppState, SimulationResponse};
use supplynet::config::ServerConfig;
use supplynet::error::ReportError;
use supplynet::io::reporting::write_inventory_csv;
use supplynet::io::schema::SimulationRequest;
use supplynet::simulation::orchestrator::simulate_request;

/// Supply-chain network simulation service
#[derive(Parser)]
#[command(name = "supplynet", version)]
#[command(about = "Simulate supply-chain networks over HTTP or from the command line", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the HTTP API
    Serve,

    /// Run one request file and print the JSON response
    Run {
        /// Path to a simulation request in JSON
        request: PathBuf,

        /// Also write inventory series to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Log every processed engine event at debug level
        #[arg(long, env = "ENGINE_LOGGING")]
        engine_logging: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve().await,
        Commands::Run {
            request,
            csv,
            engine_logging,
        } => run_file(&request, csv.as_deref(), engine_logging),
    }
}

async fn serve() -> Result<(), Box<dyn Error>> {
    let config = ServerConfig::from_env()?;
    let bind_addr = config.bind_address;
    let app = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!(address = %bind_addr, version = env!("CARGO_PKG_VERSION"), "SupplyNet API listening");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_file(path: &Path, csv: Option<&Path>, engine_logging: bool) -> Result<(), Box<dyn Error>> {
    let text = std::fs::read_to_string(path).map_err(ReportError::from)?;
    let request: SimulationRequest = serde_json::from_str(&text).map_err(ReportError::from)?;

    match simulate_request(&request, engine_logging) {
        Ok(outcome) => {
            if let Some(csv_path) = csv {
                write_inventory_csv(csv_path, &outcome.inventory_data)?;
            }
            let body = SimulationResponse::success(outcome);
            println!("{}", serde_json::to_string_pretty(&body)?);
            Ok(())
        }
        Err(err) => {
            let body = SimulationResponse::failure(err.report());
            println!("{}", serde_json::to_string_pretty(&body)?);
            Err(err.into())
        }
    }
}
