//! Recipe API - HTTP backend entry point.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use common::{AppConfig, ServerConfig};

#[derive(Parser)]
#[command(name = "api")]
#[command(about = "Recipe application backend")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to (defaults to SERVER_HOST)
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on (defaults to SERVER_PORT)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    // Validate configuration before anything touches the network
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };
    tracing::debug!(?config, "Configuration loaded");

    let result = match cli.command {
        Commands::Serve { host, port } => {
            let server = ServerConfig {
                host: host.unwrap_or_else(|| config.server.host.clone()),
                port: port.unwrap_or(config.server.port),
            };
            api_lib::run_server(config, server).await
        }
    };

    if let Err(e) = result {
        tracing::error!("Server failed: {}", e);
        std::process::exit(1);
    }
}
