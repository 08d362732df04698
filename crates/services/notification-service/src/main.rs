//! Seed Notifications - insert sample notifications for one user.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use notification_service_lib::{cli::run_seed_command, MongoConnector};

#[derive(Parser)]
#[command(name = "seed-notifications")]
#[command(about = "Insert sample notifications for a user")]
struct Cli {
    /// Identifier of the user receiving the notifications
    user_id: Option<String>,

    /// MongoDB connection string
    #[arg(long, env = "MONGODB_URI", hide_env_values = true)]
    mongodb_uri: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let connector = MongoConnector::new(cli.mongodb_uri.unwrap_or_default());

    let code = run_seed_command(
        cli.user_id.as_deref(),
        &connector,
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    )
    .await;
    ExitCode::from(code)
}
