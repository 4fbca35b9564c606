//! Person API - HTTP validation showcase.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_lib::config::ApiConfig;

#[derive(Parser)]
#[command(name = "person-api")]
#[command(author, version, about = "Person validation API", long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        #[arg(short = 'H', long, env = "API_HOST")]
        host: Option<String>,
        #[arg(short, long, env = "API_PORT")]
        port: Option<u16>,
        /// Inclusive upper bound for every age field
        #[arg(long, env = "PERSON_MAX_AGE")]
        max_age: Option<i64>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = ApiConfig::from_env();

    init_tracing(cli.verbose, &config.service.log_level);

    match cli.command {
        Commands::Serve {
            host,
            port,
            max_age,
        } => {
            if let Some(host) = host {
                config.service.host = host;
            }
            if let Some(port) = port {
                config.service.port = port;
            }
            match max_age {
                Some(max_age) if max_age > 0 => config.validation.max_person_age = max_age,
                Some(max_age) => tracing::warn!(max_age, "Ignoring non-positive maximum age"),
                None => {}
            }
            tracing::debug!(?config, "Configuration loaded");

            api_lib::run_server(config).await?;
        }
    }

    Ok(())
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool, log_level: &str) {
    let filter = if verbose { "debug" } else { log_level };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
