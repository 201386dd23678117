//! Mergington activities server.
//!
//! Usage:
//!   mergington-activities serve [--port 8000] [--teachers teachers.json]

use clap::{Parser, Subcommand};
use mergington_activities::credentials::CredentialDirectory;
use mergington_activities::http_server::{self, ServerConfig};
use mergington_activities::state::AppState;
use std::net::IpAddr;
use std::path::PathBuf;
use std::process::exit;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "mergington-activities")]
#[command(about = "Extracurricular activity sign-up service")]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Address to bind
        #[arg(long, default_value = "0.0.0.0")]
        host: IpAddr,

        /// Port to listen on
        #[arg(long, default_value = "8000")]
        port: u16,

        /// JSON file with teacher usernames and passwords
        #[arg(long, default_value = "teachers.json")]
        teachers: PathBuf,

        /// Directory served under /static
        #[arg(long, default_value = "static")]
        static_dir: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    match args.command {
        Commands::Serve {
            host,
            port,
            teachers,
            static_dir,
        } => {
            let credentials = match CredentialDirectory::load(&teachers) {
                Ok(c) => c,
                Err(e) => {
                    error!("{}", e);
                    exit(1);
                }
            };
            let state = AppState::seeded(credentials);
            info!(
                activities = state.catalog.read().await.len(),
                static_dir = ?static_dir,
                "State initialized"
            );

            let config = ServerConfig {
                host,
                port,
                static_dir,
            };
            if let Err(e) = http_server::run_server(config, state).await {
                error!("{}", e);
                exit(1);
            }
        }
    }
}
