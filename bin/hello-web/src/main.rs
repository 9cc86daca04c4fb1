//! hello-web – entry point.
//!
//! `serve` (default):
//! 1. Parse server configuration from environment variables.
//! 2. Initialise structured tracing.
//! 3. Resolve the client configuration once (injected script, then the
//!    `HELLO_WEB_*` namespace, then defaults).
//! 4. Build the Axum router and serve with graceful shutdown.
//!
//! `gen-config` prints an `APP_CONFIG.js` built from the current environment:
//!
//! ```sh
//! hello-web gen-config > public/APP_CONFIG.js
//! ```

mod app_config;
mod client;
mod config;
mod error;
mod routes;
mod state;
mod templates;
mod view;

use std::net::SocketAddr;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;

use crate::app_config::{AppConfigScript, ClientConfig, EnvNamespace};
use crate::client::HttpGreetingClient;
use crate::config::Config;
use crate::state::AppState;

#[derive(Debug, Parser)]
#[command(name = "hello-web", version, about = "Web front-end for the greeting API")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the web server (default).
    Serve,
    /// Print APP_CONFIG.js for the current environment and exit.
    GenConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(Config::from_env()).await,
        Command::GenConfig => {
            let templates = templates::environment()?;
            print!("{}", AppConfigScript::from_env().render(&templates)?);
            Ok(())
        }
    }
}

async fn serve(cfg: Config) -> anyhow::Result<()> {
    hello_common::logging::init(&cfg.log_level, cfg.log_json);
    info!(version = env!("CARGO_PKG_VERSION"), "hello-web starting");

    let injected = AppConfigScript::load(&cfg.app_config_path);
    let env = EnvNamespace::from_process_env();
    let client_config = ClientConfig::resolve(injected.as_ref(), env.as_ref());
    info!(
        api_base_url = %client_config.api_base_url,
        hostname = %client_config.hostname,
        injected = injected.is_some(),
        "client config resolved"
    );

    let client = HttpGreetingClient::new(&client_config)?;
    let addr: SocketAddr = cfg.bind_address.parse()?;
    let state = Arc::new(AppState {
        config: Arc::new(cfg),
        client_config: Arc::new(client_config),
        client: Arc::new(client),
        templates: Arc::new(templates::environment()?),
    });

    let app = routes::build(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Server is running");

    axum::serve(listener, app)
        .with_graceful_shutdown(hello_common::shutdown::signal("hello-web"))
        .await?;

    info!("hello-web stopped");
    Ok(())
}
