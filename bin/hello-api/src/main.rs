//! hello-api – entry point.
//!
//! Startup order:
//! 1. Parse configuration from environment variables.
//! 2. Initialise structured tracing (JSON when `HELLO_LOG_JSON` is set).
//! 3. Create the lazily-connecting Postgres pool.
//! 4. Build the Axum router and start the HTTP server with graceful shutdown.

mod config;
mod db;
mod error;
mod middleware;
mod routes;
mod services;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;

use crate::config::Config;
use crate::db::postgres::PgGreetingStore;
use crate::state::AppState;

#[derive(Debug, Parser)]
#[command(name = "hello-api", version, about = "Greeting API backed by Postgres")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP server (default).
    Serve,
    /// Print the OpenAPI description as JSON and exit.
    Openapi,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(Config::from_env()).await,
        Command::Openapi => {
            println!("{}", routes::doc::get_docs().to_pretty_json()?);
            Ok(())
        }
    }
}

async fn serve(cfg: Config) -> anyhow::Result<()> {
    hello_common::logging::init(&cfg.log_level, cfg.log_json);
    info!(
        version = env!("CARGO_PKG_VERSION"),
        host = %cfg.host_identity,
        "hello-api starting"
    );

    // The pool connects on first use; a database that is still starting up
    // only degrades responses.
    let store = PgGreetingStore::connect_lazy(&cfg.db);
    info!(db = ?cfg.db, "database pool created");

    let addr: SocketAddr = cfg.bind_address.parse()?;
    let state = Arc::new(AppState {
        config: Arc::new(cfg),
        store: Arc::new(store),
    });

    let app = routes::build(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Server is running");

    axum::serve(listener, app)
        .with_graceful_shutdown(hello_common::shutdown::signal("hello-api"))
        .await?;

    info!("hello-api stopped");
    Ok(())
}
