use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use board::{app, db, settings::Settings, AppState};

#[derive(Parser)]
#[command(name = "board", about = "Message board server")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server (default).
    Serve,
    /// Create the database schema and exit.
    InitDb,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let settings = Settings::new().context("Failed to load settings")?;

    let pool = db::connect(&settings.database.url)
        .await
        .context("Failed to connect to database")?;
    db::init_database(&pool)
        .await
        .context("Failed to create tables")?;

    if let Some(Command::InitDb) = cli.command {
        println!("Initialized the database.");
        return Ok(());
    }

    let router = app(AppState { pool });

    let addr = settings.server.address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server listening on {}", addr);

    axum::serve(listener, router).await?;
    Ok(())
}
