use anyhow::Context as _;
use api::AppState;
use tower_sessions_sqlx_store::SqliteStore;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use web::settings::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Settings::new().context("Failed to load settings")?;
    if settings.uses_insecure_secret() {
        warn!("NOTIONISH_SECRET is not set; session cookies are signed with a publicly known key");
    }

    // Initialize database pool
    let pool = api::db::connect(&settings.database.url)
        .await
        .context("Failed to connect to database")?;
    api::db::init_database(&pool)
        .await
        .context("Failed to create tables")?;

    // Sessions live in the same database
    let session_store = SqliteStore::new(pool.clone());
    session_store
        .migrate()
        .await
        .context("Failed to create session table")?;

    let router = web::app(AppState::new(pool), session_store, &settings);

    let addr = settings.server.address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server listening on {}", addr);

    axum::serve(listener, router).await?;
    Ok(())
}
