use std::sync::Arc;

use anyhow::Context;
use axum::http::Method;
use dotenvy::dotenv;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

use notes_api::{
    config::Config, create_router, logging, seed::seed_demo_data, AppState, MemoryNoteStore,
    NoteStore, PgNoteStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenv();
    let config = Config::from_env().context("failed to read configuration")?;
    logging::init(config.log_format);

    let store: Arc<dyn NoteStore> = match config.database_url.as_deref() {
        Some(database_url) => Arc::new(
            PgNoteStore::connect(database_url, config.max_connections)
                .await
                .context("failed to connect to the database")?,
        ),
        None => {
            warn!("DATABASE_URL is not set, notes are kept in memory only");
            Arc::new(MemoryNoteStore::new())
        }
    };

    if config.seed_demo_data {
        seed_demo_data(store.as_ref())
            .await
            .context("failed to seed demo data")?;
    }

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any)
        .allow_origin(Any);

    let app = create_router(Arc::new(AppState::new(store)))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = config.addr();
    info!(%addr, "server started");
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .context("server error")?;
    Ok(())
}
