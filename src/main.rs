use std::{sync::Arc, time::Duration};

use reelrank::{AppState, catalogue::Catalogue, config::Config, db, omdb::OmdbClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,reelrank=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Config::from_env()?;

    let http = reqwest::Client::builder()
        .user_agent("reelrank/0.1")
        .timeout(Duration::from_secs(config.omdb_timeout_secs))
        .build()?;

    let db = db::connect_and_migrate(&config.database_url).await?;

    let omdb = OmdbClient::new(
        http,
        config.omdb_api_key.clone(),
        config.omdb_base_url.clone(),
        config.omdb_rps,
    );

    let state = Arc::new(AppState {
        catalogue: Catalogue::new(db),
        omdb: Arc::new(omdb),
    });

    let app = reelrank::router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
