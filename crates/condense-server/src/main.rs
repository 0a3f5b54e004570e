use std::sync::Arc;

use condense_model::registry::ModelRegistry;
use condense_server::config::ServerConfig;
use condense_server::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    condense_server::init_tracing();

    let config = ServerConfig::from_env()?;

    tracing::info!(
        models = config.catalog.models().len(),
        default_model = %config.catalog.default_model(),
        max_upload_bytes = config.max_upload_bytes,
        "starting condense"
    );

    let registry = Arc::new(ModelRegistry::new(config.loader()));
    let state = AppState::new(registry, config.catalog.clone(), config.max_upload_bytes);
    let app = condense_server::router(state);

    if std::env::var("AWS_LAMBDA_RUNTIME_API").is_ok() {
        return lambda_http::run(app).await.map_err(|e| eyre::eyre!(e));
    }

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
