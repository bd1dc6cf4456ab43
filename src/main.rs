use fitness_center_api::api::routes::create_routes;
use fitness_center_api::config::{init_schema, AppConfig, DatabaseConfig};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env()?;
    let db_config = DatabaseConfig::from_env()?;

    let db = db_config.create_pool().await?;
    init_schema(&db).await?;

    let app = create_routes(db);

    let listener = TcpListener::bind(config.server_address()).await?;
    info!(
        "Fitness center API starting on http://{}",
        config.server_address()
    );
    info!(
        "Health check available at http://{}/health",
        config.server_address()
    );

    axum::serve(listener, app).await?;

    Ok(())
}
