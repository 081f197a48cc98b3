use climate_routes::config::{Config, REQUIRED_VARIABLES};
use climate_routes::db::Database;

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(e) = run().await {
        log::error!("{e}");
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::env().inspect_err(|e| {
        log::error!(
            "config: {e}. Check all required environment variables ({}) are set.",
            REQUIRED_VARIABLES.join(", ")
        );
    })?;

    config.log();

    let database = Database::connect(&config.sqlite_url).await?;
    log::info!("Opened dataset ({})", config.sqlite_url);

    database.verify_schema().await?;
    log::info!("Found all expected dataset tables");

    let state = climate_routes::api::service::State::new(database);

    let listen_addr = format!("0.0.0.0:{}", config.listen_port);
    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;

    let router = climate_routes::api::service::router::router(state);

    log::info!("Listening on {listen_addr}");
    axum::serve(listener, router).await?;

    Ok(())
}
