use dotenvy::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use user_crud_axum::{StoreConfig, UserStore, user_crud_router};

mod config;
mod server;

use crate::{config::ServerConfig, server::spawn_http_server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "{}=debug,user_crud=debug,user_crud_axum=debug,tower_http=debug",
                    env!("CARGO_CRATE_NAME")
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let server_config = ServerConfig::from_env()?;
    let store_config = StoreConfig::from_env()?;

    // The store is built once here and handed to the router
    let store = UserStore::connect(&store_config).await?;
    tracing::info!("Connected to user store");

    let app = user_crud_router(store);

    spawn_http_server(server_config.port, app).await??;
    Ok(())
}
