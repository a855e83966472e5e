use dotenvy::dotenv;

mod api {
    pub mod error;
    pub mod tags;
    pub mod health {
        pub mod routes;
    }
    pub mod item {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod product {
        pub mod dto;
        pub mod routes;
    }
}
mod config {
    pub mod app_config;
    pub mod cors_config;
    pub mod database_config;
    pub mod env;
    pub mod food_api_config;
    pub mod server_config;
}
mod setup {
    pub mod dependency_injection;
    pub mod server;
}

use config::{app_config::AppConfig, database_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API Entry Point
///
/// Initializes the application, wires dependencies, and starts the HTTP server.
/// - config/: Application configuration (server, CORS, database, product lookup)
/// - setup/: Dependency injection and server setup
/// - api/: Route handlers and DTOs
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3. Load configuration
    let config = AppConfig::from_env()?;

    // 4. Initialize the item store
    let pool = database_config::init_database().await?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(pool.clone(), &config.food_api)?;

    // 6. Run server until Ctrl-C
    let result = Server::run(config, container).await;

    // 7. Release the store
    pool.close().await;
    tracing::info!("Item store closed");

    result
}
