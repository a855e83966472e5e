use super::{
    cors_config, env::ConfigError, food_api_config::FoodApiConfig, server_config::ServerConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub food_api: FoodApiConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            cors: cors_config::init_cors(),
            food_api: FoodApiConfig::from_env()?,
        })
    }
}
