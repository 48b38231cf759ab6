/// Configuration management for the API server
///
/// This module loads configuration from environment variables (and a `.env`
/// file when present) layered over built-in defaults.
///
/// # Environment Variables
///
/// - `API_HOST`: Host to bind to (default: 0.0.0.0)
/// - `API_PORT`: Port to bind to (default: 8080)
/// - `DATABASE_URL`: SQLite connection string (default: sqlite:taskmanager.db)
/// - `DATABASE_MAX_CONNECTIONS`: Pool size (default: 10)
/// - `RUST_LOG`: Log filter (default: debug for this crate)
///
/// # Example
///
/// ```no_run
/// use taskmanager_api::config::Config;
///
/// # fn example() -> Result<(), taskmanager_api::config::ConfigError> {
/// let config = Config::from_env()?;
/// println!("Server will listen on {}", config.bind_address());
/// # Ok(())
/// # }
/// ```

use serde::{Deserialize, Serialize};
use taskmanager_shared::db::pool::DatabaseConfig;
use thiserror::Error;

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// API server configuration
    pub api: ApiConfig,

    /// Database configuration
    pub database: DatabaseConfig,
}

/// API server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or a value has the wrong type
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// The pool must be allowed at least one connection
    #[error("DATABASE_MAX_CONNECTIONS must be at least 1")]
    EmptyPool,
}

/// Flat view of the environment, one field per variable
#[derive(Debug, Deserialize)]
struct EnvSettings {
    api_host: String,
    api_port: u16,
    database_url: String,
    database_max_connections: u32,
}

impl Config {
    /// Loads configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns an error if a variable has an invalid value
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (for development)
        dotenvy::dotenv().ok();

        Self::from_source(config::Environment::default())
    }

    /// Loads configuration from an explicit environment source
    ///
    /// # Errors
    ///
    /// Returns an error if a variable has an invalid value
    pub fn from_source(source: config::Environment) -> Result<Self, ConfigError> {
        let settings: EnvSettings = config::Config::builder()
            .set_default("api_host", "0.0.0.0")?
            .set_default("api_port", "8080")?
            .set_default("database_url", "sqlite:taskmanager.db")?
            .set_default("database_max_connections", "10")?
            .add_source(source)
            .build()?
            .try_deserialize()?;

        if settings.database_max_connections == 0 {
            return Err(ConfigError::EmptyPool);
        }

        let defaults = DatabaseConfig::default();

        Ok(Self {
            api: ApiConfig {
                host: settings.api_host,
                port: settings.api_port,
            },
            database: DatabaseConfig {
                url: settings.database_url,
                max_connections: settings.database_max_connections,
                min_connections: defaults.min_connections.min(settings.database_max_connections),
                ..defaults
            },
        })
    }

    /// Returns the server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api.host, self.api.port)
    }
}
