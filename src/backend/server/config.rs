/**
 * Server Configuration
 *
 * Configuration is read from environment variables (a `.env` file is
 * loaded by the binary first). Every value has a development default so
 * the server starts with no setup at all.
 *
 * | Variable                   | Default                   |
 * |----------------------------|---------------------------|
 * | `DATABASE_URL`             | `sqlite://socialmedia.db` |
 * | `DATABASE_MAX_CONNECTIONS` | `1`                       |
 * | `JWT_SECRET`               | development fallback      |
 * | `TOKEN_TTL_SECS`           | `3600`                    |
 * | `BCRYPT_COST`              | `10`                      |
 * | `PORT` / `SERVER_PORT`     | `5000`                    |
 */

use thiserror::Error;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://socialmedia.db";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 60 * 60;
pub const DEFAULT_BCRYPT_COST: u32 = 10;
pub const MIN_BCRYPT_COST: u32 = 4;
pub const MAX_BCRYPT_COST: u32 = 31;
/// One year
pub const MAX_TOKEN_TTL_SECS: u64 = 365 * 24 * 60 * 60;
const DEV_JWT_SECRET: &str = "your-secret-key-change-in-production";

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
    #[error("{name} must be greater than zero")]
    Zero { name: &'static str },
}

/// Runtime configuration of the server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// sqlx SQLite connection string
    pub database_url: String,
    /// Upper bound of the connection pool (forced to 1 for in-memory databases)
    pub max_connections: u32,
    /// HMAC secret used to sign session tokens
    pub jwt_secret: String,
    /// Session token lifetime in seconds
    pub token_ttl_secs: u64,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
    /// TCP port the binary listens on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: 1,
            jwt_secret: DEV_JWT_SECRET.to_string(),
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let jwt_secret = match lookup("JWT_SECRET").filter(|s| !s.is_empty()) {
            Some(secret) => secret,
            None => {
                tracing::warn!("Missing JWT_SECRET, falling back to the development secret");
                defaults.jwt_secret
            }
        };

        let config = Self {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            max_connections: parse_var(&lookup, "DATABASE_MAX_CONNECTIONS")?
                .unwrap_or(defaults.max_connections),
            jwt_secret,
            token_ttl_secs: parse_var(&lookup, "TOKEN_TTL_SECS")?.unwrap_or(defaults.token_ttl_secs),
            bcrypt_cost: parse_var(&lookup, "BCRYPT_COST")?.unwrap_or(defaults.bcrypt_cost),
            port: match parse_var(&lookup, "PORT")? {
                Some(port) => port,
                None => parse_var(&lookup, "SERVER_PORT")?.unwrap_or(defaults.port),
            },
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_connections == 0 {
            return Err(ConfigError::Zero { name: "DATABASE_MAX_CONNECTIONS" });
        }
        if self.token_ttl_secs == 0 {
            return Err(ConfigError::Zero { name: "TOKEN_TTL_SECS" });
        }
        if self.token_ttl_secs > MAX_TOKEN_TTL_SECS {
            return Err(ConfigError::InvalidValue {
                name: "TOKEN_TTL_SECS",
                value: self.token_ttl_secs.to_string(),
            });
        }
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                name: "BCRYPT_COST",
                value: self.bcrypt_cost.to_string(),
            });
        }
        Ok(())
    }

    /// Whether the database lives only in memory
    pub fn is_in_memory(&self) -> bool {
        self.database_url.contains(":memory:") || self.database_url.contains("mode=memory")
    }
}

fn parse_var<F, T>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { name, value }),
    }
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    config: ServerConfig,
}

impl ServerConfigBuilder {
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.config.database_url = url.into();
        self
    }

    pub fn max_connections(mut self, max: u32) -> Self {
        self.config.max_connections = max;
        self
    }

    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.config.jwt_secret = secret.into();
        self
    }

    pub fn token_ttl_secs(mut self, secs: u64) -> Self {
        self.config.token_ttl_secs = secs;
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.config.bcrypt_cost = cost;
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
