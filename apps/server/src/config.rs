//! Server configuration.

use std::env;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Database URL.
    pub database_url: String,
    /// Log level.
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: env::var("DIET_SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("DIET_SERVER_PORT")
                .unwrap_or_else(|_| "3333".to_string())
                .parse()
                .unwrap_or(3333),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:daily-diet.db?mode=rwc".to_string()),
            log_level: env::var("DIET_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Returns the server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        // Clear any existing env vars
        // SAFETY: Tests run serially or in isolation
        unsafe {
            env::remove_var("DIET_SERVER_HOST");
            env::remove_var("DIET_SERVER_PORT");
            env::remove_var("DATABASE_URL");
            env::remove_var("DIET_LOG_LEVEL");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 3333);
        assert_eq!(config.server_addr(), "0.0.0.0:3333");
        assert_eq!(config.log_level, "info");
    }
}
