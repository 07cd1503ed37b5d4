//! Service Configuration
//!
//! Bind address and backing table name, read once at process start and
//! never re-derived per request.

use serde::{Deserialize, Serialize};

/// Environment variable naming the backing table.
pub const TABLE_NAME_VAR: &str = "PRODUCT_TABLE_NAME";

/// Environment variable overriding the bind host.
pub const HOST_VAR: &str = "PRODUCT_API_HOST";

/// Environment variable overriding the bind port.
pub const PORT_VAR: &str = "PRODUCT_API_PORT";

/// Service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 3000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Name of the product table in the store (default: "products")
    #[serde(default = "default_table_name")]
    pub table_name: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_table_name() -> String {
    "products".to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            table_name: default_table_name(),
        }
    }
}

impl ServiceConfig {
    /// Create a config from the environment, falling back to defaults for
    /// anything unset or unparseable.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(table) = std::env::var(TABLE_NAME_VAR) {
            if !table.is_empty() {
                config.table_name = table;
            }
        }
        if let Ok(host) = std::env::var(HOST_VAR) {
            if !host.is_empty() {
                config.host = host;
            }
        }
        if let Ok(port) = std::env::var(PORT_VAR) {
            if let Ok(port) = port.parse() {
                config.port = port;
            }
        }

        config
    }

    /// Create a new config with the specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServiceConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.table_name, "products");
    }

    #[test]
    fn test_socket_addr() {
        let config = ServiceConfig::with_port(8080);
        assert_eq!(config.socket_addr(), "0.0.0.0:8080");
    }
}
