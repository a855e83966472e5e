use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use super::env::{ConfigError, parse_var_or};

/// Server configuration for HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    /// Load server configuration from environment variables
    ///
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "127.0.0.1")
    /// - SERVICE_PORT: Port to bind (default: "8080")
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            ip: parse_var_or("SERVICE_IP", IpAddr::V4(Ipv4Addr::LOCALHOST))?,
            port: parse_var_or("SERVICE_PORT", 8080)?,
        })
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        SocketAddr::new(self.ip, self.port).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_bind_address_from_ip_and_port() {
        // Arrange
        let config = ServerConfig {
            ip: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8080,
        };

        // Act
        let address = config.bind_address();

        // Assert
        assert_eq!(address, "127.0.0.1:8080");
    }

    #[test]
    fn should_bracket_ipv6_bind_address() {
        let config = ServerConfig {
            ip: "::1".parse().unwrap(),
            port: 3000,
        };

        assert_eq!(config.bind_address(), "[::1]:3000");
    }
}
