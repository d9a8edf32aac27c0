use std::env;

use super::env_or;

/// HTTP listener settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl ServerConfig {
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "127.0.0.1")
    /// - SERVICE_PORT: Port to bind (default: 8080)
    pub fn from_env() -> Self {
        Self {
            ip: env::var("SERVICE_IP").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env_or("SERVICE_PORT", 8080),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_bind_address_from_ip_and_port() {
        let config = ServerConfig {
            ip: "0.0.0.0".to_string(),
            port: 5501,
        };

        assert_eq!(config.bind_address(), "0.0.0.0:5501");
    }

    #[test]
    fn should_fall_back_when_value_is_not_numeric() {
        // Variable name is unique to this test so parallel tests cannot race on it.
        unsafe { env::set_var("CATALOG_TEST_NOT_A_PORT", "http") };
        assert_eq!(env_or::<u16>("CATALOG_TEST_NOT_A_PORT", 8080), 8080);
    }
}
