use std::env;

const DEFAULT_PORT: u16 = 9000;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// Runtime configuration for the HTTP service, sourced from the environment.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub port: u16,
    pub max_upload_bytes: usize,
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        let port = env::var("KEYWORD_SERVICE_PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let max_upload_bytes = env::var("KEYWORD_MAX_UPLOAD_BYTES")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES);

        Self {
            port,
            max_upload_bytes,
        }
    }

    pub fn log_config(&self) {
        tracing::info!("Configuration:");
        tracing::info!("   Port: {}", self.port);
        tracing::info!("   Max upload size: {} bytes", self.max_upload_bytes);
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.port, 9000);
        assert_eq!(config.max_upload_bytes, 50 * 1024 * 1024);
    }
}
