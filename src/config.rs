//! Connection configuration for the search engine client.

/// Connection configuration for a single search engine endpoint.
///
/// The host carries the scheme (e.g., "http://localhost") and is combined
/// with the port to form the endpoint URL. Both feature toggles default to
/// `false`. The configuration is consumed at client construction and is
/// immutable afterwards.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Endpoint host, including the scheme.
    pub host: String,
    /// Endpoint port.
    pub port: u16,
    /// Whether node sniffing is requested.
    pub sniff: bool,
    /// Whether to verify the endpoint is reachable at construction time.
    pub healthcheck: bool,
}

impl ClientConfig {
    /// Create a configuration for the given host and port with both
    /// toggles disabled.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            sniff: false,
            healthcheck: false,
        }
    }

    /// Enable or disable node sniffing.
    pub fn with_sniffing(mut self, enabled: bool) -> Self {
        self.sniff = enabled;
        self
    }

    /// Enable or disable the construction-time health check.
    pub fn with_healthcheck(mut self, enabled: bool) -> Self {
        self.healthcheck = enabled;
        self
    }

    /// The full endpoint URL, `{host}:{port}`.
    pub fn endpoint(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_format() {
        let config = ClientConfig::new("http://localhost", 9200);
        assert_eq!(config.endpoint(), "http://localhost:9200");
    }

    #[test]
    fn test_toggles_default_off() {
        let config = ClientConfig::new("http://search.internal", 9200);
        assert!(!config.sniff);
        assert!(!config.healthcheck);
    }

    #[test]
    fn test_builder_toggles() {
        let config = ClientConfig::new("http://localhost", 9200)
            .with_sniffing(true)
            .with_healthcheck(true);
        assert!(config.sniff);
        assert!(config.healthcheck);
    }
}
