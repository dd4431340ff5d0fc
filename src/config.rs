use clap::Parser;

/// Runtime settings for the order service. Every flag can also be set from the environment.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "In-memory food delivery order service", long_about = None)]
pub struct Config {
    /// Address to bind the HTTP server to
    #[arg(long, env = "ORDER_SERVICE_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind the HTTP server to
    #[arg(short, long, env = "ORDER_SERVICE_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Number of HTTP worker threads (defaults to the number of CPUs)
    #[arg(short, long, env = "ORDER_SERVICE_WORKERS")]
    pub workers: Option<usize>,

    /// Default log filter, used when RUST_LOG is not set
    #[arg(short, long, env = "ORDER_SERVICE_LOG", default_value = "info,order_service=debug")]
    pub log_level: String,
}

impl Config {
    pub fn bind_addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["order_service"]).unwrap();

        // Environment may override defaults on CI machines, so only check when unset
        if std::env::var("ORDER_SERVICE_PORT").is_err() {
            assert_eq!(config.port, 8080);
        }
        if std::env::var("ORDER_SERVICE_WORKERS").is_err() {
            assert_eq!(config.workers, None);
        }
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = Config::try_parse_from([
            "order_service",
            "--host",
            "0.0.0.0",
            "--port",
            "9000",
            "--workers",
            "2",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(config.bind_addr(), ("0.0.0.0", 9000));
        assert_eq!(config.workers, Some(2));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        assert!(Config::try_parse_from(["order_service", "--port", "http"]).is_err());
    }
}
