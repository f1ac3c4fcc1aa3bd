//! Runtime configuration from environment variables.

use std::env;
use std::net::SocketAddr;

const DEFAULT_STORE_BUFFER: usize = 32;
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockConfig {
    /// Capacity of the store actor's request queue
    pub store_buffer: usize,

    /// Address the HTTP surface listens on
    pub bind_addr: SocketAddr,

    /// Log filter handed to `setup_tracing`
    pub log_filter: String,

    /// Whether the binary serves HTTP after the demo workflow
    pub serve: bool,
}

impl Default for StockConfig {
    fn default() -> Self {
        Self {
            store_buffer: DEFAULT_STORE_BUFFER,
            bind_addr: default_bind_addr(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            serve: false,
        }
    }
}

impl StockConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `BEERSTOCK_STORE_BUFFER`: store queue capacity (default: 32)
    /// - `BEERSTOCK_BIND_ADDR`: HTTP listen address (default: 127.0.0.1:8080)
    /// - `BEERSTOCK_LOG` or `RUST_LOG`: log filter (default: info)
    /// - `BEERSTOCK_SERVE`: serve HTTP, `true` or `1` (default: false)
    ///
    /// Unparseable values fall back to the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            store_buffer: lookup("BEERSTOCK_STORE_BUFFER")
                .and_then(|v| v.parse().ok())
                .filter(|&size: &usize| size > 0)
                .unwrap_or(DEFAULT_STORE_BUFFER),

            bind_addr: lookup("BEERSTOCK_BIND_ADDR")
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_bind_addr),

            log_filter: lookup("BEERSTOCK_LOG")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),

            serve: lookup("BEERSTOCK_SERVE")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(false),
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8080))
}
