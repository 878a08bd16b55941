//! Runtime configuration.
//!
//! The listener address is fixed. Only log verbosity can be tuned, through
//! the standard `RUST_LOG` variable.

use std::net::{Ipv4Addr, SocketAddr};

/// TCP port the API listens on.
pub const PORT: u16 = 3000;

/// Filter used when `RUST_LOG` is unset or blank.
pub const DEFAULT_LOG_FILTER: &str = "synergiad=info,synergia=info,tower_http=debug";

/// Settings resolved at startup.
#[derive(Debug)]
pub struct Config {
    /// Address the listener binds to.
    pub bind_addr: SocketAddr,
    /// Filter directive (`RUST_LOG` syntax).
    pub log_filter: String,
}

impl Config {
    /// Resolve the configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::with_log_filter(std::env::var("RUST_LOG").ok())
    }

    fn with_log_filter(filter: Option<String>) -> Self {
        let log_filter = filter
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, PORT)),
            log_filter,
        }
    }
}
