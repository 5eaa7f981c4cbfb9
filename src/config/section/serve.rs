//! `[serve]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [serve]
//! interface = "0.0.0.0"   # Network interface (127.0.0.1 = localhost only)
//! port = 8080             # HTTP port number
//! workers = 8             # Request worker threads
//! ```

use std::net::{IpAddr, Ipv4Addr};

use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServeConfig {
    /// Network interface to bind.
    /// - `0.0.0.0` (default): all interfaces (LAN accessible)
    /// - `127.0.0.1`: localhost only
    pub interface: IpAddr,

    /// HTTP port number.
    pub port: u16,

    /// Size of the request worker pool.
    pub workers: usize,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            interface: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            workers: 8,
        }
    }
}

impl ServeConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.workers == 0 {
            diag.error("serve.workers", "must be at least 1");
        }
    }
}
