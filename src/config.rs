//! Runtime configuration for the board server.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::ValueEnum;

/// Port the server listens on unless told otherwise.
pub const DEFAULT_PORT: u16 = 3003;

/// Which routes carry the `Content-Security-Policy` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CspScope {
    /// Every response, the vulnerable board included. Inline scripts are then
    /// blocked by the browser even on `/vulnerable`.
    #[default]
    Global,
    /// Only the safe board. `/vulnerable` is served fully exposed.
    SafeOnly,
    /// No CSP header anywhere.
    Off,
}

impl CspScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::SafeOnly => "safe-only",
            Self::Off => "off",
        }
    }
}

/// Settings that shape how the board behaves.
#[derive(Debug, Clone)]
pub struct BoardConfig {
    /// Address the HTTP listener binds to.
    pub host: IpAddr,
    pub port: u16,
    pub csp_scope: CspScope,
    /// Clean author names with the strict policy before storing submissions
    /// made through `/safe`. When off, the log always holds the raw input and
    /// sanitization happens only at render time.
    pub sanitize_on_store: bool,
}

impl BoardConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn with_csp_scope(mut self, scope: CspScope) -> Self {
        self.csp_scope = scope;
        self
    }

    pub fn with_sanitize_on_store(mut self, enabled: bool) -> Self {
        self.sanitize_on_store = enabled;
        self
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            csp_scope: CspScope::default(),
            sanitize_on_store: false,
        }
    }
}
