// Client configuration
//
// Explicit overrides win; anything left unset falls back to the process
// environment. Nothing is read at load time -- the environment is consulted
// only when a config is resolved.

use std::path::PathBuf;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::endpoints::EndpointTable;
use crate::error::Error;
use crate::transport::{TlsMode, TransportConfig};

/// Environment variables consulted for values not passed explicitly.
pub mod env {
    pub const API_KEY: &str = "BT_API_KEY";
    pub const PANEL_HOST: &str = "BT_PANEL_HOST";
    pub const DEBUG: &str = "DEBUG";
    pub const TIMEOUT: &str = "TIMEOUT";
    pub const VERIFY_SSL: &str = "VERIFY_SSL";
}

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Body substrings the panel uses to reject a request with HTTP 200.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectionMarkers {
    /// Signature check failed ("密钥校验失败").
    pub invalid_key: String,
    /// Caller address not whitelisted; the address follows the marker.
    pub ip_blocked: String,
}

impl Default for RejectionMarkers {
    fn default() -> Self {
        Self {
            invalid_key: "密钥校验失败".into(),
            ip_blocked: "IP校验失败,您的访问IP为".into(),
        }
    }
}

/// Explicit construction overrides. `None` means "use the environment".
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    pub api_key: Option<SecretString>,
    pub host: Option<String>,
    pub debug: Option<bool>,
    pub timeout: Option<Duration>,
    pub verify_ssl: Option<bool>,
    /// Extra PEM root certificate, used when TLS verification is on.
    pub ca_cert: Option<PathBuf>,
    pub endpoints: Option<EndpointTable>,
    pub markers: Option<RejectionMarkers>,
}

impl ClientOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(key.into()));
        self
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = Some(debug);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn verify_ssl(mut self, verify: bool) -> Self {
        self.verify_ssl = Some(verify);
        self
    }

    pub fn ca_cert(mut self, path: impl Into<PathBuf>) -> Self {
        self.ca_cert = Some(path.into());
        self
    }

    pub fn endpoints(mut self, table: EndpointTable) -> Self {
        self.endpoints = Some(table);
        self
    }

    pub fn markers(mut self, markers: RejectionMarkers) -> Self {
        self.markers = Some(markers);
        self
    }
}

/// Fully resolved client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: SecretString,
    /// Panel base URL without a trailing slash (e.g. `https://panel:8888`).
    pub host: String,
    pub debug: bool,
    pub timeout: Duration,
    pub verify_ssl: bool,
    pub ca_cert: Option<PathBuf>,
    pub endpoints: EndpointTable,
    pub markers: RejectionMarkers,
}

impl ClientConfig {
    /// Resolve options against the process environment.
    pub fn resolve(options: ClientOptions) -> Result<Self, Error> {
        Self::resolve_with(options, |name| std::env::var(name).ok())
    }

    /// Resolve options against an arbitrary variable lookup.
    pub fn resolve_with(
        options: ClientOptions,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, Error> {
        // An explicit key is authoritative, even when empty.
        let api_key = options
            .api_key
            .or_else(|| non_empty(lookup(env::API_KEY)).map(SecretString::from))
            .filter(|key| !key.expose_secret().is_empty())
            .ok_or(Error::MissingApiKey)?;

        let host = options
            .host
            .or_else(|| lookup(env::PANEL_HOST))
            .map(|h| h.trim().trim_end_matches('/').to_owned())
            .filter(|h| !h.is_empty())
            .ok_or(Error::MissingHost)?;

        let debug = options
            .debug
            .unwrap_or_else(|| lookup(env::DEBUG).is_some_and(|v| is_true(&v)));

        let timeout = match options.timeout {
            Some(timeout) => timeout,
            None => match non_empty(lookup(env::TIMEOUT)) {
                Some(raw) => parse_timeout(&raw)?,
                None => DEFAULT_TIMEOUT,
            },
        };

        let verify_ssl = options
            .verify_ssl
            .unwrap_or_else(|| non_empty(lookup(env::VERIFY_SSL)).is_none_or(|v| is_true(&v)));

        Ok(Self {
            api_key,
            host,
            debug,
            timeout,
            verify_ssl,
            ca_cert: options.ca_cert,
            endpoints: options.endpoints.unwrap_or_default(),
            markers: options.markers.unwrap_or_default(),
        })
    }

    /// Transport settings derived from this config.
    pub fn transport(&self) -> TransportConfig {
        let tls = match (self.verify_ssl, &self.ca_cert) {
            (false, _) => TlsMode::DangerAcceptInvalid,
            (true, Some(path)) => TlsMode::CustomCa(path.clone()),
            (true, None) => TlsMode::System,
        };
        TransportConfig {
            tls,
            timeout: self.timeout,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn is_true(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}

fn parse_timeout(raw: &str) -> Result<Duration, Error> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| Error::InvalidTimeout {
            value: raw.to_owned(),
        })
}
