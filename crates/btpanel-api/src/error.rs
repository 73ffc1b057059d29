use thiserror::Error;

/// Broad classification of an [`Error`].
///
/// Callers branch on the kind to decide recovery: a [`Connection`](Self::Connection)
/// failure may be retried, an [`InvalidApiKey`](Self::InvalidApiKey) never should be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Connection,
    BadRequest,
    InvalidApiKey,
    IpBlocked,
    Decode,
}

/// Top-level error type for the `btpanel-api` crate.
#[derive(Debug, Error)]
pub enum Error {
    // ── Configuration ───────────────────────────────────────────────
    /// No API key was passed and `BT_API_KEY` is unset or empty.
    #[error("API key is required (pass one explicitly or set BT_API_KEY)")]
    MissingApiKey,

    /// No panel host was passed and `BT_PANEL_HOST` is unset or empty.
    #[error("panel host is required (pass one explicitly or set BT_PANEL_HOST)")]
    MissingHost,

    /// The panel host plus endpoint path did not form a valid URL.
    #[error("invalid panel URL '{url}': {source}")]
    InvalidHost {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// `TIMEOUT` was set to something other than a whole number of seconds.
    #[error("invalid timeout '{value}': expected whole seconds")]
    InvalidTimeout { value: String },

    /// The endpoint name is not present in the endpoint table.
    #[error("endpoint '{name}' not found in configuration")]
    UnknownEndpoint { name: String },

    /// The payload tried to set a field the client owns.
    #[error("payload field '{name}' is reserved for request signing")]
    ReservedField { name: String },

    /// TLS setup or HTTP client construction failed.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Transport ───────────────────────────────────────────────────
    /// The panel could not be reached (refused, DNS, timeout, reset).
    #[error("could not reach panel at {url}: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The panel answered with a non-success HTTP status.
    #[error("bad request (HTTP {status})")]
    BadRequest { status: u16 },

    // ── Panel rejections ────────────────────────────────────────────
    /// The panel rejected the request signature.
    #[error("invalid API key: {body}")]
    InvalidApiKey { body: String },

    /// The panel rejected the caller's address (not on the API whitelist).
    #[error("IP blocked{}: {body}", ip_suffix(.ip.as_deref()))]
    IpBlocked { ip: Option<String>, body: String },

    // ── Data ────────────────────────────────────────────────────────
    /// The body was not the JSON the caller asked for.
    #[error("decode error: {message}")]
    Decode { message: String, body: String },
}

fn ip_suffix(ip: Option<&str>) -> String {
    ip.map(|ip| format!(" ({ip})")).unwrap_or_default()
}

impl Error {
    /// The classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingApiKey
            | Self::MissingHost
            | Self::InvalidHost { .. }
            | Self::InvalidTimeout { .. }
            | Self::UnknownEndpoint { .. }
            | Self::ReservedField { .. }
            | Self::Tls(_) => ErrorKind::Configuration,
            Self::Connection { .. } => ErrorKind::Connection,
            Self::BadRequest { .. } => ErrorKind::BadRequest,
            Self::InvalidApiKey { .. } => ErrorKind::InvalidApiKey,
            Self::IpBlocked { .. } => ErrorKind::IpBlocked,
            Self::Decode { .. } => ErrorKind::Decode,
        }
    }

    /// Returns `true` if this is a transient error worth retrying.
    pub fn is_transient(&self) -> bool {
        self.kind() == ErrorKind::Connection
    }

    /// Returns `true` if the request hit the configured timeout.
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Connection { source, .. } => source.is_timeout(),
            _ => false,
        }
    }

    /// HTTP status carried by a [`BadRequest`](Self::BadRequest), if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::BadRequest { status } => Some(*status),
            _ => None,
        }
    }

    /// Raw panel response text attached to rejection and decode errors.
    pub fn server_text(&self) -> Option<&str> {
        match self {
            Self::InvalidApiKey { body } | Self::IpBlocked { body, .. } | Self::Decode { body, .. } => {
                Some(body)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_errors_share_a_kind() {
        for err in [
            Error::MissingApiKey,
            Error::MissingHost,
            Error::UnknownEndpoint { name: "Nope".into() },
            Error::ReservedField { name: "request_token".into() },
            Error::InvalidTimeout { value: "soon".into() },
        ] {
            assert_eq!(err.kind(), ErrorKind::Configuration, "{err}");
            assert!(!err.is_transient());
        }
    }

    #[test]
    fn rejections_are_not_transient() {
        let err = Error::InvalidApiKey { body: "denied".into() };
        assert_eq!(err.kind(), ErrorKind::InvalidApiKey);
        assert!(!err.is_transient());
        assert_eq!(err.server_text(), Some("denied"));
    }

    #[test]
    fn ip_blocked_message_includes_address() {
        let err = Error::IpBlocked {
            ip: Some("203.0.113.7".into()),
            body: "blocked".into(),
        };
        assert_eq!(err.to_string(), "IP blocked (203.0.113.7): blocked");

        let anonymous = Error::IpBlocked { ip: None, body: "blocked".into() };
        assert_eq!(anonymous.to_string(), "IP blocked: blocked");
    }

    #[test]
    fn bad_request_exposes_status() {
        let err = Error::BadRequest { status: 502 };
        assert_eq!(err.status(), Some(502));
        assert_eq!(err.kind(), ErrorKind::BadRequest);
        assert_eq!(err.to_string(), "bad request (HTTP 502)");
    }
}
