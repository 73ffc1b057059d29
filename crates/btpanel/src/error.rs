//! CLI error types with miette diagnostics.
//!
//! Maps `btpanel_api::Error` variants into user-facing errors with
//! actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use btpanel_api::Error as ApiError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not connect to panel at {url}")]
    #[diagnostic(
        code(btpanel::connection_failed),
        help(
            "Check that the panel is running and reachable.\n\
             Panels with a self-signed certificate need --insecure (-k)."
        )
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    // ── Authentication ───────────────────────────────────────────────
    #[error("No API key configured")]
    #[diagnostic(
        code(btpanel::no_credentials),
        help("Pass --api-key or set BT_API_KEY. Keys are issued under Panel Settings > API.")
    )]
    NoCredentials,

    #[error("The panel rejected the API key")]
    #[diagnostic(
        code(btpanel::auth_failed),
        help("Verify the key under Panel Settings > API; regenerating it invalidates the old one.")
    )]
    AuthFailed,

    #[error("The panel rejected this machine's IP{}", ip_suffix(.ip.as_deref()))]
    #[diagnostic(
        code(btpanel::ip_blocked),
        help("Add the address to the API whitelist under Panel Settings > API.")
    )]
    IpBlocked { ip: Option<String> },

    // ── Configuration ────────────────────────────────────────────────
    #[error("No panel host configured")]
    #[diagnostic(
        code(btpanel::no_host),
        help("Pass --host or set BT_PANEL_HOST, e.g. https://203.0.113.5:8888")
    )]
    NoHost,

    #[error(transparent)]
    #[diagnostic(code(btpanel::config))]
    Config(ApiError),

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(btpanel::validation))]
    Validation { field: String, reason: String },

    // ── Resources ────────────────────────────────────────────────────
    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(btpanel::not_found),
        help("Run: btpanel {list_command} to see available {resource_type}s")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    // ── Panel ────────────────────────────────────────────────────────
    #[error("Panel reported failure: {message}")]
    #[diagnostic(code(btpanel::panel))]
    Panel { message: String },

    #[error("Panel answered HTTP {status}")]
    #[diagnostic(
        code(btpanel::bad_request),
        help("The endpoint path may be wrong for this panel version; try `btpanel call` with an explicit path.")
    )]
    BadRequest { status: u16 },

    #[error(transparent)]
    #[diagnostic(code(btpanel::api))]
    Api(ApiError),

    // ── Interactive ──────────────────────────────────────────────────
    #[error("Destructive operation '{action}' requires confirmation")]
    #[diagnostic(
        code(btpanel::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Could not render JSON: {0}")]
    #[diagnostic(code(btpanel::json))]
    Json(#[from] serde_json::Error),

    #[error("Could not render YAML: {0}")]
    #[diagnostic(code(btpanel::yaml))]
    Yaml(#[from] serde_yaml::Error),
}

fn ip_suffix(ip: Option<&str>) -> String {
    ip.map(|ip| format!(" ({ip})")).unwrap_or_default()
}

impl From<ApiError> for CliError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::MissingApiKey => Self::NoCredentials,
            ApiError::MissingHost => Self::NoHost,
            ApiError::InvalidApiKey { .. } => Self::AuthFailed,
            ApiError::IpBlocked { ip, .. } => Self::IpBlocked { ip },
            ApiError::BadRequest { status } => Self::BadRequest { status },
            ApiError::Connection { url, source } => Self::ConnectionFailed {
                url,
                source: Box::new(source),
            },
            other if other.kind() == btpanel_api::ErrorKind::Configuration => Self::Config(other),
            other => Self::Api(other),
        }
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::NoCredentials | Self::AuthFailed | Self::IpBlocked { .. } => exit_code::AUTH,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::NoHost
            | Self::Config(_)
            | Self::Validation { .. }
            | Self::NonInteractiveRequiresYes { .. } => exit_code::USAGE,
            Self::Panel { .. }
            | Self::BadRequest { .. }
            | Self::Api(_)
            | Self::Io(_)
            | Self::Json(_)
            | Self::Yaml(_) => exit_code::GENERAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_errors_map_to_exit_codes() {
        let cases = [
            (ApiError::MissingApiKey, exit_code::AUTH),
            (ApiError::MissingHost, exit_code::USAGE),
            (ApiError::InvalidApiKey { body: String::new() }, exit_code::AUTH),
            (
                ApiError::IpBlocked {
                    ip: Some("192.0.2.1".into()),
                    body: String::new(),
                },
                exit_code::AUTH,
            ),
            (ApiError::BadRequest { status: 404 }, exit_code::GENERAL),
            (
                ApiError::UnknownEndpoint { name: "Nope".into() },
                exit_code::USAGE,
            ),
            (
                ApiError::Decode {
                    message: "expected value".into(),
                    body: String::new(),
                },
                exit_code::GENERAL,
            ),
        ];
        for (api, code) in cases {
            let label = format!("{api:?}");
            assert_eq!(CliError::from(api).exit_code(), code, "{label}");
        }
    }

    #[test]
    fn ip_blocked_message_names_address() {
        let err = CliError::IpBlocked {
            ip: Some("192.0.2.1".into()),
        };
        assert_eq!(
            err.to_string(),
            "The panel rejected this machine's IP (192.0.2.1)"
        );
    }
}
