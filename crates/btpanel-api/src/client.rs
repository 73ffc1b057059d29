// Panel HTTP client
//
// Wraps `reqwest::Client` with request signing, endpoint resolution, session
// cookie continuity, and response classification. Resource wrappers (sites,
// ftp, databases, ...) are implemented as inherent methods in `api/` so this
// module stays focused on transport mechanics.

use std::sync::{PoisonError, RwLock};
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::config::{ClientConfig, ClientOptions, RejectionMarkers};
use crate::endpoints::{Endpoint, EndpointTable};
use crate::error::Error;
use crate::form::Form;
use crate::token::{RequestTime, compute_token};

/// Longest slice of a response body echoed into debug logs.
const LOG_PREVIEW: usize = 512;

/// Async client for the panel's HTTP API.
///
/// Every call is signed with a fresh `request_token` / `request_time` pair
/// and POSTed as a form. The session cookie from the last successful
/// response is replayed on the next request; it is replaced, never merged.
pub struct PanelClient {
    http: reqwest::Client,
    host: String,
    api_key: SecretString,
    endpoints: EndpointTable,
    markers: RejectionMarkers,
    debug: bool,
    timeout: Duration,
    /// `Cookie` header value from the last successful response.
    session_cookie: RwLock<Option<String>>,
}

impl PanelClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build a client from explicit overrides, falling back to the
    /// environment for anything unset.
    pub fn new(options: ClientOptions) -> Result<Self, Error> {
        Self::from_config(ClientConfig::resolve(options)?)
    }

    /// Build a client entirely from the environment.
    pub fn from_env() -> Result<Self, Error> {
        Self::new(ClientOptions::default())
    }

    /// Build a client from an already-resolved config.
    pub fn from_config(config: ClientConfig) -> Result<Self, Error> {
        let http = config.transport().build_client()?;
        Self::with_client(http, config)
    }

    /// Wrap a pre-built `reqwest::Client`.
    ///
    /// The caller's client keeps its own timeout and TLS settings; the
    /// config's transport fields are ignored.
    pub fn with_client(http: reqwest::Client, config: ClientConfig) -> Result<Self, Error> {
        Url::parse(&config.host).map_err(|source| Error::InvalidHost {
            url: config.host.clone(),
            source,
        })?;

        Ok(Self {
            http,
            host: config.host,
            api_key: config.api_key,
            endpoints: config.endpoints,
            markers: config.markers,
            debug: config.debug,
            timeout: config.timeout,
            session_cookie: RwLock::new(None),
        })
    }

    // ── Accessors ────────────────────────────────────────────────────

    /// Panel base URL (no trailing slash).
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn endpoints(&self) -> &EndpointTable {
        &self.endpoints
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The session cookie that will accompany the next request, if any.
    pub fn session_cookie(&self) -> Option<String> {
        self.session_cookie
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    // ── Requests ─────────────────────────────────────────────────────

    /// POST to an endpoint name or raw path and return the decoded JSON.
    ///
    /// `endpoint` is looked up in the endpoint table unless it starts with
    /// `/`, in which case it is used as the path verbatim.
    pub async fn post(&self, endpoint: &str, payload: Form) -> Result<serde_json::Value, Error> {
        self.post_as(endpoint, payload).await
    }

    /// Like [`post`](Self::post), decoding into `T`.
    pub async fn post_as<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        payload: Form,
    ) -> Result<T, Error> {
        let body = self.send(endpoint, payload).await?;
        decode(&body)
    }

    /// Call a catalog endpoint, decoding into `T`.
    pub async fn call<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        payload: Form,
    ) -> Result<T, Error> {
        self.post_as(endpoint.name(), payload).await
    }

    /// Resolve an endpoint name or path to the full request URL.
    pub fn url_for(&self, endpoint: &str) -> Result<Url, Error> {
        let path = self.endpoints.resolve(endpoint)?;
        let full = format!("{}{path}", self.host);
        Url::parse(&full).map_err(|source| Error::InvalidHost { url: full, source })
    }

    /// Sign, send, and classify one request, returning the raw body text.
    async fn send(&self, endpoint: &str, payload: Form) -> Result<String, Error> {
        let url = self.url_for(endpoint)?;
        if let Some(name) = payload.reserved_field() {
            return Err(Error::ReservedField { name: name.into() });
        }

        let request_time = RequestTime::now();
        let token = compute_token(&request_time, self.api_key.expose_secret());

        if self.debug {
            let fields: Vec<_> = payload.iter().collect();
            debug!(%endpoint, request_time = %request_time, ?fields, "POST {}", url);
        } else {
            debug!(%endpoint, "POST {}", url);
        }

        let body = payload.merged_after(vec![
            ("request_token".into(), token),
            ("request_time".into(), request_time.as_wire().to_owned()),
        ]);

        let mut builder = self.http.post(url.clone()).form(&body);
        if let Some(cookie) = self.session_cookie() {
            builder = builder.header(reqwest::header::COOKIE, cookie);
        }

        let resp = builder.send().await.map_err(|source| Error::Connection {
            url: url.to_string(),
            source,
        })?;

        let status = resp.status();
        if status != reqwest::StatusCode::OK {
            debug!(%endpoint, %status, "panel returned non-success status");
            return Err(Error::BadRequest {
                status: status.as_u16(),
            });
        }

        let cookies = cookie_header(&resp);
        let text = resp.text().await.map_err(|source| Error::Connection {
            url: url.to_string(),
            source,
        })?;

        if self.debug {
            debug!(%endpoint, body = preview(&text), "panel response");
        }

        self.check_rejection(&text)?;
        self.replace_session_cookie(cookies);
        Ok(text)
    }

    /// Map the panel's HTTP-200 rejection pages to typed errors.
    fn check_rejection(&self, body: &str) -> Result<(), Error> {
        if body.contains(&self.markers.invalid_key) {
            return Err(Error::InvalidApiKey { body: body.into() });
        }
        if let Some(pos) = body.find(&self.markers.ip_blocked) {
            let ip = extract_ip(&body[pos + self.markers.ip_blocked.len()..]);
            return Err(Error::IpBlocked {
                ip,
                body: body.into(),
            });
        }
        Ok(())
    }

    fn replace_session_cookie(&self, cookie: Option<String>) {
        trace!(present = cookie.is_some(), "session cookie replaced");
        *self
            .session_cookie
            .write()
            .unwrap_or_else(PoisonError::into_inner) = cookie;
    }
}

impl std::fmt::Debug for PanelClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PanelClient")
            .field("host", &self.host)
            .field("endpoints", &self.endpoints.len())
            .field("debug", &self.debug)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

/// Collapse a response's `Set-Cookie` headers into one `Cookie` header value.
fn cookie_header(resp: &reqwest::Response) -> Option<String> {
    let pairs: Vec<String> = resp
        .cookies()
        .map(|c| format!("{}={}", c.name(), c.value()))
        .collect();
    (!pairs.is_empty()).then(|| pairs.join("; "))
}

/// Pull the caller address the panel echoes after its IP-rejection marker.
fn extract_ip(rest: &str) -> Option<String> {
    let ip: String = rest
        .trim_start_matches(|c: char| c.is_whitespace() || c == '[')
        .chars()
        .take_while(|c| c.is_ascii_hexdigit() || *c == '.' || *c == ':')
        .collect();
    (ip.contains('.') || ip.contains(':')).then_some(ip)
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, Error> {
    serde_json::from_str(body).map_err(|e| Error::Decode {
        message: format!("{e} (body preview: {:?})", preview(body)),
        body: body.to_owned(),
    })
}

fn preview(body: &str) -> &str {
    if body.len() <= LOG_PREVIEW {
        return body;
    }
    let mut end = LOG_PREVIEW;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_ipv4_after_marker() {
        assert_eq!(
            extract_ip("203.0.113.9,请在面板设置页面添加").as_deref(),
            Some("203.0.113.9")
        );
        assert_eq!(extract_ip(" 10.0.0.1</p>").as_deref(), Some("10.0.0.1"));
        assert_eq!(extract_ip("[192.0.2.7]\"}").as_deref(), Some("192.0.2.7"));
    }

    #[test]
    fn extracts_ipv6_after_marker() {
        assert_eq!(extract_ip("2001:db8::1 blocked").as_deref(), Some("2001:db8::1"));
    }

    #[test]
    fn no_address_yields_none() {
        assert_eq!(extract_ip(""), None);
        assert_eq!(extract_ip("，请联系管理员"), None);
        assert_eq!(extract_ip("abc"), None);
    }

    #[test]
    fn preview_respects_char_boundaries() {
        let long = "密".repeat(400);
        let cut = preview(&long);
        assert!(cut.len() <= LOG_PREVIEW);
        assert!(cut.chars().all(|c| c == '密'));
        assert_eq!(preview("short"), "short");
    }

    #[test]
    fn decode_failure_keeps_body() {
        match decode::<serde_json::Value>("<html>oops</html>") {
            Err(Error::Decode { body, .. }) => assert_eq!(body, "<html>oops</html>"),
            other => panic!("expected Decode error, got {other:?}"),
        }
    }
}
