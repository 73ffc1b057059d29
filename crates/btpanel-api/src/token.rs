// Request signing
//
// Every panel call carries `request_token` and `request_time`. The token is
// `md5(request_time + md5(api_key))`, hex-encoded, and the panel recomputes
// it from the transmitted `request_time` string -- so the exact characters
// hashed here must be the exact characters sent on the wire.

use chrono::Utc;
use md5::{Digest, Md5};

/// A request timestamp, captured once and serialized once.
///
/// The panel expects fractional seconds (`1700000000.123456`). The wire form
/// is the shortest decimal that round-trips the `f64` value and always carries
/// a decimal point, so whole seconds render as `1700000000.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestTime {
    secs: f64,
    wire: String,
}

impl RequestTime {
    /// Capture the current wall-clock time with microsecond resolution.
    #[allow(clippy::cast_precision_loss, clippy::as_conversions)]
    pub fn now() -> Self {
        let micros = Utc::now().timestamp_micros();
        Self::from_secs(micros as f64 / 1_000_000.0)
    }

    /// Build a request time from a seconds value since the Unix epoch.
    pub fn from_secs(secs: f64) -> Self {
        let mut wire = secs.to_string();
        if secs.is_finite() && !wire.contains('.') {
            wire.push_str(".0");
        }
        Self { secs, wire }
    }

    /// Seconds since the Unix epoch.
    pub fn secs(&self) -> f64 {
        self.secs
    }

    /// The exact string transmitted as `request_time` and fed to the hash.
    pub fn as_wire(&self) -> &str {
        &self.wire
    }
}

impl std::fmt::Display for RequestTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.wire)
    }
}

/// Lowercase hex MD5 of a UTF-8 string.
pub fn md5_hex(input: &str) -> String {
    hex::encode(Md5::digest(input.as_bytes()))
}

/// Derive the authentication token for one request.
pub fn compute_token(timestamp: &RequestTime, api_key: &str) -> String {
    let key_digest = md5_hex(api_key);
    md5_hex(&format!("{}{key_digest}", timestamp.as_wire()))
}
