// Panel response and request types
//
// The panel is loose about types: ids arrive as numbers, flags as "0"/"1"
// strings, and rows carry whatever columns the table has. Rows model the
// fields lookups need; everything else lands in `extra`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ── Paged table listings ─────────────────────────────────────────────

/// Result of a `/data?action=getData` listing.
///
/// `page` is panel-rendered pagination HTML; `where` echoes the SQL filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default, rename = "where")]
    pub filter: Option<String>,
}

/// Query parameters shared by every table listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// 1-based page number (`p`).
    pub page: u32,
    pub limit: u32,
    /// Category filter; `-1` for all categories, `0` for the default one.
    pub type_id: i64,
    pub order: String,
    /// JS pagination callback name; omitted when `None`.
    pub tojs: Option<String>,
    pub search: Option<String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 15,
            type_id: -1,
            order: "id desc".into(),
            tojs: None,
            search: None,
        }
    }
}

impl ListQuery {
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}

// ── Rows ─────────────────────────────────────────────────────────────

/// One row of the `sites` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub path: String,
    /// `"1"` running, `"0"` stopped.
    #[serde(default, deserialize_with = "loose_string")]
    pub status: String,
    #[serde(default)]
    pub ps: String,
    #[serde(default)]
    pub addtime: Option<String>,
    /// Expiry date; `"0000-00-00"` means never.
    #[serde(default)]
    pub edate: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SiteRecord {
    pub fn is_running(&self) -> bool {
        self.status == "1"
    }
}

/// One row of the `ftps` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FtpRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub path: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub status: String,
    #[serde(default)]
    pub ps: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FtpRecord {
    pub fn is_enabled(&self) -> bool {
        self.status == "1"
    }
}

/// One row of the `databases` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub accept: Option<String>,
    #[serde(default)]
    pub ps: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A site category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteType {
    pub id: i64,
    pub name: String,
}

/// An installed PHP runtime. `version` is the compact form (`"74"`),
/// `name` the display form (`"PHP-74"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhpVersion {
    pub version: String,
    pub name: String,
}

/// Accept both `"1"` and `1` for panel flag columns.
fn loose_string<'de, D: serde::Deserializer<'de>>(de: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(de)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

// ── Requests ─────────────────────────────────────────────────────────

/// Parameters for creating a site (`AddSite`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSite {
    /// Primary domain.
    pub domain: String,
    /// Extra domains bound to the site.
    pub aliases: Vec<String>,
    /// Document root; defaults to `/www/wwwroot/<domain>` when empty.
    pub path: String,
    pub type_id: i64,
    /// PHP version in compact form (`"74"`); `"00"` for static.
    pub php_version: String,
    pub port: u16,
    pub ps: String,
    pub ftp: Option<AccountSpec>,
    pub database: Option<DatabaseSpec>,
}

impl NewSite {
    pub fn new(domain: impl Into<String>, php_version: impl Into<String>) -> Self {
        let domain = domain.into();
        Self {
            path: format!("/www/wwwroot/{domain}"),
            ps: domain.clone(),
            domain,
            aliases: Vec::new(),
            type_id: 0,
            php_version: php_version.into(),
            port: 80,
            ftp: None,
            database: None,
        }
    }

    /// The `webname` JSON document the panel expects.
    pub fn webname(&self) -> String {
        serde_json::json!({
            "domain": self.domain,
            "domainlist": self.aliases,
            "count": self.aliases.len(),
        })
        .to_string()
    }
}

/// Username/password pair for an account created alongside a site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSpec {
    pub username: String,
    pub password: String,
}

/// Database created alongside a site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseSpec {
    pub username: String,
    pub password: String,
    /// Character set, e.g. `utf8mb4`.
    pub charset: String,
}

/// What to remove together with a site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeleteSiteOptions {
    pub ftp: bool,
    pub database: bool,
    pub path: bool,
}

/// Where a rewrite rule lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteSource {
    /// A built-in nginx template by name (`"wordpress"`).
    Template(String),
    /// A site's own rewrite file.
    Site(String),
    /// An absolute file path on the panel host.
    Path(String),
}

impl RewriteSource {
    pub fn file_path(&self) -> String {
        match self {
            Self::Template(name) => format!("/www/server/panel/rewrite/nginx/{name}.conf"),
            Self::Site(site) => format!("/www/server/panel/vhost/rewrite/{site}.conf"),
            Self::Path(path) => path.clone(),
        }
    }
}

/// Reverse-proxy definition (`CreateProxy` / `ModifyProxy`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    pub site: String,
    pub name: String,
    /// Proxied directory, e.g. `/`.
    pub dir: String,
    /// Upstream URL.
    pub target_url: String,
    /// Host header sent upstream.
    pub target_domain: String,
    pub cache: bool,
    /// Cache lifetime in hours.
    pub cache_hours: u32,
    /// Enables the proxy-directory mode.
    pub advanced: bool,
    /// Response text substitutions, as `(from, to)` pairs.
    pub substitutions: Vec<(String, String)>,
    pub enabled: bool,
}

impl ProxyConfig {
    /// The `subfilter` JSON document the panel expects.
    pub fn subfilter(&self) -> String {
        let subs: Vec<Value> = self
            .substitutions
            .iter()
            .map(|(from, to)| serde_json::json!({ "sub1": from, "sub2": to }))
            .collect();
        Value::Array(subs).to_string()
    }
}
