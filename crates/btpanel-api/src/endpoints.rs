// Endpoint catalog
//
// The panel addresses every operation as `/<module>?action=<Action>`. Wrappers
// refer to endpoints by logical name; the table maps names to paths and is
// fixed once a client is built.

use std::collections::HashMap;
use std::sync::Arc;

use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::error::Error;

/// Every endpoint the resource wrappers call.
///
/// The variant name is the logical endpoint name used as the table key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
pub enum Endpoint {
    // ── System ──
    GetSystemTotal,
    GetDiskInfo,
    GetNetWork,
    GetTaskCount,
    UpdatePanel,

    // ── Sites ──
    Websites,
    Webtypes,
    GetPHPVersion,
    GetSitePHPVersion,
    SetPHPVersion,
    WebAddSite,
    WebDeleteSite,
    WebSiteStop,
    WebSiteStart,
    WebSetEdate,
    WebSetPs,
    GetSiteLogs,

    // ── Backups ──
    WebBackupList,
    WebToBackup,
    WebDelBackup,

    // ── Domains ──
    WebDomainList,
    WebAddDomain,
    WebDelDomain,

    // ── Rewrite / files ──
    GetRewriteList,
    GetFileBody,
    SaveFileBody,
    GetDirRewrite,

    // ── Directory ──
    GetDirUserINI,
    SetDirUserINI,
    LogsOpen,
    SetPath,
    SetSiteRunPath,
    GetDirBinding,
    AddDirBinding,
    DelDirBinding,

    // ── Access control ──
    SetHasPwd,
    CloseHasPwd,
    GetLimitNet,
    SetLimitNet,
    CloseLimitNet,
    WebGetIndex,
    WebSetIndex,
    GetSecurity,
    SetSecurity,

    // ── SSL / redirects ──
    GetSSL,
    SetSSL,
    CloseSSLConf,
    HttpToHttps,
    CloseToHttps,
    Get301Status,
    Set301Status,

    // ── Reverse proxy ──
    GetProxyList,
    CreateProxy,
    ModifyProxy,

    // ── FTP ──
    WebFtpList,
    SetUserPassword,
    SetStatus,

    // ── Databases ──
    WebSqlList,
    ResDatabasePass,
    SQLToBackup,
    SQLDelBackup,

    // ── Plugins ──
    #[strum(serialize = "deployment")]
    Deployment,
    SetupPackage,
}

impl Endpoint {
    /// Logical name used as the endpoint table key.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Path for this endpoint in the stock panel.
    #[allow(clippy::too_many_lines)]
    pub fn default_path(self) -> &'static str {
        match self {
            Self::GetSystemTotal => "/system?action=GetSystemTotal",
            Self::GetDiskInfo => "/system?action=GetDiskInfo",
            Self::GetNetWork => "/system?action=GetNetWork",
            Self::GetTaskCount => "/ajax?action=GetTaskCount",
            Self::UpdatePanel => "/ajax?action=UpdatePanel",

            Self::Websites => "/data?action=getData&table=sites",
            Self::Webtypes => "/site?action=get_site_types",
            Self::GetPHPVersion => "/site?action=GetPHPVersion",
            Self::GetSitePHPVersion => "/site?action=GetSitePHPVersion",
            Self::SetPHPVersion => "/site?action=SetPHPVersion",
            Self::WebAddSite => "/site?action=AddSite",
            Self::WebDeleteSite => "/site?action=DeleteSite",
            Self::WebSiteStop => "/site?action=SiteStop",
            Self::WebSiteStart => "/site?action=SiteStart",
            Self::WebSetEdate => "/site?action=SetEdate",
            Self::WebSetPs => "/data?action=setPs&table=sites",
            Self::GetSiteLogs => "/site?action=GetSiteLogs",

            Self::WebBackupList => "/data?action=getData&table=backup",
            Self::WebToBackup => "/site?action=ToBackup",
            Self::WebDelBackup => "/site?action=DelBackup",

            Self::WebDomainList => "/data?action=getData&table=domain",
            Self::WebAddDomain => "/site?action=AddDomain",
            Self::WebDelDomain => "/site?action=DelDomain",

            Self::GetRewriteList => "/site?action=GetRewriteList",
            Self::GetFileBody => "/files?action=GetFileBody",
            Self::SaveFileBody => "/files?action=SaveFileBody",
            Self::GetDirRewrite => "/site?action=GetDirRewrite",

            Self::GetDirUserINI => "/site?action=GetDirUserINI",
            Self::SetDirUserINI => "/site?action=SetDirUserINI",
            Self::LogsOpen => "/site?action=logsOpen",
            Self::SetPath => "/site?action=SetPath",
            Self::SetSiteRunPath => "/site?action=SetSiteRunPath",
            Self::GetDirBinding => "/site?action=GetDirBinding",
            Self::AddDirBinding => "/site?action=AddDirBinding",
            Self::DelDirBinding => "/site?action=DelDirBinding",

            Self::SetHasPwd => "/site?action=SetHasPwd",
            Self::CloseHasPwd => "/site?action=CloseHasPwd",
            Self::GetLimitNet => "/site?action=GetLimitNet",
            Self::SetLimitNet => "/site?action=SetLimitNet",
            Self::CloseLimitNet => "/site?action=CloseLimitNet",
            Self::WebGetIndex => "/site?action=GetIndex",
            Self::WebSetIndex => "/site?action=SetIndex",
            Self::GetSecurity => "/site?action=GetSecurity",
            Self::SetSecurity => "/site?action=SetSecurity",

            Self::GetSSL => "/site?action=GetSSL",
            Self::SetSSL => "/site?action=SetSSL",
            Self::CloseSSLConf => "/site?action=CloseSSLConf",
            Self::HttpToHttps => "/site?action=HttpToHttps",
            Self::CloseToHttps => "/site?action=CloseToHttps",
            Self::Get301Status => "/site?action=Get301Status",
            Self::Set301Status => "/site?action=Set301Status",

            Self::GetProxyList => "/site?action=GetProxyList",
            Self::CreateProxy => "/site?action=CreateProxy",
            Self::ModifyProxy => "/site?action=ModifyProxy",

            Self::WebFtpList => "/data?action=getData&table=ftps",
            Self::SetUserPassword => "/ftp?action=SetUserPassword",
            Self::SetStatus => "/ftp?action=SetStatus",

            Self::WebSqlList => "/data?action=getData&table=databases",
            Self::ResDatabasePass => "/database?action=ResDatabasePassword",
            Self::SQLToBackup => "/database?action=ToBackup",
            Self::SQLDelBackup => "/database?action=DelBackup",

            Self::Deployment => "/plugin?action=a&name=deployment&s=GetList&type=0",
            Self::SetupPackage => "/plugin?action=a&name=deployment&s=SetupPackage",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable mapping from logical endpoint names to relative URL paths.
///
/// Cloning is cheap; clones share the same underlying map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointTable {
    paths: Arc<HashMap<String, String>>,
}

impl Default for EndpointTable {
    /// The stock catalog: every [`Endpoint`] at its default path.
    fn default() -> Self {
        Endpoint::iter()
            .map(|ep| (ep.name(), ep.default_path()))
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EndpointTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let paths = iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self {
            paths: Arc::new(paths),
        }
    }
}

impl EndpointTable {
    /// The stock catalog with selected entries replaced or added.
    pub fn with_overrides<K, V>(overrides: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut paths = Self::default().paths.as_ref().clone();
        paths.extend(overrides.into_iter().map(|(k, v)| (k.into(), v.into())));
        Self {
            paths: Arc::new(paths),
        }
    }

    /// Look up a path by logical name.
    pub fn get(&self, name: &str) -> Result<&str, Error> {
        self.paths
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| Error::UnknownEndpoint { name: name.into() })
    }

    /// Resolve a logical name or pass through an already-resolved path.
    ///
    /// Anything starting with `/` is treated as a path; everything else must
    /// be a known name.
    pub fn resolve<'a>(&'a self, name_or_path: &'a str) -> Result<&'a str, Error> {
        if name_or_path.starts_with('/') {
            Ok(name_or_path)
        } else {
            self.get(name_or_path)
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.paths.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Endpoint names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.paths.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_covers_every_endpoint() {
        let table = EndpointTable::default();
        assert_eq!(table.len(), Endpoint::iter().count());
        for ep in Endpoint::iter() {
            assert_eq!(table.get(ep.name()).ok(), Some(ep.default_path()), "{ep}");
        }
    }

    #[test]
    fn resolves_known_names() {
        let table = EndpointTable::default();
        assert_eq!(
            table.resolve("GetSystemTotal").ok(),
            Some("/system?action=GetSystemTotal")
        );
        assert_eq!(
            table.resolve("deployment").ok(),
            Some("/plugin?action=a&name=deployment&s=GetList&type=0")
        );
    }

    #[test]
    fn passes_raw_paths_through() {
        let table = EndpointTable::default();
        assert_eq!(
            table.resolve("/custom?action=Thing").ok(),
            Some("/custom?action=Thing")
        );
    }

    #[test]
    fn unknown_name_is_a_configuration_error() {
        let table = EndpointTable::default();
        match table.resolve("NoSuchEndpoint") {
            Err(Error::UnknownEndpoint { name }) => assert_eq!(name, "NoSuchEndpoint"),
            other => panic!("expected UnknownEndpoint, got {other:?}"),
        }
    }

    #[test]
    fn overrides_replace_stock_paths() {
        let table = EndpointTable::with_overrides([
            ("GetSystemTotal", "/v2/system?action=GetSystemTotal"),
            ("Extra", "/extra?action=Go"),
        ]);
        assert_eq!(
            table.get("GetSystemTotal").ok(),
            Some("/v2/system?action=GetSystemTotal")
        );
        assert!(table.contains("Extra"));
        assert!(table.contains("Websites"));
    }

    #[test]
    fn custom_table_only_knows_its_entries() {
        let table: EndpointTable = [("Ping", "/ping")].into_iter().collect();
        assert_eq!(table.names(), vec!["Ping"]);
        assert!(table.get("GetSystemTotal").is_err());
    }
}
