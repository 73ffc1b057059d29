// Site endpoints
//
// Listing, lifecycle (create / start / stop / delete) and per-site metadata.
// Most mutating calls take both the numeric id and the site name because
// the panel checks them against each other.

use serde_json::Value;
use tracing::debug;

use crate::api::scan_listing;
use crate::client::PanelClient;
use crate::endpoints::Endpoint;
use crate::error::Error;
use crate::form::Form;
use crate::models::{
    DeleteSiteOptions, ListQuery, NewSite, Page, PhpVersion, SiteRecord, SiteType,
};

/// Common listing fields for `/data?action=getData` tables.
pub(crate) fn list_form(query: &ListQuery) -> Form {
    Form::new()
        .field("p", query.page)
        .field("limit", query.limit)
        .field("type", query.type_id)
        .field("order", &query.order)
        .field_opt("tojs", query.tojs.as_deref())
        .field_opt("search", query.search.as_deref())
}

impl PanelClient {
    /// One page of sites.
    ///
    /// `POST /data?action=getData&table=sites`
    pub async fn list_sites(&self, query: &ListQuery) -> Result<Page<SiteRecord>, Error> {
        debug!(page = query.page, limit = query.limit, "listing sites");
        self.call(Endpoint::Websites, list_form(query)).await
    }

    /// Look a site up by exact name.
    ///
    /// Searches by name, then matches exactly since the panel's search is
    /// a substring match.
    pub async fn find_site(&self, name: &str) -> Result<Option<SiteRecord>, Error> {
        let fetch = move |query: ListQuery| async move { self.list_sites(&query).await };
        scan_listing(name, fetch, |s: &SiteRecord| s.name == name).await
    }

    /// Site categories.
    ///
    /// `POST /site?action=get_site_types`
    pub async fn site_types(&self) -> Result<Vec<SiteType>, Error> {
        debug!("listing site types");
        self.call(Endpoint::Webtypes, Form::new()).await
    }

    /// Installed PHP runtimes.
    ///
    /// `POST /site?action=GetPHPVersion`
    pub async fn php_versions(&self) -> Result<Vec<PhpVersion>, Error> {
        debug!("listing PHP versions");
        self.call(Endpoint::GetPHPVersion, Form::new()).await
    }

    /// `POST /site?action=GetSitePHPVersion`
    pub async fn site_php_version(&self, site: &str) -> Result<Value, Error> {
        debug!(site, "fetching site PHP version");
        let form = Form::new().field("siteName", site);
        self.call(Endpoint::GetSitePHPVersion, form).await
    }

    /// Switch a site to another PHP runtime (compact form, e.g. `"74"`).
    ///
    /// `POST /site?action=SetPHPVersion`
    pub async fn set_php_version(&self, site: &str, version: &str) -> Result<Value, Error> {
        debug!(site, version, "setting site PHP version");
        let form = Form::new().field("siteName", site).field("version", version);
        self.call(Endpoint::SetPHPVersion, form).await
    }

    /// Create a site, optionally with an FTP account and a database.
    ///
    /// `POST /site?action=AddSite`
    pub async fn create_site(&self, site: &NewSite) -> Result<Value, Error> {
        debug!(domain = %site.domain, php = %site.php_version, "creating site");
        let mut form = Form::new()
            .field("webname", site.webname())
            .field("path", &site.path)
            .field("type_id", site.type_id)
            .field("type", "PHP")
            .field("version", &site.php_version)
            .field("port", site.port)
            .field("ps", &site.ps)
            .field("ftp", site.ftp.is_some())
            .field("sql", site.database.is_some());

        if let Some(ftp) = &site.ftp {
            form.push("ftp_username", &ftp.username);
            form.push("ftp_password", &ftp.password);
        }
        if let Some(db) = &site.database {
            form.push("codeing", &db.charset);
            form.push("datauser", &db.username);
            form.push("datapassword", &db.password);
        }

        self.call(Endpoint::WebAddSite, form).await
    }

    /// Delete a site and, per `options`, its FTP account, database and files.
    ///
    /// `POST /site?action=DeleteSite`; the panel treats the mere presence
    /// of `ftp` / `database` / `path` as "also delete".
    pub async fn delete_site(
        &self,
        id: i64,
        name: &str,
        options: &DeleteSiteOptions,
    ) -> Result<Value, Error> {
        debug!(id, name, ?options, "deleting site");
        let form = Form::new()
            .field("id", id)
            .field("webname", name)
            .field_opt("ftp", options.ftp.then_some(1))
            .field_opt("database", options.database.then_some(1))
            .field_opt("path", options.path.then_some(1));
        self.call(Endpoint::WebDeleteSite, form).await
    }

    /// `POST /site?action=SiteStop`
    pub async fn stop_site(&self, id: i64, name: &str) -> Result<Value, Error> {
        debug!(id, name, "stopping site");
        let form = Form::new().field("id", id).field("name", name);
        self.call(Endpoint::WebSiteStop, form).await
    }

    /// `POST /site?action=SiteStart`
    pub async fn start_site(&self, id: i64, name: &str) -> Result<Value, Error> {
        debug!(id, name, "starting site");
        let form = Form::new().field("id", id).field("name", name);
        self.call(Endpoint::WebSiteStart, form).await
    }

    /// Set the expiry date (`YYYY-MM-DD`, or `0000-00-00` for never).
    ///
    /// `POST /site?action=SetEdate`
    pub async fn set_expiry(&self, id: i64, edate: &str) -> Result<Value, Error> {
        debug!(id, edate, "setting site expiry");
        let form = Form::new().field("id", id).field("edate", edate);
        self.call(Endpoint::WebSetEdate, form).await
    }

    /// `POST /data?action=setPs&table=sites`
    pub async fn set_remark(&self, id: i64, ps: &str) -> Result<Value, Error> {
        debug!(id, "setting site remark");
        let form = Form::new().field("id", id).field("ps", ps);
        self.call(Endpoint::WebSetPs, form).await
    }

    /// Tail of the site's access log.
    ///
    /// `POST /site?action=GetSiteLogs`
    pub async fn site_logs(&self, site: &str) -> Result<Value, Error> {
        debug!(site, "fetching site logs");
        let form = Form::new().field("siteName", site);
        self.call(Endpoint::GetSiteLogs, form).await
    }
}
