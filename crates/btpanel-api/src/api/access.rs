// Access control endpoints
//
// Password-protected access, traffic limits, default documents, and hotlink
// protection. All keyed by site id.

use serde_json::Value;
use tracing::debug;

use crate::client::PanelClient;
use crate::endpoints::Endpoint;
use crate::error::Error;
use crate::form::Form;

impl PanelClient {
    // ── Password access ──────────────────────────────────────────────

    /// Require HTTP basic auth for the whole site.
    ///
    /// `POST /site?action=SetHasPwd`
    pub async fn set_password_access(
        &self,
        site_id: i64,
        username: &str,
        password: &str,
    ) -> Result<Value, Error> {
        debug!(site_id, username, "enabling password access");
        let form = Form::new()
            .field("id", site_id)
            .field("username", username)
            .field("password", password);
        self.call(Endpoint::SetHasPwd, form).await
    }

    /// `POST /site?action=CloseHasPwd`
    pub async fn close_password_access(&self, site_id: i64) -> Result<Value, Error> {
        debug!(site_id, "disabling password access");
        self.call(Endpoint::CloseHasPwd, Form::new().field("id", site_id))
            .await
    }

    // ── Traffic limits ───────────────────────────────────────────────

    /// `POST /site?action=GetLimitNet`
    pub async fn traffic_limit(&self, site_id: i64) -> Result<Value, Error> {
        debug!(site_id, "fetching traffic limit");
        self.call(Endpoint::GetLimitNet, Form::new().field("id", site_id))
            .await
    }

    /// Limit concurrent connections (`perserver`, `perip`) and per-request
    /// bandwidth in KB/s (`limit_rate`).
    ///
    /// `POST /site?action=SetLimitNet`
    pub async fn set_traffic_limit(
        &self,
        site_id: i64,
        perserver: u32,
        perip: u32,
        limit_rate: u32,
    ) -> Result<Value, Error> {
        debug!(site_id, perserver, perip, limit_rate, "setting traffic limit");
        let form = Form::new()
            .field("id", site_id)
            .field("perserver", perserver)
            .field("perip", perip)
            .field("limit_rate", limit_rate);
        self.call(Endpoint::SetLimitNet, form).await
    }

    /// `POST /site?action=CloseLimitNet`
    pub async fn close_traffic_limit(&self, site_id: i64) -> Result<Value, Error> {
        debug!(site_id, "removing traffic limit");
        self.call(Endpoint::CloseLimitNet, Form::new().field("id", site_id))
            .await
    }

    // ── Default documents ────────────────────────────────────────────

    /// `POST /site?action=GetIndex`
    pub async fn default_document(&self, site_id: i64) -> Result<Value, Error> {
        debug!(site_id, "fetching default documents");
        self.call(Endpoint::WebGetIndex, Form::new().field("id", site_id))
            .await
    }

    /// Set the index file list, comma separated
    /// (`index.php,index.html,default.php`).
    ///
    /// `POST /site?action=SetIndex`
    pub async fn set_default_document(&self, site_id: i64, index: &str) -> Result<Value, Error> {
        debug!(site_id, index, "setting default documents");
        let form = Form::new().field("id", site_id).field("Index", index);
        self.call(Endpoint::WebSetIndex, form).await
    }

    // ── Hotlink protection ───────────────────────────────────────────

    /// `POST /site?action=GetSecurity`
    pub async fn security(&self, site_id: i64, name: &str) -> Result<Value, Error> {
        debug!(site_id, name, "fetching hotlink protection");
        let form = Form::new().field("id", site_id).field("name", name);
        self.call(Endpoint::GetSecurity, form).await
    }

    /// Configure hotlink protection.
    ///
    /// `fix` is the comma-separated suffix list (`jpg,png,css`), `domains`
    /// the allowed referrers.
    ///
    /// `POST /site?action=SetSecurity`
    pub async fn set_security(
        &self,
        site_id: i64,
        name: &str,
        fix: &str,
        domains: &str,
        enabled: bool,
    ) -> Result<Value, Error> {
        debug!(site_id, name, enabled, "setting hotlink protection");
        let form = Form::new()
            .field("id", site_id)
            .field("name", name)
            .field("fix", fix)
            .field("domains", domains)
            .field("status", enabled);
        self.call(Endpoint::SetSecurity, form).await
    }
}
