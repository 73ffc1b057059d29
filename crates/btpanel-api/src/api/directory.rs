// Site directory endpoints
//
// Root and run paths, cross-site protection (`.user.ini`), access logging,
// and sub-directory domain bindings.

use serde_json::Value;
use tracing::debug;

use crate::client::PanelClient;
use crate::endpoints::Endpoint;
use crate::error::Error;
use crate::form::Form;

impl PanelClient {
    /// Directory switches for a site: cross-site protection, logging,
    /// password access, run path.
    ///
    /// `POST /site?action=GetDirUserINI`
    pub async fn dir_user_ini(&self, site_id: i64, path: &str) -> Result<Value, Error> {
        debug!(site_id, path, "fetching directory settings");
        let form = Form::new().field("id", site_id).field("path", path);
        self.call(Endpoint::GetDirUserINI, form).await
    }

    /// Flip cross-site protection for a site root.
    ///
    /// `POST /site?action=SetDirUserINI`
    pub async fn toggle_cross_site(&self, path: &str) -> Result<Value, Error> {
        debug!(path, "toggling cross-site protection");
        self.call(Endpoint::SetDirUserINI, Form::new().field("path", path))
            .await
    }

    /// Flip access logging.
    ///
    /// `POST /site?action=logsOpen`
    pub async fn toggle_access_log(&self, site_id: i64) -> Result<Value, Error> {
        debug!(site_id, "toggling access log");
        self.call(Endpoint::LogsOpen, Form::new().field("id", site_id))
            .await
    }

    /// `POST /site?action=SetPath`
    pub async fn set_root_path(&self, site_id: i64, path: &str) -> Result<Value, Error> {
        debug!(site_id, path, "setting site root");
        let form = Form::new().field("id", site_id).field("path", path);
        self.call(Endpoint::SetPath, form).await
    }

    /// Set the run directory, relative to the site root (e.g. `/public`).
    ///
    /// `POST /site?action=SetSiteRunPath`
    pub async fn set_run_path(&self, site_id: i64, run_path: &str) -> Result<Value, Error> {
        debug!(site_id, run_path, "setting site run path");
        let form = Form::new().field("id", site_id).field("runPath", run_path);
        self.call(Endpoint::SetSiteRunPath, form).await
    }

    // ── Sub-directory bindings ───────────────────────────────────────

    /// `POST /site?action=GetDirBinding`
    pub async fn dir_bindings(&self, site_id: i64) -> Result<Value, Error> {
        debug!(site_id, "listing directory bindings");
        self.call(Endpoint::GetDirBinding, Form::new().field("id", site_id))
            .await
    }

    /// Serve `dir_name` under the site root as `domain`.
    ///
    /// `POST /site?action=AddDirBinding`
    pub async fn add_dir_binding(
        &self,
        site_id: i64,
        domain: &str,
        dir_name: &str,
    ) -> Result<Value, Error> {
        debug!(site_id, domain, dir_name, "adding directory binding");
        let form = Form::new()
            .field("id", site_id)
            .field("domain", domain)
            .field("dirName", dir_name);
        self.call(Endpoint::AddDirBinding, form).await
    }

    /// `POST /site?action=DelDirBinding`
    pub async fn delete_dir_binding(&self, binding_id: i64) -> Result<Value, Error> {
        debug!(binding_id, "deleting directory binding");
        self.call(Endpoint::DelDirBinding, Form::new().field("id", binding_id))
            .await
    }
}
