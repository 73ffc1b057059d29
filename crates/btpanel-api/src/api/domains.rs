// Site domain endpoints

use serde_json::Value;
use tracing::debug;

use crate::client::PanelClient;
use crate::endpoints::Endpoint;
use crate::error::Error;
use crate::form::Form;

impl PanelClient {
    /// Domains bound to a site.
    ///
    /// `POST /data?action=getData&table=domain` with `list=true`, which
    /// makes the panel return a bare array instead of a page.
    pub async fn list_domains(&self, site_id: i64) -> Result<Value, Error> {
        debug!(site_id, "listing site domains");
        let form = Form::new().field("search", site_id).field("list", true);
        self.call(Endpoint::WebDomainList, form).await
    }

    /// `POST /site?action=AddDomain`
    ///
    /// `domain` may carry a port (`example.com:8080`) and may list several
    /// domains separated by newlines.
    pub async fn add_domain(&self, site_id: i64, webname: &str, domain: &str) -> Result<Value, Error> {
        debug!(site_id, webname, domain, "adding site domain");
        let form = Form::new()
            .field("id", site_id)
            .field("webname", webname)
            .field("domain", domain);
        self.call(Endpoint::WebAddDomain, form).await
    }

    /// `POST /site?action=DelDomain`
    pub async fn delete_domain(
        &self,
        site_id: i64,
        webname: &str,
        domain: &str,
        port: u16,
    ) -> Result<Value, Error> {
        debug!(site_id, webname, domain, port, "deleting site domain");
        let form = Form::new()
            .field("id", site_id)
            .field("webname", webname)
            .field("domain", domain)
            .field("port", port);
        self.call(Endpoint::WebDelDomain, form).await
    }
}
