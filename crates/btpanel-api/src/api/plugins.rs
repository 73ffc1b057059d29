// One-click deployment plugin endpoints

use serde_json::Value;
use tracing::debug;

use crate::client::PanelClient;
use crate::endpoints::Endpoint;
use crate::error::Error;
use crate::form::Form;

impl PanelClient {
    /// Deployable application packages, optionally filtered.
    ///
    /// `POST /plugin?action=a&name=deployment&s=GetList&type=0`; the
    /// plugin reads `search` from the query string, not the form.
    pub async fn deployments(&self, search: Option<&str>) -> Result<Value, Error> {
        debug!(?search, "listing deployment packages");
        let base = self.endpoints().get(Endpoint::Deployment.name())?;
        match search {
            Some(term) => {
                let encoded: String =
                    url::form_urlencoded::byte_serialize(term.as_bytes()).collect();
                let path = format!("{base}&search={encoded}");
                self.post_as(&path, Form::new()).await
            }
            None => self.call(Endpoint::Deployment, Form::new()).await,
        }
    }

    /// Deploy package `dname` into an existing site.
    ///
    /// `POST /plugin?action=a&name=deployment&s=SetupPackage`
    pub async fn setup_package(
        &self,
        dname: &str,
        site_name: &str,
        php_version: &str,
    ) -> Result<Value, Error> {
        debug!(dname, site_name, php_version, "deploying package");
        let form = Form::new()
            .field("dname", dname)
            .field("site_name", site_name)
            .field("php_version", php_version);
        self.call(Endpoint::SetupPackage, form).await
    }
}
