// SSL and redirect endpoints

use serde_json::Value;
use tracing::debug;

use crate::client::PanelClient;
use crate::endpoints::Endpoint;
use crate::error::Error;
use crate::form::Form;

impl PanelClient {
    /// Certificate status and details.
    ///
    /// `POST /site?action=GetSSL`
    pub async fn ssl(&self, site: &str) -> Result<Value, Error> {
        debug!(site, "fetching SSL status");
        self.call(Endpoint::GetSSL, Form::new().field("siteName", site))
            .await
    }

    /// Install a certificate. `key` is the private key PEM, `csr` the
    /// certificate chain PEM.
    ///
    /// `POST /site?action=SetSSL`
    pub async fn set_ssl(&self, site: &str, key: &str, csr: &str) -> Result<Value, Error> {
        debug!(site, "installing SSL certificate");
        let form = Form::new()
            .field("type", 1)
            .field("siteName", site)
            .field("key", key)
            .field("csr", csr);
        self.call(Endpoint::SetSSL, form).await
    }

    /// `POST /site?action=CloseSSLConf`
    pub async fn close_ssl(&self, site: &str) -> Result<Value, Error> {
        debug!(site, "disabling SSL");
        let form = Form::new().field("siteName", site).field("updateOf", 1);
        self.call(Endpoint::CloseSSLConf, form).await
    }

    /// `POST /site?action=HttpToHttps`
    pub async fn force_https(&self, site: &str) -> Result<Value, Error> {
        debug!(site, "forcing HTTPS");
        self.call(Endpoint::HttpToHttps, Form::new().field("siteName", site))
            .await
    }

    /// `POST /site?action=CloseToHttps`
    pub async fn close_force_https(&self, site: &str) -> Result<Value, Error> {
        debug!(site, "removing forced HTTPS");
        self.call(Endpoint::CloseToHttps, Form::new().field("siteName", site))
            .await
    }

    // ── Redirects ────────────────────────────────────────────────────

    /// `POST /site?action=Get301Status`
    pub async fn redirect_status(&self, site: &str) -> Result<Value, Error> {
        debug!(site, "fetching redirect status");
        self.call(Endpoint::Get301Status, Form::new().field("siteName", site))
            .await
    }

    /// Permanently redirect `src_domain` to `to_domain`.
    ///
    /// `POST /site?action=Set301Status`
    pub async fn set_redirect(
        &self,
        site: &str,
        to_domain: &str,
        src_domain: &str,
        enabled: bool,
    ) -> Result<Value, Error> {
        debug!(site, to_domain, src_domain, enabled, "setting redirect");
        let form = Form::new()
            .field("siteName", site)
            .field("toDomain", to_domain)
            .field("srcDomain", src_domain)
            .field("type", u8::from(enabled));
        self.call(Endpoint::Set301Status, form).await
    }
}
