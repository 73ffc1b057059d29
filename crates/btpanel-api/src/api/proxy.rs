// Reverse-proxy endpoints

use serde_json::Value;
use tracing::debug;

use crate::client::PanelClient;
use crate::endpoints::Endpoint;
use crate::error::Error;
use crate::form::Form;
use crate::models::ProxyConfig;

fn proxy_form(proxy: &ProxyConfig) -> Form {
    Form::new()
        .field("cache", u8::from(proxy.cache))
        .field("proxyname", &proxy.name)
        .field("cachetime", proxy.cache_hours)
        .field("proxydir", &proxy.dir)
        .field("proxysite", &proxy.target_url)
        .field("todomain", &proxy.target_domain)
        .field("advanced", u8::from(proxy.advanced))
        .field("sitename", &proxy.site)
        .field("subfilter", proxy.subfilter())
        .field("type", u8::from(proxy.enabled))
}

impl PanelClient {
    /// Reverse proxies configured on a site.
    ///
    /// `POST /site?action=GetProxyList`
    pub async fn proxies(&self, site: &str) -> Result<Value, Error> {
        debug!(site, "listing reverse proxies");
        self.call(Endpoint::GetProxyList, Form::new().field("sitename", site))
            .await
    }

    /// `POST /site?action=CreateProxy`
    pub async fn create_proxy(&self, proxy: &ProxyConfig) -> Result<Value, Error> {
        debug!(site = %proxy.site, name = %proxy.name, "creating reverse proxy");
        self.call(Endpoint::CreateProxy, proxy_form(proxy)).await
    }

    /// Replace an existing proxy, matched by site and name.
    ///
    /// `POST /site?action=ModifyProxy`
    pub async fn modify_proxy(&self, proxy: &ProxyConfig) -> Result<Value, Error> {
        debug!(site = %proxy.site, name = %proxy.name, "modifying reverse proxy");
        self.call(Endpoint::ModifyProxy, proxy_form(proxy)).await
    }
}
