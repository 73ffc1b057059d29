// FTP account endpoints

use serde_json::Value;
use tracing::debug;

use crate::api::sites::list_form;
use crate::api::scan_listing;
use crate::client::PanelClient;
use crate::endpoints::Endpoint;
use crate::error::Error;
use crate::form::Form;
use crate::models::{FtpRecord, ListQuery, Page};

impl PanelClient {
    /// One page of FTP accounts.
    ///
    /// `POST /data?action=getData&table=ftps`
    pub async fn list_ftp(&self, query: &ListQuery) -> Result<Page<FtpRecord>, Error> {
        debug!(page = query.page, limit = query.limit, "listing FTP accounts");
        self.call(Endpoint::WebFtpList, list_form(query)).await
    }

    /// Look an account up by exact username.
    pub async fn find_ftp(&self, username: &str) -> Result<Option<FtpRecord>, Error> {
        let fetch = move |query: ListQuery| async move { self.list_ftp(&query).await };
        scan_listing(username, fetch, |f: &FtpRecord| f.name == username).await
    }

    /// `POST /ftp?action=SetUserPassword`
    pub async fn set_ftp_password(
        &self,
        id: i64,
        username: &str,
        new_password: &str,
    ) -> Result<Value, Error> {
        debug!(id, username, "changing FTP password");
        let form = Form::new()
            .field("id", id)
            .field("ftp_username", username)
            .field("new_password", new_password);
        self.call(Endpoint::SetUserPassword, form).await
    }

    /// Enable or disable an account.
    ///
    /// `POST /ftp?action=SetStatus`
    pub async fn set_ftp_status(&self, id: i64, username: &str, enabled: bool) -> Result<Value, Error> {
        debug!(id, username, enabled, "setting FTP status");
        let form = Form::new()
            .field("id", id)
            .field("username", username)
            .field("status", u8::from(enabled));
        self.call(Endpoint::SetStatus, form).await
    }
}
