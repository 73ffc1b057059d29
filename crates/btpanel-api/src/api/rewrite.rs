// URL rewrite endpoints
//
// Rewrite rules are plain nginx include files; reading and saving go through
// the panel's generic file endpoints with a path derived from `RewriteSource`.

use serde_json::Value;
use tracing::debug;

use crate::client::PanelClient;
use crate::endpoints::Endpoint;
use crate::error::Error;
use crate::form::Form;
use crate::models::RewriteSource;

impl PanelClient {
    /// Built-in rewrite templates available to a site.
    ///
    /// `POST /site?action=GetRewriteList`
    pub async fn rewrite_list(&self, site: &str) -> Result<Value, Error> {
        debug!(site, "listing rewrite templates");
        self.call(Endpoint::GetRewriteList, Form::new().field("siteName", site))
            .await
    }

    /// Read a rewrite file.
    ///
    /// `POST /files?action=GetFileBody`
    pub async fn rewrite_content(&self, source: &RewriteSource) -> Result<Value, Error> {
        let path = source.file_path();
        debug!(path = %path, "reading rewrite rules");
        self.call(Endpoint::GetFileBody, Form::new().field("path", path))
            .await
    }

    /// Overwrite a rewrite file with `content`.
    ///
    /// `POST /files?action=SaveFileBody`
    pub async fn save_rewrite(&self, source: &RewriteSource, content: &str) -> Result<Value, Error> {
        let path = source.file_path();
        debug!(path = %path, bytes = content.len(), "saving rewrite rules");
        let form = Form::new()
            .field("path", path)
            .field("data", content)
            .field("encoding", "utf-8");
        self.call(Endpoint::SaveFileBody, form).await
    }

    /// Rewrite rules for a bound sub-directory.
    ///
    /// `POST /site?action=GetDirRewrite`
    pub async fn dir_rewrite(&self, binding_id: i64) -> Result<Value, Error> {
        debug!(binding_id, "fetching directory rewrite");
        self.call(Endpoint::GetDirRewrite, Form::new().field("id", binding_id))
            .await
    }
}
