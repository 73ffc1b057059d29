// Site backup endpoints

use serde_json::Value;
use tracing::debug;

use crate::client::PanelClient;
use crate::endpoints::Endpoint;
use crate::error::Error;
use crate::form::Form;

impl PanelClient {
    /// One page of backups for a site.
    ///
    /// `POST /data?action=getData&table=backup` with `type=0` (site
    /// backups) and the site id as `search`.
    pub async fn list_backups(&self, site_id: i64, page: u32, limit: u32) -> Result<Value, Error> {
        debug!(site_id, page, limit, "listing site backups");
        let form = Form::new()
            .field("p", page)
            .field("limit", limit)
            .field("type", 0)
            .field("search", site_id);
        self.call(Endpoint::WebBackupList, form).await
    }

    /// `POST /site?action=ToBackup`
    pub async fn create_backup(&self, site_id: i64) -> Result<Value, Error> {
        debug!(site_id, "creating site backup");
        self.call(Endpoint::WebToBackup, Form::new().field("id", site_id))
            .await
    }

    /// Delete a backup by its backup-table id.
    ///
    /// `POST /site?action=DelBackup`
    pub async fn delete_backup(&self, backup_id: i64) -> Result<Value, Error> {
        debug!(backup_id, "deleting site backup");
        self.call(Endpoint::WebDelBackup, Form::new().field("id", backup_id))
            .await
    }
}
