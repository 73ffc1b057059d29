// Database endpoints

use serde_json::Value;
use tracing::debug;

use crate::api::sites::list_form;
use crate::api::scan_listing;
use crate::client::PanelClient;
use crate::endpoints::Endpoint;
use crate::error::Error;
use crate::form::Form;
use crate::models::{DatabaseRecord, ListQuery, Page};

impl PanelClient {
    /// One page of databases.
    ///
    /// `POST /data?action=getData&table=databases`
    pub async fn list_databases(&self, query: &ListQuery) -> Result<Page<DatabaseRecord>, Error> {
        debug!(page = query.page, limit = query.limit, "listing databases");
        self.call(Endpoint::WebSqlList, list_form(query)).await
    }

    /// Look a database up by exact name.
    pub async fn find_database(&self, name: &str) -> Result<Option<DatabaseRecord>, Error> {
        let fetch = move |query: ListQuery| async move { self.list_databases(&query).await };
        scan_listing(name, fetch, |d: &DatabaseRecord| d.name == name).await
    }

    /// `POST /database?action=ResDatabasePassword`
    pub async fn reset_database_password(
        &self,
        id: i64,
        name: &str,
        password: &str,
    ) -> Result<Value, Error> {
        debug!(id, name, "resetting database password");
        let form = Form::new()
            .field("id", id)
            .field("name", name)
            .field("password", password);
        self.call(Endpoint::ResDatabasePass, form).await
    }

    /// `POST /database?action=ToBackup`
    pub async fn backup_database(&self, id: i64) -> Result<Value, Error> {
        debug!(id, "backing up database");
        self.call(Endpoint::SQLToBackup, Form::new().field("id", id))
            .await
    }

    /// `POST /database?action=DelBackup`
    pub async fn delete_database_backup(&self, backup_id: i64) -> Result<Value, Error> {
        debug!(backup_id, "deleting database backup");
        self.call(Endpoint::SQLDelBackup, Form::new().field("id", backup_id))
            .await
    }
}
