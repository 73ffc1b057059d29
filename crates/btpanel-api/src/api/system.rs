// System status endpoints
//
// Host-level statistics and panel self-update. Responses are returned as
// loose JSON because their shape changes between panel releases.

use serde_json::Value;
use tracing::debug;

use crate::client::PanelClient;
use crate::endpoints::Endpoint;
use crate::error::Error;
use crate::form::Form;

impl PanelClient {
    /// Basic system statistics: OS, uptime, CPU, memory, panel version.
    ///
    /// `POST /system?action=GetSystemTotal`
    pub async fn system_total(&self) -> Result<Value, Error> {
        debug!("fetching system totals");
        self.call(Endpoint::GetSystemTotal, Form::new()).await
    }

    /// Disk partitions with size and inode usage.
    ///
    /// `POST /system?action=GetDiskInfo`
    pub async fn disk_info(&self) -> Result<Value, Error> {
        debug!("fetching disk info");
        self.call(Endpoint::GetDiskInfo, Form::new()).await
    }

    /// Live CPU, memory, load and network counters.
    ///
    /// `POST /system?action=GetNetWork`
    pub async fn network(&self) -> Result<Value, Error> {
        debug!("fetching network status");
        self.call(Endpoint::GetNetWork, Form::new()).await
    }

    /// Number of pending install tasks (0 when idle).
    ///
    /// `POST /ajax?action=GetTaskCount`
    pub async fn task_count(&self) -> Result<Value, Error> {
        debug!("checking install tasks");
        self.call(Endpoint::GetTaskCount, Form::new()).await
    }

    /// Check for, and optionally apply, a panel update.
    ///
    /// `POST /ajax?action=UpdatePanel`; `check` and `force` are only sent
    /// when set.
    pub async fn update_panel(&self, check: bool, force: bool) -> Result<Value, Error> {
        debug!(check, force, "checking panel update");
        let form = Form::new()
            .field_opt("check", check.then_some(true))
            .field_opt("force", force.then_some(true));
        self.call(Endpoint::UpdatePanel, form).await
    }
}
