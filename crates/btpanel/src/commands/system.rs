//! System command handlers.

use btpanel_api::PanelClient;

use crate::cli::{GlobalOpts, SystemArgs, SystemCommand};
use crate::error::CliError;
use crate::output;

pub async fn handle(
    client: &PanelClient,
    args: SystemArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let value = match args.command {
        SystemCommand::Total => client.system_total().await?,
        SystemCommand::Disk => client.disk_info().await?,
        SystemCommand::Network => client.network().await?,
        SystemCommand::Tasks => client.task_count().await?,
        SystemCommand::Update { check, force } => client.update_panel(check, force).await?,
    };
    let out = output::render_value(global.output, &value)?;
    output::print_output(&out, global.quiet);
    Ok(())
}
