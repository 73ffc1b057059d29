//! Command dispatch: bridges CLI args -> panel calls -> output formatting.

pub mod call;
pub mod databases;
pub mod ftp;
pub mod sites;
pub mod system;
pub mod util;

use btpanel_api::PanelClient;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a panel-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    client: &PanelClient,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::System(args) => system::handle(client, args, global).await,
        Command::Sites(args) => sites::handle(client, args, global).await,
        Command::Ftp(args) => ftp::handle(client, args, global).await,
        Command::Db(args) => databases::handle(client, args, global).await,
        Command::Call(args) => call::handle(client, args, global).await,
        // Completions are handled before a client is built
        Command::Completions(_) => Ok(()),
    }
}
