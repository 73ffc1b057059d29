//! FTP command handlers.

use tabled::Tabled;

use btpanel_api::PanelClient;
use btpanel_api::models::FtpRecord;

use crate::cli::{FtpArgs, FtpCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::sites::list_query;
use super::util;

#[derive(Tabled)]
struct FtpRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Username")]
    name: String,
    #[tabled(rename = "Status")]
    status: &'static str,
    #[tabled(rename = "Path")]
    path: String,
    #[tabled(rename = "Remark")]
    ps: String,
}

fn ftp_row(ftp: &FtpRecord) -> FtpRow {
    FtpRow {
        id: ftp.id,
        name: ftp.name.clone(),
        status: if ftp.is_enabled() { "enabled" } else { "disabled" },
        path: ftp.path.clone(),
        ps: ftp.ps.clone(),
    }
}

pub async fn handle(
    client: &PanelClient,
    args: FtpArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        FtpCommand::List(list) => {
            let page = client.list_ftp(&list_query(list)).await?;
            let out = output::render_list(global.output, &page.data, ftp_row)?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        FtpCommand::Enable { username } => set_status(client, &username, true, global).await,
        FtpCommand::Disable { username } => set_status(client, &username, false, global).await,

        FtpCommand::Passwd { username, password } => {
            let account = util::resolve_ftp(client, &username).await?;
            let password =
                util::password_or_prompt(password, &format!("New password for {username}"))?;
            let reply = client
                .set_ftp_password(account.id, &account.name, &password)
                .await?;
            util::report(&reply, "Password changed", global.quiet)
        }
    }
}

async fn set_status(
    client: &PanelClient,
    username: &str,
    enabled: bool,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let account = util::resolve_ftp(client, username).await?;
    let reply = client
        .set_ftp_status(account.id, &account.name, enabled)
        .await?;
    let fallback = if enabled { "Account enabled" } else { "Account disabled" };
    util::report(&reply, fallback, global.quiet)
}
