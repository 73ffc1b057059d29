//! Database command handlers.

use tabled::Tabled;

use btpanel_api::PanelClient;
use btpanel_api::models::DatabaseRecord;

use crate::cli::{DbArgs, DbCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::sites::list_query;
use super::util;

#[derive(Tabled)]
struct DatabaseRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "User")]
    username: String,
    #[tabled(rename = "Access")]
    accept: String,
    #[tabled(rename = "Remark")]
    ps: String,
}

fn database_row(db: &DatabaseRecord) -> DatabaseRow {
    DatabaseRow {
        id: db.id,
        name: db.name.clone(),
        username: db.username.clone(),
        accept: db.accept.clone().unwrap_or_default(),
        ps: db.ps.clone(),
    }
}

pub async fn handle(
    client: &PanelClient,
    args: DbArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        DbCommand::List(list) => {
            let page = client.list_databases(&list_query(list)).await?;
            let out = output::render_list(global.output, &page.data, database_row)?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        DbCommand::Backup { name } => {
            let db = util::resolve_database(client, &name).await?;
            let reply = client.backup_database(db.id).await?;
            util::report(&reply, "Backup created", global.quiet)
        }

        DbCommand::Passwd { name, password } => {
            let db = util::resolve_database(client, &name).await?;
            let password = util::password_or_prompt(password, &format!("New password for {name}"))?;
            let reply = client
                .reset_database_password(db.id, &db.name, &password)
                .await?;
            util::report(&reply, "Password reset", global.quiet)
        }
    }
}
