//! Site command handlers.

use tabled::Tabled;

use btpanel_api::PanelClient;
use btpanel_api::models::{DeleteSiteOptions, ListQuery, PhpVersion, SiteRecord, SiteType};

use crate::cli::{GlobalOpts, ListArgs, SitesArgs, SitesCommand};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct SiteRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Status")]
    status: &'static str,
    #[tabled(rename = "Path")]
    path: String,
    #[tabled(rename = "Expires")]
    expires: String,
    #[tabled(rename = "Remark")]
    ps: String,
}

fn site_row(site: &SiteRecord) -> SiteRow {
    SiteRow {
        id: site.id,
        name: site.name.clone(),
        status: if site.is_running() { "running" } else { "stopped" },
        path: site.path.clone(),
        expires: match site.edate.as_deref() {
            None | Some("0000-00-00") => "never".into(),
            Some(date) => date.into(),
        },
        ps: site.ps.clone(),
    }
}

#[derive(Tabled)]
struct TypeRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
}

#[derive(Tabled)]
struct PhpRow {
    #[tabled(rename = "Version")]
    version: String,
    #[tabled(rename = "Name")]
    name: String,
}

pub(crate) fn list_query(args: ListArgs) -> ListQuery {
    ListQuery {
        page: args.page,
        limit: args.limit,
        search: args.search,
        ..ListQuery::default()
    }
}

pub async fn handle(
    client: &PanelClient,
    args: SitesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        SitesCommand::List(list) => {
            let page = client.list_sites(&list_query(list)).await?;
            let out = output::render_list(global.output, &page.data, site_row)?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        SitesCommand::Types => {
            let types = client.site_types().await?;
            let out = output::render_list(global.output, &types, |t: &SiteType| TypeRow {
                id: t.id,
                name: t.name.clone(),
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        SitesCommand::Php => {
            let versions = client.php_versions().await?;
            let out = output::render_list(global.output, &versions, |v: &PhpVersion| PhpRow {
                version: v.version.clone(),
                name: v.name.clone(),
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        SitesCommand::Start { name } => {
            let site = util::resolve_site(client, &name).await?;
            let reply = client.start_site(site.id, &site.name).await?;
            util::report(&reply, "Site started", global.quiet)
        }

        SitesCommand::Stop { name } => {
            let site = util::resolve_site(client, &name).await?;
            let reply = client.stop_site(site.id, &site.name).await?;
            util::report(&reply, "Site stopped", global.quiet)
        }

        SitesCommand::Delete {
            name,
            ftp,
            database,
            path,
        } => {
            let site = util::resolve_site(client, &name).await?;
            if !util::confirm(&format!("Delete site '{name}'? This is destructive."), global.yes)? {
                return Ok(());
            }
            let options = DeleteSiteOptions { ftp, database, path };
            let reply = client.delete_site(site.id, &site.name, &options).await?;
            util::report(&reply, "Site deleted", global.quiet)
        }

        SitesCommand::Backups { name, page, limit } => {
            let site = util::resolve_site(client, &name).await?;
            let backups = client.list_backups(site.id, page, limit).await?;
            let rows = backups.get("data").unwrap_or(&backups);
            let out = output::render_value(global.output, rows)?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        SitesCommand::Backup { name } => {
            let site = util::resolve_site(client, &name).await?;
            let reply = client.create_backup(site.id).await?;
            util::report(&reply, "Backup created", global.quiet)
        }
    }
}
