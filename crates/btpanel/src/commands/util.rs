//! Shared helpers for command handlers.

use std::io::IsTerminal;

use serde_json::Value;

use btpanel_api::PanelClient;
use btpanel_api::models::{DatabaseRecord, FtpRecord, SiteRecord};

use crate::error::CliError;

/// Resolve a site name to its row.
pub async fn resolve_site(client: &PanelClient, name: &str) -> Result<SiteRecord, CliError> {
    client.find_site(name).await?.ok_or_else(|| CliError::NotFound {
        resource_type: "site".into(),
        identifier: name.into(),
        list_command: "sites list".into(),
    })
}

/// Resolve an FTP username to its row.
pub async fn resolve_ftp(client: &PanelClient, username: &str) -> Result<FtpRecord, CliError> {
    client
        .find_ftp(username)
        .await?
        .ok_or_else(|| CliError::NotFound {
            resource_type: "FTP account".into(),
            identifier: username.into(),
            list_command: "ftp list".into(),
        })
}

/// Resolve a database name to its row.
pub async fn resolve_database(
    client: &PanelClient,
    name: &str,
) -> Result<DatabaseRecord, CliError> {
    client
        .find_database(name)
        .await?
        .ok_or_else(|| CliError::NotFound {
            resource_type: "database".into(),
            identifier: name.into(),
            list_command: "db list".into(),
        })
}

/// Turn a `{"status": false, "msg": ...}` reply into an error and return
/// the panel's message otherwise.
pub fn check_status(reply: &Value) -> Result<Option<String>, CliError> {
    let message = reply
        .get("msg")
        .and_then(Value::as_str)
        .map(str::to_owned);
    if reply.get("status").and_then(Value::as_bool) == Some(false) {
        return Err(CliError::Panel {
            message: message.unwrap_or_else(|| reply.to_string()),
        });
    }
    Ok(message)
}

/// Report the outcome of a mutating command on stderr.
pub fn report(reply: &Value, fallback: &str, quiet: bool) -> Result<(), CliError> {
    let message = check_status(reply)?;
    if !quiet {
        eprintln!("{}", message.as_deref().unwrap_or(fallback));
    }
    Ok(())
}

/// Prompt for confirmation, auto-approving if `--yes` was passed.
pub fn confirm(message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    if !std::io::stdin().is_terminal() {
        return Err(CliError::NonInteractiveRequiresYes {
            action: message.into(),
        });
    }
    dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))
}

/// Use the given password or prompt for one twice.
pub fn password_or_prompt(given: Option<String>, prompt: &str) -> Result<String, CliError> {
    if let Some(password) = given {
        return Ok(password);
    }
    if !std::io::stdin().is_terminal() {
        return Err(CliError::Validation {
            field: "password".into(),
            reason: "pass --password when not running interactively".into(),
        });
    }
    dialoguer::Password::new()
        .with_prompt(prompt)
        .with_confirmation("Repeat password", "Passwords do not match")
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn false_status_is_an_error() {
        let result = check_status(&json!({ "status": false, "msg": "站点不存在" }));
        assert!(
            matches!(&result, Err(CliError::Panel { message }) if message == "站点不存在"),
            "got {result:?}"
        );
    }

    #[test]
    fn true_status_returns_message() {
        let result = check_status(&json!({ "status": true, "msg": "操作成功" }));
        assert_eq!(result.ok().flatten().as_deref(), Some("操作成功"));
    }

    #[test]
    fn replies_without_status_pass() {
        assert!(check_status(&json!([1, 2])).is_ok());
        assert!(check_status(&json!({ "data": [] })).is_ok());
    }
}
