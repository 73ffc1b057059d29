//! Raw endpoint calls.

use btpanel_api::{Form, PanelClient};

use crate::cli::{CallArgs, GlobalOpts};
use crate::error::CliError;
use crate::output;

pub async fn handle(
    client: &PanelClient,
    args: CallArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let form = parse_fields(&args.fields)?;
    let value = client.post(&args.endpoint, form).await?;
    let out = output::render_value(global.output, &value)?;
    output::print_output(&out, global.quiet);
    Ok(())
}

/// Parse `key=value` arguments; the value may itself contain `=`.
fn parse_fields(raw: &[String]) -> Result<Form, CliError> {
    let mut form = Form::new();
    for field in raw {
        let Some((key, value)) = field.split_once('=') else {
            return Err(CliError::Validation {
                field: field.clone(),
                reason: "expected KEY=VALUE".into(),
            });
        };
        if key.is_empty() {
            return Err(CliError::Validation {
                field: field.clone(),
                reason: "field name is empty".into(),
            });
        }
        form.push(key, value);
    }
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn splits_on_first_equals() {
        let form = parse_fields(&args(&["siteName=example.com", "data=a=b"])).ok();
        let form = form.as_ref();
        assert_eq!(form.and_then(|f| f.get("siteName")), Some("example.com"));
        assert_eq!(form.and_then(|f| f.get("data")), Some("a=b"));
    }

    #[test]
    fn rejects_bare_words() {
        let result = parse_fields(&args(&["oops"]));
        assert!(
            matches!(&result, Err(CliError::Validation { field, .. }) if field == "oops"),
            "got {result:?}"
        );
    }

    #[test]
    fn rejects_empty_keys() {
        assert!(parse_fields(&args(&["=value"])).is_err());
    }
}
