use std::convert::Infallible;
use std::future;

use anyhow::bail;
use serde::Serialize;
use yard_core::entities::{ApiKey, Member};
use yard_core::enums::{Provider, Role};
use yard_forms::schemas::{AddApiKeyForm, InviteMemberForm, UpdateMemberForm};
use yard_forms::{Dialog, DialogError, DialogForm, ValidationErrors};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::validate::{
    ApiKeyArgs, InviteArgs, UpdateMemberArgs, ValidateCommands,
};
use crate::output::output;

#[derive(Debug, Serialize)]
struct ValidationReport<T> {
    form: &'static str,
    valid: bool,
    errors: ValidationErrors,
    /// Messages the dialog shows in its banner.
    summary: Vec<String>,
    /// Typed value the dialog would hand to its submit handler.
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<T>,
}

impl<T> ValidationReport<T> {
    fn map<U>(self, f: impl FnOnce(T) -> U) -> ValidationReport<U> {
        ValidationReport {
            form: self.form,
            valid: self.valid,
            errors: self.errors,
            summary: self.summary,
            output: self.output.map(f),
        }
    }
}

pub async fn handle(action: &ValidateCommands, flags: &GlobalFlags) -> anyhow::Result<()> {
    let valid = match action {
        ValidateCommands::ApiKey(args) => {
            // The key itself is never echoed back.
            let report = api_key(args).await?.map(|key| ApiKey::listed(key.provider));
            emit(&report, flags)?
        }
        ValidateCommands::Invite(args) => emit(&invite(args).await?, flags)?,
        ValidateCommands::UpdateMember(args) => emit(&update_member(args).await?, flags)?,
    };
    if !valid {
        bail!("validation failed");
    }
    Ok(())
}

fn emit<T: Serialize>(report: &ValidationReport<T>, flags: &GlobalFlags) -> anyhow::Result<bool> {
    output(report, flags.format)?;
    Ok(report.valid)
}

async fn api_key(args: &ApiKeyArgs) -> anyhow::Result<ValidationReport<ApiKey>> {
    let existing = args
        .existing
        .iter()
        .map(|name| name.parse::<Provider>().map(ApiKey::listed))
        .collect::<Result<Vec<_>, _>>()?;
    let form = AddApiKeyForm::new(existing);
    run_dialog(form, &[("provider", args.provider.as_str()), ("api_key", args.key.as_str())]).await
}

async fn invite(args: &InviteArgs) -> anyhow::Result<ValidationReport<Member>> {
    run_dialog(
        InviteMemberForm::new(),
        &[("email", args.email.as_str()), ("role", args.role.as_str())],
    )
    .await
}

async fn update_member(args: &UpdateMemberArgs) -> anyhow::Result<ValidationReport<Role>> {
    let current: Role = args.current_role.parse()?;
    let form = UpdateMemberForm::new(args.project.clone(), args.member.clone(), current);
    run_dialog(form, &[("role", args.role.as_str())]).await
}

/// Drive a dialog through open → edit → submit with a handler that accepts
/// whatever the dialog produces.
async fn run_dialog<F: DialogForm>(
    form: F,
    fields: &[(&str, &str)],
) -> anyhow::Result<ValidationReport<F::Output>> {
    let mut dialog = Dialog::new(form);
    dialog.open()?;
    for (field, value) in fields {
        dialog.set_field(field, *value)?;
    }

    let mut accepted = None;
    let outcome = dialog
        .submit(|output| {
            accepted = Some(output);
            future::ready(Ok::<(), Infallible>(()))
        })
        .await;

    let errors = match outcome {
        Ok(()) => ValidationErrors::default(),
        Err(DialogError::Validation(errors)) => errors,
        Err(other) => return Err(other.into()),
    };
    Ok(ValidationReport {
        form: F::NAME,
        valid: errors.is_empty(),
        summary: errors.summary().into_iter().map(str::to_string).collect(),
        errors,
        output: accepted,
    })
}
