use yard_core::enums::Role;
use yard_core::errors::CoreError;

use crate::form::{DialogForm, FormValues, ValidationMode};
use crate::rule::Rule;
use crate::schema::Schema;

pub const ROLE: &str = "role";

const ASSIGNABLE: &[&str] = &["admin", "member"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateMemberValues {
    pub role: String,
}

impl FormValues for UpdateMemberValues {
    const FIELDS: &'static [&'static str] = &[ROLE];

    fn get(&self, field: &str) -> Option<&str> {
        (field == ROLE).then_some(self.role.as_str())
    }

    fn set(&mut self, field: &str, value: String) -> bool {
        if field != ROLE {
            return false;
        }
        self.role = value;
        true
    }
}

/// "Update Member" dialog: move a member between assignable roles.
///
/// Opening the dialog pre-fills the member's current role, and submitting
/// that same role is rejected.
#[derive(Debug)]
pub struct UpdateMemberForm {
    project_name: String,
    member_name: String,
    current_role: Role,
    schema: Schema<UpdateMemberValues>,
}

impl UpdateMemberForm {
    #[must_use]
    pub fn new(project_name: impl Into<String>, member_name: impl Into<String>, current_role: Role) -> Self {
        Self {
            project_name: project_name.into(),
            member_name: member_name.into(),
            current_role,
            schema: build_schema(current_role),
        }
    }

    /// Read-only project label shown in the dialog.
    #[must_use]
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Read-only member label shown in the dialog.
    #[must_use]
    pub fn member_name(&self) -> &str {
        &self.member_name
    }

    #[must_use]
    pub const fn current_role(&self) -> Role {
        self.current_role
    }

    /// Change the role the member currently holds. Use through
    /// [`crate::Dialog::update_form`] so an open dialog resets to it.
    pub fn set_current_role(&mut self, current_role: Role) {
        self.current_role = current_role;
        self.schema = build_schema(current_role);
    }
}

fn build_schema(current_role: Role) -> Schema<UpdateMemberValues> {
    Schema::<UpdateMemberValues>::new()
        .rule(Rule::required(ROLE, "role is a required field"))
        .rule(Rule::one_of(ROLE, ASSIGNABLE))
        .rule(Rule::custom(
            ROLE,
            "role_not_same",
            "Selected role is same as current role",
            move |role, _| role != current_role.as_str(),
        ))
        .summarize(ROLE)
}

impl DialogForm for UpdateMemberForm {
    type Values = UpdateMemberValues;
    type Output = Role;

    const NAME: &'static str = "update_member";
    const TITLE: &'static str = "Update Member";
    const SUBMIT_LABEL: &'static str = "Update Member";
    const BUSY_LABEL: &'static str = "Updating...";

    fn defaults(&self) -> UpdateMemberValues {
        UpdateMemberValues {
            role: self.current_role.as_str().to_string(),
        }
    }

    fn schema(&self) -> &Schema<UpdateMemberValues> {
        &self.schema
    }

    fn mode(&self) -> ValidationMode {
        ValidationMode::OnSubmit
    }

    fn resets_on_context_change(&self) -> bool {
        true
    }

    fn output(&self, values: &UpdateMemberValues) -> Result<Role, CoreError> {
        values.role.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn role(value: &str) -> UpdateMemberValues {
        UpdateMemberValues { role: value.into() }
    }

    #[test]
    fn current_role_always_fails() {
        for current in Role::ASSIGNABLE {
            let form = UpdateMemberForm::new("Checkout", "ada@example.com", current);
            let errors = form.schema().validate(&role(current.as_str())).unwrap_err();
            assert_eq!(
                errors.message(ROLE),
                Some("Selected role is same as current role")
            );
            assert_eq!(errors.summary(), vec!["Selected role is same as current role"]);
        }
    }

    #[test]
    fn any_other_assignable_role_passes() {
        for current in Role::ALL {
            let form = UpdateMemberForm::new("Checkout", "ada@example.com", current);
            for next in Role::ASSIGNABLE.into_iter().filter(|r| *r != current) {
                assert!(
                    form.schema().validate(&role(next.as_str())).is_ok(),
                    "{current} -> {next}"
                );
            }
        }
    }

    #[test]
    fn viewer_is_not_assignable() {
        let form = UpdateMemberForm::new("Checkout", "ada@example.com", Role::Member);
        let errors = form.schema().validate(&role("viewer")).unwrap_err();
        assert_eq!(
            errors.message(ROLE),
            Some("role must be one of the following values: admin, member")
        );
    }

    #[test]
    fn defaults_prefill_current_role() {
        let form = UpdateMemberForm::new("Checkout", "ada@example.com", Role::Admin);
        assert_eq!(form.defaults(), role("admin"));
        assert_eq!(form.project_name(), "Checkout");
        assert_eq!(form.member_name(), "ada@example.com");
    }

    #[test]
    fn changing_current_role_moves_the_rejected_value() {
        let mut form = UpdateMemberForm::new("Checkout", "ada@example.com", Role::Member);
        assert!(form.schema().validate(&role("admin")).is_ok());
        form.set_current_role(Role::Admin);
        assert!(form.schema().validate(&role("admin")).is_err());
        assert!(form.schema().validate(&role("member")).is_ok());
    }
}
