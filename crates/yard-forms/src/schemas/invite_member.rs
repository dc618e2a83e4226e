use yard_core::entities::Member;
use yard_core::errors::CoreError;

use crate::form::{DialogForm, FormValues, ValidationMode};
use crate::rule::Rule;
use crate::schema::Schema;

pub const EMAIL: &str = "email";
pub const ROLE: &str = "role";

const ROLES: &[&str] = &["admin", "member", "viewer"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InviteValues {
    pub email: String,
    pub role: String,
}

impl Default for InviteValues {
    fn default() -> Self {
        Self {
            email: String::new(),
            role: String::from("member"),
        }
    }
}

impl FormValues for InviteValues {
    const FIELDS: &'static [&'static str] = &[EMAIL, ROLE];

    fn get(&self, field: &str) -> Option<&str> {
        match field {
            EMAIL => Some(&self.email),
            ROLE => Some(&self.role),
            _ => None,
        }
    }

    fn set(&mut self, field: &str, value: String) -> bool {
        match field {
            EMAIL => self.email = value,
            ROLE => self.role = value,
            _ => return false,
        }
        true
    }
}

/// "Invite Member" dialog.
#[derive(Debug)]
pub struct InviteMemberForm {
    schema: Schema<InviteValues>,
}

impl Default for InviteMemberForm {
    fn default() -> Self {
        Self::new()
    }
}

impl InviteMemberForm {
    #[must_use]
    pub fn new() -> Self {
        let schema = Schema::<InviteValues>::new()
            .rule(Rule::required(EMAIL, "Email is required"))
            .rule(Rule::email(EMAIL, "Invalid email"))
            .rule(Rule::required(ROLE, "Role is required"))
            .rule(Rule::one_of(ROLE, ROLES));
        Self { schema }
    }
}

impl DialogForm for InviteMemberForm {
    type Values = InviteValues;
    type Output = Member;

    const NAME: &'static str = "invite_member";
    const TITLE: &'static str = "Invite Member";
    const SUBMIT_LABEL: &'static str = "Invite";
    const BUSY_LABEL: &'static str = "Inviting...";

    fn defaults(&self) -> InviteValues {
        InviteValues::default()
    }

    fn schema(&self) -> &Schema<InviteValues> {
        &self.schema
    }

    fn mode(&self) -> ValidationMode {
        ValidationMode::OnSubmit
    }

    fn output(&self, values: &InviteValues) -> Result<Member, CoreError> {
        Ok(Member {
            email: values.email.clone(),
            role: values.role.parse()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use yard_core::enums::Role;

    fn values(email: &str, role: &str) -> InviteValues {
        InviteValues {
            email: email.into(),
            role: role.into(),
        }
    }

    #[test]
    fn defaults_to_member_role() {
        assert_eq!(InviteMemberForm::new().defaults().role, "member");
    }

    #[rstest]
    #[case("admin")]
    #[case("member")]
    #[case("viewer")]
    fn valid_email_with_any_role_passes(#[case] role: &str) {
        let form = InviteMemberForm::new();
        assert!(form.schema().validate(&values("ada@example.com", role)).is_ok());
    }

    #[rstest]
    #[case("", "Email is required")]
    #[case("ada", "Invalid email")]
    #[case("ada@", "Invalid email")]
    #[case("@example.com", "Invalid email")]
    #[case("   ", "Invalid email")]
    fn bad_email_fails_for_every_role(#[case] email: &str, #[case] message: &str) {
        let form = InviteMemberForm::new();
        for role in ROLES {
            let errors = form.schema().validate(&values(email, role)).unwrap_err();
            assert_eq!(errors.message(EMAIL), Some(message));
            assert!(errors.get(ROLE).is_none());
        }
    }

    #[test]
    fn role_outside_set_fails() {
        let form = InviteMemberForm::new();
        let errors = form
            .schema()
            .validate(&values("ada@example.com", "owner"))
            .unwrap_err();
        assert_eq!(
            errors.message(ROLE),
            Some("role must be one of the following values: admin, member, viewer")
        );
    }

    #[test]
    fn empty_role_is_required() {
        let form = InviteMemberForm::new();
        let errors = form.schema().validate(&values("ada@example.com", "")).unwrap_err();
        assert_eq!(errors.message(ROLE), Some("Role is required"));
        assert!(errors.summary().is_empty());
    }

    #[test]
    fn output_is_typed_member() {
        let form = InviteMemberForm::new();
        let member = form.output(&values("ada@example.com", "viewer")).unwrap();
        assert_eq!(member.role, Role::Viewer);
        assert_eq!(member.email, "ada@example.com");
    }
}
