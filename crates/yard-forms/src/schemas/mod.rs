//! Form definitions for the project dialogs.

mod add_api_key;
mod invite_member;
mod update_member;

pub use add_api_key::{AddApiKeyForm, ApiKeyValues};
pub use invite_member::{InviteMemberForm, InviteValues};
pub use update_member::{UpdateMemberForm, UpdateMemberValues};
