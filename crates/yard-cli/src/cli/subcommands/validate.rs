use clap::{Args, Subcommand};

/// Dialog validation commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ValidateCommands {
    /// "Add API Key" dialog.
    ApiKey(ApiKeyArgs),
    /// "Invite Member" dialog.
    Invite(InviteArgs),
    /// "Update Member" dialog.
    UpdateMember(UpdateMemberArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ApiKeyArgs {
    /// Provider (openai, anthropic, gemini).
    #[arg(long, default_value = "")]
    pub provider: String,
    /// API key to check against the provider's format.
    #[arg(long, default_value = "")]
    pub key: String,
    /// Providers that already have a stored key.
    #[arg(long, value_delimiter = ',')]
    pub existing: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct InviteArgs {
    #[arg(long, default_value = "")]
    pub email: String,
    /// Role to invite as (admin, member, viewer).
    #[arg(long, default_value = "member")]
    pub role: String,
}

#[derive(Clone, Debug, Args)]
pub struct UpdateMemberArgs {
    /// Project label shown in the dialog.
    #[arg(long, default_value = "")]
    pub project: String,
    /// Member label shown in the dialog.
    #[arg(long, default_value = "")]
    pub member: String,
    /// Role the member currently holds.
    #[arg(long)]
    pub current_role: String,
    /// Role to move the member to.
    #[arg(long)]
    pub role: String,
}
