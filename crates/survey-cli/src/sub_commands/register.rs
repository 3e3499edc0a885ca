use anyhow::Result;
use clap::Args;
use survey_client::models::{RegisterRequest, Role};
use survey_client::ApiClient;

use crate::utils::print_response;

#[derive(Args)]
pub struct RegisterSubCommand {
    /// First name
    #[arg(long)]
    first_name: String,
    /// Last name
    #[arg(long)]
    last_name: String,
    /// Account email
    #[arg(short, long)]
    email: String,
    /// Account password
    #[arg(short, long, env = "SURVEY_CLI_PASSWORD", hide_env_values = true)]
    password: String,
    /// Requested role (student, professor or admin)
    #[arg(short, long)]
    role: Option<Role>,
}

pub async fn register(client: &ApiClient, sub_command_args: &RegisterSubCommand) -> Result<()> {
    let request = RegisterRequest {
        first_name: sub_command_args.first_name.clone(),
        last_name: sub_command_args.last_name.clone(),
        email: sub_command_args.email.clone(),
        password: sub_command_args.password.clone(),
        role: sub_command_args.role,
    };

    print_response(client.register(&request).await)
}
