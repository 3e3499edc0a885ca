use anyhow::Result;
use clap::Args;
use survey_client::{ApiClient, SessionManager};

#[derive(Args)]
pub struct LoginSubCommand {
    /// Account email
    #[arg(short, long)]
    email: String,
    /// Account password
    #[arg(short, long, env = "SURVEY_CLI_PASSWORD", hide_env_values = true)]
    password: String,
}

pub async fn login(
    client: &ApiClient,
    session: &SessionManager,
    sub_command_args: &LoginSubCommand,
) -> Result<()> {
    let answer = client
        .login(&sub_command_args.email, &sub_command_args.password)
        .await
        .into_result()?;

    session.save_login(&answer)?;

    let user = answer.user();
    println!("Logged in as {} <{}> ({})", user.full_name(), user.email, user.role);

    if answer.token().is_none() {
        tracing::warn!("Server did not issue a token, session is not authenticated");
    }

    Ok(())
}
