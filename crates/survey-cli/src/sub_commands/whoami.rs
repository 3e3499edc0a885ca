use anyhow::{bail, Result};
use survey_client::SessionManager;

pub fn whoami(session: &SessionManager) -> Result<()> {
    let Some(user) = session.current_user() else {
        bail!("Not logged in");
    };

    if !session.is_authenticated() {
        tracing::warn!("No token stored for this session");
    }

    println!("{}", serde_json::to_string_pretty(&user)?);

    Ok(())
}
