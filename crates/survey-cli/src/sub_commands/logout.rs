use anyhow::Result;
use survey_client::SessionManager;

pub fn logout(session: &SessionManager) -> Result<()> {
    if !session.is_authenticated() && session.user_id().is_none() {
        println!("No active session");
        return Ok(());
    }

    session.logout();

    Ok(())
}
