use anyhow::{bail, Result};
use serde::Serialize;
use survey_client::{ApiResponse, Navigator};

/// Print the data of a successful answer as pretty JSON, fail with the
/// error message otherwise
pub fn print_response<T>(response: ApiResponse<T>) -> Result<()>
where
    T: Serialize,
{
    match response {
        ApiResponse::Success(data) => {
            println!("{}", serde_json::to_string_pretty(&data)?);
            Ok(())
        }
        ApiResponse::Failure(err) => bail!("{}", err),
    }
}

/// Terminal has no views to switch, so a redirect tells the user how to log
/// back in
#[derive(Debug, Default, Clone, Copy)]
pub struct CliNavigator;

impl Navigator for CliNavigator {
    fn redirect(&self, route: &str) {
        tracing::debug!("Redirect to {}", route);
        println!("Logged out. Run `survey-cli login` to start a new session.");
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use survey_client::ApiError;

    use super::*;

    #[test]
    fn test_failure_becomes_error_with_message() {
        let response: ApiResponse<serde_json::Value> =
            ApiResponse::Failure(ApiError::status(401, "invalid credentials"));

        let err = print_response(response).expect_err("should fail");
        assert_eq!(err.to_string(), "invalid credentials");
    }

    #[test]
    fn test_success_prints() {
        assert!(print_response(ApiResponse::Success(json!({"id": 1}))).is_ok());
    }
}
