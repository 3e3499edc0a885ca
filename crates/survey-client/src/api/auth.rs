use crate::client::ApiClient;
use crate::endpoint::Endpoint;
use crate::models::{LoginRequest, LoginResponse, RegisterRequest, User};
use crate::response::ApiResponse;

impl ApiClient {
    /// `POST /login`
    ///
    /// Does not touch the session; store the answer with
    /// [`crate::SessionManager::save_login`].
    pub async fn login(&self, email: &str, password: &str) -> ApiResponse<LoginResponse> {
        let credentials = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        self.call_with(Endpoint::Login, &credentials).await
    }

    /// `POST /register`
    pub async fn register(&self, user: &RegisterRequest) -> ApiResponse<User> {
        self.call_with(Endpoint::Register, user).await
    }
}
