use async_trait::async_trait;
use contracts::system::auth::{LoginRequest, LoginResponse};
use gloo_net::http::Request;

use super::service::{AuthError, AuthService, Credentials, LoginOutcome};
use crate::shared::api_utils::api_url;

pub const LOGIN_PATH: &str = "/api/system/auth/login";

/// `AuthService` that posts credentials to the API server.
///
/// Tokens returned on success are not kept; session handling belongs to the
/// authenticated area.
#[derive(Clone, Debug)]
pub struct HttpAuthService {
    endpoint: String,
}

impl HttpAuthService {
    pub fn new() -> Self {
        Self::with_endpoint(api_url(LOGIN_PATH))
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn post_login(&self, request: &LoginRequest) -> Result<LoginOutcome, AuthError> {
        let response = Request::post(&self.endpoint)
            .json(request)
            .map_err(|e| AuthError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Request(e.to_string()))?;

        if let Some(outcome) = outcome_for_status(response.status()) {
            return Ok(outcome);
        }

        let body = response
            .text()
            .await
            .map_err(|e| AuthError::Request(e.to_string()))?;

        decode_login_body(&body)
    }
}

impl Default for HttpAuthService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl AuthService for HttpAuthService {
    async fn login(&self, credentials: &Credentials) -> LoginOutcome {
        let request = LoginRequest {
            username: credentials.identifier.clone(),
            password: credentials.password.clone(),
            role: credentials.role,
        };

        self.post_login(&request)
            .await
            .unwrap_or_else(LoginOutcome::Failed)
    }
}

/// Maps a response status to a final outcome. `None` means the body still
/// has to be read (2xx).
fn outcome_for_status(status: u16) -> Option<LoginOutcome> {
    match status {
        200..=299 => None,
        401 | 403 => Some(LoginOutcome::InvalidCredentials),
        other => Some(LoginOutcome::Failed(AuthError::Status(other))),
    }
}

/// Reads a 2xx body. Only a well-formed `LoginResponse` counts as signed in.
fn decode_login_body(body: &str) -> Result<LoginOutcome, AuthError> {
    let response: LoginResponse =
        serde_json::from_str(body).map_err(|e| AuthError::Decode(e.to_string()))?;
    log::debug!("signed in with role {}", response.user.role);

    Ok(LoginOutcome::Authenticated)
}
