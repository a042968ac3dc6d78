use contracts::system::auth::UserRole;
use thiserror::Error;

use crate::system::auth::{profile, AuthError, Credentials, LoginOutcome, RoleProfile};

pub const ALERT_TITLE: &str = "Error";

/// Local state of the login screen.
///
/// `loading` is true only while an authentication call is in flight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub identifier: String,
    pub password: String,
    pub role: UserRole,
    pub loading: bool,
}

/// A login attempt that ended without signing in.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("identifier or password is empty")]
    MissingFields,

    #[error("credentials were rejected")]
    InvalidCredentials,

    #[error("login failed: {0}")]
    Failed(AuthError),
}

impl LoginError {
    /// Title and message shown to the user. Service failures share one
    /// generic message.
    pub fn alert(&self) -> (&'static str, &'static str) {
        (ALERT_TITLE, self.message())
    }

    fn message(&self) -> &'static str {
        match self {
            LoginError::MissingFields => "Please fill in all fields",
            LoginError::InvalidCredentials => "Invalid credentials",
            LoginError::Failed(_) => "Login failed. Please try again.",
        }
    }
}

impl LoginForm {
    pub fn profile(&self) -> &'static RoleProfile {
        profile(self.role)
    }

    pub fn select_role(&mut self, role: UserRole) {
        self.role = role;
    }

    /// Validates the form and marks it busy.
    ///
    /// Only emptiness is checked; the ID format is left to the server.
    pub fn begin_submit(&mut self) -> Result<Credentials, LoginError> {
        if self.identifier.is_empty() || self.password.is_empty() {
            return Err(LoginError::MissingFields);
        }

        self.loading = true;
        Ok(Credentials {
            identifier: self.identifier.clone(),
            password: self.password.clone(),
            role: self.role,
        })
    }

    /// Clears the busy flag and turns the service verdict into a result.
    pub fn finish_submit(&mut self, outcome: LoginOutcome) -> Result<(), LoginError> {
        self.loading = false;
        match outcome {
            LoginOutcome::Authenticated => Ok(()),
            LoginOutcome::InvalidCredentials => Err(LoginError::InvalidCredentials),
            LoginOutcome::Failed(err) => Err(LoginError::Failed(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> LoginForm {
        LoginForm {
            identifier: "20231234".to_string(),
            password: "hunter2".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults() {
        let form = LoginForm::default();
        assert_eq!(form.role, UserRole::Student);
        assert!(form.identifier.is_empty());
        assert!(form.password.is_empty());
        assert!(!form.loading);
    }

    #[test]
    fn test_empty_fields_are_rejected_without_going_busy() {
        let cases = [("", ""), ("123", ""), ("", "pw")];
        for (identifier, password) in cases {
            let mut form = LoginForm {
                identifier: identifier.to_string(),
                password: password.to_string(),
                ..Default::default()
            };
            assert_eq!(form.begin_submit(), Err(LoginError::MissingFields));
            assert!(!form.loading);
        }
    }

    #[test]
    fn test_whitespace_is_not_empty() {
        let mut form = LoginForm {
            identifier: " ".to_string(),
            password: " ".to_string(),
            ..Default::default()
        };
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn test_begin_submit_carries_role() {
        let mut form = filled();
        form.select_role(UserRole::Staff);
        let credentials = form.begin_submit().unwrap();
        assert!(form.loading);
        assert_eq!(credentials.identifier, "20231234");
        assert_eq!(credentials.password, "hunter2");
        assert_eq!(credentials.role, UserRole::Staff);
    }

    #[test]
    fn test_finish_submit_always_clears_loading() {
        let outcomes = [
            LoginOutcome::Authenticated,
            LoginOutcome::InvalidCredentials,
            LoginOutcome::Failed(AuthError::Status(502)),
        ];
        for outcome in outcomes {
            let mut form = filled();
            form.begin_submit().unwrap();
            let _ = form.finish_submit(outcome);
            assert!(!form.loading);
        }
    }

    #[test]
    fn test_finish_submit_maps_outcomes() {
        let mut form = filled();
        assert_eq!(form.finish_submit(LoginOutcome::Authenticated), Ok(()));
        assert_eq!(
            form.finish_submit(LoginOutcome::InvalidCredentials),
            Err(LoginError::InvalidCredentials)
        );
        assert_eq!(
            form.finish_submit(LoginOutcome::Failed(AuthError::Request("offline".into()))),
            Err(LoginError::Failed(AuthError::Request("offline".into())))
        );
    }

    #[test]
    fn test_failure_message_hides_cause() {
        let network = LoginError::Failed(AuthError::Request("offline".into()));
        let server = LoginError::Failed(AuthError::Status(500));
        assert_eq!(network.alert(), server.alert());
        assert_eq!(network.alert(), ("Error", "Login failed. Please try again."));
        assert_eq!(LoginError::InvalidCredentials.alert(), ("Error", "Invalid credentials"));
        assert_eq!(LoginError::MissingFields.alert(), ("Error", "Please fill in all fields"));
    }
}
