pub mod api;
pub mod role;
pub mod service;

pub use api::HttpAuthService;
pub use role::{profile, profiles, RoleProfile};
pub use service::{AuthError, AuthService, Credentials, LoginOutcome};
