pub mod routes;

pub const LOGIN_PATH: &str = "/";
pub const HOME_PATH: &str = "/home";
pub const REGISTER_PATH: &str = "/register";

/// Router segment for one of the path constants above.
pub fn segment(path: &'static str) -> &'static str {
    path.trim_start_matches('/')
}
