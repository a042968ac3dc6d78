//! Login screen: role selection, credentials, theme toggle.

pub mod model;
pub mod styles;
pub mod view;
pub mod view_model;

use std::rc::Rc;

use leptos::prelude::*;

use crate::shared::alert::WindowAlert;
use crate::shared::theme::use_theme;
use crate::system::auth::HttpAuthService;
use crate::system::navigation::RouterNavigator;

pub use view::LoginScreen;
pub use view_model::{LoginServices, LoginViewModel};

/// Route entry: wires the browser-backed services into `LoginScreen`.
#[component]
pub fn LoginRoute() -> impl IntoView {
    let services = LoginServices {
        auth: Rc::new(HttpAuthService::new()),
        navigator: Rc::new(RouterNavigator::new()),
        alerts: Rc::new(WindowAlert),
        theme: Rc::new(use_theme()),
    };

    view! { <LoginScreen services=services /> }
}
