use crate::routes::{segment, HOME_PATH, LOGIN_PATH, REGISTER_PATH};
use crate::system::pages::home::HomePage;
use crate::system::pages::login::LoginRoute;
use crate::system::pages::register::RegisterPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::StaticSegment;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <LoginRoute /> }>
                <Route path=StaticSegment(segment(LOGIN_PATH)) view=LoginRoute />
                <Route path=StaticSegment(segment(HOME_PATH)) view=HomePage />
                <Route path=StaticSegment(segment(REGISTER_PATH)) view=RegisterPage />
            </Routes>
        </Router>
    }
}
