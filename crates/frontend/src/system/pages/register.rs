use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::LOGIN_PATH;
use crate::shared::theme::{use_theme, ThemeProvider};

/// Target of "Create Student Account".
#[component]
pub fn RegisterPage() -> impl IntoView {
    let theme = use_theme();

    view! {
        <div style=move || {
            let palette = theme.colors();
            format!(
                "min-height: 100vh; padding: 28px; box-sizing: border-box; background-color: {}; color: {};",
                palette.background, palette.text
            )
        }>
            <h1>"Create Student Account"</h1>
            <p>"Student registration is not open yet."</p>
            <A href=LOGIN_PATH>"Back to sign in"</A>
        </div>
    }
}
