use leptos::prelude::*;

use crate::shared::theme::{use_theme, ThemeProvider};

/// Landing view of the authenticated area.
///
/// The tabs behind it are owned by their own screens; this only confirms the
/// sign-in navigation target.
#[component]
pub fn HomePage() -> impl IntoView {
    let theme = use_theme();

    view! {
        <div style=move || {
            let palette = theme.colors();
            format!(
                "min-height: 100vh; padding: 28px; box-sizing: border-box; background-color: {}; color: {};",
                palette.background, palette.text
            )
        }>
            <h1>"FixIt"</h1>
            <p>"You are signed in."</p>
        </div>
    }
}
