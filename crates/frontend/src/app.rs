use crate::routes::routes::AppRoutes;
use crate::shared::theme::ThemeContextProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ThemeContextProvider>
            <AppRoutes />
        </ThemeContextProvider>
    }
}
