use leptos::prelude::*;
use thaw::Spinner;

use super::view_model::{LoginServices, LoginViewModel};
use crate::shared::components::ui::{Button, Input};
use crate::shared::icons::icon;
use crate::system::auth::{profile, profiles};

#[component]
pub fn LoginScreen(services: LoginServices) -> impl IntoView {
    let vm = LoginViewModel::new(services);

    // Memos keep keystrokes from re-rendering the whole form.
    let loading = Memo::new(move |_| vm.is_loading());
    let role = Memo::new(move |_| vm.form.with(|f| f.role));
    let styles = Memo::new(move |_| vm.styles());

    let identifier = Signal::derive(move || vm.form.with(|f| f.identifier.clone()));
    let password = Signal::derive(move || vm.form.with(|f| f.password.clone()));
    let id_label = Signal::derive(move || profile(role.get()).id_label.to_string());
    let id_placeholder = Signal::derive(move || profile(role.get()).id_placeholder.to_string());
    let text_style = Signal::derive(move || styles.with(|s| format!("color: {};", s.palette.text)));
    let input_style = Signal::derive(move || styles.with(|s| s.input_css()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit_command();
    };

    view! {
        <Show
            when=move || !loading.get()
            fallback=move || view! {
                <div style=move || styles.with(|s| s.container_css())>
                    <div style="display: flex; flex-direction: column; align-items: center; gap: 16px;">
                        <Spinner />
                        <p style=move || styles.with(|s| format!("font-size: 16px; color: {};", s.palette.text_secondary))>
                            "Signing you in..."
                        </p>
                    </div>
                </div>
            }
        >
            <div class="login-container" style=move || styles.with(|s| s.container_css())>
                <button
                    type="button"
                    class="theme-toggle"
                    aria-label="Toggle Dark Mode"
                    title="Toggle Dark Mode"
                    style=move || styles.with(|s| s.toggle_css())
                    on:click=move |_| vm.toggle_theme_command()
                >
                    {move || icon(styles.with(|s| s.toggle_icon))}
                </button>

                <div class="login-header" style="text-align: center; margin-bottom: 40px;">
                    <h1 style=move || styles.with(|s| format!(
                        "font-size: 56px; font-weight: bold; margin: 0 0 12px; letter-spacing: -1px; color: {};",
                        s.accent
                    ))>
                        "FixIt"
                    </h1>
                    <p style=move || styles.with(|s| format!(
                        "font-size: 18px; margin: 0; letter-spacing: 0.2px; color: {};",
                        s.palette.text_secondary
                    ))>
                        "University Maintenance Reporting"
                    </p>
                </div>

                <div class="role-selector" style="margin-bottom: 36px;">
                    <p style=move || styles.with(|s| format!(
                        "font-size: 16px; font-weight: 600; margin: 0 0 16px; letter-spacing: 0.2px; color: {};",
                        s.palette.text
                    ))>
                        "Log in as :"
                    </p>
                    <div style="display: flex; gap: 12px;">
                        {profiles().iter().map(move |p| {
                            let r = p.role;
                            let button_style = move || styles.with(|s| {
                                s.role_button(r).map(|b| b.css()).unwrap_or_default()
                            });
                            let pressed = move || styles.with(|s| {
                                s.role_button(r).map(|b| b.active).unwrap_or(false).to_string()
                            });
                            view! {
                                <button
                                    type="button"
                                    class="role-button"
                                    aria-pressed=pressed
                                    style=move || format!(
                                        "flex: 1; padding: 16px 20px; border-radius: 12px; font-size: 16px; font-weight: 600; letter-spacing: 0.2px; cursor: pointer; box-shadow: 0 2px 4px rgba(0, 0, 0, 0.06); {}",
                                        button_style()
                                    )
                                    on:click=move |_| vm.select_role(r)
                                >
                                    {p.display_name}
                                </button>
                            }
                        }).collect_view()}
                    </div>
                </div>

                <form on:submit=on_submit style="display: flex; flex-direction: column; gap: 20px;">
                    <Input
                        id="login-identifier"
                        label=id_label
                        value=identifier
                        on_input=Callback::new(move |v: String| vm.set_identifier(v))
                        placeholder=id_placeholder
                        inputmode="numeric"
                        label_style=text_style
                        input_style=input_style
                    />
                    <Input
                        id="login-password"
                        label=Signal::stored("Password".to_string())
                        value=password
                        on_input=Callback::new(move |v: String| vm.set_password(v))
                        placeholder=Signal::stored("Enter your password".to_string())
                        input_type="password"
                        label_style=text_style
                        input_style=input_style
                    />

                    <Button
                        button_type="submit"
                        style=Signal::derive(move || styles.with(|s| s.sign_in_css()))
                    >
                        "Sign in"
                    </Button>

                    <Show when=move || profile(role.get()).shows_register>
                        <Button
                            variant="outline"
                            style=Signal::derive(move || styles.with(|s| s.register_css()))
                            on_click=Callback::new(move |_| vm.register_command())
                        >
                            "Create Student Account"
                        </Button>
                    </Show>
                </form>

                <p style=move || styles.with(|s| format!(
                    "text-align: center; font-size: 14px; font-style: italic; margin-top: 24px; letter-spacing: 0.2px; color: {};",
                    s.palette.text_secondary
                ))>
                    "Developed by TheArchitect"
                </p>
            </div>
        </Show>
    }
}
