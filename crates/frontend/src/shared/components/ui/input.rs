use leptos::prelude::*;

/// Labelled text input
#[component]
pub fn Input(
    /// ID for the input element
    id: &'static str,
    /// Label text (reactive)
    #[prop(into)]
    label: Signal<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    on_input: Callback<String>,
    /// Placeholder text (reactive)
    #[prop(into)]
    placeholder: Signal<String>,
    /// Input type: "text" (default) or "password"
    #[prop(optional)]
    input_type: &'static str,
    /// Virtual keyboard hint, e.g. "numeric"
    #[prop(optional)]
    inputmode: &'static str,
    /// Inline style for the label
    #[prop(into)]
    label_style: Signal<String>,
    /// Inline style for the input
    #[prop(into)]
    input_style: Signal<String>,
) -> impl IntoView {
    let input_t = if input_type.is_empty() { "text" } else { input_type };
    let input_mode = if inputmode.is_empty() { "text" } else { inputmode };

    view! {
        <div class="form__group" style="display: flex; flex-direction: column; gap: 8px;">
            <label
                class="form__label"
                for=id
                style=move || format!(
                    "font-size: 16px; font-weight: 600; letter-spacing: 0.2px; {}",
                    label_style.get()
                )
            >
                {move || label.get()}
            </label>
            <input
                id=id
                class="form__input"
                type=input_t
                inputmode=input_mode
                autocapitalize="none"
                prop:value=move || value.get()
                placeholder=move || placeholder.get()
                style=move || format!(
                    "border-width: 1.5px; border-style: solid; border-radius: 12px; padding: 14px 20px; font-size: 16px; {}",
                    input_style.get()
                )
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
