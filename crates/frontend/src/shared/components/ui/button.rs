use leptos::prelude::*;

/// Button component with variants (primary, outline)
///
/// Colors come from the caller through `style`, since they depend on the
/// active theme and role.
#[component]
pub fn Button(
    /// Button variant: "primary" (default) or "outline"
    #[prop(optional)]
    variant: &'static str,
    /// Inline style (reactive)
    #[prop(into)]
    style: Signal<String>,
    /// Button type attribute, "button" by default
    #[prop(optional)]
    button_type: &'static str,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let (variant_class, border) = match variant {
        "outline" => ("button--outline", "border-width: 1.5px; border-style: solid;"),
        _ => ("button--primary", "border: none; color: #FFFFFF;"),
    };
    let btn_type = if button_type.is_empty() { "button" } else { button_type };
    let full_style = move || {
        format!(
            "width: 100%; padding: 14px 20px; border-radius: 12px; font-size: 16px; font-weight: 600; cursor: pointer; {} {}",
            border,
            style.get()
        )
    };

    view! {
        <button
            type=btn_type
            class=format!("button {}", variant_class)
            style=full_style
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
