use super::use_theme;
use leptos::prelude::*;

/// Light/dark toggle button. Carries the `checked` class while the next
/// activation would apply the light theme.
#[component]
pub fn ThemeSwitchButton(
    /// DOM id of the control
    #[prop(optional, default = "switch")]
    id: &'static str,
) -> impl IntoView {
    let ctx = use_theme();

    let is_checked = move || ctx.switch.with(|s| s.is_checked());

    view! {
        <button
            id=id
            class=move || if is_checked() { "theme-switch checked" } else { "theme-switch" }
            aria-pressed=move || if is_checked() { "true" } else { "false" }
            title="Toggle light/dark theme"
            on:click=move |_| {
                ctx.activate_switch();
            }
        >
            <svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                <path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"></path>
            </svg>
        </button>
    }
}
