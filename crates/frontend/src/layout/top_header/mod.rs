//! TopHeader component - page top bar.
//!
//! Contains:
//! - Board title
//! - Age of the issue snapshot
//! - Light/dark theme switch

use crate::shared::theme::ThemeSwitchButton;
use contracts::shared::display::human_duration;
use leptos::prelude::*;
use std::time::Duration;

/// DOM id of the theme switch control
pub const SWITCH_ID: &str = "switch";

/// Подпись "updated 3h ago"; без возраста снимка подписи нет
pub fn updated_caption(age: Option<Duration>) -> Option<String> {
    age.map(|age| format!("updated {} ago", human_duration(Some(age))))
}

#[component]
pub fn TopHeader(
    /// Заголовок страницы
    #[prop(into)]
    title: String,
    /// Возраст снимка
    age: Option<Duration>,
) -> impl IntoView {
    let caption = updated_caption(age);

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">{title}</span>
                {caption.map(|text| view! {
                    <span class="top-header__subtitle">{text}</span>
                })}
            </div>

            <div class="top-header__actions">
                <ThemeSwitchButton id=SWITCH_ID />
            </div>
        </div>
    }
}
