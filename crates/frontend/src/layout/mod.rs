pub mod top_header;

use leptos::prelude::*;
use std::time::Duration;
use top_header::TopHeader;

/// Page shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |              Content                     |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(
    #[prop(into)] title: String,
    age: Option<Duration>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader title=title age=age />
            <main class="app-main">
                {children()}
            </main>
        </div>
    }
}
