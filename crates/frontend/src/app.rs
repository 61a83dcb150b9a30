use crate::domain::a001_issue::data::{load_snapshot, now_s};
use crate::domain::a001_issue::ui::list::IssueList;
use crate::layout::Shell;
use crate::page_init;
use crate::shared::theme::ThemeProvider;
use leptos::prelude::*;

const BOARD_TITLE: &str = "Mentor issues";

#[component]
pub fn App() -> impl IntoView {
    let snapshot = load_snapshot();
    let age = snapshot.since_last_update(now_s());
    let rows = snapshot.rows();

    // Runs after the table is in the DOM
    Effect::new(move |_| {
        page_init::on_ready();
    });

    view! {
        <ThemeProvider>
            <Shell title=BOARD_TITLE age=age>
                <IssueList rows=rows />
            </Shell>
        </ThemeProvider>
    }
}
