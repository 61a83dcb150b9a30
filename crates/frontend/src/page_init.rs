//! One-time page setup once the view is mounted.

use crate::domain::a001_issue::ui::list::ISSUE_TABLE_ID;
use crate::shared::table_utils::hide_info_label;
use std::sync::atomic::{AtomicBool, Ordering};

static READY: AtomicBool = AtomicBool::new(false);

/// Runs the post-mount steps. Returns `false` if they already ran.
pub fn on_ready() -> bool {
    if READY.swap(true, Ordering::SeqCst) {
        log::warn!("page already initialized");
        return false;
    }

    hide_info_label(ISSUE_TABLE_ID);
    log::info!("page initialized");
    true
}
