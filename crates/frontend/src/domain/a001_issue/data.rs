//! Снимок задач, встроенный в страницу как JSON-остров
//! `<script type="application/json" id="issues-data">`.

use contracts::domain::a001_issue::IssueSnapshot;

pub const SNAPSHOT_ELEMENT_ID: &str = "issues-data";

/// Читает снимок из страницы. Нет элемента или битый JSON — пустой снимок.
pub fn load_snapshot() -> IssueSnapshot {
    let text = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(SNAPSHOT_ELEMENT_ID))
        .and_then(|el| el.text_content());

    let Some(text) = text else {
        log::warn!("#{} not found, the issue table is empty", SNAPSHOT_ELEMENT_ID);
        return IssueSnapshot::default();
    };

    match IssueSnapshot::from_json(&text) {
        Ok(snapshot) => {
            log::debug!("loaded {} issues", snapshot.issues.len());
            snapshot
        }
        Err(e) => {
            log::warn!("#{}: {}", SNAPSHOT_ELEMENT_ID, e);
            IssueSnapshot::default()
        }
    }
}

/// Текущее Unix-время, секунды
pub fn now_s() -> i64 {
    chrono::Utc::now().timestamp()
}
