mod common;

use common::{memory_store, process_and_commit};
use mnemo_core::AgendaStatus;

#[test]
fn test_repeated_mentions_stay_deduplicated() {
    let mut store = memory_store();
    for _ in 0..3 {
        process_and_commit(
            &mut store,
            "User: keep improving the DataAnalyzer project with Python.\nAssistant: On it.",
        );
    }
    let ws = store.active();
    assert_eq!(ws.conversations.len(), 3);
    assert_eq!(ws.projects.as_slice(), ["DataAnalyzer"]);
    assert_eq!(ws.technologies.as_slice(), ["Python"]);
}

#[test]
fn test_conversation_window_keeps_latest_fifty() {
    let mut store = memory_store();
    for i in 0..55 {
        process_and_commit(
            &mut store,
            &format!("User: note number {i} for the record.\nAssistant: Noted."),
        );
    }
    let ws = store.active();
    assert_eq!(ws.conversations.len(), 50);
    assert!(ws.conversations[0].user.contains("note number 5"));
    assert!(ws.conversations[49].user.contains("note number 54"));
}

#[test]
fn test_agenda_window_capped_at_twenty() {
    let mut store = memory_store();
    for i in 0..30 {
        process_and_commit(
            &mut store,
            &format!("User: we need to finish milestone {i} soon.\nAssistant: Understood."),
        );
    }
    let ws = store.active();
    assert_eq!(ws.agenda.len(), 20);
    assert!(ws.agenda.last().unwrap().task.contains("milestone 29"));
}

#[test]
fn test_agenda_skips_case_insensitive_duplicates() {
    // replies kept free of task-rule modals so each commit yields one task
    let mut store = memory_store();
    process_and_commit(
        &mut store,
        "User: we need to update the docs soon.\nAssistant: On it.",
    );
    process_and_commit(
        &mut store,
        "User: we NEED TO UPDATE THE DOCS soon.\nAssistant: Already on it.",
    );
    let ws = store.active();
    assert_eq!(ws.agenda.len(), 1);
    assert_eq!(ws.agenda[0].task, "Update the docs soon");
}

#[test]
fn test_toggle_cycles_back_to_pending() {
    let mut store = memory_store();
    process_and_commit(
        &mut store,
        "User: we need to update the docs soon.\nAssistant: On it.",
    );
    let id = store.active().agenda[0].id;

    for expected in [
        AgendaStatus::InProgress,
        AgendaStatus::Completed,
        AgendaStatus::Pending,
    ] {
        store.toggle_agenda_status(id).unwrap();
        let item = &store.active().agenda[0];
        assert_eq!(item.status, expected);
        assert_eq!(
            item.completed_at.is_some(),
            expected == AgendaStatus::Completed
        );
    }
}

#[test]
fn test_clear_memory_preserves_other_workspaces() {
    let mut store = memory_store();
    process_and_commit(
        &mut store,
        "User: keep improving the DataAnalyzer project.\nAssistant: On it.",
    );
    let default_id = store.active_id().to_string();

    store
        .create_workspace("Research", "experiments", None, None)
        .unwrap();
    process_and_commit(
        &mut store,
        "User: we need to finish the lab report soon.\nAssistant: Understood.",
    );
    store.clear_workspace_memory().unwrap();

    assert!(store.active().conversations.is_empty());
    assert!(store.active().agenda.is_empty());

    store.switch_workspace(&default_id).unwrap();
    assert_eq!(store.active().conversations.len(), 1);
    assert!(store.active().projects.contains("DataAnalyzer"));
}
