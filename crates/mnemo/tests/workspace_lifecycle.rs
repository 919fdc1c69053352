mod common;

use common::{memory_store, process_and_commit, SAMPLE_TRANSCRIPT};
use mnemo_store::{FileBackend, StoreError, WorkspaceStore};

#[test]
fn test_create_switch_and_isolation() {
    let mut store = memory_store();
    let default_id = store.active_id().to_string();
    process_and_commit(&mut store, SAMPLE_TRANSCRIPT);

    let research_id = store
        .create_workspace("Research", "experiments", None, None)
        .unwrap();
    assert_eq!(store.active_id(), research_id);

    // new workspace starts empty, old one keeps its memory
    assert!(store.active().conversations.is_empty());
    assert!(store.active().projects.is_empty());
    assert!(store.switch_workspace(&default_id).unwrap());
    assert_eq!(store.active().conversations.len(), 1);
    assert!(store.active().projects.contains("DataAnalyzer"));
}

#[test]
fn test_last_workspace_cannot_be_deleted() {
    let mut store = memory_store();
    let id = store.active_id().to_string();
    assert!(matches!(
        store.delete_workspace(&id),
        Err(StoreError::LastWorkspace)
    ));
    assert_eq!(store.workspaces().len(), 1);
}

#[test]
fn test_duplicate_copies_memory_under_new_identity() {
    let mut store = memory_store();
    process_and_commit(&mut store, SAMPLE_TRANSCRIPT);
    let source_id = store.active_id().to_string();

    let copy_id = store.duplicate_workspace(&source_id).unwrap();
    let copy = store.get(&copy_id).unwrap();
    let source = store.get(&source_id).unwrap();

    assert_ne!(copy.id, source.id);
    assert_eq!(copy.name, format!("{} (Copy)", source.name));
    assert_eq!(copy.conversations.len(), source.conversations.len());
    assert_eq!(copy.projects, source.projects);
    // duplication never steals focus
    assert_eq!(store.active_id(), source_id);
}

#[test]
fn test_state_survives_reopen_from_disk() {
    let dir = tempfile::tempdir().unwrap();

    let research_id = {
        let mut store = WorkspaceStore::open(Box::new(FileBackend::new(dir.path()))).unwrap();
        process_and_commit(&mut store, SAMPLE_TRANSCRIPT);
        store
            .create_workspace("Research", "experiments", None, None)
            .unwrap()
    };

    let store = WorkspaceStore::open(Box::new(FileBackend::new(dir.path()))).unwrap();
    assert_eq!(store.workspaces().len(), 2);
    assert_eq!(store.active_id(), research_id);
    let default_ws = store
        .workspaces()
        .iter()
        .find(|ws| ws.name == "Default Workspace")
        .unwrap();
    assert_eq!(default_ws.conversations.len(), 1);
    assert!(default_ws.technologies.contains("Python"));
}

#[test]
fn test_reopen_with_corrupt_file_starts_fresh() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("llm_workspaces_v3.json"), "not json at all").unwrap();

    let store = WorkspaceStore::open(Box::new(FileBackend::new(dir.path()))).unwrap();
    assert_eq!(store.workspaces().len(), 1);
    assert_eq!(store.active().name, "Default Workspace");
}
