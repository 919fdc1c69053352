pub mod agenda;
pub mod clear;
pub mod export;
pub mod import;
pub mod process;
pub mod status;
pub mod version;
pub mod workspace;

use mnemo_store::{FileBackend, WorkspaceStore};

/// Open the store against the on-disk state directory
pub fn open_store() -> anyhow::Result<WorkspaceStore> {
    let dir = mnemo_store::state_dir()?;
    Ok(WorkspaceStore::open(Box::new(FileBackend::new(dir)))?)
}
