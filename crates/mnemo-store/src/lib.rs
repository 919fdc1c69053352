//! Workspace memory store: persistence, merge, and lifecycle

mod backend;
mod blob;
mod error;
mod export;
mod paths;
mod store;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use blob::{AppStateBlob, SerializedMemory, SerializedWorkspace, LEGACY_MEMORY_KEY, WORKSPACES_KEY};
pub use error::StoreError;
pub use export::{full_json_export, latest_prompt, markdown_export, summary_text};
pub use paths::state_dir;
pub use store::{WorkspaceStore, WorkspaceUpdate};
