//! Workspace collection with merge-on-store semantics

use crate::backend::StorageBackend;
use crate::blob::{AppStateBlob, SerializedMemory, SerializedWorkspace, WORKSPACES_KEY};
use crate::error::StoreError;
use chrono::Utc;
use mnemo_core::{
    ids, AgendaItem, AgendaStatus, AiInsight, ExtractedInfo, ParsedConversation,
    ProjectWorkspace, StoredConversation, WorkspaceStats, WORKSPACE_COLORS, WORKSPACE_ICONS,
};

const MAX_CONVERSATIONS: usize = 50;
const MAX_AGENDA: usize = 20;
const MAX_INSIGHTS: usize = 50;

/// Partial workspace identity update
#[derive(Debug, Default, Clone)]
pub struct WorkspaceUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub icon: Option<String>,
}

/// Owns the workspace set, the active pointer, and persistence.
///
/// Every mutating operation persists synchronously before returning, and
/// mutations take `&mut self`, so commits against the same store are
/// serialized by ownership.
pub struct WorkspaceStore {
    backend: Box<dyn StorageBackend>,
    active_workspace_id: String,
    workspaces: Vec<ProjectWorkspace>,
}

impl WorkspaceStore {
    /// Load the store from a backend, falling back to a fresh default
    /// workspace when nothing (or nothing parseable) is saved.
    pub fn open(backend: Box<dyn StorageBackend>) -> Result<Self, StoreError> {
        let blob = match backend.load(WORKSPACES_KEY)? {
            Some(raw) => match serde_json::from_str::<AppStateBlob>(&raw) {
                Ok(blob) => blob,
                Err(err) => {
                    tracing::warn!("failed to parse saved workspaces, starting fresh: {err}");
                    AppStateBlob::default()
                }
            },
            None => AppStateBlob::default(),
        };

        let mut workspaces: Vec<ProjectWorkspace> = blob
            .workspaces
            .into_iter()
            .map(SerializedWorkspace::into_workspace)
            .collect();
        if workspaces.is_empty() {
            workspaces.push(ProjectWorkspace::default_workspace());
        }

        let active_workspace_id = if workspaces.iter().any(|ws| ws.id == blob.active_workspace_id)
        {
            blob.active_workspace_id
        } else {
            workspaces[0].id.clone()
        };

        Ok(Self {
            backend,
            active_workspace_id,
            workspaces,
        })
    }

    fn persist(&self) -> Result<(), StoreError> {
        let blob = AppStateBlob {
            active_workspace_id: self.active_workspace_id.clone(),
            workspaces: self
                .workspaces
                .iter()
                .map(SerializedWorkspace::from_workspace)
                .collect(),
        };
        let raw = serde_json::to_string(&blob)?;
        self.backend.save(WORKSPACES_KEY, &raw)?;
        Ok(())
    }

    pub fn workspaces(&self) -> &[ProjectWorkspace] {
        &self.workspaces
    }

    pub fn active_id(&self) -> &str {
        &self.active_workspace_id
    }

    pub fn active(&self) -> &ProjectWorkspace {
        self.workspaces
            .iter()
            .find(|ws| ws.id == self.active_workspace_id)
            .unwrap_or(&self.workspaces[0])
    }

    fn active_mut(&mut self) -> &mut ProjectWorkspace {
        let idx = self
            .workspaces
            .iter()
            .position(|ws| ws.id == self.active_workspace_id)
            .unwrap_or(0);
        &mut self.workspaces[idx]
    }

    pub fn get(&self, id: &str) -> Option<&ProjectWorkspace> {
        self.workspaces.iter().find(|ws| ws.id == id)
    }

    /// Create a workspace and make it active. Falls back to the default
    /// palette when color/icon are not given.
    pub fn create_workspace(
        &mut self,
        name: &str,
        description: &str,
        color: Option<&str>,
        icon: Option<&str>,
    ) -> Result<String, StoreError> {
        let ws = ProjectWorkspace::new(
            name,
            description,
            color.unwrap_or(WORKSPACE_COLORS[0].1),
            icon.unwrap_or(WORKSPACE_ICONS[0]),
        );
        let id = ws.id.clone();
        self.workspaces.push(ws);
        self.active_workspace_id = id.clone();
        self.persist()?;
        Ok(id)
    }

    /// Point the store at another workspace. Unknown ids are a silent
    /// no-op; returns whether the switch happened.
    pub fn switch_workspace(&mut self, id: &str) -> Result<bool, StoreError> {
        if !self.workspaces.iter().any(|ws| ws.id == id) {
            return Ok(false);
        }
        self.active_workspace_id = id.to_string();
        self.persist()?;
        Ok(true)
    }

    /// Remove a workspace. Refuses to delete the last one; deleting the
    /// active workspace moves the pointer to the first remaining one.
    pub fn delete_workspace(&mut self, id: &str) -> Result<(), StoreError> {
        if self.workspaces.len() <= 1 {
            return Err(StoreError::LastWorkspace);
        }
        self.workspaces.retain(|ws| ws.id != id);
        if self.active_workspace_id == id {
            self.active_workspace_id = self.workspaces[0].id.clone();
        }
        self.persist()?;
        Ok(())
    }

    /// Deep-copy a workspace under a new id and a `(Copy)` name suffix.
    /// The copy does not become active.
    pub fn duplicate_workspace(&mut self, id: &str) -> Result<String, StoreError> {
        let source = self
            .get(id)
            .ok_or_else(|| StoreError::UnknownWorkspace(id.to_string()))?;
        let now = Utc::now();
        let mut copy = source.clone();
        copy.id = ids::workspace_id();
        copy.name = format!("{} (Copy)", source.name);
        copy.created_at = now;
        copy.updated_at = now;
        let new_id = copy.id.clone();
        self.workspaces.push(copy);
        self.persist()?;
        Ok(new_id)
    }

    /// Update workspace identity fields
    pub fn update_workspace(&mut self, id: &str, update: WorkspaceUpdate) -> Result<(), StoreError> {
        let ws = self
            .workspaces
            .iter_mut()
            .find(|ws| ws.id == id)
            .ok_or_else(|| StoreError::UnknownWorkspace(id.to_string()))?;
        if let Some(name) = update.name {
            ws.name = name;
        }
        if let Some(description) = update.description {
            ws.description = description;
        }
        if let Some(color) = update.color {
            ws.color = color;
        }
        if let Some(icon) = update.icon {
            ws.icon = icon;
        }
        ws.touch();
        self.persist()?;
        Ok(())
    }

    /// Commit one processed conversation into the active workspace:
    /// append the conversation, union the extracted facts into the
    /// deduplicated sets, merge agenda items (skipping case-insensitive
    /// task-text duplicates), append insights, and trim to the retention
    /// bounds.
    pub fn store_conversation(
        &mut self,
        parsed: ParsedConversation,
        extracted: ExtractedInfo,
        insights: Vec<AiInsight>,
        agenda_items: Vec<AgendaItem>,
    ) -> Result<(), StoreError> {
        let conversation = StoredConversation::new(parsed, extracted.clone());
        let ws = self.active_mut();

        ws.conversations.push(conversation);
        if ws.conversations.len() > MAX_CONVERSATIONS {
            let overflow = ws.conversations.len() - MAX_CONVERSATIONS;
            ws.conversations.drain(..overflow);
        }

        ws.projects.extend(extracted.projects.iter().cloned());
        ws.technologies.extend(extracted.technologies.iter().cloned());
        ws.tasks.extend(extracted.tasks.iter().cloned());
        ws.names.extend(extracted.names.iter().cloned());
        ws.numbers.extend(extracted.numbers.iter().cloned());

        let existing_tasks: Vec<String> =
            ws.agenda.iter().map(|a| a.task.to_lowercase()).collect();
        for item in agenda_items {
            if !existing_tasks.contains(&item.task.to_lowercase()) {
                ws.agenda.push(item);
            }
        }
        if ws.agenda.len() > MAX_AGENDA {
            let overflow = ws.agenda.len() - MAX_AGENDA;
            ws.agenda.drain(..overflow);
        }

        ws.insights.extend(insights);
        if ws.insights.len() > MAX_INSIGHTS {
            let overflow = ws.insights.len() - MAX_INSIGHTS;
            ws.insights.drain(..overflow);
        }

        ws.touch();
        self.persist()?;
        Ok(())
    }

    /// Cycle an agenda item's status; `completed_at` is set exactly when
    /// the item lands on completed. Unknown ids are a no-op.
    pub fn toggle_agenda_status(&mut self, id: i64) -> Result<(), StoreError> {
        let ws = self.active_mut();
        let Some(item) = ws.agenda.iter_mut().find(|a| a.id == id) else {
            return Ok(());
        };
        item.status = item.status.next();
        item.completed_at = if item.status == AgendaStatus::Completed {
            Some(Utc::now())
        } else {
            None
        };
        ws.touch();
        self.persist()?;
        Ok(())
    }

    /// Delete an agenda item by id; no-op if absent
    pub fn remove_agenda_item(&mut self, id: i64) -> Result<(), StoreError> {
        let ws = self.active_mut();
        let before = ws.agenda.len();
        ws.agenda.retain(|a| a.id != id);
        if ws.agenda.len() != before {
            ws.touch();
        }
        self.persist()?;
        Ok(())
    }

    /// Reset the active workspace's memory, keeping its identity
    pub fn clear_workspace_memory(&mut self) -> Result<(), StoreError> {
        self.active_mut().clear_memory();
        self.persist()?;
        Ok(())
    }

    pub fn stats(&self) -> WorkspaceStats {
        self.active().stats()
    }

    /// Serialize one workspace to a portable JSON document
    pub fn export_workspace(&self, id: &str) -> Result<String, StoreError> {
        let ws = self
            .get(id)
            .ok_or_else(|| StoreError::UnknownWorkspace(id.to_string()))?;
        Ok(serde_json::to_string_pretty(
            &SerializedWorkspace::from_workspace(ws),
        )?)
    }

    /// Import a workspace export document under a fresh id and an
    /// `(Imported)` name suffix; the import becomes active. Malformed
    /// input is rejected without touching existing state.
    pub fn import_workspace(&mut self, raw: &str) -> Result<String, StoreError> {
        let mut doc: SerializedWorkspace = serde_json::from_str(raw)?;
        let now = Utc::now();
        doc.id = ids::workspace_id();
        doc.name = format!("{} (Imported)", doc.name);
        doc.created_at = now;
        doc.updated_at = now;
        let ws = doc.into_workspace();
        let id = ws.id.clone();
        self.workspaces.push(ws);
        self.active_workspace_id = id.clone();
        self.persist()?;
        Ok(id)
    }

    /// Import a previous-generation single-memory blob as a new active
    /// workspace
    pub fn import_legacy(&mut self, raw: &str) -> Result<String, StoreError> {
        let memory: SerializedMemory = serde_json::from_str(raw)?;
        let now = Utc::now();
        let doc = SerializedWorkspace {
            id: ids::workspace_id(),
            name: "Imported Memory".to_string(),
            description: "Rehydrated from a single-memory export".to_string(),
            color: WORKSPACE_COLORS[0].1.to_string(),
            icon: WORKSPACE_ICONS[0].to_string(),
            created_at: now,
            updated_at: now,
            memory,
        };
        let ws = doc.into_workspace();
        let id = ws.id.clone();
        self.workspaces.push(ws);
        self.active_workspace_id = id.clone();
        self.persist()?;
        Ok(id)
    }
}
