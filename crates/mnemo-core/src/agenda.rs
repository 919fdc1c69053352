//! Agenda derivation from extracted tasks

use crate::ids;
use crate::types::{AgendaItem, AgendaPriority, AgendaStatus, ExtractedInfo};
use chrono::Utc;

const MAX_AGENDA_ITEMS: usize = 5;

/// Turn extracted task phrases into pending agenda items.
///
/// Priority is purely positional: the first task is high, the next two
/// medium, the rest low.
pub fn build_agenda(extracted: &ExtractedInfo) -> Vec<AgendaItem> {
    let now = Utc::now();
    extracted
        .tasks
        .iter()
        .take(MAX_AGENDA_ITEMS)
        .enumerate()
        .map(|(idx, task)| AgendaItem {
            id: ids::next_id(),
            task: capitalize_first(task),
            status: AgendaStatus::Pending,
            priority: match idx {
                0 => AgendaPriority::High,
                1 | 2 => AgendaPriority::Medium,
                _ => AgendaPriority::Low,
            },
            created_at: now,
            completed_at: None,
        })
        .collect()
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tasks(tasks: &[&str]) -> ExtractedInfo {
        ExtractedInfo {
            tasks: tasks.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_positional_priorities() {
        let items = build_agenda(&tasks(&["one", "two", "three", "four", "five"]));
        let priorities: Vec<AgendaPriority> = items.iter().map(|i| i.priority).collect();
        assert_eq!(
            priorities,
            [
                AgendaPriority::High,
                AgendaPriority::Medium,
                AgendaPriority::Medium,
                AgendaPriority::Low,
                AgendaPriority::Low,
            ]
        );
    }

    #[test]
    fn test_caps_at_five_items() {
        let items = build_agenda(&tasks(&["a", "b", "c", "d", "e", "f", "g"]));
        assert_eq!(items.len(), 5);
    }

    #[test]
    fn test_task_text_capitalized() {
        let items = build_agenda(&tasks(&["migrate the database"]));
        assert_eq!(items[0].task, "Migrate the database");
        assert_eq!(items[0].status, AgendaStatus::Pending);
        assert!(items[0].completed_at.is_none());
    }

    #[test]
    fn test_ids_unique_within_batch() {
        let items = build_agenda(&tasks(&["a", "b", "c"]));
        assert_ne!(items[0].id, items[1].id);
        assert_ne!(items[1].id, items[2].id);
    }

    #[test]
    fn test_no_tasks_no_items() {
        assert!(build_agenda(&tasks(&[])).is_empty());
    }
}
