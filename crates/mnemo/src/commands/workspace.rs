use mnemo_store::WorkspaceUpdate;

use super::open_store;

pub fn run_list() -> anyhow::Result<()> {
    let store = open_store()?;
    let active_id = store.active_id().to_string();
    let rows: Vec<serde_json::Value> = store
        .workspaces()
        .iter()
        .map(|ws| {
            let stats = ws.stats();
            serde_json::json!({
                "id": ws.id,
                "name": ws.name,
                "icon": ws.icon,
                "active": ws.id == active_id,
                "conversations": stats.conversations,
                "agenda": stats.agenda,
            })
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

pub fn run_create(
    name: &str,
    description: &str,
    color: Option<&str>,
    icon: Option<&str>,
) -> anyhow::Result<()> {
    let mut store = open_store()?;
    let id = store.create_workspace(name, description, color, icon)?;
    println!("Created and switched to workspace {id}");
    Ok(())
}

pub fn run_switch(id: &str) -> anyhow::Result<()> {
    let mut store = open_store()?;
    if store.switch_workspace(id)? {
        println!("Switched to {}", store.active().name);
    } else {
        println!("No workspace with id {id}");
    }
    Ok(())
}

pub fn run_delete(id: &str) -> anyhow::Result<()> {
    let mut store = open_store()?;
    store.delete_workspace(id)?;
    println!("Deleted workspace {id}");
    Ok(())
}

pub fn run_duplicate(id: &str) -> anyhow::Result<()> {
    let mut store = open_store()?;
    let copy_id = store.duplicate_workspace(id)?;
    println!("Duplicated {id} as {copy_id}");
    Ok(())
}

pub fn run_rename(id: &str, name: &str) -> anyhow::Result<()> {
    let mut store = open_store()?;
    store.update_workspace(
        id,
        WorkspaceUpdate {
            name: Some(name.to_string()),
            ..Default::default()
        },
    )?;
    println!("Renamed {id} to {name}");
    Ok(())
}
