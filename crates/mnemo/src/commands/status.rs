use super::open_store;

pub fn run() -> anyhow::Result<()> {
    let store = open_store()?;
    let ws = store.active();
    let stats = ws.stats();

    let output = serde_json::json!({
        "workspace": {
            "id": ws.id,
            "name": ws.name,
            "icon": ws.icon,
            "updatedAt": ws.updated_at,
        },
        "conversations": stats.conversations,
        "facts": stats.facts,
        "projects": stats.projects,
        "tasks": stats.tasks,
        "agenda": stats.agenda,
        "insights": stats.insights,
    });

    println!("{output}");
    Ok(())
}
