use super::open_store;

pub fn run_list() -> anyhow::Result<()> {
    let store = open_store()?;
    println!("{}", serde_json::to_string_pretty(&store.active().agenda)?);
    Ok(())
}

pub fn run_toggle(id: i64) -> anyhow::Result<()> {
    let mut store = open_store()?;
    store.toggle_agenda_status(id)?;
    match store.active().agenda.iter().find(|a| a.id == id) {
        Some(item) => println!("{}", serde_json::to_string(item)?),
        None => println!("No agenda item with id {id}"),
    }
    Ok(())
}

pub fn run_remove(id: i64) -> anyhow::Result<()> {
    let mut store = open_store()?;
    store.remove_agenda_item(id)?;
    println!("Removed agenda item {id}");
    Ok(())
}
