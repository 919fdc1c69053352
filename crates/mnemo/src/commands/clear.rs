use super::open_store;

pub fn run() -> anyhow::Result<()> {
    let mut store = open_store()?;
    store.clear_workspace_memory()?;
    println!("Cleared memory for '{}'", store.active().name);
    Ok(())
}
