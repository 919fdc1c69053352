use super::open_store;

pub fn run(file: &str, legacy: bool) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(file)?;
    let mut store = open_store()?;
    let id = if legacy {
        store.import_legacy(&raw)?
    } else {
        store.import_workspace(&raw)?
    };
    println!("Imported as workspace {id} ({})", store.active().name);
    Ok(())
}
