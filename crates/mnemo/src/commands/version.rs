pub fn run() -> anyhow::Result<()> {
    println!("mnemo {}", env!("CARGO_PKG_VERSION"));
    println!("Persistent conversation memory and context-enhanced prompts");
    Ok(())
}
