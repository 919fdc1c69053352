//! State directory resolution

use std::path::PathBuf;

/// Directory holding the persisted store blobs (`~/.mnemo`)
pub fn state_dir() -> std::io::Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "home directory not found")
    })?;
    Ok(home.join(".mnemo"))
}
