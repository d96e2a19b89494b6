//! Reading and writing mount tables as JSON files.

use std::path::Path;

use anyhow::Context;

use crate::mounts::MountTable;

/// Load a mount table from a JSON file. Entries are cleaned the same way as
/// environment variables.
pub async fn load_mount_table(path: &Path) -> anyhow::Result<MountTable> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read mount table {}", path.display()))?;
    let table: MountTable = serde_json::from_str(&content)
        .with_context(|| format!("invalid mount table {}", path.display()))?;
    log::debug!("Loaded mount table from {}", path.display());
    Ok(table.normalized())
}

/// Persist a mount table as pretty-printed JSON.
pub async fn save_mount_table(path: &Path, table: &MountTable) -> anyhow::Result<()> {
    let content = table.to_json()?;
    tokio::fs::write(path, content)
        .await
        .with_context(|| format!("failed to write mount table {}", path.display()))?;
    Ok(())
}
