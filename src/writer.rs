use std::path::Path;

use anyhow::{Context, Result};
use tokio::{fs::File, io::AsyncWriteExt};

/// Writes `content` to `path`, truncating any existing file
///
/// The handle is dropped (and closed) when this returns, error or not.
///
/// # Errors
/// Errors when the file cannot be created or written
pub async fn write(path: &Path, content: &str) -> Result<()> {
    let mut file = File::create(path)
        .await
        .with_context(|| format!("Creating {}", path.display()))?;
    file.write_all(content.as_bytes())
        .await
        .with_context(|| format!("Writing {}", path.display()))?;
    file.flush()
        .await
        .with_context(|| format!("Flushing {}", path.display()))?;

    Ok(())
}
