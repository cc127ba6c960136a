//! Target file creation: a fixed payload under a random name.
//!
//! Files accumulate under the data directory, one per run; nothing here
//! deletes them.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Payload written into every generated file.
pub const FILE_CONTENT: &str = "Your file content here";

/// Create `data_dir` if missing and write the fixed payload into a freshly
/// named file inside it. The name is a random UUID, unique per call.
/// Returns the new file's path.
pub fn write_target_file(data_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(data_dir)
        .with_context(|| format!("failed to create data dir {}", data_dir.display()))?;

    let path = data_dir.join(Uuid::new_v4().to_string());
    let mut file = fs::File::options()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    file.write_all(FILE_CONTENT.as_bytes())
        .with_context(|| format!("failed to write {}", path.display()))?;

    tracing::info!("file created with content at: {}", path.display());
    Ok(path)
}
