//! The startup sequence: write the target file, digest it, cross-check on disk.

use anyhow::Result;
use std::path::PathBuf;

use crate::checksum;
use crate::config::FhConfig;
use crate::storage;
use crate::verify::{self, Verification};

/// Result of one write → digest → verify sequence.
#[derive(Debug)]
pub struct RunReport {
    /// Path of the file written this run.
    pub path: PathBuf,
    /// In-process SHA-256 digest, lowercase hex.
    pub digest: String,
    /// Outcome of the external cross-check.
    pub verification: Verification,
}

/// Execute the sequence once. Write and digest failures abort and propagate;
/// external-tool problems degrade to [`Verification::Skipped`].
pub async fn run_once(cfg: &FhConfig) -> Result<RunReport> {
    let path = storage::write_target_file(&cfg.data_dir)?;
    let digest = checksum::sha256_path(&path)?;
    let verification =
        verify::verify_on_disk(cfg.checksum_tool(), &path, &digest, cfg.verify_timeout()).await;
    Ok(RunReport {
        path,
        digest,
        verification,
    })
}
