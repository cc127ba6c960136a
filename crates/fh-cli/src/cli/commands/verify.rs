//! Verify command: cross-check a file's digest against the external tool.

use anyhow::Result;
use fh_core::checksum;
use fh_core::config::FhConfig;
use fh_core::verify::{self, Verification};
use std::path::Path;

/// Digest the file in-process, run the external tool, and compare.
/// Unlike `fh run`, a mismatch here fails the command.
pub async fn run_verify(cfg: &FhConfig, path: &Path) -> Result<()> {
    let computed = checksum::sha256_path(path)?;
    match verify::verify_on_disk(cfg.checksum_tool(), path, &computed, cfg.verify_timeout()).await {
        Verification::Match { digest } => {
            println!("{}  {}", digest, path.display());
            println!("verification: match");
        }
        Verification::Mismatch { computed, reported } => {
            anyhow::bail!(
                "digest mismatch: computed {}, tool reported {}",
                computed,
                reported
            );
        }
        Verification::Skipped { reason } => {
            println!("verification: skipped ({})", reason);
        }
    }
    Ok(())
}
