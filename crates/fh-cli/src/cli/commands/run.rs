//! `fh run` – execute the write → digest → verify sequence once.

use anyhow::Result;
use fh_core::config::FhConfig;
use fh_core::runner;
use fh_core::verify::Verification;
use std::path::PathBuf;

/// Run the sequence once, printing the file path, digest, and verdict.
/// A mismatch is reported but does not fail the command; the structured
/// outcome is available to callers that want to react (see `fh verify`).
pub async fn run_sequence(cfg: &FhConfig, data_dir: Option<PathBuf>) -> Result<()> {
    let mut cfg = cfg.clone();
    if let Some(dir) = data_dir {
        cfg.data_dir = dir;
    }

    let report = runner::run_once(&cfg).await?;
    println!("wrote {}", report.path.display());
    println!("{}  {}", report.digest, report.path.display());
    match report.verification {
        Verification::Match { .. } => println!("verification: match"),
        Verification::Mismatch { computed, reported } => {
            println!(
                "verification: MISMATCH (computed {}, tool reported {})",
                computed, reported
            );
        }
        Verification::Skipped { reason } => println!("verification: skipped ({})", reason),
    }
    Ok(())
}
