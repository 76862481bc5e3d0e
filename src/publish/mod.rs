//! Image publish invocation via the external import-and-push script

use crate::utils::ReleaseDevError;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

/// Resolve the publish script to a runnable path.
///
/// A bare command name is looked up on PATH; anything with a path component
/// must exist as given.
fn resolve_script(script: &Path) -> Result<PathBuf> {
    if script.components().count() == 1 {
        return which::which(script)
            .map_err(|_| ReleaseDevError::script_not_found(&script.display().to_string()).into());
    }

    if !script.exists() {
        return Err(ReleaseDevError::script_not_found(&script.display().to_string()).into());
    }

    Ok(script.to_path_buf())
}

/// Invoke the publish script with the release, platforms and registry as
/// three separate positional arguments.
///
/// The script is spawned directly (no shell), so whitespace inside any
/// argument is preserved as a single argument. The call blocks until the
/// script exits; its stdout/stderr are inherited and its exit status is
/// returned verbatim, uninterpreted. There are no retries.
pub fn publish(
    script: &Path,
    release: &str,
    platforms: &str,
    registry: &str,
) -> Result<ExitStatus> {
    let script = resolve_script(script)?;

    crate::log_info!(
        "Publishing release {} for {} to {}",
        release,
        platforms,
        registry
    );

    let status = Command::new(&script)
        .args([release, platforms, registry])
        .status()
        .with_context(|| format!("Failed to run publish script {}", script.display()))?;

    if !status.success() {
        crate::log_error!("Publish script exited with {}", status);
    }

    Ok(status)
}
