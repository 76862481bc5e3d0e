//! SHA-256 checksum retrieval for release artifacts

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Length of a hex-encoded SHA-256 digest
const SHA256_HEX_LEN: usize = 64;

/// Extract the candidate digest from a published checksum file.
///
/// sha256sum-style files put the digest first, optionally followed by the
/// artifact filename.
fn first_token(body: &str) -> Option<&str> {
    body.split_whitespace().next()
}

/// A candidate is trusted only when it is exactly 64 hex characters
fn is_trusted_checksum(token: &str) -> bool {
    token.len() == SHA256_HEX_LEN && token.chars().all(|c| c.is_ascii_hexdigit())
}

/// Compute the hex-encoded SHA-256 digest of a file's contents
pub fn hash_file(path: &Path) -> Result<String> {
    let mut file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;

    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 8192];
    loop {
        let bytes_read = file
            .read(&mut buffer)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

/// Fetch the SHA-256 checksum for a release artifact.
///
/// The published `<download_url>.sha256` file is tried first; its first
/// whitespace-delimited token is returned when it is a 64-character hex
/// digest. When the checksum file is missing or malformed, the artifact
/// itself is streamed to a temporary file and hashed, and the locally
/// computed digest is returned. (Earlier release tooling returned the
/// malformed token in that case and threw the local digest away; returning
/// the computed digest is the intended behavior.)
///
/// The temporary file is removed when this function returns, whether or not
/// hashing succeeds. Network and filesystem failures propagate as errors.
pub fn fetch_checksum(download_url: &str) -> Result<String> {
    fetch_checksum_in(download_url, &std::env::temp_dir())
}

/// `fetch_checksum` with the fallback download placed in `scratch_dir`
fn fetch_checksum_in(download_url: &str, scratch_dir: &Path) -> Result<String> {
    let checksum_url = format!("{}.sha256", download_url);
    crate::log_info!("Fetching published checksum from {}", checksum_url);

    let body = reqwest::blocking::get(&checksum_url)
        .with_context(|| format!("Failed to fetch checksum file {}", checksum_url))?
        .text()
        .with_context(|| format!("Failed to read checksum file {}", checksum_url))?;

    if let Some(token) = first_token(&body) {
        if is_trusted_checksum(token) {
            return Ok(token.to_string());
        }
    }

    crate::log_warn!(
        "No usable published checksum for {}, hashing the artifact locally",
        download_url
    );

    let mut response = reqwest::blocking::get(download_url)
        .with_context(|| format!("Failed to fetch artifact {}", download_url))?
        .error_for_status()
        .with_context(|| format!("Artifact download failed for {}", download_url))?;

    // NamedTempFile removes itself on drop, so the download never outlives
    // this call.
    let mut temp_file = tempfile::NamedTempFile::new_in(scratch_dir)
        .context("Failed to create temporary download file")?;
    std::io::copy(&mut response, &mut temp_file)
        .with_context(|| format!("Failed to download artifact {}", download_url))?;
    temp_file.flush()?;

    hash_file(temp_file.path())
}
