//! Release channel resolution against the upstream Kubernetes release buckets

use crate::utils::ReleaseDevError;
use anyhow::{Context, Result};
use std::fmt;
use std::str::FromStr;

/// Channel file for stabilized releases
pub const STABLE_RELEASE_URL: &str =
    "https://storage.googleapis.com/kubernetes-release/release/stable.txt";

/// Channel file for continuously-built head (master) releases
pub const HEAD_RELEASE_URL: &str =
    "https://storage.googleapis.com/kubernetes-release-dev/ci/k8s-master.txt";

/// Fast-moving head channel file. Kept for parity with the upstream release
/// tooling; no channel currently maps to it.
pub const HEAD_RELEASE_FAST_URL: &str =
    "https://storage.googleapis.com/kubernetes-release-dev/ci/latest.txt";

/// A named Kubernetes release channel, optionally qualified by architecture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseChannel {
    Stable,
    StableAmd64,
    StableArm64,
    HeadAmd64,
    HeadArm64,
}

impl ReleaseChannel {
    /// All recognized channel names, in display order
    pub const ALL_NAMES: [&'static str; 5] = [
        "stable",
        "stable/amd64",
        "stable/arm64",
        "head/amd64",
        "head/arm64",
    ];

    /// The channel name as passed on the command line
    pub fn name(&self) -> &'static str {
        match self {
            ReleaseChannel::Stable => "stable",
            ReleaseChannel::StableAmd64 => "stable/amd64",
            ReleaseChannel::StableArm64 => "stable/arm64",
            ReleaseChannel::HeadAmd64 => "head/amd64",
            ReleaseChannel::HeadArm64 => "head/arm64",
        }
    }

    /// The upstream channel file this channel resolves against
    pub fn url(&self) -> &'static str {
        match self {
            ReleaseChannel::Stable
            | ReleaseChannel::StableAmd64
            | ReleaseChannel::StableArm64 => STABLE_RELEASE_URL,
            ReleaseChannel::HeadAmd64 | ReleaseChannel::HeadArm64 => HEAD_RELEASE_URL,
        }
    }
}

impl FromStr for ReleaseChannel {
    type Err = ReleaseDevError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stable" => Ok(ReleaseChannel::Stable),
            "stable/amd64" => Ok(ReleaseChannel::StableAmd64),
            "stable/arm64" => Ok(ReleaseChannel::StableArm64),
            "head/amd64" => Ok(ReleaseChannel::HeadAmd64),
            "head/arm64" => Ok(ReleaseChannel::HeadArm64),
            other => Err(ReleaseDevError::unknown_channel(other)),
        }
    }
}

impl fmt::Display for ReleaseChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Resolve a release channel to a version string.
///
/// Returns the raw channel file contents, untrimmed, so callers see exactly
/// the bytes the bucket served (including any trailing newline). An empty
/// response body is a soft failure: it is logged and `None` is returned so
/// the caller can decide whether to retry or abort.
pub fn resolve(channel: ReleaseChannel) -> Result<Option<String>> {
    resolve_from(channel, channel.url())
}

/// `resolve` against an explicit channel file URL
fn resolve_from(channel: ReleaseChannel, url: &str) -> Result<Option<String>> {
    crate::log_info!("Resolving release channel {} from {}", channel, url);

    let body = reqwest::blocking::get(url)
        .with_context(|| format!("Failed to fetch release channel {}", channel))?
        .text()
        .with_context(|| format!("Failed to read release channel {}", channel))?;

    if body.is_empty() {
        ReleaseDevError::empty_release(channel.name()).display();
        return Ok(None);
    }

    Ok(Some(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testserver::serve;

    #[test]
    fn test_parse_valid_channels() {
        assert_eq!(
            "stable".parse::<ReleaseChannel>().unwrap(),
            ReleaseChannel::Stable
        );
        assert_eq!(
            "stable/amd64".parse::<ReleaseChannel>().unwrap(),
            ReleaseChannel::StableAmd64
        );
        assert_eq!(
            "stable/arm64".parse::<ReleaseChannel>().unwrap(),
            ReleaseChannel::StableArm64
        );
        assert_eq!(
            "head/amd64".parse::<ReleaseChannel>().unwrap(),
            ReleaseChannel::HeadAmd64
        );
        assert_eq!(
            "head/arm64".parse::<ReleaseChannel>().unwrap(),
            ReleaseChannel::HeadArm64
        );
    }

    #[test]
    fn test_parse_unknown_channel() {
        let err = "nightly/amd64".parse::<ReleaseChannel>().unwrap_err();
        assert!(err.message.contains("nightly/amd64"));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("Stable".parse::<ReleaseChannel>().is_err());
        assert!("HEAD/amd64".parse::<ReleaseChannel>().is_err());
    }

    #[test]
    fn test_stable_channels_share_url() {
        assert_eq!(ReleaseChannel::Stable.url(), STABLE_RELEASE_URL);
        assert_eq!(ReleaseChannel::StableAmd64.url(), STABLE_RELEASE_URL);
        assert_eq!(ReleaseChannel::StableArm64.url(), STABLE_RELEASE_URL);
    }

    #[test]
    fn test_head_channels_share_url() {
        assert_eq!(ReleaseChannel::HeadAmd64.url(), HEAD_RELEASE_URL);
        assert_eq!(ReleaseChannel::HeadArm64.url(), HEAD_RELEASE_URL);
        assert_ne!(HEAD_RELEASE_URL, STABLE_RELEASE_URL);
    }

    #[test]
    fn test_fast_url_is_unmapped() {
        for name in ReleaseChannel::ALL_NAMES {
            let channel: ReleaseChannel = name.parse().unwrap();
            assert_ne!(channel.url(), HEAD_RELEASE_FAST_URL);
        }
    }

    #[test]
    fn test_display_round_trips() {
        for name in ReleaseChannel::ALL_NAMES {
            let channel: ReleaseChannel = name.parse().unwrap();
            assert_eq!(channel.to_string(), name);
        }
    }

    #[test]
    fn test_resolve_returns_raw_untrimmed_body() {
        let base = serve(
            vec![("/release/stable.txt", Some(b"v1.33.0\n".to_vec()))],
            1,
        );

        let version =
            resolve_from(ReleaseChannel::Stable, &format!("{}/release/stable.txt", base)).unwrap();
        assert_eq!(version.as_deref(), Some("v1.33.0\n"));
    }

    #[test]
    fn test_resolve_empty_body_is_soft_failure() {
        let base = serve(vec![("/release/stable.txt", Some(Vec::new()))], 1);

        let version =
            resolve_from(ReleaseChannel::Stable, &format!("{}/release/stable.txt", base)).unwrap();
        assert!(version.is_none());
    }
}
