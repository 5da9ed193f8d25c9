use std::sync::LazyLock;

use regex::Regex;
use semver::Version;

use crate::version::error::VersionParseError;

/// Leading `major.minor.patch`, optionally `v`-prefixed. Anything after the
/// patch number (`-rc1`, `+build`) is ignored.
static VERSION_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^v?(\d+)\.(\d+)\.(\d+)").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareResult {
    Latest,
    Outdated,
    Newer,
    Invalid,
}

/// Extract the canonical `major.minor.patch` from a version tag.
///
/// The captured digit groups are joined verbatim, so the result is always
/// comparable by plain string equality.
///
/// Examples:
/// - "v2.0.1-beta" -> "2.0.1"
/// - "3.4.5" -> "3.4.5"
/// - "latest" -> Err
pub fn extract_version_number(tag: &str) -> Result<String, VersionParseError> {
    let caps = VERSION_TAG_RE
        .captures(tag)
        .ok_or_else(|| VersionParseError::new(tag))?;

    Ok(format!("{}.{}.{}", &caps[1], &caps[2], &caps[3]))
}

/// Compare a running version against the latest release.
///
/// Both sides are normalized first; `Invalid` is returned if either cannot be
/// parsed.
pub fn compare_to_latest(current: &str, latest: &str) -> CompareResult {
    let parse = |v: &str| {
        extract_version_number(v)
            .ok()
            .and_then(|canonical| Version::parse(&canonical).ok())
    };

    match (parse(current), parse(latest)) {
        (Some(current), Some(latest)) if current == latest => CompareResult::Latest,
        (Some(current), Some(latest)) if current < latest => CompareResult::Outdated,
        (Some(_), Some(_)) => CompareResult::Newer,
        _ => CompareResult::Invalid,
    }
}
