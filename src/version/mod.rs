//! Version tag handling
//!
//! # Modules
//!
//! - [`semver`]: Tag normalization (`v1.2.3-rc1` -> `1.2.3`) and comparison
//! - [`error`]: Error type for malformed tags

pub mod error;
pub mod semver;

pub use self::error::VersionParseError;
pub use self::semver::{CompareResult, compare_to_latest, extract_version_number};
