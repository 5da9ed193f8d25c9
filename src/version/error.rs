use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid version tag: {tag:?}")]
pub struct VersionParseError {
    pub tag: String,
}

impl VersionParseError {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
        }
    }
}
