//! Link construction for table cells

use crate::config::GitHubConfig;
use crate::resolve::releases::{Component, LatestReleases};
use crate::version::{VersionParseError, extract_version_number};

/// Icon shown for an administrator's web page
pub const ADMIN_URL_ICON: &str = "far fa-file";

/// Icon shown for an administrator's email address
pub const ADMIN_EMAIL_ICON: &str = "far fa-envelope";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    ApiVersion,
    LibraryVersion,
    Clipboard,
    AdminUrl,
    AdminEmail,
    Plain,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkContent {
    Text(String),
    /// Icon class list, e.g. `far fa-file`
    Icon(&'static str),
}

/// Upstream release a version link points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseRef {
    pub component: Component,
    /// Canonical `major.minor.patch`
    pub version: String,
}

impl ReleaseRef {
    /// Style class such as `api-1-2-3` or `bcdice-2-0-1`
    pub fn class(&self) -> String {
        format!(
            "{}-{}",
            self.component.class_prefix(),
            self.version.replace('.', "-")
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub href: String,
    pub content: LinkContent,
    /// Version equals the latest upstream release
    pub latest: bool,
    /// Open in a new browsing context
    pub new_context: bool,
    pub release: Option<ReleaseRef>,
}

impl Link {
    fn new(href: String, content: LinkContent) -> Self {
        Self {
            href,
            content,
            latest: false,
            new_context: false,
            release: None,
        }
    }
}

/// Builds links against a fixed latest-release snapshot
pub struct LinkBuilder<'a> {
    github: &'a GitHubConfig,
    releases: &'a LatestReleases,
}

impl<'a> LinkBuilder<'a> {
    pub fn new(github: &'a GitHubConfig, releases: &'a LatestReleases) -> Self {
        Self { github, releases }
    }

    /// Build a link for `value`
    ///
    /// `display` defaults to `value` itself. Only the version kinds can fail,
    /// when `value` is not a version tag.
    pub fn build(
        &self,
        value: &str,
        kind: LinkKind,
        display: Option<LinkContent>,
    ) -> Result<Link, VersionParseError> {
        let content = display.unwrap_or_else(|| LinkContent::Text(value.to_string()));

        let link = match kind {
            LinkKind::ApiVersion => self.release_link(value, Component::Api, content)?,
            LinkKind::LibraryVersion => self.release_link(value, Component::Library, content)?,
            LinkKind::Clipboard => Link::new(clipboard_href(value), content),
            LinkKind::AdminUrl => Link {
                new_context: true,
                ..Link::new(with_default_scheme(value), content)
            },
            LinkKind::AdminEmail => Link::new(format!("mailto:{}", value), content),
            LinkKind::Plain => Link::new(value.to_string(), content),
        };

        Ok(link)
    }

    /// Version link for `component`, displaying the raw tag
    pub fn version(&self, tag: &str, component: Component) -> Result<Link, VersionParseError> {
        self.build(tag, component.link_kind(), None)
    }

    pub fn clipboard(&self, value: &str) -> Link {
        Link::new(clipboard_href(value), LinkContent::Text(value.to_string()))
    }

    pub fn admin_url(&self, url: &str) -> Link {
        Link {
            new_context: true,
            ..Link::new(with_default_scheme(url), LinkContent::Icon(ADMIN_URL_ICON))
        }
    }

    pub fn admin_email(&self, email: &str) -> Link {
        Link::new(
            format!("mailto:{}", email),
            LinkContent::Icon(ADMIN_EMAIL_ICON),
        )
    }

    fn release_link(
        &self,
        value: &str,
        component: Component,
        content: LinkContent,
    ) -> Result<Link, VersionParseError> {
        let version = extract_version_number(value)?;
        let href = format!(
            "{}/{}/releases/tag/{}{}",
            self.github.web_base_url.trim_end_matches('/'),
            component.repository(self.github),
            component.tag_prefix(),
            version
        );
        let latest = self.releases.get(component).version() == Some(version.as_str());

        Ok(Link {
            latest,
            release: Some(ReleaseRef { component, version }),
            ..Link::new(href, content)
        })
    }
}

fn clipboard_href(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("javascript:onclick=toClipBoard(\"{}\");", escaped)
}

fn with_default_scheme(url: &str) -> String {
    if has_scheme(url) {
        url.to_string()
    } else {
        format!("http://{}", url)
    }
}

fn has_scheme(url: &str) -> bool {
    url.split_once("://").is_some_and(|(scheme, _)| {
        !scheme.is_empty()
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}
