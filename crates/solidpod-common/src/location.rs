//! Pod addressing.
//!
//! A pod is addressed by a base URL. The base is kept exactly as the caller
//! supplied it and normalized to end in `/` every time a child URL is built,
//! so `http://pod.example/alice` and `http://pod.example/alice/` address the
//! same containers.
//!
//! Child URLs are built by string concatenation rather than [`Url::join`] and
//! then parsed. Parsing percent-encodes characters that are not allowed in a
//! path (a space becomes `%20`) but otherwise leaves names alone. Names that
//! parsing would restructure are rejected with [`PodError::UnsafeName`]: dot
//! segments (`.`, `..`, also percent-encoded) and backslashes, which would
//! otherwise move the target outside the container or the pod.

use std::borrow::Cow;
use std::fmt;

use smol_str::SmolStr;
use url::Url;

use crate::error::{PodError, Result};

/// Base location of a pod, stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PodLocation(SmolStr);

impl PodLocation {
    /// Wrap a pod base URL without validating or normalizing it.
    pub fn new(location: impl Into<SmolStr>) -> Self {
        Self(location.into())
    }

    /// The location exactly as supplied.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// The location with a guaranteed trailing slash.
    pub fn normalized(&self) -> Cow<'_, str> {
        if self.0.ends_with('/') {
            Cow::Borrowed(self.0.as_str())
        } else {
            Cow::Owned(format!("{}/", self.0))
        }
    }

    /// URL of the pod root, the target for container creation.
    pub fn base_url(&self) -> Result<Url> {
        parse(self.normalized().into_owned())
    }

    /// URL a container named `container` is expected to live at: `{pod}/{container}/`.
    pub fn container_url(&self, container: &str) -> Result<Url> {
        check_name(container)?;
        parse(format!("{}{}/", self.normalized(), container))
    }

    /// URL of a resource inside a container: `{pod}/{container}/{resource}`.
    pub fn resource_url(&self, container: &str, resource: &str) -> Result<Url> {
        check_name(container)?;
        check_name(resource)?;
        parse(format!("{}{}/{}", self.normalized(), container, resource))
    }

    /// Resolve a reference handed back by the pod (e.g. a `Location` header)
    /// against the pod root. Absolute references are returned as-is.
    pub fn resolve(&self, reference: &str) -> Result<Url> {
        self.base_url()?
            .join(reference)
            .map_err(|source| PodError::InvalidUrl {
                url: reference.to_owned(),
                source,
            })
    }
}

fn check_name(name: &str) -> Result<()> {
    let unsafe_name = |reason| {
        Err(PodError::UnsafeName {
            name: name.to_owned(),
            reason,
        })
    };
    if name.contains('\\') {
        return unsafe_name("contains a backslash");
    }
    let dot_segment = name
        .split('/')
        .map(|segment| segment.to_ascii_lowercase().replace("%2e", "."))
        .any(|segment| segment == "." || segment == "..");
    if dot_segment {
        return unsafe_name("contains a dot segment");
    }
    Ok(())
}

fn parse(url: String) -> Result<Url> {
    Url::parse(&url).map_err(|source| PodError::InvalidUrl { url, source })
}

impl fmt::Display for PodLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PodLocation {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for PodLocation {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<Url> for PodLocation {
    fn from(value: Url) -> Self {
        Self::new(value.as_str())
    }
}

impl AsRef<str> for PodLocation {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
