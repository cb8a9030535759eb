//! Permission tokens and permission sets.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeSet;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// An opaque identifier naming one capability grant.
///
/// Membership in a set is the only operation the requirement logic needs, so
/// any string is a valid token. The tokens this crate reasons about are
/// available as associated constants.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionToken(Cow<'static, str>);

impl PermissionToken {
    /// Talk to a native helper application (used by the MeCab parser).
    pub const NATIVE_MESSAGING: Self = Self(Cow::Borrowed("nativeMessaging"));

    /// Read the system clipboard.
    pub const CLIPBOARD_READ: Self = Self(Cow::Borrowed("clipboardRead"));

    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PermissionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PermissionToken {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for PermissionToken {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl FromStr for PermissionToken {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

/// A set of permission tokens and host origins.
///
/// This is the shape the host reports for held grants and accepts for
/// requests and removals. A snapshot taken from the host is point-in-time:
/// a concurrent grant or removal does not update it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permissions {
    /// Named permission tokens.
    #[serde(default)]
    pub permissions: BTreeSet<PermissionToken>,

    /// Host match patterns (e.g., `"<all_urls>"`, `"https://*.example.com/*"`).
    #[serde(default)]
    pub origins: BTreeSet<String>,
}

impl Permissions {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_permission(mut self, token: PermissionToken) -> Self {
        self.permissions.insert(token);
        self
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origins.insert(origin.into());
        self
    }

    /// Check whether a single token is held.
    pub fn has_permission(&self, token: &PermissionToken) -> bool {
        self.permissions.contains(token)
    }

    /// Check whether every token and origin of `other` is in this set.
    pub fn contains(&self, other: &Permissions) -> bool {
        other.permissions.is_subset(&self.permissions) && other.origins.is_subset(&self.origins)
    }

    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty() && self.origins.is_empty()
    }

    pub fn union(&self, other: &Permissions) -> Permissions {
        Permissions {
            permissions: self.permissions.union(&other.permissions).cloned().collect(),
            origins: self.origins.union(&other.origins).cloned().collect(),
        }
    }

    /// Tokens and origins in this set that are not in `other`.
    pub fn difference(&self, other: &Permissions) -> Permissions {
        Permissions {
            permissions: self.permissions.difference(&other.permissions).cloned().collect(),
            origins: self.origins.difference(&other.origins).cloned().collect(),
        }
    }

    /// Check whether any token or origin appears in both sets.
    pub fn intersects(&self, other: &Permissions) -> bool {
        !self.permissions.is_disjoint(&other.permissions) || !self.origins.is_disjoint(&other.origins)
    }
}

impl FromIterator<PermissionToken> for Permissions {
    fn from_iter<I: IntoIterator<Item = PermissionToken>>(iter: I) -> Self {
        Self {
            permissions: iter.into_iter().collect(),
            origins: BTreeSet::new(),
        }
    }
}
