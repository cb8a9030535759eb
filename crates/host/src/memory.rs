//! In-memory permission host.

use crate::{Error, PermissionHost, Result};
use permissions::{PermissionToken, Permissions};
use tokio::sync::RwLock;

const UNDECLARED_MESSAGE: &str = "Only permissions specified in the manifest may be requested.";
const REQUIRED_MESSAGE: &str = "You cannot remove required permissions.";

/// A permission host that keeps grants in memory.
///
/// Permissions are either *required* (always held, never removable) or
/// *optional* (held only after a successful request). Anything else is
/// undeclared, and the host rejects requests or removals that mention it.
/// Grants are forgotten when the host is dropped.
#[derive(Debug)]
pub struct MemoryHost {
    required: Permissions,
    optional: Permissions,
    granted: RwLock<Permissions>,
    deny_requests: bool,
    failure: Option<String>,
}

impl MemoryHost {
    pub fn builder() -> MemoryHostBuilder {
        MemoryHostBuilder::default()
    }

    fn check_available(&self) -> Result<()> {
        match &self.failure {
            Some(message) => Err(Error::QueryFailed(message.clone())),
            None => Ok(()),
        }
    }

    fn check_declared(&self, permissions: &Permissions) -> Result<()> {
        let declared = self.required.union(&self.optional);
        if declared.contains(permissions) {
            Ok(())
        } else {
            Err(Error::QueryFailed(UNDECLARED_MESSAGE.to_string()))
        }
    }

    async fn held(&self) -> Permissions {
        self.required.union(&*self.granted.read().await)
    }
}

impl PermissionHost for MemoryHost {
    async fn contains(&self, permissions: &Permissions) -> Result<bool> {
        self.check_available()?;
        Ok(self.held().await.contains(permissions))
    }

    async fn request(&self, permissions: &Permissions) -> Result<bool> {
        self.check_available()?;
        self.check_declared(permissions)?;

        let mut granted = self.granted.write().await;
        let missing = permissions.difference(&self.required.union(&granted));
        if missing.is_empty() {
            return Ok(true);
        }
        if self.deny_requests {
            return Ok(false);
        }
        *granted = granted.union(&missing);
        Ok(true)
    }

    async fn remove(&self, permissions: &Permissions) -> Result<bool> {
        self.check_available()?;
        self.check_declared(permissions)?;
        if self.required.intersects(permissions) {
            return Err(Error::QueryFailed(REQUIRED_MESSAGE.to_string()));
        }

        let mut granted = self.granted.write().await;
        *granted = granted.difference(permissions);
        Ok(true)
    }

    async fn get_all(&self) -> Result<Permissions> {
        self.check_available()?;
        Ok(self.held().await)
    }
}

/// Builder for [`MemoryHost`].
#[derive(Debug, Default)]
pub struct MemoryHostBuilder {
    required: Permissions,
    optional: Permissions,
    granted: Permissions,
    deny_requests: bool,
    failure: Option<String>,
}

impl MemoryHostBuilder {
    /// Permissions that are always held.
    pub fn required(mut self, tokens: impl IntoIterator<Item = PermissionToken>) -> Self {
        self.required.permissions.extend(tokens);
        self
    }

    /// Permissions that may be requested and removed.
    pub fn optional(mut self, tokens: impl IntoIterator<Item = PermissionToken>) -> Self {
        self.optional.permissions.extend(tokens);
        self
    }

    /// Origins that may be requested and removed.
    pub fn optional_origins<S: Into<String>>(mut self, origins: impl IntoIterator<Item = S>) -> Self {
        self.optional.origins.extend(origins.into_iter().map(Into::into));
        self
    }

    /// Optional permissions held from the start. Implies [`optional`](Self::optional).
    pub fn granted(mut self, tokens: impl IntoIterator<Item = PermissionToken>) -> Self {
        for token in tokens {
            self.optional.permissions.insert(token.clone());
            self.granted.permissions.insert(token);
        }
        self
    }

    /// Decline every request for permissions not already held, as a user
    /// dismissing the prompt would.
    pub fn deny_requests(mut self) -> Self {
        self.deny_requests = true;
        self
    }

    /// Fail every call with [`Error::QueryFailed`] carrying `message`.
    pub fn fail_with(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    pub fn build(self) -> MemoryHost {
        MemoryHost {
            required: self.required,
            optional: self.optional,
            granted: RwLock::new(self.granted),
            deny_requests: self.deny_requests,
            failure: self.failure,
        }
    }
}
