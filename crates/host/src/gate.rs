//! Profile option checks against a permission host.

use crate::{PermissionHost, Result};
use permissions::{PermissionToken, Permissions, ProfileOptions};
use std::collections::BTreeSet;
use tracing::{debug, info, warn};

/// Checks and adjusts host grants on behalf of profile options.
///
/// Each check takes one snapshot of the held grants and evaluates it; a
/// grant change racing with the check is not reflected in its answer.
/// Host errors are logged and returned unchanged.
#[derive(Debug)]
pub struct PermissionGate<H> {
    host: H,
}

impl<H: PermissionHost> PermissionGate<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Check whether `permissions` are all held.
    pub async fn has_permissions(&self, permissions: &Permissions) -> Result<bool> {
        self.host
            .contains(permissions)
            .await
            .inspect_err(|e| warn!(error = %e, "permission query failed"))
    }

    /// Request (`should_have = true`) or release (`should_have = false`)
    /// `permissions`.
    ///
    /// Resolves `true` iff the host granted the whole set, or released it
    /// completely.
    pub async fn set_permissions_granted(
        &self,
        permissions: &Permissions,
        should_have: bool,
    ) -> Result<bool> {
        let result = if should_have {
            self.host.request(permissions).await
        } else {
            self.host.remove(permissions).await
        };

        match &result {
            Ok(done) => info!(
                permissions = ?permissions.permissions,
                origins = ?permissions.origins,
                should_have,
                done,
                "permission change resolved"
            ),
            Err(e) => warn!(error = %e, should_have, "permission change failed"),
        }
        result
    }

    /// Snapshot of every permission currently held.
    pub async fn get_all_permissions(&self) -> Result<Permissions> {
        self.host
            .get_all()
            .await
            .inspect_err(|e| warn!(error = %e, "permission listing failed"))
    }

    /// Check whether the held grants cover every feature `options` enables.
    pub async fn has_required_permissions_for_options(&self, options: &ProfileOptions) -> Result<bool> {
        let granted = self.get_all_permissions().await?;
        let sufficient = permissions::has_required_permissions_for_options(&granted, options);
        debug!(sufficient, held = ?granted.permissions, "checked options against held permissions");
        Ok(sufficient)
    }

    /// Permissions `options` need that the host does not currently hold.
    pub async fn missing_permissions_for_options(
        &self,
        options: &ProfileOptions,
    ) -> Result<BTreeSet<PermissionToken>> {
        let granted = self.get_all_permissions().await?;
        Ok(permissions::missing_permissions_for_options(&granted, options))
    }

    /// Request whatever `options` need and the host does not hold.
    ///
    /// Resolves `true` when nothing was missing or the host granted all of
    /// it.
    pub async fn request_missing_permissions(&self, options: &ProfileOptions) -> Result<bool> {
        let missing = self.missing_permissions_for_options(options).await?;
        if missing.is_empty() {
            debug!("no permissions missing for options");
            return Ok(true);
        }
        let request: Permissions = missing.into_iter().collect();
        self.set_permissions_granted(&request, true).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, MemoryHost};

    fn optional_host() -> MemoryHost {
        MemoryHost::builder()
            .optional([PermissionToken::CLIPBOARD_READ, PermissionToken::NATIVE_MESSAGING])
            .build()
    }

    fn mecab_options() -> ProfileOptions {
        let mut options = ProfileOptions::default();
        options.parsing.enable_mecab_parser = true;
        options
    }

    #[tokio::test]
    async fn test_set_permissions_granted_round_trip() {
        let gate = PermissionGate::new(optional_host());
        let clipboard = Permissions::new().with_permission(PermissionToken::CLIPBOARD_READ);

        assert!(!gate.has_permissions(&clipboard).await.unwrap());
        assert!(gate.set_permissions_granted(&clipboard, true).await.unwrap());
        assert!(gate.has_permissions(&clipboard).await.unwrap());
        assert!(gate.set_permissions_granted(&clipboard, false).await.unwrap());
        assert!(!gate.has_permissions(&clipboard).await.unwrap());
    }

    #[tokio::test]
    async fn test_options_check_uses_current_grants() {
        let gate = PermissionGate::new(optional_host());
        let options = mecab_options();

        assert!(!gate.has_required_permissions_for_options(&options).await.unwrap());

        let native = Permissions::new().with_permission(PermissionToken::NATIVE_MESSAGING);
        gate.set_permissions_granted(&native, true).await.unwrap();
        assert!(gate.has_required_permissions_for_options(&options).await.unwrap());

        // A revoke between checks changes the answer.
        gate.set_permissions_granted(&native, false).await.unwrap();
        assert!(!gate.has_required_permissions_for_options(&options).await.unwrap());
    }

    #[tokio::test]
    async fn test_request_missing_permissions() {
        let gate = PermissionGate::new(optional_host());
        let mut options = mecab_options();
        options
            .anki
            .kanji
            .fields
            .insert("Notes".to_string(), "{clipboard-text}".to_string());

        let missing = gate.missing_permissions_for_options(&options).await.unwrap();
        assert_eq!(missing.len(), 2);

        assert!(gate.request_missing_permissions(&options).await.unwrap());
        assert!(gate.has_required_permissions_for_options(&options).await.unwrap());
        assert!(gate.missing_permissions_for_options(&options).await.unwrap().is_empty());

        // Nothing left to request.
        assert!(gate.request_missing_permissions(&options).await.unwrap());
    }

    #[tokio::test]
    async fn test_request_missing_declined() {
        let host = MemoryHost::builder()
            .optional([PermissionToken::NATIVE_MESSAGING])
            .deny_requests()
            .build();
        let gate = PermissionGate::new(host);

        assert!(!gate.request_missing_permissions(&mecab_options()).await.unwrap());
        assert!(!gate.has_required_permissions_for_options(&mecab_options()).await.unwrap());
    }

    #[tokio::test]
    async fn test_host_errors_propagate_unchanged() {
        let host = MemoryHost::builder().fail_with("permissions API unavailable").build();
        let gate = PermissionGate::new(host);
        let expected = Error::QueryFailed("permissions API unavailable".to_string());

        assert_eq!(
            gate.has_required_permissions_for_options(&ProfileOptions::default())
                .await
                .unwrap_err(),
            expected
        );
        assert_eq!(
            gate.request_missing_permissions(&mecab_options()).await.unwrap_err(),
            expected
        );
        assert_eq!(gate.get_all_permissions().await.unwrap_err(), expected);
    }
}
