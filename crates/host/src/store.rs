//! Permission host trait.

use crate::Result;
use permissions::Permissions;
use std::future::Future;

/// Trait for hosts that hold permission grants.
///
/// Each call suspends until the host responds. Calls may run concurrently;
/// the host alone decides how grant changes are serialized, so two calls
/// observe no common snapshot unless the host guarantees one.
pub trait PermissionHost: Send + Sync {
    /// Check whether every permission and origin in `permissions` is held.
    fn contains(&self, permissions: &Permissions) -> impl Future<Output = Result<bool>> + Send;

    /// Ask the host to grant `permissions`.
    ///
    /// Resolves `true` iff the whole set is held afterwards. Requesting what
    /// is already held resolves `true`.
    fn request(&self, permissions: &Permissions) -> impl Future<Output = Result<bool>> + Send;

    /// Ask the host to release `permissions`.
    ///
    /// Resolves `true` iff the release succeeded completely. Releasing what
    /// is not held resolves `true`.
    fn remove(&self, permissions: &Permissions) -> impl Future<Output = Result<bool>> + Send;

    /// List every permission and origin currently held.
    fn get_all(&self) -> impl Future<Output = Result<Permissions>> + Send;
}
