//! Host permission store access.
//!
//! The host environment owns the permission grants: it answers queries,
//! prompts for requests, and performs removals. This crate defines that
//! contract as the [`PermissionHost`] trait, provides an in-memory
//! implementation, and wraps any host in a [`PermissionGate`] that combines
//! host snapshots with the pure checks from the `permissions` crate.
//!
//! # Overview
//!
//! - **[`PermissionHost`]**: async query/request/remove/list against the host
//! - **[`MemoryHost`]**: in-memory host with required and optional permissions
//! - **[`PermissionGate`]**: checks profile options against the held grants
//!
//! Every host call may fail with [`Error::QueryFailed`], carrying the host's
//! message. Failures are propagated unchanged; callers decide whether an
//! unknown answer counts as insufficient.
//!
//! # Example
//!
//! ```
//! use host::{MemoryHost, PermissionGate};
//! use permissions::{PermissionToken, Permissions, ProfileOptions};
//!
//! # async fn example() -> host::Result<()> {
//! let host = MemoryHost::builder()
//!     .optional([PermissionToken::CLIPBOARD_READ, PermissionToken::NATIVE_MESSAGING])
//!     .build();
//! let gate = PermissionGate::new(host);
//!
//! let mut options = ProfileOptions::default();
//! options.clipboard.enable_search_page_monitor = true;
//! assert!(!gate.has_required_permissions_for_options(&options).await?);
//!
//! assert!(gate.request_missing_permissions(&options).await?);
//! assert!(gate.has_required_permissions_for_options(&options).await?);
//! # Ok(())
//! # }
//! # tokio::runtime::Runtime::new().unwrap().block_on(example()).unwrap();
//! ```

mod error;
mod gate;
mod memory;
mod store;

pub use error::{Error, Result};
pub use gate::PermissionGate;
pub use memory::{MemoryHost, MemoryHostBuilder};
pub use store::PermissionHost;
