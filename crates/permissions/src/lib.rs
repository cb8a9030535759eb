//! Permission requirements for profile options.
//!
//! This crate answers two questions about the elevated permissions a host
//! application needs:
//!
//! 1. Which permissions does evaluating a card field template require?
//! 2. Given a profile's options and the permissions currently held, is the
//!    held set sufficient for every feature the options enable?
//!
//! Everything here is synchronous and pure. Querying and changing the grants
//! held by the host lives in the `host` crate.
//!
//! # Core Concepts
//!
//! - [`PermissionToken`]: names one capability grant (`nativeMessaging`,
//!   `clipboardRead`, ...).
//! - [`Permissions`]: a set of tokens and host origins, as the host reports
//!   or receives them.
//! - [`extract_markers`]: finds the `{marker}` names embedded in a template.
//! - [`FIELD_MARKER_PERMISSIONS`]: the fixed marker to permission table.
//! - [`ProfileOptions`]: the subset of profile options that drive permission
//!   requirements.
//!
//! # Example
//!
//! ```
//! use permissions::{
//!     has_required_permissions_for_options, required_permissions_for_field_value,
//!     PermissionToken, Permissions, ProfileOptions,
//! };
//!
//! let required = required_permissions_for_field_value("{expression} {clipboard-image}");
//! assert_eq!(required, vec![PermissionToken::CLIPBOARD_READ]);
//!
//! let mut options = ProfileOptions::default();
//! options
//!     .anki
//!     .terms
//!     .fields
//!     .insert("Picture".to_string(), "{clipboard-image}".to_string());
//!
//! assert!(!has_required_permissions_for_options(&Permissions::new(), &options));
//!
//! let granted = Permissions::new().with_permission(PermissionToken::CLIPBOARD_READ);
//! assert!(has_required_permissions_for_options(&granted, &options));
//! ```

mod error;
mod markers;
mod options;
mod permission;
mod requirements;
mod sufficiency;

pub use error::{Error, Result};
pub use markers::extract_markers;
pub use options::{AnkiOptions, CardOptions, ClipboardOptions, ParsingOptions, ProfileOptions};
pub use permission::{PermissionToken, Permissions};
pub use requirements::{
    FIELD_MARKER_PERMISSIONS, field_value_requires, permission_for_marker,
    required_permissions_for_field_value,
};
pub use sufficiency::{
    has_required_permissions_for_options, missing_permissions_for_options,
    required_permissions_for_options,
};
