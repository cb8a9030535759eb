//! Sufficiency of held permissions for a profile's options.

use crate::requirements::{field_value_requires, required_permissions_for_field_value};
use crate::{PermissionToken, Permissions, ProfileOptions};
use std::collections::BTreeSet;

/// Check whether `granted` covers every feature `options` enables.
///
/// Checks run in a fixed order and return on the first shortfall:
///
/// 1. The MeCab parser needs `nativeMessaging`.
/// 2. Without `clipboardRead`, either clipboard monitor is a shortfall, and
///    so is any term or kanji card field whose template uses a clipboard
///    marker. Every field of both collections is scanned before concluding
///    the options are covered.
pub fn has_required_permissions_for_options(granted: &Permissions, options: &ProfileOptions) -> bool {
    if !granted.has_permission(&PermissionToken::NATIVE_MESSAGING)
        && options.parsing.enable_mecab_parser
    {
        return false;
    }

    if !granted.has_permission(&PermissionToken::CLIPBOARD_READ) {
        let clipboard = &options.clipboard;
        if clipboard.enable_background_monitor || clipboard.enable_search_page_monitor {
            return false;
        }

        let needs_clipboard = options
            .card_field_collections()
            .into_iter()
            .flat_map(|fields| fields.values())
            .any(|value| field_value_requires(value, &PermissionToken::CLIPBOARD_READ));
        if needs_clipboard {
            return false;
        }
    }

    true
}

/// Every permission the options need, regardless of what is held.
pub fn required_permissions_for_options(options: &ProfileOptions) -> BTreeSet<PermissionToken> {
    let mut required = BTreeSet::new();

    if options.parsing.enable_mecab_parser {
        required.insert(PermissionToken::NATIVE_MESSAGING);
    }
    if options.clipboard.enable_background_monitor || options.clipboard.enable_search_page_monitor {
        required.insert(PermissionToken::CLIPBOARD_READ);
    }
    for fields in options.card_field_collections() {
        for value in fields.values() {
            required.extend(required_permissions_for_field_value(value));
        }
    }

    required
}

/// Permissions the options need that `granted` does not hold.
///
/// Empty exactly when [`has_required_permissions_for_options`] is `true`.
pub fn missing_permissions_for_options(
    granted: &Permissions,
    options: &ProfileOptions,
) -> BTreeSet<PermissionToken> {
    required_permissions_for_options(options)
        .into_iter()
        .filter(|token| !granted.has_permission(token))
        .collect()
}
