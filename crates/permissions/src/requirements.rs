//! Requirement inference for card field templates.

use crate::PermissionToken;
use crate::markers::extract_markers;
use std::collections::BTreeSet;

/// Field markers whose evaluation needs a permission, and the permission.
///
/// Markers absent from this table require nothing.
pub static FIELD_MARKER_PERMISSIONS: &[(&str, PermissionToken)] = &[
    ("clipboard-image", PermissionToken::CLIPBOARD_READ),
    ("clipboard-text", PermissionToken::CLIPBOARD_READ),
];

/// Look up the permission a single marker requires.
pub fn permission_for_marker(marker: &str) -> Option<&'static PermissionToken> {
    lookup(FIELD_MARKER_PERMISSIONS, marker)
}

/// Permissions required to evaluate a field template.
///
/// Every marker in the template is checked, and each distinct permission is
/// reported once, in sorted order. A template without recognized markers
/// (including the empty template) requires nothing.
pub fn required_permissions_for_field_value(value: &str) -> Vec<PermissionToken> {
    required_with_table(FIELD_MARKER_PERMISSIONS, value)
}

/// Check whether a field template requires one particular permission.
///
/// Stops at the first marker mapping to `permission`.
pub fn field_value_requires(value: &str, permission: &PermissionToken) -> bool {
    extract_markers(value)
        .iter()
        .any(|marker| permission_for_marker(marker) == Some(permission))
}

fn lookup<'t>(table: &'t [(&str, PermissionToken)], marker: &str) -> Option<&'t PermissionToken> {
    table
        .iter()
        .find(|(name, _)| *name == marker)
        .map(|(_, permission)| permission)
}

fn required_with_table(table: &[(&str, PermissionToken)], value: &str) -> Vec<PermissionToken> {
    let required: BTreeSet<&PermissionToken> = extract_markers(value)
        .iter()
        .filter_map(|marker| lookup(table, marker))
        .collect();
    required.into_iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_maps_clipboard_markers() {
        assert_eq!(
            permission_for_marker("clipboard-image"),
            Some(&PermissionToken::CLIPBOARD_READ)
        );
        assert_eq!(
            permission_for_marker("clipboard-text"),
            Some(&PermissionToken::CLIPBOARD_READ)
        );
        assert_eq!(permission_for_marker("expression"), None);
        assert_eq!(permission_for_marker("clipboard"), None);
    }

    #[test]
    fn test_no_markers_requires_nothing() {
        assert!(required_permissions_for_field_value("").is_empty());
        assert!(required_permissions_for_field_value("{expression} {reading}").is_empty());
    }

    #[test]
    fn test_clipboard_markers_require_clipboard_read() {
        assert_eq!(
            required_permissions_for_field_value("{clipboard-image}"),
            vec![PermissionToken::CLIPBOARD_READ]
        );
        assert_eq!(
            required_permissions_for_field_value("{expression}<br>{clipboard-text}"),
            vec![PermissionToken::CLIPBOARD_READ]
        );
    }

    #[test]
    fn test_both_markers_report_one_token() {
        assert_eq!(
            required_permissions_for_field_value("{clipboard-image}{clipboard-text}"),
            vec![PermissionToken::CLIPBOARD_READ]
        );
    }

    #[test]
    fn test_malformed_marker_requires_nothing() {
        assert!(required_permissions_for_field_value("{clipboard-image").is_empty());
        assert!(required_permissions_for_field_value("{ clipboard-text }").is_empty());
    }

    #[test]
    fn test_accumulates_distinct_tokens_from_wider_table() {
        let table = [
            ("clipboard-text", PermissionToken::CLIPBOARD_READ),
            ("clipboard-image", PermissionToken::CLIPBOARD_READ),
            ("mecab-reading", PermissionToken::NATIVE_MESSAGING),
        ];

        let required = required_with_table(&table, "{clipboard-text} {mecab-reading} {clipboard-image}");
        assert_eq!(
            required,
            vec![PermissionToken::CLIPBOARD_READ, PermissionToken::NATIVE_MESSAGING]
        );
        assert_eq!(required_with_table(&table, "{mecab-reading}"), vec![PermissionToken::NATIVE_MESSAGING]);
    }

    #[test]
    fn test_field_value_requires() {
        let clipboard = PermissionToken::CLIPBOARD_READ;
        assert!(field_value_requires("{clipboard-text}", &clipboard));
        assert!(!field_value_requires("{expression}", &clipboard));
        assert!(!field_value_requires("{clipboard-text}", &PermissionToken::NATIVE_MESSAGING));
    }
}
