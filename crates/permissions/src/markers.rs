//! Field marker extraction for card templates.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

// Letters of any script, ASCII digits, `_` and `-` between single braces.
static MARKER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([\p{L}0-9_-]+)\}").expect("marker pattern is a valid regex")
});

/// Extract the set of marker names embedded in a template string.
///
/// A marker is written `{name}`. Text that only looks like a marker (empty
/// braces, unbalanced braces, names containing spaces or punctuation) is
/// ignored rather than rejected, so this never fails.
///
/// ```
/// use permissions::extract_markers;
///
/// let markers = extract_markers("{expression}<br>{reading} {expression}");
/// assert_eq!(markers.len(), 2);
/// assert!(markers.contains("reading"));
/// ```
pub fn extract_markers(template: &str) -> BTreeSet<String> {
    MARKER_PATTERN
        .captures_iter(template)
        .filter_map(|caps| caps.get(1))
        .map(|name| name.as_str().to_string())
        .collect()
}
