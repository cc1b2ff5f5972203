//! Exercise id aliases
//!
//! Newer clients submit some exercises under ids the templates do not use.
//! Results are renamed to the template ids before grouping.

use std::collections::BTreeMap;

/// `(submitted id, template id)`. No template id appears as a submitted id.
pub const EXERCISE_ALIASES: [(&str, &str); 2] = [
    ("left_shoulder_vertical_flexion", "shoulder_vertical_flexion_left"),
    ("right_shoulder_vertical_flexion", "shoulder_vertical_flexion_right"),
];

/// Template id for `id`; ids without an alias map to themselves
pub fn canonical_name(id: &str) -> &str {
    EXERCISE_ALIASES
        .iter()
        .find(|(from, _)| *from == id)
        .map(|(_, to)| *to)
        .unwrap_or(id)
}

/// Rename every key to its template id. If two keys collapse onto the same
/// id the one iterated later wins.
pub fn apply_aliases<I>(values: I) -> BTreeMap<String, f64>
where
    I: IntoIterator<Item = (String, f64)>,
{
    values
        .into_iter()
        .map(|(id, value)| (canonical_name(&id).to_string(), value))
        .collect()
}
