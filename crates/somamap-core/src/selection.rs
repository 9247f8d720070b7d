//! Selection semantics.
//!
//! The selection list is owned by the caller. These functions compute
//! the next list from the current one; nothing here keeps state.

use crate::types::Region;

/// Apply a click on `region_id` to `selection` and return the new list.
///
/// Multi-select: a selected id is removed, any other id is appended.
/// Single-select: clicking the sole selected id clears the list, any
/// other click replaces the list with just that id.
#[must_use]
pub fn toggle_region(selection: &[String], region_id: &str, multi_select: bool) -> Vec<String> {
    let already = selection.iter().any(|id| id == region_id);
    if multi_select {
        if already {
            selection
                .iter()
                .filter(|id| *id != region_id)
                .cloned()
                .collect()
        } else {
            let mut next = selection.to_vec();
            next.push(region_id.to_owned());
            next
        }
    } else if already && selection.len() == 1 {
        Vec::new()
    } else {
        vec![region_id.to_owned()]
    }
}

/// Resolve selected ids against `regions`, in selection order.
///
/// Ids with no matching region (other view, filtered out, or stale) are
/// skipped.
#[must_use]
pub fn selected_regions<'a>(selection: &[String], regions: &[&'a Region]) -> Vec<&'a Region> {
    selection
        .iter()
        .filter_map(|id| regions.iter().copied().find(|r| r.id == id.as_str()))
        .collect()
}

/// Whether `region_id` is in `selection`.
#[must_use]
pub fn is_selected(selection: &[String], region_id: &str) -> bool {
    selection.iter().any(|id| id == region_id)
}
