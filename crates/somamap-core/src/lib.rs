//! somamap-core: Pure body-region selection engine (sans-IO).
//!
//! Maps pointer positions on a drawn body silhouette to named anatomical
//! regions:
//! client pixels -> view box -> unscaled design space -> hit test.
//!
//! Every region box, shape override, and silhouette outline is authored
//! in a fixed 200x240 design space. Rendering may scale that space by a
//! [`SizeKey`] multiplier; hit testing always undoes the scale first so
//! it runs against the same unscaled boxes the tables declare.
//!
//! This crate has **no I/O dependencies** and keeps no selection state.
//! The caller owns the selected id list and feeds clicks through
//! [`toggle_region`]. All browser interaction lives in `somamap-io`.

pub mod catalog;
pub mod geometry;
pub mod label;
pub mod overlay;
pub mod path;
pub mod selection;
pub mod shapes;
pub mod silhouette;
pub mod symptom;
pub mod types;
pub mod validate;

pub use catalog::{find_region, find_region_any, regions_for_view};
pub use geometry::{
    ClientRect, ViewBox, find_region_at_point, is_point_in_region, scale_coordinates,
    to_design_space_coordinates, unscale_point,
};
pub use label::truncate_label;
pub use overlay::{
    OverlayLabel, OverlayModel, OverlayShape, ShapeGeometry, build_overlay, hit_test, resolve_click,
};
pub use selection::{is_selected, selected_regions, toggle_region};
pub use shapes::{RegionShape, get_region_shape, has_custom_shape, label_anchor};
pub use silhouette::{silhouette_detail_path, silhouette_path};
pub use symptom::{
    SymptomMapping, applicable_mapping, get_filtered_regions_for_symptom, symptom_mapping,
};
pub use types::{
    BodyMapError, BoundingBox, HitTestMode, Point, Region, SelectorConfig, SizeKey, View, ViewId,
};
pub use validate::validate_tables;

/// Display name of the region with `id` in either view.
#[must_use]
pub fn region_name(id: &str) -> Option<&'static str> {
    find_region_any(id).map(|(_, region)| region.name)
}

/// Regions the selector should offer on `view`.
///
/// With no symptom this is the whole catalog. With a symptom it is the
/// symptom's filtered list, which is empty for unknown symptoms and
/// unsupported views.
#[must_use]
pub fn active_regions(view: ViewId, symptom_id: Option<&str>) -> Vec<&'static Region> {
    symptom_id.map_or_else(
        || regions_for_view(view),
        |id| get_filtered_regions_for_symptom(id, view),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_name_searches_both_views() {
        assert_eq!(region_name("head-front"), Some("Head"));
        assert_eq!(region_name("left-heel"), Some("Left Heel"));
        assert_eq!(region_name("tail"), None);
    }

    #[test]
    fn active_regions_without_symptom_is_full_catalog() {
        assert_eq!(
            active_regions(ViewId::Back, None).len(),
            catalog::BACK_REGIONS.len()
        );
    }

    #[test]
    fn active_regions_with_symptom_is_filtered() {
        let ids: Vec<_> = active_regions(ViewId::Front, Some("headache"))
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec!["head-front"]);
        assert!(active_regions(ViewId::Front, Some("unknown-symptom")).is_empty());
    }
}
