//! Overlay render model and click pipeline.
//!
//! [`build_overlay`] turns a region list and the caller's selection into
//! a flat, renderer-agnostic description: one shape per region (scaled
//! for the requested [`SizeKey`]) and one label per selected region. The
//! browser components and the SVG exporter both draw from this model.
//!
//! [`resolve_click`] is the inverse direction: a pointer position in
//! client pixels is mapped into the model's view box, unscaled back into
//! design space, and hit tested against the unscaled region boxes.

use serde::Serialize;

use crate::geometry::{
    ClientRect, ViewBox, find_region_at_point, scale_coordinates, to_design_space_coordinates,
    unscale_point,
};
use crate::label::truncate_label;
use crate::selection::{is_selected, selected_regions};
use crate::shapes::{RegionShape, get_region_shape, label_anchor};
use crate::types::{HitTestMode, Point, Region, SizeKey};

/// Corner radius of the default rectangle drawn for regions without a
/// shape override, in unscaled units.
pub const DEFAULT_CORNER_RADIUS: f64 = 4.0;

/// Drawable geometry in scaled render space.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ShapeGeometry {
    /// Rounded rectangle.
    Rect {
        /// Left edge.
        x: f64,
        /// Top edge.
        y: f64,
        /// Horizontal extent.
        width: f64,
        /// Vertical extent.
        height: f64,
        /// Corner radius (0 for square corners).
        corner_radius: f64,
    },
    /// Axis-aligned ellipse.
    Ellipse {
        /// Centre x.
        center_x: f64,
        /// Centre y.
        center_y: f64,
        /// Horizontal radius.
        radius_x: f64,
        /// Vertical radius.
        radius_y: f64,
    },
    /// Design-space path data drawn with a uniform `scale` transform.
    Path {
        /// SVG `d` attribute in unscaled design space.
        data: &'static str,
        /// Size multiplier to apply when drawing.
        scale: f64,
    },
}

impl ShapeGeometry {
    /// Scaled geometry for `region`, from its override or its box.
    #[must_use]
    pub fn for_region(region: &Region, size: SizeKey) -> Self {
        let m = size.multiplier();
        match get_region_shape(region.id) {
            Some(&RegionShape::Rect {
                x,
                y,
                width,
                height,
                corner_radius,
            }) => Self::Rect {
                x: x * m,
                y: y * m,
                width: width * m,
                height: height * m,
                corner_radius: corner_radius.unwrap_or(0.0) * m,
            },
            Some(&RegionShape::Ellipse {
                center_x,
                center_y,
                radius_x,
                radius_y,
            }) => Self::Ellipse {
                center_x: center_x * m,
                center_y: center_y * m,
                radius_x: radius_x * m,
                radius_y: radius_y * m,
            },
            Some(&RegionShape::Path { data }) => Self::Path { data, scale: m },
            None => {
                let b = scale_coordinates(&region.coordinates, size);
                Self::Rect {
                    x: b.x,
                    y: b.y,
                    width: b.width,
                    height: b.height,
                    corner_radius: DEFAULT_CORNER_RADIUS * m,
                }
            }
        }
    }
}

/// One clickable region as drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayShape {
    /// Region id.
    pub region_id: &'static str,
    /// Region display name (untruncated).
    pub region_name: &'static str,
    /// Geometry in scaled render space.
    pub geometry: ShapeGeometry,
    /// Whether the region is in the current selection.
    pub selected: bool,
}

/// Text label for a selected region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayLabel {
    /// Region the label belongs to.
    pub region_id: &'static str,
    /// Display text, already truncated.
    pub text: String,
    /// Anchor in scaled render space; text is centred on it.
    pub anchor: Point,
}

/// Everything needed to draw one overlay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayModel {
    /// The `viewBox` the shapes are authored in.
    pub view_box: ViewBox,
    /// Size the shapes were scaled for.
    pub size: SizeKey,
    /// One shape per region, in region order.
    pub shapes: Vec<OverlayShape>,
    /// One label per selected region, in selection order.
    pub labels: Vec<OverlayLabel>,
}

/// Build the render model for `regions`.
///
/// Selected ids not present in `regions` get no label. With
/// `show_labels` false, `labels` is empty.
#[must_use]
pub fn build_overlay(
    regions: &[&Region],
    selection: &[String],
    size: SizeKey,
    show_labels: bool,
) -> OverlayModel {
    let m = size.multiplier();

    let shapes = regions
        .iter()
        .map(|region| OverlayShape {
            region_id: region.id,
            region_name: region.name,
            geometry: ShapeGeometry::for_region(region, size),
            selected: is_selected(selection, region.id),
        })
        .collect();

    let labels = if show_labels {
        selected_regions(selection, regions)
            .into_iter()
            .map(|region| {
                let anchor = label_anchor(region);
                OverlayLabel {
                    region_id: region.id,
                    text: truncate_label(region.name).into_owned(),
                    anchor: Point::new(anchor.x * m, anchor.y * m),
                }
            })
            .collect()
    } else {
        Vec::new()
    };

    OverlayModel {
        view_box: ViewBox::for_size(size),
        size,
        shapes,
        labels,
    }
}

/// First region, in declaration order, hit by `point`.
///
/// `point` is in unscaled design space. In [`HitTestMode::BoundingBox`]
/// this is exactly [`find_region_at_point`]. In [`HitTestMode::Shape`]
/// regions with an override are tested against their drawn geometry;
/// an override whose path data fails to parse falls back to the box.
#[must_use]
pub fn hit_test<'a>(point: Point, regions: &[&'a Region], mode: HitTestMode) -> Option<&'a Region> {
    match mode {
        HitTestMode::BoundingBox => find_region_at_point(point, regions),
        HitTestMode::Shape => regions.iter().copied().find(|region| {
            get_region_shape(region.id).map_or_else(
                || region.coordinates.contains(point),
                |shape| {
                    shape
                        .contains(point)
                        .unwrap_or_else(|_| region.coordinates.contains(point))
                },
            )
        }),
    }
}

/// Full click pipeline: client pixels to the region under the pointer.
///
/// `rect` and `view_box` describe the rendered `<svg>` as measured at
/// the time of the event. Returns `None` on a miss or when the element
/// has no rendered area.
#[must_use]
pub fn resolve_click<'a>(
    client: Point,
    rect: &ClientRect,
    view_box: &ViewBox,
    size: SizeKey,
    regions: &[&'a Region],
    mode: HitTestMode,
) -> Option<&'a Region> {
    let in_view_box = to_design_space_coordinates(client, rect, view_box)?;
    hit_test(unscale_point(in_view_box, size), regions, mode)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::regions_for_view;
    use crate::selection::toggle_region;
    use crate::types::ViewId;

    fn rect_for(size: SizeKey, left: f64, top: f64, zoom: f64) -> ClientRect {
        let vb = ViewBox::for_size(size);
        ClientRect {
            left,
            top,
            width: vb.width * zoom,
            height: vb.height * zoom,
        }
    }

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    // --- resolve_click tests ---

    #[test]
    fn click_on_head_reports_head_front() {
        let regions = regions_for_view(ViewId::Front);
        let rect = rect_for(SizeKey::Medium, 0.0, 0.0, 1.0);
        let hit = resolve_click(
            Point::new(100.0, 20.0),
            &rect,
            &ViewBox::DESIGN,
            SizeKey::Medium,
            &regions,
            HitTestMode::BoundingBox,
        )
        .unwrap();
        assert_eq!((hit.id, hit.name), ("head-front", "Head"));
    }

    #[test]
    fn click_is_unscaled_for_large_size() {
        // Design point (100, 20) drawn at 1.4x is view-box (140, 28);
        // the element is further stretched 2x on screen and offset.
        let regions = regions_for_view(ViewId::Front);
        let size = SizeKey::Large;
        let rect = rect_for(size, 30.0, 40.0, 2.0);
        let hit = resolve_click(
            Point::new(30.0 + 280.0, 40.0 + 56.0),
            &rect,
            &ViewBox::for_size(size),
            size,
            &regions,
            HitTestMode::BoundingBox,
        )
        .unwrap();
        assert_eq!(hit.id, "head-front");
    }

    #[test]
    fn click_on_empty_space_is_none() {
        let regions = regions_for_view(ViewId::Front);
        let rect = rect_for(SizeKey::Medium, 0.0, 0.0, 1.0);
        let hit = resolve_click(
            Point::new(3.0, 3.0),
            &rect,
            &ViewBox::DESIGN,
            SizeKey::Medium,
            &regions,
            HitTestMode::BoundingBox,
        );
        assert!(hit.is_none());
    }

    #[test]
    fn click_before_layout_is_none() {
        let regions = regions_for_view(ViewId::Front);
        let rect = ClientRect {
            left: 0.0,
            top: 0.0,
            width: 0.0,
            height: 0.0,
        };
        let hit = resolve_click(
            Point::new(100.0, 20.0),
            &rect,
            &ViewBox::DESIGN,
            SizeKey::Medium,
            &regions,
            HitTestMode::BoundingBox,
        );
        assert!(hit.is_none());
    }

    #[test]
    fn second_click_on_same_spot_deselects() {
        let regions = regions_for_view(ViewId::Front);
        let rect = rect_for(SizeKey::Medium, 0.0, 0.0, 1.0);
        let click = |selection: &[String]| {
            let hit = resolve_click(
                Point::new(100.0, 60.0),
                &rect,
                &ViewBox::DESIGN,
                SizeKey::Medium,
                &regions,
                HitTestMode::BoundingBox,
            )
            .unwrap();
            toggle_region(selection, hit.id, true)
        };
        let before = vec!["head-front".to_string()];
        let once = click(&before);
        assert_eq!(once, vec!["head-front".to_string(), "chest".to_string()]);
        assert_eq!(click(&once), before);
    }

    // --- hit_test tests ---

    #[test]
    fn bounding_box_mode_ignores_ellipse() {
        let regions = regions_for_view(ViewId::Front);
        let corner = Point::new(86.0, 6.0);
        assert_eq!(
            hit_test(corner, &regions, HitTestMode::BoundingBox).map(|r| r.id),
            Some("head-front")
        );
        assert!(hit_test(corner, &regions, HitTestMode::Shape).is_none());
    }

    #[test]
    fn shape_mode_uses_path_polygon() {
        let regions = regions_for_view(ViewId::Front);
        let outside_trapezoid = Point::new(83.0, 133.0);
        assert_eq!(
            hit_test(outside_trapezoid, &regions, HitTestMode::BoundingBox).map(|r| r.id),
            Some("pelvis")
        );
        assert!(hit_test(outside_trapezoid, &regions, HitTestMode::Shape).is_none());
        assert_eq!(
            hit_test(Point::new(100.0, 126.0), &regions, HitTestMode::Shape).map(|r| r.id),
            Some("pelvis")
        );
    }

    #[test]
    fn shape_mode_without_override_uses_box() {
        let regions = regions_for_view(ViewId::Back);
        assert_eq!(
            hit_test(Point::new(100.0, 108.0), &regions, HitTestMode::Shape).map(|r| r.id),
            Some("lower-back")
        );
    }

    // --- build_overlay tests ---

    #[test]
    fn one_shape_per_region_with_selected_flag() {
        let regions = regions_for_view(ViewId::Front);
        let selection = vec!["chest".to_string(), "head-back".to_string()];
        let model = build_overlay(&regions, &selection, SizeKey::Medium, true);
        assert_eq!(model.shapes.len(), regions.len());
        let selected: Vec<_> = model
            .shapes
            .iter()
            .filter(|s| s.selected)
            .map(|s| s.region_id)
            .collect();
        assert_eq!(selected, vec!["chest"]);
        // The back-view id has no label in the front overlay.
        assert_eq!(model.labels.len(), 1);
    }

    #[test]
    fn default_shape_is_scaled_rounded_box() {
        let regions = regions_for_view(ViewId::Front);
        let abdomen = regions.iter().find(|r| r.id == "upper-abdomen").unwrap();
        let geometry = ShapeGeometry::for_region(abdomen, SizeKey::Small);
        assert!(
            matches!(
                geometry,
                ShapeGeometry::Rect { x, width, corner_radius, .. }
                    if approx_eq(x, 84.0 * 0.7)
                        && approx_eq(width, 32.0 * 0.7)
                        && approx_eq(corner_radius, DEFAULT_CORNER_RADIUS * 0.7)
            ),
            "unexpected geometry {geometry:?}"
        );
    }

    #[test]
    fn override_shapes_are_scaled() {
        let regions = regions_for_view(ViewId::Front);
        let head = regions.iter().find(|r| r.id == "head-front").unwrap();
        assert_eq!(
            ShapeGeometry::for_region(head, SizeKey::Large),
            ShapeGeometry::Ellipse {
                center_x: 100.0 * 1.4,
                center_y: 21.5 * 1.4,
                radius_x: 15.0 * 1.4,
                radius_y: 16.5 * 1.4,
            }
        );
        let pelvis = regions.iter().find(|r| r.id == "pelvis").unwrap();
        assert!(matches!(
            ShapeGeometry::for_region(pelvis, SizeKey::Medium),
            ShapeGeometry::Path { scale, .. } if approx_eq(scale, 1.0)
        ));
    }

    #[test]
    fn labels_follow_selection_order_and_truncate() {
        let regions = regions_for_view(ViewId::Back);
        let selection = vec!["right-hand-back".to_string(), "head-back".to_string()];
        let model = build_overlay(&regions, &selection, SizeKey::Medium, true);
        let texts: Vec<_> = model.labels.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["Back of Right...", "Back of Head"]);
        assert_eq!(model.labels[1].anchor, Point::new(100.0, 21.5));
    }

    #[test]
    fn label_anchor_is_scaled() {
        let regions = regions_for_view(ViewId::Front);
        let selection = vec!["upper-abdomen".to_string()];
        let model = build_overlay(&regions, &selection, SizeKey::Large, true);
        let anchor = model.labels[0].anchor;
        assert!(approx_eq(anchor.x, 140.0));
        assert!(approx_eq(anchor.y, 88.0 * 1.4));
    }

    #[test]
    fn labels_hidden_when_disabled() {
        let regions = regions_for_view(ViewId::Front);
        let selection = vec!["chest".to_string()];
        let model = build_overlay(&regions, &selection, SizeKey::Medium, false);
        assert!(model.labels.is_empty());
        assert_eq!(model.view_box, ViewBox::DESIGN);
    }
}
