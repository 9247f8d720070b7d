//! Region shape registry: optional visual overrides keyed by region id.
//!
//! A region without an entry here is drawn as a rounded rectangle
//! matching its box. Overrides are purely visual unless the caller opts
//! into [`HitTestMode::Shape`](crate::HitTestMode::Shape), in which case
//! [`RegionShape::contains`] is used instead of the plain box test.

use std::collections::HashMap;
use std::sync::LazyLock;

use geo::Intersects;
use serde::Serialize;

use crate::path::flatten_path;
use crate::types::{BoundingBox, Point, Region};

/// Custom visual footprint for a region, in unscaled design space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RegionShape {
    /// Rectangle, optionally rounded.
    Rect {
        /// Left edge.
        x: f64,
        /// Top edge.
        y: f64,
        /// Horizontal extent.
        width: f64,
        /// Vertical extent.
        height: f64,
        /// Corner radius; `None` for square corners.
        corner_radius: Option<f64>,
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
    /// Free-form SVG path data.
    Path {
        /// SVG `d` attribute.
        data: &'static str,
    },
}

impl RegionShape {
    /// Point the selection label is anchored at.
    ///
    /// Ellipses anchor at their centre, rectangles at the centre of
    /// their own box, paths at the centre of the region's box.
    #[must_use]
    pub fn label_anchor(&self, region_box: &BoundingBox) -> Point {
        match *self {
            Self::Ellipse {
                center_x, center_y, ..
            } => Point::new(center_x, center_y),
            Self::Rect {
                x,
                y,
                width,
                height,
                ..
            } => BoundingBox::new(x, y, width, height).center(),
            Self::Path { .. } => region_box.center(),
        }
    }

    /// Whether the drawn geometry contains `point` (boundary inclusive).
    ///
    /// # Errors
    ///
    /// Returns the parser message when a path shape's data is invalid.
    pub fn contains(&self, point: Point) -> Result<bool, String> {
        match *self {
            Self::Rect {
                x,
                y,
                width,
                height,
                ..
            } => Ok(BoundingBox::new(x, y, width, height).contains(point)),
            Self::Ellipse {
                center_x,
                center_y,
                radius_x,
                radius_y,
            } => {
                if radius_x <= 0.0 || radius_y <= 0.0 {
                    return Ok(false);
                }
                let dx = (point.x - center_x) / radius_x;
                let dy = (point.y - center_y) / radius_y;
                Ok(dx.mul_add(dx, dy * dy) <= 1.0)
            }
            Self::Path { data } => {
                let polygons = flatten_path(data)?;
                Ok(polygons.intersects(&geo::Point::new(point.x, point.y)))
            }
        }
    }
}

const fn ellipse(center_x: f64, center_y: f64, radius_x: f64, radius_y: f64) -> RegionShape {
    RegionShape::Ellipse {
        center_x,
        center_y,
        radius_x,
        radius_y,
    }
}

const fn rounded(x: f64, y: f64, width: f64, height: f64, radius: f64) -> RegionShape {
    RegionShape::Rect {
        x,
        y,
        width,
        height,
        corner_radius: Some(radius),
    }
}

// Shoulder caps curve outward, away from the torso.
const SHOULDER_VIEWER_LEFT: &str = "M84 46 L84 62 L62 62 Q62 46 84 46 Z";
const SHOULDER_VIEWER_RIGHT: &str = "M116 46 Q138 46 138 62 L116 62 Z";

/// Every shape override, keyed by region id.
pub const REGION_SHAPES: &[(&str, RegionShape)] = &[
    // Front
    ("head-front", ellipse(100.0, 21.5, 15.0, 16.5)),
    ("neck-front", rounded(90.0, 38.0, 20.0, 10.0, 3.0)),
    (
        "right-shoulder-front",
        RegionShape::Path {
            data: SHOULDER_VIEWER_LEFT,
        },
    ),
    (
        "left-shoulder-front",
        RegionShape::Path {
            data: SHOULDER_VIEWER_RIGHT,
        },
    ),
    ("chest", rounded(84.0, 48.0, 32.0, 30.0, 8.0)),
    (
        "pelvis",
        RegionShape::Path {
            data: "M82 118 L118 118 L112 134 L88 134 Z",
        },
    ),
    ("right-hand-front", ellipse(51.0, 146.0, 9.0, 10.0)),
    ("left-hand-front", ellipse(149.0, 146.0, 9.0, 10.0)),
    ("right-knee-front", ellipse(89.5, 187.0, 8.5, 7.0)),
    ("left-knee-front", ellipse(110.5, 187.0, 8.5, 7.0)),
    ("right-foot-front", ellipse(87.5, 230.0, 9.5, 6.0)),
    ("left-foot-front", ellipse(112.5, 230.0, 9.5, 6.0)),
    // Back
    ("head-back", ellipse(100.0, 21.5, 15.0, 16.5)),
    ("neck-back", rounded(90.0, 38.0, 20.0, 10.0, 3.0)),
    (
        "left-shoulder-back",
        RegionShape::Path {
            data: SHOULDER_VIEWER_LEFT,
        },
    ),
    (
        "right-shoulder-back",
        RegionShape::Path {
            data: SHOULDER_VIEWER_RIGHT,
        },
    ),
    ("upper-back", rounded(84.0, 48.0, 32.0, 30.0, 8.0)),
    (
        "buttocks",
        RegionShape::Path {
            data: "M82 118 L118 118 L118 128 C118 140 100 140 100 132 C100 140 82 140 82 128 Z",
        },
    ),
    ("left-hand-back", ellipse(51.0, 146.0, 9.0, 10.0)),
    ("right-hand-back", ellipse(149.0, 146.0, 9.0, 10.0)),
    ("left-knee-back", ellipse(89.5, 187.0, 8.5, 7.0)),
    ("right-knee-back", ellipse(110.5, 187.0, 8.5, 7.0)),
    ("left-heel", ellipse(88.5, 230.0, 8.5, 6.0)),
    ("right-heel", ellipse(111.5, 230.0, 8.5, 6.0)),
];

static SHAPE_INDEX: LazyLock<HashMap<&'static str, &'static RegionShape>> =
    LazyLock::new(|| REGION_SHAPES.iter().map(|(id, s)| (*id, s)).collect());

/// Shape override for `region_id`, or `None` to draw the default
/// rounded rectangle.
#[must_use]
pub fn get_region_shape(region_id: &str) -> Option<&'static RegionShape> {
    SHAPE_INDEX.get(region_id).copied()
}

/// Whether `region_id` has a shape override.
#[must_use]
pub fn has_custom_shape(region_id: &str) -> bool {
    get_region_shape(region_id).is_some()
}

/// Label anchor for `region`: its override's visual centre, or the
/// centre of its box.
#[must_use]
pub fn label_anchor(region: &Region) -> Point {
    get_region_shape(region.id).map_or_else(
        || region.coordinates.center(),
        |shape| shape.label_anchor(&region.coordinates),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::find_region;
    use crate::types::ViewId;

    #[test]
    fn lookup_known_and_unknown() {
        assert!(matches!(
            get_region_shape("head-front"),
            Some(RegionShape::Ellipse { .. })
        ));
        assert!(get_region_shape("upper-abdomen").is_none());
        assert!(get_region_shape("no-such-region").is_none());
    }

    #[test]
    fn has_custom_shape_agrees_with_lookup() {
        for (id, _) in REGION_SHAPES {
            assert!(has_custom_shape(id));
        }
        assert!(!has_custom_shape("lower-back"));
    }

    #[test]
    fn registry_keys_are_unique() {
        assert_eq!(SHAPE_INDEX.len(), REGION_SHAPES.len());
    }

    #[test]
    fn every_path_shape_parses() {
        for (id, shape) in REGION_SHAPES {
            if let RegionShape::Path { data } = shape {
                let polygons = flatten_path(data).unwrap();
                assert!(!polygons.0.is_empty(), "{id} path encloses nothing");
            }
        }
    }

    #[test]
    fn ellipse_contains_centre_but_not_box_corner() {
        let head = get_region_shape("head-front").unwrap();
        assert!(head.contains(Point::new(100.0, 21.5)).unwrap());
        assert!(head.contains(Point::new(115.0, 21.5)).unwrap(), "rim");
        // Top-left corner of the head box lies outside the ellipse.
        assert!(!head.contains(Point::new(86.0, 6.0)).unwrap());
    }

    #[test]
    fn path_contains_uses_polygon() {
        let pelvis = get_region_shape("pelvis").unwrap();
        assert!(pelvis.contains(Point::new(100.0, 126.0)).unwrap());
        // Inside the pelvis box but outside the tapered trapezoid.
        assert!(!pelvis.contains(Point::new(83.0, 133.0)).unwrap());
    }

    #[test]
    fn label_anchor_uses_ellipse_centre() {
        let knee = find_region(ViewId::Front, "right-knee-front").unwrap();
        assert_eq!(label_anchor(knee), Point::new(89.5, 187.0));
    }

    #[test]
    fn label_anchor_falls_back_to_box_centre() {
        let abdomen = find_region(ViewId::Front, "upper-abdomen").unwrap();
        assert_eq!(label_anchor(abdomen), Point::new(100.0, 88.0));
        let pelvis = find_region(ViewId::Front, "pelvis").unwrap();
        assert_eq!(label_anchor(pelvis), Point::new(100.0, 126.0));
    }
}
