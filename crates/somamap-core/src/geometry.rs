//! Coordinate utilities: size scaling, point-in-box tests, linear region
//! lookup, and the client-to-design-space transform.
//!
//! Every region box is authored in the fixed 200x240 design space. The
//! renderer may scale shapes by a [`SizeKey`] multiplier and the browser
//! may stretch the `<svg>` to any on-screen size, so a pointer position
//! goes through two inverse transforms before hit testing:
//!
//! 1. client pixels -> view-box units ([`to_design_space_coordinates`])
//! 2. view-box units -> unscaled design space ([`unscale_point`])

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::{BodyMapError, BoundingBox, DESIGN_HEIGHT, DESIGN_WIDTH, Point, Region, SizeKey};

/// Scale a design-space box by the multiplier for `size`.
///
/// Pure and total: an unrecognised key has already been mapped to
/// [`SizeKey::Medium`] by [`SizeKey::from_key_lenient`].
#[must_use]
pub fn scale_coordinates(coordinates: &BoundingBox, size: SizeKey) -> BoundingBox {
    coordinates.scaled(size.multiplier())
}

/// Map a point from scaled render space back into unscaled design space.
#[must_use]
pub fn unscale_point(point: Point, size: SizeKey) -> Point {
    let m = size.multiplier();
    Point::new(point.x / m, point.y / m)
}

/// Inclusive point-in-box test.
#[must_use]
pub fn is_point_in_region(point: Point, coordinates: &BoundingBox) -> bool {
    coordinates.contains(point)
}

/// First region, in declaration order, whose unscaled box contains `point`.
///
/// `point` must already be in unscaled design space. Overlaps are
/// resolved purely by declaration order.
#[must_use]
pub fn find_region_at_point<'a>(point: Point, regions: &[&'a Region]) -> Option<&'a Region> {
    regions
        .iter()
        .copied()
        .find(|region| is_point_in_region(point, &region.coordinates))
}

/// The `viewBox` of an SVG element: `min-x min-y width height`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewBox {
    /// Left edge in user units.
    pub min_x: f64,
    /// Top edge in user units.
    pub min_y: f64,
    /// Width in user units (always positive).
    pub width: f64,
    /// Height in user units (always positive).
    pub height: f64,
}

impl ViewBox {
    /// The unscaled 200x240 design space.
    pub const DESIGN: Self = Self {
        min_x: 0.0,
        min_y: 0.0,
        width: DESIGN_WIDTH,
        height: DESIGN_HEIGHT,
    };

    /// The design space scaled by the multiplier for `size`.
    #[must_use]
    pub fn for_size(size: SizeKey) -> Self {
        let m = size.multiplier();
        Self {
            min_x: 0.0,
            min_y: 0.0,
            width: DESIGN_WIDTH * m,
            height: DESIGN_HEIGHT * m,
        }
    }
}

impl Default for ViewBox {
    fn default() -> Self {
        Self::DESIGN
    }
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.min_x, self.min_y, self.width, self.height
        )
    }
}

impl FromStr for ViewBox {
    type Err = BodyMapError;

    /// Parse a `viewBox` attribute value.
    ///
    /// Accepts whitespace and/or comma separators, as browsers do.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || BodyMapError::InvalidViewBox(s.to_owned());

        let values = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|part| !part.is_empty())
            .map(str::parse::<f64>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| invalid())?;

        let [min_x, min_y, width, height] = values.as_slice() else {
            return Err(invalid());
        };
        if !values.iter().all(|v| v.is_finite()) || *width <= 0.0 || *height <= 0.0 {
            return Err(invalid());
        }

        Ok(Self {
            min_x: *min_x,
            min_y: *min_y,
            width: *width,
            height: *height,
        })
    }
}

/// On-screen rectangle of a rendered element, in client (viewport) pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClientRect {
    /// Left edge relative to the viewport.
    pub left: f64,
    /// Top edge relative to the viewport.
    pub top: f64,
    /// Rendered width.
    pub width: f64,
    /// Rendered height.
    pub height: f64,
}

/// Map a pointer position from viewport pixels into `view_box` units.
///
/// `scale = view_box extent / rendered extent` on each axis, then the
/// offset from the element's top-left corner is scaled and shifted by
/// the view box origin. Returns `None` when the element has no rendered
/// area (not laid out yet), since no scale can be derived.
///
/// Callers must re-measure `rect` on every event: the rendered size
/// changes with viewport and orientation.
#[must_use]
pub fn to_design_space_coordinates(
    client: Point,
    rect: &ClientRect,
    view_box: &ViewBox,
) -> Option<Point> {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return None;
    }
    let scale_x = view_box.width / rect.width;
    let scale_y = view_box.height / rect.height;
    Some(Point::new(
        (client.x - rect.left).mul_add(scale_x, view_box.min_x),
        (client.y - rect.top).mul_add(scale_y, view_box.min_y),
    ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::regions_for_view;
    use crate::types::ViewId;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    // --- scale_coordinates ---

    #[test]
    fn scale_multiplies_every_component() {
        let b = BoundingBox::new(85.0, 5.0, 30.0, 33.0);
        for size in SizeKey::ALL {
            let m = size.multiplier();
            let scaled = scale_coordinates(&b, size);
            assert!(approx_eq(scaled.x, b.x * m));
            assert!(approx_eq(scaled.y, b.y * m));
            assert!(approx_eq(scaled.width, b.width * m));
            assert!(approx_eq(scaled.height, b.height * m));
        }
    }

    #[test]
    fn scale_with_unknown_key_is_identity() {
        let b = BoundingBox::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(scale_coordinates(&b, SizeKey::from_key_lenient("xl")), b);
    }

    #[test]
    fn unscale_inverts_scale() {
        let p = Point::new(140.0, 28.0);
        let back = unscale_point(p, SizeKey::Large);
        assert!(approx_eq(back.x, 100.0));
        assert!(approx_eq(back.y, 20.0));
    }

    // --- find_region_at_point ---

    #[test]
    fn head_front_found_at_design_point() {
        let regions = regions_for_view(ViewId::Front);
        let hit = find_region_at_point(Point::new(100.0, 20.0), &regions).unwrap();
        assert_eq!(hit.id, "head-front");
        assert_eq!(hit.name, "Head");
    }

    #[test]
    fn miss_returns_none() {
        let regions = regions_for_view(ViewId::Front);
        assert!(find_region_at_point(Point::new(2.0, 2.0), &regions).is_none());
    }

    #[test]
    fn overlapping_regions_first_declared_wins() {
        let a = Region {
            id: "a",
            name: "A",
            coordinates: BoundingBox::new(0.0, 0.0, 50.0, 50.0),
        };
        let b = Region {
            id: "b",
            name: "B",
            coordinates: BoundingBox::new(25.0, 25.0, 50.0, 50.0),
        };
        let p = Point::new(30.0, 30.0);
        assert_eq!(find_region_at_point(p, &[&a, &b]).unwrap().id, "a");
        assert_eq!(find_region_at_point(p, &[&b, &a]).unwrap().id, "b");
    }

    // --- ViewBox ---

    #[test]
    fn view_box_parses_whitespace_and_commas() {
        let vb: ViewBox = "0 0 200 240".parse().unwrap();
        assert_eq!(vb, ViewBox::DESIGN);
        let vb: ViewBox = " 10,20, 280  336 ".parse().unwrap();
        assert!(approx_eq(vb.min_x, 10.0));
        assert!(approx_eq(vb.min_y, 20.0));
        assert!(approx_eq(vb.width, 280.0));
        assert!(approx_eq(vb.height, 336.0));
    }

    #[test]
    fn view_box_rejects_malformed_input() {
        for bad in ["", "0 0 200", "0 0 200 240 5", "a b c d", "0 0 0 240", "0 0 200 -1"] {
            assert!(
                matches!(bad.parse::<ViewBox>(), Err(BodyMapError::InvalidViewBox(_))),
                "expected error for {bad:?}"
            );
        }
    }

    #[test]
    fn view_box_display_round_trips() {
        let vb = ViewBox::for_size(SizeKey::Small);
        let parsed: ViewBox = vb.to_string().parse().unwrap();
        assert_eq!(parsed, vb);
    }

    // --- to_design_space_coordinates ---

    #[test]
    fn client_to_design_space_with_stretched_element() {
        // 200x240 view box rendered at 400x480, offset by (10, 50).
        let rect = ClientRect {
            left: 10.0,
            top: 50.0,
            width: 400.0,
            height: 480.0,
        };
        let p = to_design_space_coordinates(Point::new(210.0, 90.0), &rect, &ViewBox::DESIGN)
            .unwrap();
        assert!(approx_eq(p.x, 100.0));
        assert!(approx_eq(p.y, 20.0));
    }

    #[test]
    fn client_to_design_space_honours_view_box_origin() {
        let rect = ClientRect {
            left: 0.0,
            top: 0.0,
            width: 100.0,
            height: 100.0,
        };
        let vb = ViewBox {
            min_x: 50.0,
            min_y: -10.0,
            width: 100.0,
            height: 100.0,
        };
        let p = to_design_space_coordinates(Point::new(0.0, 0.0), &rect, &vb).unwrap();
        assert!(approx_eq(p.x, 50.0));
        assert!(approx_eq(p.y, -10.0));
    }

    #[test]
    fn client_to_design_space_without_layout_is_none() {
        let rect = ClientRect {
            left: 0.0,
            top: 0.0,
            width: 0.0,
            height: 240.0,
        };
        assert!(
            to_design_space_coordinates(Point::new(5.0, 5.0), &rect, &ViewBox::DESIGN).is_none()
        );
    }
}
