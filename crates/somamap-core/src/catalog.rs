//! Static region catalogs for the front and back views.
//!
//! Boxes are authored in the 200x240 design space. Anatomical left and
//! right follow the patient: in the front view the patient's right side
//! is on the viewer's left, in the back view it is on the viewer's right.
//!
//! Declaration order matters. It is the hit-test precedence when boxes
//! overlap and the order regions are drawn and listed in.

use crate::types::{BoundingBox, Region, View, ViewId};

const fn region(id: &'static str, name: &'static str, x: f64, y: f64, w: f64, h: f64) -> Region {
    Region {
        id,
        name,
        coordinates: BoundingBox::new(x, y, w, h),
    }
}

/// Front-view regions in declaration order.
pub const FRONT_REGIONS: &[Region] = &[
    region("head-front", "Head", 85.0, 5.0, 30.0, 33.0),
    region("neck-front", "Neck", 90.0, 38.0, 20.0, 10.0),
    region("right-shoulder-front", "Right Shoulder", 62.0, 46.0, 22.0, 16.0),
    region("left-shoulder-front", "Left Shoulder", 116.0, 46.0, 22.0, 16.0),
    region("chest", "Chest", 84.0, 48.0, 32.0, 30.0),
    region("upper-abdomen", "Upper Abdomen", 84.0, 78.0, 32.0, 20.0),
    region("lower-abdomen", "Lower Abdomen", 84.0, 98.0, 32.0, 20.0),
    region("pelvis", "Pelvis", 82.0, 118.0, 36.0, 16.0),
    region("right-upper-arm-front", "Right Upper Arm", 60.0, 62.0, 16.0, 34.0),
    region("left-upper-arm-front", "Left Upper Arm", 124.0, 62.0, 16.0, 34.0),
    region("right-elbow-front", "Right Elbow", 56.0, 96.0, 16.0, 10.0),
    region("left-elbow-front", "Left Elbow", 128.0, 96.0, 16.0, 10.0),
    region("right-forearm-front", "Right Forearm", 50.0, 106.0, 16.0, 30.0),
    region("left-forearm-front", "Left Forearm", 134.0, 106.0, 16.0, 30.0),
    region("right-hand-front", "Right Hand", 42.0, 136.0, 18.0, 20.0),
    region("left-hand-front", "Left Hand", 140.0, 136.0, 18.0, 20.0),
    region("right-thigh-front", "Right Thigh", 80.0, 134.0, 19.0, 46.0),
    region("left-thigh-front", "Left Thigh", 101.0, 134.0, 19.0, 46.0),
    region("right-knee-front", "Right Knee", 81.0, 180.0, 17.0, 14.0),
    region("left-knee-front", "Left Knee", 102.0, 180.0, 17.0, 14.0),
    region("right-shin", "Right Shin", 82.0, 194.0, 15.0, 30.0),
    region("left-shin", "Left Shin", 103.0, 194.0, 15.0, 30.0),
    region("right-foot-front", "Right Foot", 78.0, 224.0, 19.0, 12.0),
    region("left-foot-front", "Left Foot", 103.0, 224.0, 19.0, 12.0),
];

/// Back-view regions in declaration order.
pub const BACK_REGIONS: &[Region] = &[
    region("head-back", "Back of Head", 85.0, 5.0, 30.0, 33.0),
    region("neck-back", "Back of Neck", 90.0, 38.0, 20.0, 10.0),
    region("left-shoulder-back", "Left Shoulder", 62.0, 46.0, 22.0, 16.0),
    region("right-shoulder-back", "Right Shoulder", 116.0, 46.0, 22.0, 16.0),
    region("upper-back", "Upper Back", 84.0, 48.0, 32.0, 30.0),
    region("middle-back", "Middle Back", 84.0, 78.0, 32.0, 20.0),
    region("lower-back", "Lower Back", 84.0, 98.0, 32.0, 20.0),
    region("buttocks", "Buttocks", 82.0, 118.0, 36.0, 20.0),
    region("left-upper-arm-back", "Left Upper Arm", 60.0, 62.0, 16.0, 34.0),
    region("right-upper-arm-back", "Right Upper Arm", 124.0, 62.0, 16.0, 34.0),
    region("left-elbow-back", "Left Elbow", 56.0, 96.0, 16.0, 10.0),
    region("right-elbow-back", "Right Elbow", 128.0, 96.0, 16.0, 10.0),
    region("left-forearm-back", "Left Forearm", 50.0, 106.0, 16.0, 30.0),
    region("right-forearm-back", "Right Forearm", 134.0, 106.0, 16.0, 30.0),
    region("left-hand-back", "Back of Left Hand", 42.0, 136.0, 18.0, 20.0),
    region("right-hand-back", "Back of Right Hand", 140.0, 136.0, 18.0, 20.0),
    region("left-hamstring", "Left Hamstring", 80.0, 138.0, 19.0, 42.0),
    region("right-hamstring", "Right Hamstring", 101.0, 138.0, 19.0, 42.0),
    region("left-knee-back", "Back of Left Knee", 81.0, 180.0, 17.0, 14.0),
    region("right-knee-back", "Back of Right Knee", 102.0, 180.0, 17.0, 14.0),
    region("left-calf", "Left Calf", 82.0, 194.0, 15.0, 30.0),
    region("right-calf", "Right Calf", 103.0, 194.0, 15.0, 30.0),
    region("left-heel", "Left Heel", 80.0, 224.0, 17.0, 12.0),
    region("right-heel", "Right Heel", 103.0, 224.0, 17.0, 12.0),
];

/// The front view.
pub const FRONT_VIEW: View = View {
    id: ViewId::Front,
    name: "Front",
    regions: FRONT_REGIONS,
};

/// The back view.
pub const BACK_VIEW: View = View {
    id: ViewId::Back,
    name: "Back",
    regions: BACK_REGIONS,
};

/// Catalog for `view`.
#[must_use]
pub const fn view(view: ViewId) -> &'static View {
    match view {
        ViewId::Front => &FRONT_VIEW,
        ViewId::Back => &BACK_VIEW,
    }
}

/// Every region of `view`, in declaration order.
#[must_use]
pub fn regions_for_view(view_id: ViewId) -> Vec<&'static Region> {
    view(view_id).regions.iter().collect()
}

/// Look up a region by id within one view.
#[must_use]
pub fn find_region(view_id: ViewId, id: &str) -> Option<&'static Region> {
    view(view_id).regions.iter().find(|r| r.id == id)
}

/// Look up a region by id across both views, front first.
///
/// Ids are unique within a view, and in practice across views too,
/// since back-view ids carry their own suffixes.
#[must_use]
pub fn find_region_any(id: &str) -> Option<(ViewId, &'static Region)> {
    ViewId::ALL
        .into_iter()
        .find_map(|v| find_region(v, id).map(|r| (v, r)))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn catalogs_have_unique_ids() {
        for v in ViewId::ALL {
            let mut seen = HashSet::new();
            for r in view(v).regions {
                assert!(seen.insert(r.id), "duplicate id {} in {v} view", r.id);
            }
        }
    }

    #[test]
    fn ids_do_not_collide_across_views() {
        let front: HashSet<_> = FRONT_REGIONS.iter().map(|r| r.id).collect();
        for r in BACK_REGIONS {
            assert!(!front.contains(r.id), "{} appears in both views", r.id);
        }
    }

    #[test]
    fn every_box_fits_the_design_space() {
        for v in ViewId::ALL {
            for r in view(v).regions {
                assert!(
                    r.coordinates.within_design_space(),
                    "{} in {v} view is out of bounds: {:?}",
                    r.id,
                    r.coordinates
                );
            }
        }
    }

    #[test]
    fn head_front_matches_reference_box() {
        let head = find_region(ViewId::Front, "head-front");
        assert_eq!(
            head.map(|r| (r.name, r.coordinates)),
            Some(("Head", BoundingBox::new(85.0, 5.0, 30.0, 33.0)))
        );
    }

    #[test]
    fn lookup_is_scoped_to_view() {
        assert!(find_region(ViewId::Back, "head-front").is_none());
        assert_eq!(
            find_region_any("lower-back").map(|(v, r)| (v, r.name)),
            Some((ViewId::Back, "Lower Back"))
        );
        assert!(find_region_any("spleen").is_none());
    }

    #[test]
    fn view_ids_match_catalog() {
        for v in ViewId::ALL {
            assert_eq!(view(v).id, v);
            assert!(!view(v).regions.is_empty());
        }
    }
}
