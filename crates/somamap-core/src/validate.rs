//! Consistency checks over the static tables.
//!
//! At run time every lookup is total and a bad table entry degrades
//! silently (a dangling symptom filter id simply matches nothing). These
//! checks make such mistakes visible to tests and to the inspect CLI.

use std::collections::HashSet;

use crate::catalog;
use crate::path::flatten_path;
use crate::shapes::{REGION_SHAPES, RegionShape};
use crate::symptom::{SYMPTOM_MAPPINGS, SymptomMapping};
use crate::types::{BodyMapError, View, ViewId};

/// Validate the built-in catalogs, shape registry, and symptom table.
///
/// Returns every problem found; an empty list means the tables are
/// consistent.
#[must_use]
pub fn validate_tables() -> Vec<BodyMapError> {
    validate(
        &[&catalog::FRONT_VIEW, &catalog::BACK_VIEW],
        REGION_SHAPES,
        SYMPTOM_MAPPINGS,
    )
}

/// Validate arbitrary tables.
#[must_use]
pub fn validate(
    views: &[&View],
    shapes: &[(&str, RegionShape)],
    symptoms: &[SymptomMapping],
) -> Vec<BodyMapError> {
    let mut errors = Vec::new();

    for view in views {
        let mut seen = HashSet::new();
        for region in view.regions {
            if !seen.insert(region.id) {
                errors.push(BodyMapError::DuplicateRegionId {
                    view: view.id,
                    id: region.id.to_owned(),
                });
            }
            if !region.coordinates.within_design_space() {
                errors.push(BodyMapError::RegionOutOfBounds {
                    view: view.id,
                    id: region.id.to_owned(),
                });
            }
        }
    }

    let in_view = |view_id: ViewId, id: &str| {
        views
            .iter()
            .filter(|v| v.id == view_id)
            .any(|v| v.regions.iter().any(|r| r.id == id))
    };

    for (id, shape) in shapes {
        if !ViewId::ALL.into_iter().any(|v| in_view(v, *id)) {
            errors.push(BodyMapError::OrphanShape((*id).to_owned()));
        }
        if let RegionShape::Path { data } = shape
            && let Err(message) = flatten_path(data)
        {
            errors.push(BodyMapError::InvalidPathData {
                region: (*id).to_owned(),
                message,
            });
        }
    }

    for mapping in symptoms {
        for view_id in ViewId::ALL {
            let Some(filter) = mapping.filter(view_id) else {
                continue;
            };
            if !mapping.supports(view_id) {
                errors.push(BodyMapError::UnsupportedViewFilter {
                    symptom: mapping.symptom_id.to_owned(),
                    view: view_id,
                });
            }
            for region in filter {
                if !in_view(view_id, *region) {
                    errors.push(BodyMapError::DanglingSymptomRegion {
                        symptom: mapping.symptom_id.to_owned(),
                        view: view_id,
                        region: (*region).to_owned(),
                    });
                }
            }
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BoundingBox, Region};

    const BAD_REGIONS: &[Region] = &[
        Region {
            id: "a",
            name: "A",
            coordinates: BoundingBox::new(0.0, 0.0, 10.0, 10.0),
        },
        Region {
            id: "a",
            name: "A again",
            coordinates: BoundingBox::new(195.0, 0.0, 10.0, 10.0),
        },
    ];

    const BAD_VIEW: View = View {
        id: ViewId::Front,
        name: "Front",
        regions: BAD_REGIONS,
    };

    #[test]
    fn built_in_tables_are_consistent() {
        assert_eq!(validate_tables(), Vec::new());
    }

    #[test]
    fn reports_duplicates_and_out_of_bounds() {
        let errors = validate(&[&BAD_VIEW], &[], &[]);
        assert_eq!(
            errors,
            vec![
                BodyMapError::DuplicateRegionId {
                    view: ViewId::Front,
                    id: "a".to_string(),
                },
                BodyMapError::RegionOutOfBounds {
                    view: ViewId::Front,
                    id: "a".to_string(),
                },
            ]
        );
    }

    #[test]
    fn reports_orphan_and_unparsable_shapes() {
        let shapes = [("zz", RegionShape::Path { data: "M0 0 L nope" })];
        let errors = validate(&[&catalog::FRONT_VIEW], &shapes, &[]);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0], BodyMapError::OrphanShape("zz".to_string()));
        assert!(matches!(
            &errors[1],
            BodyMapError::InvalidPathData { region, .. } if region == "zz"
        ));
    }

    #[test]
    fn reports_dangling_and_unsupported_filters() {
        let symptoms = [SymptomMapping {
            symptom_id: "odd",
            display_name: "Odd",
            instructions: "",
            supported_views: &[ViewId::Front],
            front_regions: Some(&["chest", "spleen"]),
            back_regions: Some(&["upper-back"]),
        }];
        let errors = validate(
            &[&catalog::FRONT_VIEW, &catalog::BACK_VIEW],
            &[],
            &symptoms,
        );
        assert_eq!(
            errors,
            vec![
                BodyMapError::DanglingSymptomRegion {
                    symptom: "odd".to_string(),
                    view: ViewId::Front,
                    region: "spleen".to_string(),
                },
                BodyMapError::UnsupportedViewFilter {
                    symptom: "odd".to_string(),
                    view: ViewId::Back,
                },
            ]
        );
    }

    #[test]
    fn filter_id_from_the_other_view_is_dangling() {
        let symptoms = [SymptomMapping {
            symptom_id: "crossed",
            display_name: "Crossed",
            instructions: "",
            supported_views: &[ViewId::Front],
            front_regions: Some(&["head-back"]),
            back_regions: None,
        }];
        let errors = validate(
            &[&catalog::FRONT_VIEW, &catalog::BACK_VIEW],
            &[],
            &symptoms,
        );
        assert_eq!(errors.len(), 1);
    }
}
