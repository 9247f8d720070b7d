//! Symptom-to-region mapping table.
//!
//! Each symptom narrows the selectable regions per view. A view that is
//! supported but has no filter exposes its whole catalog; a view that is
//! not supported exposes nothing. Filter ids that are missing from the
//! catalog are skipped silently here and reported by
//! [`validate_tables`](crate::validate::validate_tables).

use serde::Serialize;

use crate::catalog;
use crate::types::{Region, ViewId};

/// Which regions are relevant for one symptom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SymptomMapping {
    /// Unique symptom identifier.
    pub symptom_id: &'static str,
    /// Heading shown above the selector.
    pub display_name: &'static str,
    /// Prompt shown to the user.
    pub instructions: &'static str,
    /// Views the symptom can be located on, in preference order.
    pub supported_views: &'static [ViewId],
    /// Front-view region ids; `None` exposes every front region.
    pub front_regions: Option<&'static [&'static str]>,
    /// Back-view region ids; `None` exposes every back region.
    pub back_regions: Option<&'static [&'static str]>,
}

impl SymptomMapping {
    /// Whether `view` is one of the supported views.
    #[must_use]
    pub fn supports(&self, view: ViewId) -> bool {
        self.supported_views.contains(&view)
    }

    /// Region filter for `view`, if one is configured.
    #[must_use]
    pub const fn filter(&self, view: ViewId) -> Option<&'static [&'static str]> {
        match view {
            ViewId::Front => self.front_regions,
            ViewId::Back => self.back_regions,
        }
    }

    /// View the selector should show.
    ///
    /// Keeps `current` while it is still supported, otherwise picks the
    /// first supported view. `None` when no view is supported.
    #[must_use]
    pub fn resolve_view(&self, current: Option<ViewId>) -> Option<ViewId> {
        current
            .filter(|v| self.supports(*v))
            .or_else(|| self.supported_views.first().copied())
    }

    /// Regions selectable for this symptom on `view`, in catalog order.
    #[must_use]
    pub fn regions(&self, view: ViewId) -> Vec<&'static Region> {
        if !self.supports(view) {
            return Vec::new();
        }
        let all = catalog::view(view).regions.iter();
        match self.filter(view) {
            Some(ids) => all.filter(|r| ids.contains(&r.id)).collect(),
            None => all.collect(),
        }
    }
}

const BOTH: &[ViewId] = &[ViewId::Front, ViewId::Back];

/// Every symptom mapping.
pub const SYMPTOM_MAPPINGS: &[SymptomMapping] = &[
    SymptomMapping {
        symptom_id: "headache",
        display_name: "Headache",
        instructions: "Tap where your head hurts",
        supported_views: BOTH,
        front_regions: Some(&["head-front"]),
        back_regions: Some(&["head-back", "neck-back"]),
    },
    SymptomMapping {
        symptom_id: "chest-pain",
        display_name: "Chest Pain",
        instructions: "Tap where you feel the pain",
        supported_views: &[ViewId::Front],
        front_regions: Some(&[
            "chest",
            "right-shoulder-front",
            "left-shoulder-front",
            "upper-abdomen",
        ]),
        back_regions: None,
    },
    SymptomMapping {
        symptom_id: "abdominal-pain",
        display_name: "Abdominal Pain",
        instructions: "Tap the area of your abdomen that hurts",
        supported_views: &[ViewId::Front],
        front_regions: Some(&["upper-abdomen", "lower-abdomen", "pelvis"]),
        back_regions: None,
    },
    SymptomMapping {
        symptom_id: "back-pain",
        display_name: "Back Pain",
        instructions: "Tap where your back hurts",
        supported_views: &[ViewId::Back],
        front_regions: None,
        back_regions: Some(&[
            "neck-back",
            "upper-back",
            "middle-back",
            "lower-back",
            "buttocks",
        ]),
    },
    SymptomMapping {
        symptom_id: "joint-pain",
        display_name: "Joint Pain",
        instructions: "Tap each joint that hurts",
        supported_views: BOTH,
        front_regions: Some(&[
            "right-shoulder-front",
            "left-shoulder-front",
            "right-elbow-front",
            "left-elbow-front",
            "right-hand-front",
            "left-hand-front",
            "right-knee-front",
            "left-knee-front",
        ]),
        back_regions: Some(&[
            "left-shoulder-back",
            "right-shoulder-back",
            "left-elbow-back",
            "right-elbow-back",
            "left-knee-back",
            "right-knee-back",
        ]),
    },
    SymptomMapping {
        symptom_id: "muscle-ache",
        display_name: "Muscle Ache",
        instructions: "Tap the muscles that ache",
        supported_views: BOTH,
        front_regions: Some(&[
            "right-upper-arm-front",
            "left-upper-arm-front",
            "right-forearm-front",
            "left-forearm-front",
            "right-thigh-front",
            "left-thigh-front",
            "right-shin",
            "left-shin",
        ]),
        back_regions: Some(&[
            "upper-back",
            "lower-back",
            "left-hamstring",
            "right-hamstring",
            "left-calf",
            "right-calf",
        ]),
    },
    SymptomMapping {
        symptom_id: "rash",
        display_name: "Skin Rash",
        instructions: "Tap every area where the rash appears",
        supported_views: BOTH,
        front_regions: None,
        back_regions: None,
    },
    SymptomMapping {
        symptom_id: "numbness",
        display_name: "Numbness or Tingling",
        instructions: "Tap where you feel numbness or tingling",
        supported_views: &[ViewId::Front],
        front_regions: Some(&[
            "right-hand-front",
            "left-hand-front",
            "right-forearm-front",
            "left-forearm-front",
            "right-foot-front",
            "left-foot-front",
        ]),
        back_regions: None,
    },
    SymptomMapping {
        symptom_id: "swelling",
        display_name: "Swelling",
        instructions: "Tap where you notice swelling",
        supported_views: BOTH,
        front_regions: Some(&[
            "right-hand-front",
            "left-hand-front",
            "right-knee-front",
            "left-knee-front",
            "right-foot-front",
            "left-foot-front",
        ]),
        back_regions: Some(&["left-heel", "right-heel", "left-calf", "right-calf"]),
    },
    SymptomMapping {
        symptom_id: "nausea",
        display_name: "Nausea",
        instructions: "",
        supported_views: &[],
        front_regions: None,
        back_regions: None,
    },
];

/// Mapping for `symptom_id`, whether or not it supports any view.
#[must_use]
pub fn symptom_mapping(symptom_id: &str) -> Option<&'static SymptomMapping> {
    SYMPTOM_MAPPINGS.iter().find(|m| m.symptom_id == symptom_id)
}

/// Mapping for `symptom_id` if it can be located on at least one view.
///
/// `None` means the selector should show its "not applicable" message.
#[must_use]
pub fn applicable_mapping(symptom_id: &str) -> Option<&'static SymptomMapping> {
    symptom_mapping(symptom_id).filter(|m| !m.supported_views.is_empty())
}

/// Regions selectable for `symptom_id` on `view`, in catalog order.
///
/// Unknown symptoms and unsupported views yield an empty list.
#[must_use]
pub fn get_filtered_regions_for_symptom(symptom_id: &str, view: ViewId) -> Vec<&'static Region> {
    symptom_mapping(symptom_id).map_or_else(Vec::new, |m| m.regions(view))
}
