//! Selection report serializer.
//!
//! A [`SelectionReport`] is what downstream collaborators receive once
//! the user is done selecting: the ordered `(id, name, view)` entries
//! plus the view and symptom that were active. Ids are resolved across
//! both views because a selection survives view toggles.

use serde::{Deserialize, Serialize};

use somamap_core::{ViewId, find_region_any};

/// One selected region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    /// Region id.
    pub id: String,
    /// Region display name (untruncated).
    pub name: String,
    /// View the region belongs to.
    pub view: ViewId,
}

/// Ordered record of a finished selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionReport {
    /// View that was showing when the report was taken.
    pub view: ViewId,
    /// Symptom the selector was filtered for, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symptom_id: Option<String>,
    /// Selected regions in selection order.
    pub entries: Vec<ReportEntry>,
}

impl SelectionReport {
    /// Build a report from the caller's selection list.
    ///
    /// Ids that match no region in either view are dropped.
    #[must_use]
    pub fn from_selection(selection: &[String], view: ViewId, symptom_id: Option<&str>) -> Self {
        let entries = selection
            .iter()
            .filter_map(|id| find_region_any(id))
            .map(|(view, region)| ReportEntry {
                id: region.id.to_owned(),
                name: region.name.to_owned(),
                view,
            })
            .collect();
        Self {
            view,
            symptom_id: symptom_id.map(str::to_owned),
            entries,
        }
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(id, name)` pairs in selection order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|e| (e.id.as_str(), e.name.as_str()))
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails, which cannot happen for
    /// this type in practice.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
