//! Dioxus UI components for somamap.
//!
//! Provides the general and symptom-filtered body selectors, the
//! interactive overlay they are built from, the view toggle, selection
//! chips, silhouette, and the snapshot export panel.

mod body_selector;
mod overlay;
mod region_chips;
mod silhouette;
mod snapshot;
mod stage;
mod symptom_body_selector;
mod view_toggle;

pub use body_selector::BodySelector;
pub use overlay::InteractiveOverlay;
pub use region_chips::SelectedRegionChips;
pub use silhouette::Silhouette;
pub use snapshot::SnapshotPanel;
pub use stage::SelectorStage;
pub use symptom_body_selector::{NOT_APPLICABLE_MESSAGE, SymptomBodySelector};
pub use view_toggle::ViewToggle;
