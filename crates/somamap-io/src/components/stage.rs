//! Silhouette, overlay, and chips for one view.
//!
//! Shared by [`BodySelector`](super::BodySelector) and
//! [`SymptomBodySelector`](super::SymptomBodySelector), which differ only
//! in how they pick the view and region list.

use dioxus::prelude::*;
use somamap_core::{Region, SelectorConfig, ViewId, toggle_region};

use super::overlay::InteractiveOverlay;
use super::region_chips::SelectedRegionChips;
use super::silhouette::Silhouette;

/// Props for the [`SelectorStage`] component.
#[derive(Props, Clone, PartialEq)]
pub struct SelectorStageProps {
    /// View being shown.
    view: ViewId,
    /// Selectable regions of that view.
    regions: Vec<&'static Region>,
    /// Caller-owned selection.
    selected: Vec<String>,
    /// Fired with `(region_id, region_name)`.
    on_region_select: EventHandler<(String, String)>,
    /// Fired with the selection a click produces.
    on_selection_change: Option<EventHandler<Vec<String>>>,
    /// Selector configuration.
    config: SelectorConfig,
}

/// Layered silhouette and overlay followed by the selection chips.
#[component]
pub fn SelectorStage(props: SelectorStageProps) -> Element {
    let SelectorConfig {
        size,
        multi_select,
        show_labels,
        disabled,
        hit_test,
    } = props.config;

    let on_select = {
        let selected = props.selected.clone();
        let on_region_select = props.on_region_select;
        let on_selection_change = props.on_selection_change;
        move |(id, name): (String, String)| {
            if let Some(on_change) = on_selection_change {
                on_change.call(toggle_region(&selected, &id, multi_select));
            }
            on_region_select.call((id, name));
        }
    };
    let on_select = use_callback(on_select);

    rsx! {
        div { class: "somamap-stage", "data-view": "{props.view}", "data-size": "{size}",
            Silhouette { view: props.view, size }
            InteractiveOverlay {
                regions: props.regions.clone(),
                selected: props.selected.clone(),
                on_region_select: on_select,
                size,
                show_labels,
                disabled,
                hit_test,
            }
        }
        SelectedRegionChips {
            regions: props.regions,
            selected: props.selected,
            on_remove: if disabled { None } else { Some(on_select) },
        }
    }
}
