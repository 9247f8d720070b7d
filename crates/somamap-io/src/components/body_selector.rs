//! General body selector: every region of the active view.

use dioxus::prelude::*;
use somamap_core::{SelectorConfig, ViewId, regions_for_view};

use super::stage::SelectorStage;
use super::view_toggle::ViewToggle;

/// Props for the [`BodySelector`] component.
#[derive(Props, Clone, PartialEq)]
pub struct BodySelectorProps {
    /// Caller-owned selection (ordered region ids).
    selected: Vec<String>,
    /// Fired with `(region_id, region_name)` on every region click and
    /// every chip removal.
    on_region_select: EventHandler<(String, String)>,
    /// Fired alongside `on_region_select` with the selection the click
    /// produces under the configured toggle semantics.
    on_selection_change: Option<EventHandler<Vec<String>>>,
    /// Fired when the user switches views.
    on_view_change: Option<EventHandler<ViewId>>,
    /// Size, toggle semantics, labels, interactivity, hit testing.
    config: SelectorConfig,
}

/// Front/back body diagram with region selection.
///
/// Starts on the front view. Switching views keeps the selection; ids
/// from the hidden view stay selected but are neither drawn nor listed.
#[component]
pub fn BodySelector(props: BodySelectorProps) -> Element {
    let mut view = use_signal(|| ViewId::Front);
    let active = view();
    let regions = regions_for_view(active);
    let on_view_change = props.on_view_change;

    rsx! {
        div { class: "somamap-selector",
            ViewToggle {
                view: active,
                views: ViewId::ALL.to_vec(),
                on_change: move |v| {
                    view.set(v);
                    if let Some(on_view_change) = on_view_change {
                        on_view_change.call(v);
                    }
                },
            }
            SelectorStage {
                view: active,
                regions: regions,
                selected: props.selected,
                on_region_select: props.on_region_select,
                on_selection_change: props.on_selection_change,
                config: props.config,
            }
        }
    }
}
