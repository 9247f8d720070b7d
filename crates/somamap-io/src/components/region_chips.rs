//! Chips listing the selected regions of the active view.

use dioxus::prelude::*;
use somamap_core::{Region, selected_regions};

/// Props for the [`SelectedRegionChips`] component.
#[derive(Props, Clone, PartialEq)]
pub struct SelectedRegionChipsProps {
    /// Regions currently on screen.
    regions: Vec<&'static Region>,
    /// Caller-owned selection.
    selected: Vec<String>,
    /// Fired with `(region_id, region_name)` when a chip's remove button
    /// is clicked. Without it chips are read-only.
    on_remove: Option<EventHandler<(String, String)>>,
}

/// One chip per selected region, in selection order.
///
/// Selected ids not present in `regions` (other view, filtered out) are
/// skipped. Renders nothing when no chip would be shown.
#[component]
pub fn SelectedRegionChips(props: SelectedRegionChipsProps) -> Element {
    let chips = selected_regions(&props.selected, &props.regions);
    if chips.is_empty() {
        return rsx! {};
    }

    rsx! {
        ul { class: "somamap-chips", aria_label: "Selected regions",
            for region in chips {
                {render_chip(region, props.on_remove)}
            }
        }
    }
}

fn render_chip(
    region: &'static Region,
    on_remove: Option<EventHandler<(String, String)>>,
) -> Element {
    rsx! {
        li { key: "{region.id}", class: "somamap-chip",
            span { class: "somamap-chip__name", "{region.name}" }
            if let Some(on_remove) = on_remove {
                button {
                    class: "somamap-chip__remove",
                    aria_label: "Remove {region.name}",
                    onclick: move |_| on_remove.call((region.id.to_owned(), region.name.to_owned())),
                    "\u{00d7}"
                }
            }
        }
    }
}
