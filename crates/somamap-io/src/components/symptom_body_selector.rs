//! Symptom-filtered body selector.

use dioxus::prelude::*;
use somamap_core::{SelectorConfig, ViewId, applicable_mapping};

use super::stage::SelectorStage;
use super::view_toggle::ViewToggle;

/// Message shown when a symptom cannot be located on the body.
pub const NOT_APPLICABLE_MESSAGE: &str = "Body location does not apply to this symptom.";

/// Props for the [`SymptomBodySelector`] component.
#[derive(Props, Clone, PartialEq)]
pub struct SymptomBodySelectorProps {
    /// Symptom whose mapping narrows the selectable regions.
    symptom_id: String,
    /// Caller-owned selection (ordered region ids).
    selected: Vec<String>,
    /// Fired with `(region_id, region_name)` on every region click and
    /// every chip removal.
    on_region_select: EventHandler<(String, String)>,
    /// Fired alongside `on_region_select` with the resulting selection.
    on_selection_change: Option<EventHandler<Vec<String>>>,
    /// Fired whenever the view on screen changes, whether picked by the
    /// user or forced by a symptom change.
    on_view_change: Option<EventHandler<ViewId>>,
    /// Size, toggle semantics, labels, interactivity, hit testing.
    config: SelectorConfig,
}

/// Body diagram restricted to the regions relevant for one symptom.
///
/// Starts on the symptom's first supported view. When the symptom
/// changes, the current view is kept if the new symptom supports it.
/// The view toggle is shown only for symptoms with more than one view.
/// Unknown symptoms and symptoms with no supported view render a static
/// message instead of the diagram.
#[component]
pub fn SymptomBodySelector(props: SymptomBodySelectorProps) -> Element {
    // View currently on screen, kept so a symptom change can stay on it.
    let mut shown_view = use_signal(|| Option::<ViewId>::None);

    let mapping = applicable_mapping(&props.symptom_id);
    let resolved = mapping.and_then(|m| m.resolve_view(shown_view()));

    let on_view_change = props.on_view_change;
    use_effect(use_reactive((&resolved,), move |(resolved,)| {
        if let Some(view) = resolved
            && *shown_view.peek() != resolved
        {
            shown_view.set(resolved);
            if let Some(on_view_change) = on_view_change {
                on_view_change.call(view);
            }
        }
    }));

    let (Some(mapping), Some(active)) = (mapping, resolved) else {
        return render_not_applicable(&props.symptom_id);
    };
    let regions = mapping.regions(active);
    let show_toggle = mapping.supported_views.len() > 1;

    rsx! {
        div { class: "somamap-selector", "data-symptom": "{mapping.symptom_id}",
            header { class: "somamap-selector__header",
                h3 { class: "somamap-selector__title", "{mapping.display_name}" }
                if !mapping.instructions.is_empty() {
                    p { class: "somamap-selector__instructions", "{mapping.instructions}" }
                }
            }
            if show_toggle {
                ViewToggle {
                    view: active,
                    views: mapping.supported_views.to_vec(),
                    on_change: move |v| {
                        shown_view.set(Some(v));
                        if let Some(on_view_change) = on_view_change {
                            on_view_change.call(v);
                        }
                    },
                }
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

fn render_not_applicable(symptom_id: &str) -> Element {
    rsx! {
        div { class: "somamap-selector somamap-selector--not-applicable", "data-symptom": "{symptom_id}",
            p { "{NOT_APPLICABLE_MESSAGE}" }
        }
    }
}
