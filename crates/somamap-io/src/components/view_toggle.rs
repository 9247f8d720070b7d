//! Front/back view switch.

use dioxus::prelude::*;
use somamap_core::ViewId;

/// Props for the [`ViewToggle`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ViewToggleProps {
    /// Currently shown view.
    view: ViewId,
    /// Views the user may switch between, in display order.
    views: Vec<ViewId>,
    /// Fired with the newly chosen view.
    on_change: EventHandler<ViewId>,
}

/// Segmented control with one button per view.
///
/// Clicking the active view does nothing.
#[component]
pub fn ViewToggle(props: ViewToggleProps) -> Element {
    rsx! {
        div { class: "somamap-view-toggle", role: "group", aria_label: "Body view",
            for view in props.views.iter().copied() {
                {render_button(view, props.view == view, &props.on_change)}
            }
        }
    }
}

fn render_button(view: ViewId, is_active: bool, on_change: &EventHandler<ViewId>) -> Element {
    let onclick = {
        let on_change = *on_change;
        move |_| {
            if !is_active {
                on_change.call(view);
            }
        }
    };

    rsx! {
        button {
            key: "{view}",
            class: if is_active { "somamap-view-toggle__button is-active" } else { "somamap-view-toggle__button" },
            onclick: onclick,
            "aria-pressed": "{is_active}",
            "{view.label()}"
        }
    }
}
