//! Static body outline drawn underneath the overlay.

use dioxus::prelude::*;
use somamap_core::{SizeKey, ViewBox, ViewId, silhouette_detail_path, silhouette_path};

/// Props for the [`Silhouette`] component.
#[derive(Props, Clone, PartialEq)]
pub struct SilhouetteProps {
    /// Which outline to draw.
    view: ViewId,
    /// Rendered size; must match the overlay's so shapes line up.
    size: SizeKey,
}

/// Body outline in the same scaled view box as the overlay.
#[component]
pub fn Silhouette(props: SilhouetteProps) -> Element {
    let view_box = ViewBox::for_size(props.size).to_string();
    let scale = props.size.multiplier();

    rsx! {
        svg {
            class: "somamap-silhouette",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "{view_box}",
            "preserveAspectRatio": "xMidYMid meet",
            "aria-hidden": "true",

            g { transform: "scale({scale})",
                path {
                    class: "somamap-silhouette__body",
                    d: silhouette_path(props.view),
                }
                path {
                    class: "somamap-silhouette__detail",
                    d: silhouette_detail_path(props.view),
                    fill: "none",
                }
            }
        }
    }
}
