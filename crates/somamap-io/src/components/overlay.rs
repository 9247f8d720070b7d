//! Interactive overlay: clickable region shapes over the silhouette.

use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::prelude::*;
use somamap_core::{
    HitTestMode, OverlayLabel, OverlayShape, Point, Region, ShapeGeometry, SizeKey, build_overlay,
    resolve_click,
};
use somamap_export::svg::region_class;

use crate::{console, dom};

static NEXT_OVERLAY_ID: AtomicUsize = AtomicUsize::new(0);

/// Props for the [`InteractiveOverlay`] component.
#[derive(Props, Clone, PartialEq)]
pub struct InteractiveOverlayProps {
    /// Regions to draw and hit test, in declaration order.
    regions: Vec<&'static Region>,
    /// Caller-owned selection (ordered region ids).
    selected: Vec<String>,
    /// Fired with `(region_id, region_name)` when a click lands on a region.
    on_region_select: EventHandler<(String, String)>,
    /// Rendered size.
    size: SizeKey,
    /// Draw labels next to selected regions.
    show_labels: bool,
    /// Let pointer events pass through to whatever is underneath.
    disabled: bool,
    /// Click matching strategy.
    hit_test: HitTestMode,
}

/// One clickable shape per region, plus labels for selected regions.
///
/// Clicks are mapped from client pixels into the element's live
/// `viewBox`, unscaled, and hit tested against the unscaled region boxes.
/// Misses are ignored. When disabled the `<svg>` sets
/// `pointer-events: none` so it never receives the click at all.
#[component]
pub fn InteractiveOverlay(props: InteractiveOverlayProps) -> Element {
    let element_id = use_hook(|| {
        format!(
            "somamap-overlay-{}",
            NEXT_OVERLAY_ID.fetch_add(1, Ordering::Relaxed)
        )
    });

    let model = build_overlay(&props.regions, &props.selected, props.size, props.show_labels);
    let view_box = model.view_box.to_string();

    let onclick = {
        let element_id = element_id.clone();
        let regions = props.regions.clone();
        let size = props.size;
        let mode = props.hit_test;
        let on_region_select = props.on_region_select;
        move |evt: Event<MouseData>| {
            let client = evt.client_coordinates();
            let (rect, view_box) = match dom::measure_svg(&element_id) {
                Ok(measured) => measured,
                Err(e) => {
                    console::warn(&format!("overlay click ignored: {e}"));
                    return;
                }
            };
            let point = Point::new(client.x, client.y);
            if let Some(region) = resolve_click(point, &rect, &view_box, size, &regions, mode) {
                console::debug(&format!("region clicked: {}", region.id));
                on_region_select.call((region.id.to_owned(), region.name.to_owned()));
            }
        }
    };

    rsx! {
        svg {
            id: "{element_id}",
            class: "somamap-overlay",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "{view_box}",
            "preserveAspectRatio": "xMidYMid meet",
            style: if props.disabled { "pointer-events: none" } else { "" },
            "aria-disabled": "{props.disabled}",
            onclick: onclick,

            for shape in model.shapes.iter() {
                {render_shape(shape)}
            }
            for label in model.labels.iter() {
                {render_label(label)}
            }
        }
    }
}

/// Render one region shape with its selection styling.
fn render_shape(shape: &OverlayShape) -> Element {
    let class = region_class(shape.selected);
    let id = shape.region_id;
    let name = shape.region_name;

    match shape.geometry {
        ShapeGeometry::Rect {
            x,
            y,
            width,
            height,
            corner_radius,
        } => rsx! {
            rect {
                key: "{id}",
                class: "{class}",
                "data-region-id": "{id}",
                "aria-label": "{name}",
                x: "{x}",
                y: "{y}",
                width: "{width}",
                height: "{height}",
                rx: "{corner_radius}",
            }
        },
        ShapeGeometry::Ellipse {
            center_x,
            center_y,
            radius_x,
            radius_y,
        } => rsx! {
            ellipse {
                key: "{id}",
                class: "{class}",
                "data-region-id": "{id}",
                "aria-label": "{name}",
                cx: "{center_x}",
                cy: "{center_y}",
                rx: "{radius_x}",
                ry: "{radius_y}",
            }
        },
        ShapeGeometry::Path { data, scale } => rsx! {
            path {
                key: "{id}",
                class: "{class}",
                "data-region-id": "{id}",
                "aria-label": "{name}",
                d: "{data}",
                transform: "scale({scale})",
            }
        },
    }
}

/// Render a selection label centred on its anchor.
fn render_label(label: &OverlayLabel) -> Element {
    let x = label.anchor.x;
    let y = label.anchor.y;
    let id = label.region_id;
    let text = label.text.as_str();
    rsx! {
        text {
            key: "label-{id}",
            class: "somamap-label",
            x: "{x}",
            y: "{y}",
            "text-anchor": "middle",
            "dominant-baseline": "middle",
            "{text}"
        }
    }
}
