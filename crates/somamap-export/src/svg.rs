//! SVG snapshot serializer.
//!
//! Converts an [`OverlayModel`] into a standalone SVG document using the
//! [`svg`] crate for document construction and XML escaping. The output
//! matches what the interactive overlay draws: silhouette, one element
//! per region (selected regions highlighted), and selection labels.
//!
//! Optional [`SnapshotMetadata`] embeds `<title>` and `<desc>` elements
//! and a machine-readable copy of the selection report.
//!
//! This is a pure function with no I/O -- it returns a `String`.

use svg::Document;
use svg::node::element::{Description, Element, Group, Path, Title};
use svg::node::{Node, Text};

use somamap_core::{OverlayModel, OverlayShape, ShapeGeometry, ViewId};

/// XML namespace for the embedded selection report.
pub const SOMAMAP_NAMESPACE: &str = "https://somamap.app/ns/1";

/// Fill of the body outline.
pub const SILHOUETTE_FILL: &str = "#ece6dd";
/// Stroke of the body outline and its detail lines.
pub const SILHOUETTE_STROKE: &str = "#b3a794";
/// Fill of an unselected region.
pub const REGION_FILL: &str = "#4a90d9";
/// Fill of a selected region.
pub const SELECTED_FILL: &str = "#e4572e";
/// Label text colour.
pub const LABEL_FILL: &str = "#1f2933";

const REGION_OPACITY: f64 = 0.15;
const SELECTED_OPACITY: f64 = 0.6;
/// Label font size in unscaled units.
const LABEL_FONT_SIZE: f64 = 7.0;

/// Metadata to embed in the snapshot.
///
/// All fields are optional. Text values are XML-escaped by the `svg`
/// crate.
#[derive(Debug, Clone, Default)]
pub struct SnapshotMetadata<'a> {
    /// Document title, emitted as `<title>`.
    pub title: Option<&'a str>,

    /// Document description, emitted as `<desc>`.
    ///
    /// Typically the symptom and a timestamp.
    pub description: Option<&'a str>,

    /// Selection report JSON, emitted inside `<metadata>` wrapped in a
    /// namespaced `<somamap:selection>` element.
    pub report_json: Option<&'a str>,
}

/// CSS class list for a region element.
#[must_use]
pub fn region_class(selected: bool) -> &'static str {
    if selected {
        "region region--selected"
    } else {
        "region"
    }
}

/// Serialize `model` as a standalone SVG document.
///
/// The document's `viewBox` is the model's (scaled) view box and its
/// `width`/`height` match it, so one user unit is one CSS pixel when
/// opened directly.
#[must_use]
pub fn to_svg(model: &OverlayModel, view: ViewId, metadata: &SnapshotMetadata<'_>) -> String {
    let vb = model.view_box;
    let scale = model.size.multiplier();

    let mut doc = Document::new()
        .set("width", vb.width)
        .set("height", vb.height)
        .set("viewBox", vb.to_string())
        .set("data-view", view.as_str());

    if let Some(title) = metadata.title {
        doc = doc.add(Title::new(title));
    }

    if let Some(description) = metadata.description {
        doc = doc.add(Description::new().add(Text::new(description)));
    }

    if let Some(report_json) = metadata.report_json {
        let mut selection_el = Element::new("somamap:selection");
        selection_el.assign("xmlns:somamap", SOMAMAP_NAMESPACE);
        selection_el.append(Text::new(report_json));
        let mut metadata_el = Element::new("metadata");
        metadata_el.append(selection_el);
        doc = doc.add(metadata_el);
    }

    // Silhouette is authored in design space; scale it with the shapes.
    let silhouette = Group::new()
        .set("class", "silhouette")
        .set("transform", format!("scale({scale})"))
        .add(
            Path::new()
                .set("d", somamap_core::silhouette_path(view))
                .set("fill", SILHOUETTE_FILL)
                .set("stroke", SILHOUETTE_STROKE)
                .set("stroke-width", 1),
        )
        .add(
            Path::new()
                .set("d", somamap_core::silhouette_detail_path(view))
                .set("fill", "none")
                .set("stroke", SILHOUETTE_STROKE)
                .set("stroke-width", 0.75),
        );
    doc = doc.add(silhouette);

    let mut regions = Group::new().set("class", "regions");
    for shape in &model.shapes {
        regions = regions.add(shape_element(shape));
    }
    doc = doc.add(regions);

    if !model.labels.is_empty() {
        let mut labels = Group::new()
            .set("class", "labels")
            .set("font-family", "sans-serif")
            .set("font-size", LABEL_FONT_SIZE * scale)
            .set("text-anchor", "middle")
            .set("dominant-baseline", "middle")
            .set("fill", LABEL_FILL);
        for label in &model.labels {
            let mut text = Element::new("text");
            text.assign("x", label.anchor.x);
            text.assign("y", label.anchor.y);
            text.assign("data-region-id", label.region_id);
            text.append(Text::new(label.text.as_str()));
            labels = labels.add(text);
        }
        doc = doc.add(labels);
    }

    // The svg crate omits the XML declaration, so we prepend it.
    format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{doc}\n")
}

/// Build the element for one region shape, styled by selection state.
fn shape_element(shape: &OverlayShape) -> Element {
    let mut el = match shape.geometry {
        ShapeGeometry::Rect {
            x,
            y,
            width,
            height,
            corner_radius,
        } => {
            let mut el = Element::new("rect");
            el.assign("x", x);
            el.assign("y", y);
            el.assign("width", width);
            el.assign("height", height);
            el.assign("rx", corner_radius);
            el
        }
        ShapeGeometry::Ellipse {
            center_x,
            center_y,
            radius_x,
            radius_y,
        } => {
            let mut el = Element::new("ellipse");
            el.assign("cx", center_x);
            el.assign("cy", center_y);
            el.assign("rx", radius_x);
            el.assign("ry", radius_y);
            el
        }
        ShapeGeometry::Path { data, scale } => {
            let mut el = Element::new("path");
            el.assign("d", data);
            el.assign("transform", format!("scale({scale})"));
            el
        }
    };

    let (fill, opacity) = if shape.selected {
        (SELECTED_FILL, SELECTED_OPACITY)
    } else {
        (REGION_FILL, REGION_OPACITY)
    };
    el.assign("class", region_class(shape.selected));
    el.assign("data-region-id", shape.region_id);
    el.assign("fill", fill);
    el.assign("fill-opacity", opacity);
    el.append(Title::new(shape.region_name));
    el
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use somamap_core::{SizeKey, build_overlay, regions_for_view};

    use super::*;

    fn front_model(selection: &[&str], size: SizeKey) -> OverlayModel {
        let regions = regions_for_view(ViewId::Front);
        let selection: Vec<String> = selection.iter().map(ToString::to_string).collect();
        build_overlay(&regions, &selection, size, true)
    }

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    // --- Document structure tests ---

    #[test]
    fn starts_with_xml_declaration() {
        let svg = to_svg(
            &front_model(&[], SizeKey::Medium),
            ViewId::Front,
            &SnapshotMetadata::default(),
        );
        assert!(svg.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn view_box_matches_size() {
        let svg = to_svg(
            &front_model(&[], SizeKey::Large),
            ViewId::Front,
            &SnapshotMetadata::default(),
        );
        assert!(svg.contains(r#"viewBox="0 0 280 336""#), "{svg}");
    }

    #[test]
    fn one_element_per_region() {
        let model = front_model(&[], SizeKey::Medium);
        let svg = to_svg(&model, ViewId::Front, &SnapshotMetadata::default());
        // Nothing selected, so every data-region-id belongs to a shape.
        assert_eq!(count(&svg, "data-region-id="), model.shapes.len());
        assert!(svg.contains(r#"data-region-id="head-front""#));
    }

    #[test]
    fn selected_regions_are_highlighted_and_labelled() {
        let model = front_model(&["chest"], SizeKey::Medium);
        let svg = to_svg(&model, ViewId::Front, &SnapshotMetadata::default());
        assert_eq!(count(&svg, "region--selected"), 1);
        assert!(svg.contains(SELECTED_FILL));
        assert!(svg.contains(">Chest</text>"), "{svg}");
    }

    #[test]
    fn no_label_group_without_selection() {
        let svg = to_svg(
            &front_model(&[], SizeKey::Medium),
            ViewId::Front,
            &SnapshotMetadata::default(),
        );
        assert!(!svg.contains(r#"class="labels""#));
    }

    #[test]
    fn silhouette_is_scaled() {
        let svg = to_svg(
            &front_model(&[], SizeKey::Small),
            ViewId::Back,
            &SnapshotMetadata::default(),
        );
        assert!(svg.contains(r#"transform="scale(0.7)""#));
        assert!(svg.contains(r#"data-view="back""#));
    }

    // --- Metadata tests ---

    #[test]
    fn metadata_is_escaped() {
        let metadata = SnapshotMetadata {
            title: Some("Pain <map>"),
            description: Some("Headache & neck"),
            report_json: Some(r#"{"view":"front"}"#),
        };
        let svg = to_svg(&front_model(&[], SizeKey::Medium), ViewId::Front, &metadata);
        assert!(svg.contains("<title>Pain &lt;map&gt;</title>"));
        assert!(svg.contains("Headache &amp; neck"));
        assert!(svg.contains(SOMAMAP_NAMESPACE));
        assert!(svg.contains("<somamap:selection"));
    }

    #[test]
    fn metadata_absent_by_default() {
        let svg = to_svg(
            &front_model(&[], SizeKey::Medium),
            ViewId::Front,
            &SnapshotMetadata::default(),
        );
        assert!(!svg.contains("<desc>"));
        assert!(!svg.contains("<metadata>"));
    }

    #[test]
    fn region_class_names() {
        assert_eq!(region_class(false), "region");
        assert_eq!(region_class(true), "region region--selected");
    }
}
