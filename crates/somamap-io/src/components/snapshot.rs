//! Snapshot panel: download the current view as SVG or the selection as
//! JSON.

use dioxus::prelude::*;
use somamap_core::{SizeKey, ViewId, active_regions, build_overlay};
use somamap_export::{SelectionReport, SnapshotMetadata};

use crate::download::{self, DownloadError};

/// Props for the [`SnapshotPanel`] component.
#[derive(Props, Clone, PartialEq)]
pub struct SnapshotPanelProps {
    /// View to snapshot.
    view: ViewId,
    /// Caller-owned selection.
    selected: Vec<String>,
    /// Symptom filter, if the snapshot is of a symptom selector.
    symptom_id: Option<String>,
    /// Size to render the SVG at.
    size: SizeKey,
}

/// Download buttons for the current selection.
///
/// Both buttons are disabled while nothing is selected.
#[component]
pub fn SnapshotPanel(props: SnapshotPanelProps) -> Element {
    let mut export_error = use_signal(|| Option::<String>::None);
    let has_selection = !props.selected.is_empty();

    let svg_click = {
        let props = props.clone();
        move |_| report_outcome(export_error, download_svg(&props))
    };
    let json_click = {
        let props = props.clone();
        move |_| report_outcome(export_error, download_json(&props))
    };

    rsx! {
        div { class: "somamap-snapshot",
            h3 { class: "somamap-snapshot__title", "Export" }

            if let Some(ref err) = export_error() {
                p { class: "somamap-snapshot__error", "{err}" }
            }

            div { class: "somamap-snapshot__buttons",
                button {
                    disabled: !has_selection,
                    onclick: svg_click,
                    "SVG"
                }
                button {
                    disabled: !has_selection,
                    onclick: json_click,
                    "JSON"
                }
            }
        }
    }
}

fn report_outcome(mut export_error: Signal<Option<String>>, result: Result<(), DownloadError>) {
    match result {
        Ok(()) => export_error.set(None),
        Err(e) => export_error.set(Some(format!("Download failed: {e}"))),
    }
}

fn report_for(props: &SnapshotPanelProps) -> SelectionReport {
    SelectionReport::from_selection(&props.selected, props.view, props.symptom_id.as_deref())
}

fn download_svg(props: &SnapshotPanelProps) -> Result<(), DownloadError> {
    let symptom = props.symptom_id.as_deref();
    let regions = active_regions(props.view, symptom);
    let model = build_overlay(&regions, &props.selected, props.size, true);
    let report_json = report_for(props)
        .to_json()
        .map_err(|e| DownloadError::Report(e.to_string()))?;
    let filename = download::snapshot_filename(props.view, symptom);
    let description = format!(
        "{} view, {} selected",
        props.view.label(),
        props.selected.len()
    );
    let svg = somamap_export::to_svg(
        &model,
        props.view,
        &SnapshotMetadata {
            title: Some(&filename),
            description: Some(&description),
            report_json: Some(&report_json),
        },
    );
    download::trigger_download(&svg, &format!("{filename}.svg"), download::SVG_MIME)
}

fn download_json(props: &SnapshotPanelProps) -> Result<(), DownloadError> {
    let json = report_for(props)
        .to_json()
        .map_err(|e| DownloadError::Report(e.to_string()))?;
    let filename = download::snapshot_filename(props.view, props.symptom_id.as_deref());
    download::trigger_download(&json, &format!("{filename}.json"), download::JSON_MIME)
}
