//! somamap web application: demo host for the body selectors.

use dioxus::prelude::*;
use somamap_core::symptom::SYMPTOM_MAPPINGS;
use somamap_core::{HitTestMode, SelectorConfig, SizeKey, ViewId, region_name};
use somamap_io::{BodySelector, SnapshotPanel, SymptomBodySelector};

fn main() {
    dioxus::launch(app);
}

/// Root application component.
///
/// Owns both selections and the shared selector configuration, and
/// wires the general and symptom-filtered selectors to their snapshot
/// panels. The selectors only report clicks; every state change happens
/// here.
#[allow(clippy::too_many_lines)]
fn app() -> Element {
    // --- Application state ---
    let mut config = use_signal(SelectorConfig::default);
    let mut body_selection = use_signal(Vec::<String>::new);
    let mut body_view = use_signal(|| ViewId::Front);
    let mut symptom_id = use_signal(|| String::from("headache"));
    let mut symptom_selection = use_signal(Vec::<String>::new);
    let mut symptom_view = use_signal(|| ViewId::Front);
    let mut last_click = use_signal(|| Option::<(String, String)>::None);

    // --- Selection handlers ---
    // The selectors compute the toggled list; the app just stores it.
    let on_body_change = move |next: Vec<String>| body_selection.set(next);
    let on_symptom_change = move |next: Vec<String>| symptom_selection.set(next);
    let on_region_select = move |clicked: (String, String)| last_click.set(Some(clicked));

    // --- Config handlers ---
    let on_size = move |e: Event<FormData>| {
        let size = SizeKey::from_key_lenient(&e.value());
        config.with_mut(|c| c.size = size);
    };
    let on_symptom = move |e: Event<FormData>| {
        symptom_id.set(e.value());
        symptom_selection.set(Vec::new());
    };

    let cfg = config();
    let size = cfg.size;

    // --- Layout ---
    rsx! {
        style { dangerous_inner_html: include_str!("../assets/somamap.css") }

        main { class: "somamap-app",
            header { class: "somamap-app__header",
                h1 { "somamap" }
                p { "Tap the body to record where a symptom is felt." }
            }

            section { class: "somamap-app__controls", aria_label: "Selector settings",
                label {
                    "Size "
                    select { value: "{size}", onchange: on_size,
                        for size_key in SizeKey::ALL {
                            option { key: "{size_key}", value: "{size_key}", "{size_key}" }
                        }
                    }
                }
                {render_toggle("Multi-select", cfg.multi_select, move |v| config.with_mut(|c| c.multi_select = v))}
                {render_toggle("Labels", cfg.show_labels, move |v| config.with_mut(|c| c.show_labels = v))}
                {render_toggle("Disabled", cfg.disabled, move |v| config.with_mut(|c| c.disabled = v))}
                {render_toggle(
                    "Shape hit testing",
                    cfg.hit_test == HitTestMode::Shape,
                    move |v| config.with_mut(|c| {
                        c.hit_test = if v { HitTestMode::Shape } else { HitTestMode::BoundingBox };
                    }),
                )}
            }

            if let Some((id, name)) = last_click() {
                p { class: "somamap-app__status", "Last click: {name} ({id})" }
            }

            div { class: "somamap-app__panels",
                section { class: "somamap-app__panel",
                    h2 { "Whole body" }
                    BodySelector {
                        selected: body_selection(),
                        on_region_select: on_region_select,
                        on_selection_change: on_body_change,
                        on_view_change: move |v| body_view.set(v),
                        config: cfg.clone(),
                    }
                    SnapshotPanel {
                        view: body_view(),
                        selected: body_selection(),
                        symptom_id: None,
                        size,
                    }
                }

                section { class: "somamap-app__panel",
                    h2 { "By symptom" }
                    label {
                        "Symptom "
                        select { value: "{symptom_id}", onchange: on_symptom,
                            for mapping in SYMPTOM_MAPPINGS {
                                option {
                                    key: "{mapping.symptom_id}",
                                    value: "{mapping.symptom_id}",
                                    "{mapping.display_name}"
                                }
                            }
                        }
                    }
                    SymptomBodySelector {
                        symptom_id: symptom_id(),
                        selected: symptom_selection(),
                        on_region_select: on_region_select,
                        on_selection_change: on_symptom_change,
                        on_view_change: move |v| symptom_view.set(v),
                        config: cfg.clone(),
                    }
                    ul { class: "somamap-app__summary",
                        for id in symptom_selection() {
                            {render_summary_item(&id)}
                        }
                    }
                    SnapshotPanel {
                        view: symptom_view(),
                        selected: symptom_selection(),
                        symptom_id: Some(symptom_id()),
                        size,
                    }
                }
            }
        }
    }
}

/// One line of the symptom selection summary.
fn render_summary_item(id: &str) -> Element {
    let name = region_name(id).unwrap_or("unknown region");
    rsx! {
        li { key: "{id}", "{name}" }
    }
}

/// Render a labelled checkbox.
fn render_toggle(label: &str, checked: bool, mut on_toggle: impl FnMut(bool) + 'static) -> Element {
    rsx! {
        label { class: "somamap-app__toggle",
            input {
                r#type: "checkbox",
                checked: checked,
                onchange: move |e: Event<FormData>| on_toggle(e.checked()),
            }
            " {label}"
        }
    }
}
