//! somamap-io: Browser I/O and Dioxus component library.
//!
//! Measures rendered elements for click handling, triggers Blob
//! downloads, logs to the browser console, and provides the body
//! selector components for the somamap web application.

pub mod components;
pub mod console;
pub mod dom;
pub mod download;

pub use components::{
    BodySelector, InteractiveOverlay, NOT_APPLICABLE_MESSAGE, SelectedRegionChips, Silhouette,
    SnapshotPanel, SymptomBodySelector, ViewToggle,
};
