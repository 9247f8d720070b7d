//! somamap-export: Pure format serializers (sans-IO)
//!
//! Converts overlay snapshots and selections into output formats:
//! standalone SVG documents and JSON selection reports.

pub mod report;
pub mod svg;

pub use report::{ReportEntry, SelectionReport};
pub use svg::{SnapshotMetadata, to_svg};
