//! Shared types for the somamap body-region engine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Width of the fixed design space every region box is authored in.
pub const DESIGN_WIDTH: f64 = 200.0;

/// Height of the fixed design space every region box is authored in.
pub const DESIGN_HEIGHT: f64 = 240.0;

/// A 2D point in design-space (or client) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned box in the 200x240 design space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl BoundingBox {
    /// Create a new box from its top-left corner and extents.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (`x + width`).
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (`y + height`).
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Centre of the box.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            self.width.mul_add(0.5, self.x),
            self.height.mul_add(0.5, self.y),
        )
    }

    /// Inclusive containment test on all four edges.
    ///
    /// A zero-width or zero-height box still contains the points lying
    /// exactly on its degenerate edge.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }

    /// Multiply every component by `factor`.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(
            self.x * factor,
            self.y * factor,
            self.width * factor,
            self.height * factor,
        )
    }

    /// Whether the box lies entirely inside the 200x240 design space.
    #[must_use]
    pub fn within_design_space(&self) -> bool {
        self.x >= 0.0
            && self.y >= 0.0
            && self.width >= 0.0
            && self.height >= 0.0
            && self.right() <= DESIGN_WIDTH
            && self.bottom() <= DESIGN_HEIGHT
    }
}

/// One of the two body orientations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewId {
    /// Body seen from the front.
    #[default]
    Front,
    /// Body seen from the back.
    Back,
}

impl ViewId {
    /// Both views in display order.
    pub const ALL: [Self; 2] = [Self::Front, Self::Back];

    /// Stable lowercase identifier (`"front"` / `"back"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Back => "back",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Front => "Front",
            Self::Back => "Back",
        }
    }

    /// The other view.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Front => Self::Back,
            Self::Back => Self::Front,
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewId {
    type Err = BodyMapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "front" => Ok(Self::Front),
            "back" => Ok(Self::Back),
            other => Err(BodyMapError::UnknownView(other.to_owned())),
        }
    }
}

/// Rendered size of the selector.
///
/// Each key resolves to a fixed multiplier applied to design-space
/// coordinates when drawing. Hit testing never uses the multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeKey {
    /// 0.7x.
    Small,
    /// 1.0x.
    #[default]
    Medium,
    /// 1.4x.
    Large,
}

impl SizeKey {
    /// All keys from smallest to largest.
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    /// Scale factor for this key.
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Small => 0.7,
            Self::Medium => 1.0,
            Self::Large => 1.4,
        }
    }

    /// Stable lowercase identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    /// Resolve a size key string, falling back to [`SizeKey::Medium`]
    /// for anything unrecognised.
    #[must_use]
    pub fn from_key_lenient(key: &str) -> Self {
        match key {
            "small" => Self::Small,
            "large" => Self::Large,
            _ => Self::Medium,
        }
    }
}

impl fmt::Display for SizeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named anatomical area with a fixed box in design space.
///
/// `coordinates` are always unscaled, whatever size the selector is
/// rendered at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Region {
    /// Identifier, unique within its view.
    pub id: &'static str,
    /// Display label.
    pub name: &'static str,
    /// Hit-test box in design space.
    pub coordinates: BoundingBox,
}

/// One body orientation with its ordered region catalog.
///
/// Declaration order of `regions` is hit-test precedence: when boxes
/// overlap, the earlier region wins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct View {
    /// Which orientation this is.
    pub id: ViewId,
    /// Display name.
    pub name: &'static str,
    /// Regions in declaration order.
    pub regions: &'static [Region],
}

/// How clicks are matched against regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HitTestMode {
    /// Plain rectangular region boxes, first declared wins.
    ///
    /// Custom ellipse and path shapes are drawn but not used for
    /// hit testing, so a click just outside an ellipse but inside its
    /// box still selects the region.
    #[default]
    BoundingBox,
    /// Use the drawn geometry (ellipse equation, flattened path polygon)
    /// when a region has a shape override, its box otherwise.
    Shape,
}

/// Configuration shared by the general and symptom-filtered selectors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Rendered size.
    pub size: SizeKey,
    /// Toggle semantics: `true` appends/removes, `false` replaces.
    pub multi_select: bool,
    /// Whether labels are drawn next to selected regions.
    pub show_labels: bool,
    /// When `true` the overlay does not receive pointer events at all.
    pub disabled: bool,
    /// Click matching strategy.
    pub hit_test: HitTestMode,
}

impl SelectorConfig {
    /// Default rendered size.
    pub const DEFAULT_SIZE: SizeKey = SizeKey::Medium;
    /// Default toggle semantics.
    pub const DEFAULT_MULTI_SELECT: bool = true;
    /// Default label visibility.
    pub const DEFAULT_SHOW_LABELS: bool = true;
    /// Default interactivity.
    pub const DEFAULT_DISABLED: bool = false;
    /// Default hit-test strategy.
    pub const DEFAULT_HIT_TEST: HitTestMode = HitTestMode::BoundingBox;
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            size: Self::DEFAULT_SIZE,
            multi_select: Self::DEFAULT_MULTI_SELECT,
            show_labels: Self::DEFAULT_SHOW_LABELS,
            disabled: Self::DEFAULT_DISABLED,
            hit_test: Self::DEFAULT_HIT_TEST,
        }
    }
}

/// Errors raised by parsing and table validation.
///
/// The click pipeline itself never fails; these only surface when
/// reading external input (view boxes, path data, config) or when
/// checking the static tables for consistency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum BodyMapError {
    /// A view identifier other than `front` or `back`.
    #[error("unknown view: {0}")]
    UnknownView(String),

    /// An SVG `viewBox` attribute that is not four finite numbers with
    /// positive width and height.
    #[error("invalid viewBox: {0}")]
    InvalidViewBox(String),

    /// A shape override whose path data could not be parsed.
    #[error("invalid path data for region {region}: {message}")]
    InvalidPathData {
        /// Region the shape belongs to.
        region: String,
        /// Parser message.
        message: String,
    },

    /// Selector configuration is invalid.
    #[error("invalid selector configuration: {0}")]
    InvalidConfig(String),

    /// Two regions in one view share an id.
    #[error("duplicate region id {id} in {view} view")]
    DuplicateRegionId {
        /// View containing the duplicate.
        view: ViewId,
        /// Repeated id.
        id: String,
    },

    /// A region box extends outside the 200x240 design space.
    #[error("region {id} in {view} view lies outside the design space")]
    RegionOutOfBounds {
        /// View containing the region.
        view: ViewId,
        /// Offending region.
        id: String,
    },

    /// A symptom mapping names a region missing from the view catalog.
    #[error("symptom {symptom} references unknown region {region} in {view} view")]
    DanglingSymptomRegion {
        /// Symptom id.
        symptom: String,
        /// View whose catalog lacks the region.
        view: ViewId,
        /// Missing region id.
        region: String,
    },

    /// A symptom mapping filters a view it does not list as supported.
    #[error("symptom {symptom} filters unsupported {view} view")]
    UnsupportedViewFilter {
        /// Symptom id.
        symptom: String,
        /// View that has a filter but is not supported.
        view: ViewId,
    },

    /// A shape override keyed to a region id present in neither view.
    #[error("shape override for unknown region {0}")]
    OrphanShape(String),
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    // --- BoundingBox tests ---

    #[test]
    fn box_contains_is_inclusive_on_all_edges() {
        let b = BoundingBox::new(10.0, 20.0, 30.0, 40.0);
        assert!(b.contains(Point::new(10.0, 30.0)), "left edge");
        assert!(b.contains(Point::new(40.0, 30.0)), "right edge");
        assert!(b.contains(Point::new(25.0, 20.0)), "top edge");
        assert!(b.contains(Point::new(25.0, 60.0)), "bottom edge");
        assert!(b.contains(Point::new(10.0, 20.0)), "corner");
    }

    #[test]
    fn box_excludes_points_just_outside() {
        let b = BoundingBox::new(10.0, 20.0, 30.0, 40.0);
        assert!(!b.contains(Point::new(9.999, 30.0)));
        assert!(!b.contains(Point::new(40.001, 30.0)));
        assert!(!b.contains(Point::new(25.0, 19.999)));
        assert!(!b.contains(Point::new(25.0, 60.001)));
    }

    #[test]
    fn zero_width_box_hits_its_edge() {
        let b = BoundingBox::new(50.0, 50.0, 0.0, 10.0);
        assert!(b.contains(Point::new(50.0, 55.0)));
        assert!(!b.contains(Point::new(50.1, 55.0)));
    }

    #[test]
    fn box_center() {
        let b = BoundingBox::new(85.0, 5.0, 30.0, 33.0);
        assert_eq!(b.center(), Point::new(100.0, 21.5));
    }

    #[test]
    fn box_within_design_space() {
        assert!(BoundingBox::new(0.0, 0.0, 200.0, 240.0).within_design_space());
        assert!(!BoundingBox::new(190.0, 0.0, 20.0, 10.0).within_design_space());
        assert!(!BoundingBox::new(-1.0, 0.0, 5.0, 5.0).within_design_space());
    }

    // --- ViewId tests ---

    #[test]
    fn view_toggle_round_trips() {
        for view in ViewId::ALL {
            assert_eq!(view.toggled().toggled(), view);
            assert_ne!(view.toggled(), view);
        }
    }

    #[test]
    fn view_parses_from_identifier() {
        assert_eq!("front".parse::<ViewId>(), Ok(ViewId::Front));
        assert_eq!("back".parse::<ViewId>(), Ok(ViewId::Back));
        assert_eq!(
            "side".parse::<ViewId>(),
            Err(BodyMapError::UnknownView("side".to_string()))
        );
    }

    #[test]
    fn view_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ViewId::Back).unwrap(), "\"back\"");
    }

    // --- SizeKey tests ---

    #[test]
    fn size_multipliers() {
        assert!((SizeKey::Small.multiplier() - 0.7).abs() < f64::EPSILON);
        assert!((SizeKey::Medium.multiplier() - 1.0).abs() < f64::EPSILON);
        assert!((SizeKey::Large.multiplier() - 1.4).abs() < f64::EPSILON);
    }

    #[test]
    fn unknown_size_key_falls_back_to_medium() {
        assert_eq!(SizeKey::from_key_lenient("large"), SizeKey::Large);
        assert_eq!(SizeKey::from_key_lenient("huge"), SizeKey::Medium);
        assert_eq!(SizeKey::from_key_lenient(""), SizeKey::Medium);
        assert_eq!(SizeKey::default(), SizeKey::Medium);
    }

    // --- SelectorConfig tests ---

    #[test]
    fn selector_config_defaults() {
        let config = SelectorConfig::default();
        assert_eq!(config.size, SizeKey::Medium);
        assert!(config.multi_select);
        assert!(config.show_labels);
        assert!(!config.disabled);
        assert_eq!(config.hit_test, HitTestMode::BoundingBox);
    }

    #[test]
    fn selector_config_partial_json_uses_defaults() {
        let config: SelectorConfig =
            serde_json::from_str(r#"{"size":"large","hit_test":"shape"}"#).unwrap();
        assert_eq!(config.size, SizeKey::Large);
        assert_eq!(config.hit_test, HitTestMode::Shape);
        assert!(config.multi_select);
    }

    #[test]
    fn selector_config_rejects_unknown_size() {
        let result = serde_json::from_str::<SelectorConfig>(r#"{"size":"huge"}"#);
        assert!(result.is_err());
    }

    // --- BodyMapError tests ---

    #[test]
    fn error_display_messages() {
        let err = BodyMapError::DanglingSymptomRegion {
            symptom: "headache".to_string(),
            view: ViewId::Front,
            region: "brain".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "symptom headache references unknown region brain in front view"
        );
        assert_eq!(
            BodyMapError::InvalidViewBox("0 0".to_string()).to_string(),
            "invalid viewBox: 0 0"
        );
    }
}
