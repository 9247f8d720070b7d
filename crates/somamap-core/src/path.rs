//! Flatten SVG path data into polygons.
//!
//! Path shape overrides are authored as SVG `d` strings. For
//! shape-accurate hit testing they are parsed with the [`svg`] crate and
//! flattened into a [`geo::MultiPolygon`], one polygon per subpath.
//!
//! Bezier segments are sampled at [`CURVE_SEGMENTS`] points. Elliptical
//! arcs are approximated by a straight line to their end point; none of
//! the built-in shapes use arcs.

use geo::{Coord, LineString, MultiPolygon, Polygon};
use svg::node::element::path::{Command, Data, Position};

use crate::types::Point;

/// Number of line segments each Bezier curve is flattened into.
pub const CURVE_SEGMENTS: usize = 16;

/// Parse and flatten path data.
///
/// Every subpath is treated as closed, whether or not it ends in `Z`,
/// matching how SVG fills open subpaths. Subpaths with fewer than three
/// distinct points enclose no area and are dropped.
///
/// # Errors
///
/// Returns the parser message if `data` is not valid SVG path data.
pub fn flatten_path(data: &str) -> Result<MultiPolygon<f64>, String> {
    let parsed = Data::parse(data).map_err(|e| e.to_string())?;
    let mut flattener = Flattener::default();
    for command in parsed.iter() {
        flattener.apply(command);
    }
    Ok(flattener.finish())
}

/// Bounding box of flattened path data as `(min, max)` corners.
///
/// Returns `None` when the path encloses nothing.
#[must_use]
pub fn path_bounds(polygons: &MultiPolygon<f64>) -> Option<(Point, Point)> {
    use geo::BoundingRect;

    polygons
        .bounding_rect()
        .map(|r| (Point::new(r.min().x, r.min().y), Point::new(r.max().x, r.max().y)))
}

#[derive(Default)]
struct Flattener {
    current: Coord<f64>,
    subpath_start: Coord<f64>,
    /// Second control point of the previous cubic, for `S`.
    last_cubic_control: Option<Coord<f64>>,
    /// Control point of the previous quadratic, for `T`.
    last_quad_control: Option<Coord<f64>>,
    ring: Vec<Coord<f64>>,
    polygons: Vec<Polygon<f64>>,
}

impl Flattener {
    fn apply(&mut self, command: &Command) {
        match command {
            Command::Move(position, params) => {
                for (i, pair) in params.chunks_exact(2).enumerate() {
                    let target = self.resolve(*position, pair[0], pair[1]);
                    if i == 0 {
                        self.close_ring();
                        self.current = target;
                        self.subpath_start = target;
                        self.ring.push(target);
                    } else {
                        // Extra pairs after a moveto are implicit linetos.
                        self.line_to(target);
                    }
                }
                self.clear_controls();
            }
            Command::Line(position, params) => {
                for pair in params.chunks_exact(2) {
                    let target = self.resolve(*position, pair[0], pair[1]);
                    self.line_to(target);
                }
                self.clear_controls();
            }
            Command::HorizontalLine(position, params) => {
                for x in params.iter() {
                    let x = f64::from(*x);
                    let target = match position {
                        Position::Absolute => Coord { x, y: self.current.y },
                        Position::Relative => Coord {
                            x: self.current.x + x,
                            y: self.current.y,
                        },
                    };
                    self.line_to(target);
                }
                self.clear_controls();
            }
            Command::VerticalLine(position, params) => {
                for y in params.iter() {
                    let y = f64::from(*y);
                    let target = match position {
                        Position::Absolute => Coord { x: self.current.x, y },
                        Position::Relative => Coord {
                            x: self.current.x,
                            y: self.current.y + y,
                        },
                    };
                    self.line_to(target);
                }
                self.clear_controls();
            }
            Command::CubicCurve(position, params) => {
                for group in params.chunks_exact(6) {
                    let c1 = self.resolve(*position, group[0], group[1]);
                    let c2 = self.resolve(*position, group[2], group[3]);
                    let end = self.resolve(*position, group[4], group[5]);
                    self.cubic_to(c1, c2, end);
                }
            }
            Command::SmoothCubicCurve(position, params) => {
                for group in params.chunks_exact(4) {
                    let c1 = self
                        .last_cubic_control
                        .map_or(self.current, |c| reflect(c, self.current));
                    let c2 = self.resolve(*position, group[0], group[1]);
                    let end = self.resolve(*position, group[2], group[3]);
                    self.cubic_to(c1, c2, end);
                }
            }
            Command::QuadraticCurve(position, params) => {
                for group in params.chunks_exact(4) {
                    let control = self.resolve(*position, group[0], group[1]);
                    let end = self.resolve(*position, group[2], group[3]);
                    self.quad_to(control, end);
                }
            }
            Command::SmoothQuadraticCurve(position, params) => {
                for pair in params.chunks_exact(2) {
                    let control = self
                        .last_quad_control
                        .map_or(self.current, |c| reflect(c, self.current));
                    let end = self.resolve(*position, pair[0], pair[1]);
                    self.quad_to(control, end);
                }
            }
            Command::EllipticalArc(position, params) => {
                for group in params.chunks_exact(7) {
                    let end = self.resolve(*position, group[5], group[6]);
                    self.line_to(end);
                }
                self.clear_controls();
            }
            Command::Close => {
                self.current = self.subpath_start;
                self.close_ring();
                self.ring.push(self.subpath_start);
                self.clear_controls();
            }
        }
    }

    fn resolve(&self, position: Position, x: f32, y: f32) -> Coord<f64> {
        let (x, y) = (f64::from(x), f64::from(y));
        match position {
            Position::Absolute => Coord { x, y },
            Position::Relative => Coord {
                x: self.current.x + x,
                y: self.current.y + y,
            },
        }
    }

    fn line_to(&mut self, target: Coord<f64>) {
        self.ring.push(target);
        self.current = target;
    }

    fn cubic_to(&mut self, c1: Coord<f64>, c2: Coord<f64>, end: Coord<f64>) {
        let start = self.current;
        for step in 1..=CURVE_SEGMENTS {
            #[allow(clippy::cast_precision_loss)]
            let t = step as f64 / CURVE_SEGMENTS as f64;
            let mt = 1.0 - t;
            let a = mt * mt * mt;
            let b = 3.0 * mt * mt * t;
            let c = 3.0 * mt * t * t;
            let d = t * t * t;
            self.ring.push(Coord {
                x: a * start.x + b * c1.x + c * c2.x + d * end.x,
                y: a * start.y + b * c1.y + c * c2.y + d * end.y,
            });
        }
        self.current = end;
        self.last_cubic_control = Some(c2);
        self.last_quad_control = None;
    }

    fn quad_to(&mut self, control: Coord<f64>, end: Coord<f64>) {
        let start = self.current;
        for step in 1..=CURVE_SEGMENTS {
            #[allow(clippy::cast_precision_loss)]
            let t = step as f64 / CURVE_SEGMENTS as f64;
            let mt = 1.0 - t;
            let a = mt * mt;
            let b = 2.0 * mt * t;
            let c = t * t;
            self.ring.push(Coord {
                x: a * start.x + b * control.x + c * end.x,
                y: a * start.y + b * control.y + c * end.y,
            });
        }
        self.current = end;
        self.last_quad_control = Some(control);
        self.last_cubic_control = None;
    }

    fn clear_controls(&mut self) {
        self.last_cubic_control = None;
        self.last_quad_control = None;
    }

    /// Finish the current subpath, keeping it if it encloses any area.
    fn close_ring(&mut self) {
        let ring = std::mem::take(&mut self.ring);
        let mut distinct = ring.clone();
        distinct.dedup();
        if distinct.len() >= 3 {
            self.polygons
                .push(Polygon::new(LineString::from(ring), Vec::new()));
        }
    }

    fn finish(mut self) -> MultiPolygon<f64> {
        self.close_ring();
        MultiPolygon::new(self.polygons)
    }
}

/// Reflect `control` through `about`.
fn reflect(control: Coord<f64>, about: Coord<f64>) -> Coord<f64> {
    Coord {
        x: 2.0f64.mul_add(about.x, -control.x),
        y: 2.0f64.mul_add(about.y, -control.y),
    }
}
