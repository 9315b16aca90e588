use super::error::ConfigError;

/// Side of the square viewport every shape is laid out in
pub const VIEWPORT: f64 = 220.0;

/// A point in viewport units (origin top-left, y grows downwards)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Linear interpolation towards `other`
    pub fn lerp(self, other: Point, t: f64) -> Point {
        Point {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }
}

/// How a scale transition is paced across a phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    /// Constant rate; only used to check eased tracks against
    #[cfg(test)]
    Linear,
    /// 3t² − 2t³, slow at both ends
    SmoothStep,
}

impl Easing {
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            #[cfg(test)]
            Easing::Linear => t,
            Easing::SmoothStep => t * t * (3.0 - 2.0 * t),
        }
    }
}

/// What a single phase animates across
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Travel edge `i` of a polygon, from vertex `i` to vertex `i + 1`
    Edge(usize),
    /// Grow or shrink a pulsing circle
    Scale { from: f64, to: f64 },
}

/// The closed shape a breathing pattern is drawn on
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Closed polygon; edge `i` joins vertex `i` to vertex `(i + 1) mod n`
    Polygon { vertices: Vec<Point> },
    /// Circle that pulses between scale factors
    Pulse {
        center: Point,
        radius: f64,
        easing: Easing,
    },
}

impl Shape {
    /// Square with rounded-off padding inside the viewport, edges clockwise from top-left
    pub fn square(size: f64, pad: f64) -> Self {
        let (left, top, right, bottom) = (pad, pad, size - pad, size - pad);
        Shape::Polygon {
            vertices: vec![
                Point::new(left, top),
                Point::new(right, top),
                Point::new(right, bottom),
                Point::new(left, bottom),
            ],
        }
    }

    /// Equilateral triangle: top, bottom-left, bottom-right
    pub fn triangle(size: f64, radius: f64) -> Self {
        let c = size / 2.0;
        let dx = radius * (std::f64::consts::PI / 6.0).cos();
        let dy = radius * (std::f64::consts::PI / 6.0).sin();
        Shape::Polygon {
            vertices: vec![
                Point::new(c, c - radius),
                Point::new(c - dx, c + dy),
                Point::new(c + dx, c + dy),
            ],
        }
    }

    /// Centered pulsing circle
    pub fn pulse(size: f64, radius: f64) -> Self {
        Shape::Pulse {
            center: Point::new(size / 2.0, size / 2.0),
            radius,
            easing: Easing::SmoothStep,
        }
    }

    /// Number of traversable edges (zero for pulse shapes)
    pub fn edge_count(&self) -> usize {
        match self {
            Shape::Polygon { vertices } => vertices.len(),
            Shape::Pulse { .. } => 0,
        }
    }

    /// Endpoints of edge `index`
    pub fn edge(&self, index: usize) -> Option<(Point, Point)> {
        match self {
            Shape::Polygon { vertices } if index < vertices.len() => {
                let a = vertices[index];
                let b = vertices[(index + 1) % vertices.len()];
                Some((a, b))
            }
            _ => None,
        }
    }

    /// Resolve a phase motion against this shape. `index` is the phase position,
    /// only used for error reporting.
    pub fn track(&self, index: usize, motion: &Motion) -> Result<Track, ConfigError> {
        match (self, motion) {
            (Shape::Polygon { vertices }, _) if vertices.len() < 2 => {
                Err(ConfigError::DegeneratePolygon)
            }
            (Shape::Polygon { .. }, Motion::Edge(edge)) => self
                .edge(*edge)
                .map(|(from, to)| Track::Line { from, to })
                .ok_or(ConfigError::EdgeOutOfRange {
                    index,
                    edge: *edge,
                    edges: self.edge_count(),
                }),
            (Shape::Pulse { easing, .. }, Motion::Scale { from, to }) => Ok(Track::Scale {
                from: *from,
                to: *to,
                easing: *easing,
            }),
            _ => Err(ConfigError::MotionMismatch { index }),
        }
    }
}

/// A motion resolved against its shape; mapping along it cannot fail
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Track {
    Line { from: Point, to: Point },
    Scale { from: f64, to: f64, easing: Easing },
}

impl Track {
    /// Render coordinate at `progress` in [0, 1]; out-of-range input is clamped
    pub fn at(&self, progress: f64) -> RenderCoordinate {
        let t = progress.clamp(0.0, 1.0);
        match self {
            Track::Line { from, to } => RenderCoordinate::Point(from.lerp(*to, t)),
            Track::Scale { from, to, easing } => {
                RenderCoordinate::Scale(from + (to - from) * easing.apply(t))
            }
        }
    }
}

/// Where the breathing guide should be painted
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderCoordinate {
    /// Dot position for edge-traversal shapes
    Point(Point),
    /// Scale factor for pulsing circles (1.0 = base radius)
    Scale(f64),
}

/// Map a phase motion and progress fraction onto a shape
pub fn map(shape: &Shape, motion: &Motion, progress: f64) -> Result<RenderCoordinate, ConfigError> {
    Ok(shape.track(0, motion)?.at(progress))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_point(actual: RenderCoordinate, x: f64, y: f64) {
        match actual {
            RenderCoordinate::Point(p) => {
                assert!((p.x - x).abs() < 1e-9, "x: expected {}, got {}", x, p.x);
                assert!((p.y - y).abs() < 1e-9, "y: expected {}, got {}", y, p.y);
            }
            other => panic!("expected a point, got {:?}", other),
        }
    }

    #[test]
    fn test_square_top_edge_midpoint() {
        let square = Shape::square(VIEWPORT, 24.0);
        let coord = map(&square, &Motion::Edge(0), 0.5).unwrap();
        assert_point(coord, 110.0, 24.0);
    }

    #[test]
    fn test_square_edges_are_clockwise() {
        let square = Shape::square(VIEWPORT, 24.0);
        assert_eq!(square.edge_count(), 4);
        assert_point(map(&square, &Motion::Edge(1), 1.0).unwrap(), 196.0, 196.0);
        assert_point(map(&square, &Motion::Edge(2), 1.0).unwrap(), 24.0, 196.0);
        // Last edge closes back to the first vertex
        assert_point(map(&square, &Motion::Edge(3), 1.0).unwrap(), 24.0, 24.0);
    }

    #[test]
    fn test_triangle_vertices() {
        let triangle = Shape::triangle(VIEWPORT, 90.0);
        let (top, bottom_left) = triangle.edge(0).unwrap();
        assert_eq!(top, Point::new(110.0, 20.0));
        assert!((bottom_left.x - (110.0 - 90.0 * (3.0f64).sqrt() / 2.0)).abs() < 1e-9);
        assert!((bottom_left.y - 155.0).abs() < 1e-9);

        // Third edge ends where the first starts
        assert_point(map(&triangle, &Motion::Edge(2), 1.0).unwrap(), 110.0, 20.0);
    }

    #[test]
    fn test_progress_is_clamped() {
        let square = Shape::square(VIEWPORT, 24.0);
        assert_point(map(&square, &Motion::Edge(0), -1.0).unwrap(), 24.0, 24.0);
        assert_point(map(&square, &Motion::Edge(0), 7.0).unwrap(), 196.0, 24.0);
    }

    #[test]
    fn test_pulse_scale_smoothstep() {
        let circle = Shape::pulse(VIEWPORT, 80.0);
        let motion = Motion::Scale { from: 0.8, to: 1.2 };

        assert_eq!(map(&circle, &motion, 0.0).unwrap(), RenderCoordinate::Scale(0.8));
        assert_eq!(map(&circle, &motion, 1.0).unwrap(), RenderCoordinate::Scale(1.2));
        match map(&circle, &motion, 0.5).unwrap() {
            RenderCoordinate::Scale(s) => assert!((s - 1.0).abs() < 1e-9),
            other => panic!("expected a scale, got {:?}", other),
        }
        // Eased: slower than linear near the start
        match map(&circle, &motion, 0.1).unwrap() {
            RenderCoordinate::Scale(s) => assert!(s < 0.8 + 0.4 * 0.1),
            other => panic!("expected a scale, got {:?}", other),
        }
    }

    #[test]
    fn test_easing_linear() {
        assert_eq!(Easing::Linear.apply(0.25), 0.25);
        assert_eq!(Easing::SmoothStep.apply(0.0), 0.0);
        assert_eq!(Easing::SmoothStep.apply(1.0), 1.0);
        assert_eq!(Easing::SmoothStep.apply(2.0), 1.0);
    }

    #[test]
    fn test_motion_shape_mismatch() {
        let square = Shape::square(VIEWPORT, 24.0);
        let circle = Shape::pulse(VIEWPORT, 80.0);

        assert_eq!(
            square.track(2, &Motion::Scale { from: 1.0, to: 1.2 }),
            Err(ConfigError::MotionMismatch { index: 2 })
        );
        assert_eq!(
            circle.track(1, &Motion::Edge(0)),
            Err(ConfigError::MotionMismatch { index: 1 })
        );
        assert_eq!(
            square.track(3, &Motion::Edge(4)),
            Err(ConfigError::EdgeOutOfRange { index: 3, edge: 4, edges: 4 })
        );
    }

    #[test]
    fn test_degenerate_polygon() {
        let dot = Shape::Polygon { vertices: vec![Point::new(1.0, 1.0)] };
        assert_eq!(dot.track(0, &Motion::Edge(0)), Err(ConfigError::DegeneratePolygon));
    }
}
