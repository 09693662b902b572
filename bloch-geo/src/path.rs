//! Screen-space paths and their SVG path data
//!
//! A [`Path`] is a list of [`Subpath`]s, each an ordered run of points that
//! is stroked as one polyline and optionally closed. `Display` renders SVG
//! path data (`M x,y L x,y … Z`), which is what a renderer assigns to the
//! `d` attribute of a `<path>` element.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coordinates are rounded to this many decimal places in path data
const COORD_PRECISION: f64 = 1e6;

/// A 2D screen coordinate pair (y grows downward)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a point
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance to another point
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// One continuous run of a path
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Subpath {
    points: Vec<Point>,
    closed: bool,
}

impl Subpath {
    /// An open polyline
    pub fn open(points: Vec<Point>) -> Self {
        Self {
            points,
            closed: false,
        }
    }

    /// A closed ring
    pub fn closed(points: Vec<Point>) -> Self {
        Self {
            points,
            closed: true,
        }
    }

    /// Points in drawing order
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Whether the last point joins back to the first
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Number of points
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the subpath has no points
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// A collection of subpaths stroked together
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    subpaths: Vec<Subpath>,
}

impl Path {
    /// An empty path
    pub fn new() -> Self {
        Self::default()
    }

    /// A path with a single open polyline
    pub fn polyline(points: Vec<Point>) -> Self {
        let mut path = Self::new();
        path.push(Subpath::open(points));
        path
    }

    /// A path with a single closed ring
    pub fn ring(points: Vec<Point>) -> Self {
        let mut path = Self::new();
        path.push(Subpath::closed(points));
        path
    }

    /// Append a subpath; empty subpaths are dropped
    pub fn push(&mut self, subpath: Subpath) {
        if !subpath.is_empty() {
            self.subpaths.push(subpath);
        }
    }

    /// Append every subpath of another path
    pub fn extend(&mut self, other: Path) {
        self.subpaths.extend(other.subpaths);
    }

    /// The subpaths in drawing order
    #[inline]
    pub fn subpaths(&self) -> &[Subpath] {
        &self.subpaths
    }

    /// Whether there is nothing to draw
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.subpaths.is_empty()
    }

    /// Total number of points over all subpaths
    pub fn point_count(&self) -> usize {
        self.subpaths.iter().map(Subpath::len).sum()
    }

    /// Iterate over every point of every subpath
    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.subpaths.iter().flat_map(|s| s.points.iter())
    }

    /// SVG path data for this path
    pub fn to_svg(&self) -> String {
        self.to_string()
    }
}

impl FromIterator<Subpath> for Path {
    fn from_iter<I: IntoIterator<Item = Subpath>>(iter: I) -> Self {
        let mut path = Path::new();
        for subpath in iter {
            path.push(subpath);
        }
        path
    }
}

/// Round a coordinate for path data; negative zero prints as "0"
fn write_coord(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    let rounded = (value * COORD_PRECISION).round() / COORD_PRECISION;
    if rounded == 0.0 {
        write!(f, "0")
    } else {
        write!(f, "{}", rounded)
    }
}

impl fmt::Display for Subpath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, point) in self.points.iter().enumerate() {
            f.write_str(if i == 0 { "M" } else { "L" })?;
            write_coord(f, point.x)?;
            f.write_str(",")?;
            write_coord(f, point.y)?;
        }
        if self.closed {
            f.write_str("Z")?;
        }
        Ok(())
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for subpath in &self.subpaths {
            write!(f, "{}", subpath)?;
        }
        Ok(())
    }
}
