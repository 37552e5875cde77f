//! Basic 2D value types consumed by the cutting engine.
//!
//! - `Point`/`Polygon`: plain `nalgebra` vectors; polygons are implicitly closed.
//! - `Bounds`: axis-aligned box, recomputed per operation and never stored.
//! - `CutLine`: a segment pre-extended past the shape so it straddles the boundary.
//! - `CutKind`: straight (axis-aligned) or diagonal (free angle) cut style.

use std::fmt;
use std::str::FromStr;

use nalgebra::Vector2;

use crate::cut::CutError;

/// A point in the caller's coordinate space.
pub type Point = Vector2<f64>;

/// Ordered vertex ring with at least 3 points; last vertex connects to the first.
pub type Polygon = Vec<Point>;

/// Axis-aligned bounding box.
///
/// Invariant: `min_x <= max_x` and `min_y <= max_y` for any non-empty input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Zero bounds, the fallback for an empty point set.
    pub const ZERO: Bounds = Bounds {
        min_x: 0.0,
        min_y: 0.0,
        max_x: 0.0,
        max_y: 0.0,
    };

    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
    #[inline]
    pub fn max_dim(&self) -> f64 {
        self.width().max(self.height())
    }
    /// Length of the box diagonal.
    #[inline]
    pub fn diagonal(&self) -> f64 {
        self.width().hypot(self.height())
    }
    /// Midpoint of the box (not the polygon centroid).
    #[inline]
    pub fn center(&self) -> Point {
        Vector2::new(
            (self.min_x + self.max_x) * 0.5,
            (self.min_y + self.max_y) * 0.5,
        )
    }
    /// Box grown by `eps` on every side.
    pub fn expanded(&self, eps: f64) -> Bounds {
        Bounds {
            min_x: self.min_x - eps,
            min_y: self.min_y - eps,
            max_x: self.max_x + eps,
            max_y: self.max_y + eps,
        }
    }
    /// True when `other` lies entirely inside `self` (closed comparison).
    pub fn contains_bounds(&self, other: &Bounds) -> bool {
        other.min_x >= self.min_x
            && other.min_y >= self.min_y
            && other.max_x <= self.max_x
            && other.max_y <= self.max_y
    }
}

/// Cut style requested by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CutKind {
    /// Axis-aligned cuts only.
    Straight,
    /// Cuts at arbitrary angles.
    Diagonal,
}

impl CutKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CutKind::Straight => "straight",
            CutKind::Diagonal => "diagonal",
        }
    }
}

impl fmt::Display for CutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CutKind {
    type Err = CutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "straight" => Ok(CutKind::Straight),
            "diagonal" => Ok(CutKind::Diagonal),
            _ => Err(CutError::UnsupportedKind { name: s.to_string() }),
        }
    }
}

/// Generated cut segment `a → b`, extended beyond the shape's bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CutLine {
    pub a: Point,
    pub b: Point,
    pub kind: CutKind,
}

impl CutLine {
    #[inline]
    pub fn new(a: Point, b: Point, kind: CutKind) -> Self {
        Self { a, b, kind }
    }

    /// Segment centred on `anchor` with direction `angle` and the given half-length.
    pub fn through(anchor: Point, angle: f64, half_len: f64, kind: CutKind) -> Self {
        let d = Vector2::new(angle.cos(), angle.sin()) * half_len;
        Self::new(anchor - d, anchor + d, kind)
    }

    #[inline]
    pub fn midpoint(&self) -> Point {
        (self.a + self.b) * 0.5
    }

    #[inline]
    pub fn length(&self) -> f64 {
        (self.b - self.a).norm()
    }

    /// Undirected line angle folded into `[0, π)`.
    pub fn angle(&self) -> f64 {
        let d = self.b - self.a;
        let th = d.y.atan2(d.x).rem_euclid(std::f64::consts::PI);
        // rem_euclid can round up to exactly π for tiny negative inputs.
        if th >= std::f64::consts::PI {
            0.0
        } else {
            th
        }
    }

    /// True for a line whose direction is (near) vertical.
    #[inline]
    pub fn is_vertical(&self) -> bool {
        let d = self.b - self.a;
        d.x.abs() < d.y.abs()
    }
}
