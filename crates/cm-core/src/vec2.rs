//! Planar direction vectors.
//!
//! `Vec2` uses `f64` throughout: trial counts are small (thousands of rows)
//! and the circular statistics downstream are sensitive to rounding near the
//! ±1 cosine boundary, so there is no reason to trade precision for memory.

/// A 2D vector, typically a (possibly unnormalized) group direction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing at `deg` degrees (counter-clockwise from +x).
    #[inline]
    pub fn unit_from_deg(deg: f64) -> Self {
        let rad = deg.to_radians();
        Self { x: rad.cos(), y: rad.sin() }
    }

    #[inline]
    pub fn dot(self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// 2D cross product (perp-dot).  Positive when `other` lies
    /// counter-clockwise of `self`; carries the sign of the angular
    /// deviation between two directions.
    #[inline]
    pub fn cross(self, other: Vec2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    pub fn norm(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Unit-length copy, or `None` for the zero vector (and anything whose
    /// norm is not a positive finite number).
    pub fn normalized(self) -> Option<Vec2> {
        let n = self.norm();
        if n > 0.0 && n.is_finite() {
            Some(Vec2 { x: self.x / n, y: self.y / n })
        } else {
            None
        }
    }

    /// Heading angle in degrees via `atan2`, in (−180, 180].
    #[inline]
    pub fn heading_deg(self) -> f64 {
        self.y.atan2(self.x).to_degrees()
    }

    #[inline]
    pub fn scaled(self, s: f64) -> Vec2 {
        Vec2 { x: self.x * s, y: self.y * s }
    }

    /// Copy rotated counter-clockwise by `rad` radians.
    #[inline]
    pub fn rotated(self, rad: f64) -> Vec2 {
        let (s, c) = rad.sin_cos();
        Vec2 {
            x: c * self.x - s * self.y,
            y: s * self.x + c * self.y,
        }
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;

    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;

    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2 { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.x, self.y)
    }
}
