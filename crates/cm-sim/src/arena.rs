//! Toroidal simulation arena.

use cm_core::Vec2;

/// A rectangular arena with periodic boundaries in both axes.
#[derive(Debug, Clone, Copy)]
pub struct Arena {
    pub width:  f64,
    pub height: f64,
}

impl Arena {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Shortest displacement from `from` to `to` across the torus.
    pub fn displacement(&self, from: Vec2, to: Vec2) -> Vec2 {
        let mut dx = to.x - from.x;
        let mut dy = to.y - from.y;
        if dx.abs() > self.width / 2.0 {
            dx += if dx > 0.0 { -self.width } else { self.width };
        }
        if dy.abs() > self.height / 2.0 {
            dy += if dy > 0.0 { -self.height } else { self.height };
        }
        Vec2::new(dx, dy)
    }

    /// Shortest distance between two points across the torus.
    pub fn distance(&self, a: Vec2, b: Vec2) -> f64 {
        self.displacement(a, b).norm()
    }

    /// Wrap a position back into `[0, width) × [0, height)`.
    ///
    /// A single correction per axis — agents move at most one unit per step,
    /// so positions never stray further than one period out of range.
    pub fn wrap(&self, p: Vec2) -> Vec2 {
        let mut x = p.x;
        let mut y = p.y;
        if x < 0.0 {
            x += self.width;
        }
        if x >= self.width {
            x -= self.width;
        }
        if y < 0.0 {
            y += self.height;
        }
        if y >= self.height {
            y -= self.height;
        }
        Vec2::new(x, y)
    }

    /// Centroid of a point set on the torus via the circular mean of each
    /// axis: positions map to angles on a circle, the mean angle maps back.
    /// Correctly places the center of a cluster straddling a seam, where the
    /// arithmetic mean would land on the far side of the arena.
    pub fn circular_centroid<I>(&self, points: I) -> Vec2
    where
        I: IntoIterator<Item = Vec2>,
    {
        let tau = std::f64::consts::TAU;
        let mut cos_x = 0.0;
        let mut sin_x = 0.0;
        let mut cos_y = 0.0;
        let mut sin_y = 0.0;
        for p in points {
            let ax = p.x / self.width * tau;
            let ay = p.y / self.height * tau;
            cos_x += ax.cos();
            sin_x += ax.sin();
            cos_y += ay.cos();
            sin_y += ay.sin();
        }
        let cx = sin_x.atan2(cos_x) / tau * self.width;
        let cy = sin_y.atan2(cos_y) / tau * self.height;
        self.wrap(Vec2::new(cx, cy))
    }
}
