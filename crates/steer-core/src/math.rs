//! 2D vector type and the geometry kernel of the steering engine.
//!
//! `Vec2` uses `f64` throughout: the kinematic update accumulates position
//! over thousands of steps, and single precision drifts visibly in the
//! trajectory log at that scale.
//!
//! The free functions at the bottom are the pure geometry the path model and
//! the steering policies are built from: angle wrapping, point-to-line and
//! point-to-segment projection, and closest approach of two moving points.

use std::f64::consts::{PI, TAU};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

// ── Vec2 ─────────────────────────────────────────────────────────────────────

/// A 2D vector (or point) in simulation space.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length, always ≥ 0.
    #[inline]
    pub fn magnitude(self) -> f64 {
        self.magnitude_sq().sqrt()
    }

    /// Squared length — cheaper than [`magnitude`](Self::magnitude) when only
    /// comparisons are needed.
    #[inline]
    pub fn magnitude_sq(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Unit vector in the same direction.
    ///
    /// Returns `Vec2::ZERO` (not an error) when the input magnitude is exactly
    /// zero; callers must tolerate a zero result.
    pub fn normalized(self) -> Vec2 {
        let mag = self.magnitude();
        if mag != 0.0 {
            Vec2::new(self.x / mag, self.y / mag)
        } else {
            Vec2::ZERO
        }
    }

    #[inline]
    pub fn dot(self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Distance between two points.
    #[inline]
    pub fn distance(self, other: Vec2) -> f64 {
        (other - self).magnitude()
    }

    /// Unit vector for an orientation angle (radians).
    #[inline]
    pub fn from_angle(theta: f64) -> Vec2 {
        Vec2::new(theta.cos(), theta.sin())
    }

    /// `true` if either component is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.x, self.y)
    }
}

// ── Angle utilities ───────────────────────────────────────────────────────────

/// Wrap an angle to the signed interval `(-π, π]`.
///
/// Reduces modulo 2π first, then reflects into the signed range.  Idempotent:
/// `wrap_angle(wrap_angle(x)) == wrap_angle(x)`.
pub fn wrap_angle(theta: f64) -> f64 {
    let mut t = theta.rem_euclid(TAU);
    if t > PI {
        t -= TAU;
    }
    t
}

// ── Projections ───────────────────────────────────────────────────────────────

/// The point on the infinite line through `a` and `b` closest to `q`.
///
/// `a` and `b` must be distinct.
pub fn closest_point_on_line(q: Vec2, a: Vec2, b: Vec2) -> Vec2 {
    let ab = b - a;
    let t = (q - a).dot(ab) / ab.dot(ab);
    a + ab * t
}

/// The point on the segment `a..b` closest to `q`.
///
/// Same as [`closest_point_on_line`] but with the projection parameter
/// clamped to `[0, 1]`, so the result never leaves the segment.
pub fn closest_point_on_segment(q: Vec2, a: Vec2, b: Vec2) -> Vec2 {
    let ab = b - a;
    let t = (q - a).dot(ab) / ab.dot(ab);
    if t < 0.0 {
        a
    } else if t > 1.0 {
        b
    } else {
        a + ab * t
    }
}

// ── Closest approach ──────────────────────────────────────────────────────────

/// Result of a [`closest_approach`] query.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ClosestApproach {
    /// The time at which the two points are closest (may be negative — the
    /// approach happened in the past).
    pub time: f64,
    /// Separation distance at that time.
    pub distance: f64,
    /// Position of the first point at that time.
    pub point_a: Vec2,
    /// Position of the second point at that time.
    pub point_b: Vec2,
}

/// Time and distance of closest approach for two points moving at constant
/// velocity.
///
/// When the relative velocity is exactly zero the separation never changes:
/// the result has `time = 0` and `distance` equal to the current separation.
pub fn closest_approach(pos_a: Vec2, vel_a: Vec2, pos_b: Vec2, vel_b: Vec2) -> ClosestApproach {
    let d_p = pos_b - pos_a;
    let d_v = vel_b - vel_a;

    let rel_speed_sq = d_v.magnitude_sq();
    if rel_speed_sq == 0.0 {
        return ClosestApproach {
            time: 0.0,
            distance: pos_a.distance(pos_b),
            point_a: pos_a,
            point_b: pos_b,
        };
    }

    let time = -d_p.dot(d_v) / rel_speed_sq;
    let point_a = pos_a + vel_a * time;
    let point_b = pos_b + vel_b * time;
    ClosestApproach {
        time,
        distance: point_a.distance(point_b),
        point_a,
        point_b,
    }
}
