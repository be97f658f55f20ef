//! The `Path` polyline and its parameter queries.
//!
//! A path is an ordered sequence of N ≥ 2 waypoints with two derived tables
//! of length N:
//!
//! - `distance[i]` — cumulative arclength from the start to waypoint `i`
//!   (`distance[0] == 0`);
//! - `param[i]`    — `distance[i]` normalized by the total length, so the
//!   table runs monotonically from 0 to 1.
//!
//! Both tables are computed once at construction; a `Path` is immutable
//! afterwards.  Degenerate geometry (consecutive duplicate waypoints) is
//! rejected at construction so the interpolation queries never divide by a
//! zero segment length.

use steer_core::{PathId, Vec2, closest_point_on_segment};

use crate::error::{PathError, PathResult};

/// An immutable polyline parametrized by normalized arclength in `[0, 1]`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    id: PathId,
    points: Vec<Vec2>,
    distance: Vec<f64>,
    param: Vec<f64>,
}

impl Path {
    /// Build a path from parallel x/y coordinate slices.
    ///
    /// Fails if the slices differ in length, hold fewer than 2 waypoints, or
    /// contain a zero-length segment.
    pub fn from_coords(id: PathId, xs: &[f64], ys: &[f64]) -> PathResult<Path> {
        if xs.len() != ys.len() {
            return Err(PathError::LengthMismatch {
                xs: xs.len(),
                ys: ys.len(),
            });
        }
        let points: Vec<Vec2> = xs
            .iter()
            .zip(ys)
            .map(|(&x, &y)| Vec2::new(x, y))
            .collect();
        Path::new(id, points)
    }

    /// Build a path from a waypoint list.  See [`from_coords`](Self::from_coords).
    pub fn new(id: PathId, points: Vec<Vec2>) -> PathResult<Path> {
        if points.len() < 2 {
            return Err(PathError::TooFewWaypoints { got: points.len() });
        }

        let mut distance = vec![0.0; points.len()];
        for i in 1..points.len() {
            let seg = points[i - 1].distance(points[i]);
            if seg == 0.0 {
                return Err(PathError::ZeroLengthSegment { index: i - 1 });
            }
            distance[i] = distance[i - 1] + seg;
        }

        let total = distance[points.len() - 1];
        let param = distance.iter().map(|&d| d / total).collect();

        Ok(Path {
            id,
            points,
            distance,
            param,
        })
    }

    #[inline]
    pub fn id(&self) -> PathId {
        self.id
    }

    /// Number of line segments (= waypoint count − 1).
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.points.len() - 1
    }

    /// Total arclength.
    #[inline]
    pub fn length(&self) -> f64 {
        self.distance[self.points.len() - 1]
    }

    #[inline]
    pub fn waypoints(&self) -> &[Vec2] {
        &self.points
    }

    /// Position on the path at normalized parameter `u`.
    ///
    /// Boundary policy: `u` is clamped to `[0, 1]` — out-of-range parameters
    /// resolve to the nearest endpoint, never extrapolate beyond the path.
    pub fn position_at(&self, u: f64) -> Vec2 {
        let u = u.clamp(0.0, 1.0);

        // Last segment whose start parameter is ≤ u.  The final waypoint's
        // parameter (1.0) starts no segment, hence the cap.
        let i = self
            .param
            .iter()
            .take(self.segment_count())
            .rposition(|&p| p <= u)
            .unwrap_or(0);

        let a = self.points[i];
        let b = self.points[i + 1];
        let t = (u - self.param[i]) / (self.param[i + 1] - self.param[i]);
        a + (b - a) * t
    }

    /// Normalized parameter of the point on the path closest to `position`.
    ///
    /// Scans every segment; ties keep the first (lowest-index) segment.  The
    /// parameter is interpolated by the closest point's arclength fraction
    /// across the winning segment.
    pub fn param_at_closest(&self, position: Vec2) -> f64 {
        let mut best_distance = f64::INFINITY;
        let mut best_segment = 0;
        let mut best_point = self.points[0];

        for i in 0..self.segment_count() {
            let a = self.points[i];
            let b = self.points[i + 1];
            let candidate = closest_point_on_segment(position, a, b);
            let d = position.distance(candidate);
            if d < best_distance {
                best_distance = d;
                best_segment = i;
                best_point = candidate;
            }
        }

        let a = self.points[best_segment];
        let b = self.points[best_segment + 1];
        let a_param = self.param[best_segment];
        let b_param = self.param[best_segment + 1];
        let t = a.distance(best_point) / a.distance(b);
        a_param + t * (b_param - a_param)
    }

    /// The parameter table (monotone, `param[0] == 0`, last entry `1`).
    #[inline]
    pub fn params(&self) -> &[f64] {
        &self.param
    }

    /// The cumulative arclength table (`distance[0] == 0`).
    #[inline]
    pub fn distances(&self) -> &[f64] {
        &self.distance
    }
}
