//! Unit tests for steer-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, PathId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(PathId::INVALID.0, u16::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod vec2 {
    use crate::Vec2;

    const EPS: f64 = 1e-12;

    #[test]
    fn magnitude_non_negative() {
        assert_eq!(Vec2::new(3.0, 4.0).magnitude(), 5.0);
        assert_eq!(Vec2::ZERO.magnitude(), 0.0);
        assert_eq!(Vec2::new(-3.0, -4.0).magnitude(), 5.0);
    }

    #[test]
    fn normalized_is_unit_for_nonzero() {
        for v in [
            Vec2::new(3.0, 4.0),
            Vec2::new(-0.001, 0.002),
            Vec2::new(1e6, -2e6),
        ] {
            let n = v.normalized();
            assert!((n.magnitude() - 1.0).abs() < EPS, "not unit: {n}");
        }
    }

    #[test]
    fn normalized_zero_is_zero_not_error() {
        assert_eq!(Vec2::ZERO.normalized(), Vec2::ZERO);
    }

    #[test]
    fn from_angle_matches_axes() {
        let east = Vec2::from_angle(0.0);
        assert!((east.x - 1.0).abs() < EPS && east.y.abs() < EPS);
        let north = Vec2::from_angle(std::f64::consts::FRAC_PI_2);
        assert!(north.x.abs() < EPS && (north.y - 1.0).abs() < EPS);
    }

    #[test]
    fn nan_detected() {
        assert!(Vec2::new(f64::NAN, 0.0).is_nan());
        assert!(Vec2::new(0.0, f64::NAN).is_nan());
        assert!(!Vec2::new(1.0, 2.0).is_nan());
    }
}

#[cfg(test)]
mod angles {
    use std::f64::consts::PI;

    use crate::wrap_angle;

    #[test]
    fn range_is_signed_half_open() {
        // Sweep a wide range of inputs; result must always be in (-π, π].
        let mut theta = -25.0;
        while theta <= 25.0 {
            let w = wrap_angle(theta);
            assert!(w > -PI && w <= PI, "wrap_angle({theta}) = {w} out of range");
            theta += 0.037;
        }
    }

    #[test]
    fn idempotent() {
        for theta in [-7.5, -PI, 0.0, 1.0, PI, 3.0 * PI, 100.0] {
            let once = wrap_angle(theta);
            assert!((wrap_angle(once) - once).abs() < 1e-12);
        }
    }

    #[test]
    fn known_values() {
        assert!((wrap_angle(0.0)).abs() < 1e-12);
        assert!((wrap_angle(2.0 * PI)).abs() < 1e-12);
        assert!((wrap_angle(3.0 * PI) - PI).abs() < 1e-12);
        assert!((wrap_angle(-PI / 2.0) + PI / 2.0).abs() < 1e-12);
        // π maps to itself (closed upper bound).
        assert!((wrap_angle(PI) - PI).abs() < 1e-12);
    }
}

#[cfg(test)]
mod projections {
    use crate::{Vec2, closest_point_on_line, closest_point_on_segment};

    fn assert_close(got: Vec2, want: Vec2) {
        assert!(
            got.distance(want) < 1e-9,
            "expected {want}, got {got}"
        );
    }

    // Textbook projection cases: horizontal, vertical, and oblique lines,
    // with the query point inside and outside the segment's span.

    #[test]
    fn horizontal_line_inside_span() {
        let (q, a, b) = (Vec2::new(-6.0, 3.0), Vec2::new(-8.0, 5.0), Vec2::new(-4.0, 5.0));
        assert_close(closest_point_on_line(q, a, b), Vec2::new(-6.0, 5.0));
        assert_close(closest_point_on_segment(q, a, b), Vec2::new(-6.0, 5.0));
    }

    #[test]
    fn vertical_line_inside_span() {
        let (q, a, b) = (Vec2::new(3.0, 3.0), Vec2::new(1.0, 2.0), Vec2::new(1.0, 6.0));
        assert_close(closest_point_on_line(q, a, b), Vec2::new(1.0, 3.0));
        assert_close(closest_point_on_segment(q, a, b), Vec2::new(1.0, 3.0));
    }

    #[test]
    fn oblique_line_clamps_to_start() {
        let (q, a, b) = (Vec2::new(6.0, 0.0), Vec2::new(6.0, 2.0), Vec2::new(9.0, 5.0));
        // Projection parameter is negative: line answer leaves the segment.
        assert_close(closest_point_on_line(q, a, b), Vec2::new(5.0, 1.0));
        assert_close(closest_point_on_segment(q, a, b), a);
    }

    #[test]
    fn collinear_query_clamps_to_end() {
        let (q, a, b) = (Vec2::new(3.0, -3.0), Vec2::new(-1.0, -3.0), Vec2::new(2.0, -3.0));
        assert_close(closest_point_on_line(q, a, b), q);
        assert_close(closest_point_on_segment(q, a, b), b);
    }

    #[test]
    fn query_behind_start_clamps() {
        let (q, a, b) = (Vec2::new(-8.0, -3.0), Vec2::new(-7.0, -3.0), Vec2::new(-5.0, -3.0));
        assert_close(closest_point_on_line(q, a, b), q);
        assert_close(closest_point_on_segment(q, a, b), a);
    }
}

#[cfg(test)]
mod approach {
    use crate::{Vec2, closest_approach};

    #[test]
    fn zero_relative_velocity_returns_now() {
        // Equal velocities: not converging, not diverging.
        let r = closest_approach(
            Vec2::new(0.0, 0.0),
            Vec2::new(3.0, -1.0),
            Vec2::new(6.0, 8.0),
            Vec2::new(3.0, -1.0),
        );
        assert_eq!(r.time, 0.0);
        assert!((r.distance - 10.0).abs() < 1e-12);
        assert_eq!(r.point_a, Vec2::new(0.0, 0.0));
        assert_eq!(r.point_b, Vec2::new(6.0, 8.0));
    }

    #[test]
    fn head_on_collision_course() {
        let r = closest_approach(
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(-1.0, 0.0),
        );
        assert!((r.time - 5.0).abs() < 1e-12);
        assert!(r.distance < 1e-12);
        assert!(r.point_a.distance(Vec2::new(5.0, 0.0)) < 1e-12);
    }

    #[test]
    fn diverging_pair_has_negative_time() {
        // Already past closest approach: the minimum lies in the past.
        let r = closest_approach(
            Vec2::new(0.0, 0.0),
            Vec2::new(-1.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(1.0, 0.0),
        );
        assert!(r.time < 0.0);
    }
}

#[cfg(test)]
mod time {
    use crate::{Integrator, SimClock, SimConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        assert_eq!(Tick(10) + 5, Tick(15));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(3).to_string(), "T3");
    }

    #[test]
    fn clock_time_is_tick_times_dt() {
        let mut clock = SimClock::new(0.5);
        assert_eq!(clock.time(), 0.0);
        clock.advance();
        clock.advance();
        clock.advance();
        assert!((clock.time() - 1.5).abs() < 1e-12);
        assert_eq!(clock.current_tick, Tick(3));
    }

    #[test]
    fn total_steps_rounds_up() {
        let mut cfg = SimConfig::default();
        cfg.delta_time = 0.5;
        cfg.stop_time = 50.0;
        assert_eq!(cfg.total_steps(), 100);

        cfg.stop_time = 125.0;
        assert_eq!(cfg.total_steps(), 250);

        // Partial final step still runs.
        cfg.delta_time = 3.0;
        cfg.stop_time = 10.0;
        assert_eq!(cfg.total_steps(), 4);
    }

    #[test]
    fn default_config() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.integrator, Integrator::NewtonEuler1);
        assert_eq!(cfg.stop_speed, SimConfig::DEFAULT_STOP_SPEED);
        assert!(!cfg.check_collisions);
    }
}

#[cfg(test)]
mod behavior {
    use std::str::FromStr;

    use crate::Behavior;

    #[test]
    fn tag_roundtrip() {
        for b in [
            Behavior::Continue,
            Behavior::Stop,
            Behavior::Align,
            Behavior::Seek,
            Behavior::Flee,
            Behavior::Arrive,
            Behavior::Pursue,
            Behavior::Wander,
            Behavior::FollowPath,
        ] {
            assert_eq!(Behavior::from_str(b.as_str()).unwrap(), b);
        }
    }

    #[test]
    fn unknown_tag_fails_fast() {
        assert!(Behavior::from_str("teleport").is_err());
        assert!(Behavior::from_str("").is_err());
    }
}

#[cfg(test)]
mod errors {
    use crate::{AgentId, SteerError};

    #[test]
    fn display_covers_the_error_surface() {
        // The full surface: agent lookup, scenario config, tag parsing.
        // Path lookup failures live in steer-path's own error type.
        let variants = [
            SteerError::AgentNotFound(AgentId(3)),
            SteerError::Config("bad scenario".into()),
            SteerError::Parse("bad tag".into()),
        ];
        let rendered: Vec<String> = variants.iter().map(ToString::to_string).collect();
        assert_eq!(rendered[0], "agent AgentId(3) not found");
        assert_eq!(rendered[1], "configuration error: bad scenario");
        assert_eq!(rendered[2], "parse error: bad tag");
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AgentRng::new(12345, AgentId(0));
        let mut r2 = AgentRng::new(12345, AgentId(0));
        for _ in 0..100 {
            let a: f64 = r1.random();
            let b: f64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_agents_differ() {
        let mut r0 = AgentRng::new(1, AgentId(0));
        let mut r1 = AgentRng::new(1, AgentId(1));
        let a: u64 = r0.random();
        let b: u64 = r1.random();
        assert_ne!(a, b, "seeds for adjacent agents should diverge");
    }

    #[test]
    fn binomial_in_open_interval() {
        let mut rng = AgentRng::new(0, AgentId(0));
        for _ in 0..1000 {
            let v = rng.binomial();
            assert!((-1.0..1.0).contains(&v));
        }
    }
}
