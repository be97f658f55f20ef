//! Unit tests for the path model.

#[cfg(test)]
mod construction {
    use steer_core::{PathId, Vec2};

    use crate::{Path, PathError};

    #[test]
    fn rejects_fewer_than_two_waypoints() {
        let err = Path::from_coords(PathId(0), &[1.0], &[2.0]).unwrap_err();
        assert!(matches!(err, PathError::TooFewWaypoints { got: 1 }));
    }

    #[test]
    fn rejects_length_mismatch() {
        let err = Path::from_coords(PathId(0), &[0.0, 1.0, 2.0], &[0.0, 1.0]).unwrap_err();
        assert!(matches!(err, PathError::LengthMismatch { xs: 3, ys: 2 }));
    }

    #[test]
    fn rejects_zero_length_segment() {
        let err = Path::from_coords(PathId(0), &[0.0, 5.0, 5.0, 9.0], &[0.0, 0.0, 0.0, 0.0])
            .unwrap_err();
        assert!(matches!(err, PathError::ZeroLengthSegment { index: 1 }));
    }

    #[test]
    fn arclength_tables() {
        // 3-4-5 triangle legs: lengths 3 then 4, total 7.
        let path = Path::from_coords(PathId(1), &[0.0, 3.0, 3.0], &[0.0, 0.0, 4.0]).unwrap();
        assert_eq!(path.segment_count(), 2);
        assert_eq!(path.distances(), &[0.0, 3.0, 7.0]);

        let params = path.params();
        assert_eq!(params[0], 0.0);
        assert!((params[1] - 3.0 / 7.0).abs() < 1e-12);
        assert_eq!(params[2], 1.0);
        assert!(params.windows(2).all(|w| w[0] <= w[1]), "params not monotone");
    }

    #[test]
    fn from_waypoint_list() {
        let path = Path::new(
            PathId(2),
            vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0)],
        )
        .unwrap();
        assert_eq!(path.id(), PathId(2));
        assert!((path.length() - 2.0_f64.sqrt()).abs() < 1e-12);
    }
}

#[cfg(test)]
mod queries {
    use steer_core::{PathId, Vec2};

    use crate::Path;

    /// The zig-zag start used throughout: (0,90) → (-20,65) → (20,40).
    fn zigzag() -> Path {
        Path::from_coords(PathId(1), &[0.0, -20.0, 20.0], &[90.0, 65.0, 40.0]).unwrap()
    }

    #[test]
    fn position_at_endpoints() {
        let path = zigzag();
        assert!(path.position_at(0.0).distance(Vec2::new(0.0, 90.0)) < 1e-12);
        assert!(path.position_at(1.0).distance(Vec2::new(20.0, 40.0)) < 1e-12);
    }

    #[test]
    fn position_at_interior_vertex() {
        let path = zigzag();
        let u = path.params()[1];
        assert!(path.position_at(u).distance(Vec2::new(-20.0, 65.0)) < 1e-9);
    }

    #[test]
    fn position_at_clamps_out_of_range() {
        let path = zigzag();
        assert!(path.position_at(-0.5).distance(Vec2::new(0.0, 90.0)) < 1e-12);
        assert!(path.position_at(1.5).distance(Vec2::new(20.0, 40.0)) < 1e-12);
    }

    #[test]
    fn param_at_closest_midpoint_of_first_segment() {
        // A query exactly on the midpoint of the first segment must return
        // half of that segment's normalized parameter span.
        let path = zigzag();
        let mid = Vec2::new(-10.0, 77.5);
        let u = path.param_at_closest(mid);
        assert!((u - 0.5 * path.params()[1]).abs() < 1e-12, "got {u}");
    }

    #[test]
    fn param_position_round_trip() {
        let path = zigzag();
        let query = Vec2::new(-10.0, 77.5);
        let u = path.param_at_closest(query);
        let back = path.position_at(u);
        assert!(back.distance(query) < 1e-9, "round trip drifted to {back}");
    }

    #[test]
    fn off_path_query_projects_onto_nearest_segment() {
        let path = zigzag();
        // Well past the final waypoint: closest point is the path end.
        let u = path.param_at_closest(Vec2::new(100.0, -20.0));
        assert!((u - 1.0).abs() < 1e-12);
        // Before the start: closest point is the path start.
        let u = path.param_at_closest(Vec2::new(10.0, 120.0));
        assert!(u.abs() < 1e-12);
    }

    #[test]
    fn tie_breaks_to_first_segment() {
        // Symmetric V: the query below the apex is equidistant from both
        // segments; the first segment must win.
        let path = Path::from_coords(PathId(0), &[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0]).unwrap();
        let u = path.param_at_closest(Vec2::new(1.0, 0.0));
        assert!((u - 0.25).abs() < 1e-12, "expected first-segment param, got {u}");
    }
}

#[cfg(test)]
mod set {
    use steer_core::PathId;

    use crate::{Path, PathError, PathSet};

    #[test]
    fn lookup_by_id() {
        let mut set = PathSet::empty();
        set.push(Path::from_coords(PathId(3), &[0.0, 1.0], &[0.0, 0.0]).unwrap());
        assert!(set.contains(PathId(3)));
        assert_eq!(set.get(PathId(3)).unwrap().id(), PathId(3));
    }

    #[test]
    fn unknown_id_errors() {
        let set = PathSet::empty();
        assert!(matches!(
            set.get(PathId(9)),
            Err(PathError::UnknownPath(PathId(9)))
        ));
    }
}
