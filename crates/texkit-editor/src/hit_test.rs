//! Plane hit-testing: which plane boundary a click falls inside.

use texkit_core::{point_in_quad, Vec2};

use crate::engine::PlaneBoundary;

/// Returns the index of the first plane whose boundary contains `point`,
/// or `None` when the point is inside no plane.
///
/// Planes are tested in list order and the first hit wins. Points exactly
/// on a boundary edge count as outside, so a point on the shared edge of
/// two adjacent planes resolves to neither.
pub fn hit_test_planes(point: Vec2, planes: &[PlaneBoundary]) -> Option<usize> {
    planes
        .iter()
        .position(|plane| point_in_quad(point, &plane.corners))
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn quad(x: f64, y: f64, size: f64) -> PlaneBoundary {
        PlaneBoundary {
            corners: [
                Vec2::new(x, y),
                Vec2::new(x + size, y),
                Vec2::new(x + size, y + size),
                Vec2::new(x, y + size),
            ],
            texture: Uuid::nil(),
        }
    }

    #[test]
    fn test_first_containing_plane_wins() {
        // Second and third overlap around (25, 5).
        let planes = [quad(0.0, 0.0, 10.0), quad(20.0, 0.0, 10.0), quad(24.0, 0.0, 10.0)];
        assert_eq!(hit_test_planes(Vec2::new(5.0, 5.0), &planes), Some(0));
        assert_eq!(hit_test_planes(Vec2::new(25.0, 5.0), &planes), Some(1));
        assert_eq!(hit_test_planes(Vec2::new(31.0, 5.0), &planes), Some(2));
        assert_eq!(hit_test_planes(Vec2::new(50.0, 50.0), &planes), None);
    }

    #[test]
    fn test_shared_edge_resolves_to_neither_plane() {
        // Two planes sharing the edge x = 10.
        let planes = [quad(0.0, 0.0, 10.0), quad(10.0, 0.0, 10.0)];
        assert_eq!(hit_test_planes(Vec2::new(10.0, 5.0), &planes), None);
    }

    #[test]
    fn test_empty_plane_list() {
        assert_eq!(hit_test_planes(Vec2::new(0.0, 0.0), &[]), None);
    }
}
