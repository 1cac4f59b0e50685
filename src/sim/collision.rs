//! Collision detection and response
//!
//! Two kinds of contact exist in this world: balls against the window walls
//! (reflective bounce) and balls against each other. Ball-ball contact has no
//! momentum exchange; overlapping pairs are pushed apart positionally and mix
//! paint, nothing more.

use glam::Vec2;

/// Check whether two circles overlap (touching counts)
#[inline]
pub fn circles_overlap(pos_a: Vec2, radius_a: f32, pos_b: Vec2, radius_b: f32) -> bool {
    let rr = radius_a + radius_b;
    pos_a.distance_squared(pos_b) <= rr * rr
}

/// Reflective wall bounce against the window rectangle.
///
/// Clamps the center into `[radius, width - radius]` x `[radius, height -
/// radius]` and negates the velocity component pointing into the wall. The
/// sign guard keeps a ball that is already escaping an overlap (e.g. spit
/// near a wall) from being re-reversed into it.
pub fn wall_bounce(pos: &mut Vec2, vel: &mut Vec2, radius: f32, width: f32, height: f32) {
    if pos.x - radius < 0.0 {
        pos.x = radius;
        if vel.x < 0.0 {
            vel.x = -vel.x;
        }
    } else if pos.x + radius > width {
        pos.x = width - radius;
        if vel.x > 0.0 {
            vel.x = -vel.x;
        }
    }
    if pos.y - radius < 0.0 {
        pos.y = radius;
        if vel.y < 0.0 {
            vel.y = -vel.y;
        }
    } else if pos.y + radius > height {
        pos.y = height - radius;
        if vel.y > 0.0 {
            vel.y = -vel.y;
        }
    }
}

/// Push an overlapping pair apart along the line connecting their centers
/// until they just touch. Returns true if the pair overlapped.
///
/// The displacement is split inversely proportional to radius: the smaller
/// ball gives way more, equal radii split evenly. Velocities are untouched.
pub fn separate_pair(pos_a: &mut Vec2, radius_a: f32, pos_b: &mut Vec2, radius_b: f32) -> bool {
    let target = radius_a + radius_b;
    let delta = *pos_b - *pos_a;
    let dist_sq = delta.length_squared();
    if dist_sq >= target * target {
        return false;
    }

    let dist = dist_sq.sqrt();
    // Coincident centers have no separation axis; pick a fixed one
    let normal = if dist > 1e-6 { delta / dist } else { Vec2::X };
    let overlap = target - dist;

    let share_a = radius_b / target;
    let share_b = radius_a / target;
    *pos_a -= normal * overlap * share_a;
    *pos_b += normal * overlap * share_b;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_wall_bounce_reflects_normal_component() {
        // Ball overlapping the left wall, moving left and down
        let mut pos = Vec2::new(3.0, 300.0);
        let mut vel = Vec2::new(-3.0, -4.0);
        wall_bounce(&mut pos, &mut vel, 5.0, 960.0, 600.0);
        assert_eq!(vel, Vec2::new(3.0, -4.0));
        assert_eq!(pos.x, 5.0);
        assert_eq!(pos.y, 300.0);
    }

    #[test]
    fn test_wall_bounce_does_not_rereverse_escaping_ball() {
        let mut pos = Vec2::new(3.0, 300.0);
        let mut vel = Vec2::new(3.0, -4.0);
        wall_bounce(&mut pos, &mut vel, 5.0, 960.0, 600.0);
        // Already moving away from the left wall; only the clamp applies
        assert_eq!(vel, Vec2::new(3.0, -4.0));
        assert_eq!(pos.x, 5.0);
    }

    #[test]
    fn test_wall_bounce_corner() {
        let mut pos = Vec2::new(958.0, 599.0);
        let mut vel = Vec2::new(10.0, 20.0);
        wall_bounce(&mut pos, &mut vel, 5.0, 960.0, 600.0);
        assert_eq!(pos, Vec2::new(955.0, 595.0));
        assert_eq!(vel, Vec2::new(-10.0, -20.0));
    }

    #[test]
    fn test_separate_pair_pushes_to_touching() {
        // Radii 5 and 5, centers 8 apart: must end at distance >= 10
        let mut a = Vec2::new(0.0, 0.0);
        let mut b = Vec2::new(8.0, 0.0);
        assert!(separate_pair(&mut a, 5.0, &mut b, 5.0));
        let dist = a.distance(b);
        assert!(dist >= 10.0 - 1e-4, "still overlapping: {dist}");
        // Equal radii split the correction evenly
        assert!((a.x - (-1.0)).abs() < 1e-4);
        assert!((b.x - 9.0).abs() < 1e-4);
    }

    #[test]
    fn test_separate_pair_smaller_ball_moves_more() {
        let mut small = Vec2::new(0.0, 0.0);
        let mut big = Vec2::new(10.0, 0.0);
        separate_pair(&mut small, 4.0, &mut big, 12.0);
        // Overlap of 6, split 12/16 to the small ball and 4/16 to the big
        assert!((small.x - (-4.5)).abs() < 1e-4);
        assert!((big.x - 11.5).abs() < 1e-4);
    }

    #[test]
    fn test_separate_pair_no_overlap_is_noop() {
        let mut a = Vec2::new(0.0, 0.0);
        let mut b = Vec2::new(20.0, 0.0);
        assert!(!separate_pair(&mut a, 5.0, &mut b, 5.0));
        assert_eq!(a, Vec2::ZERO);
        assert_eq!(b, Vec2::new(20.0, 0.0));
    }

    #[test]
    fn test_separate_pair_coincident_centers() {
        let mut a = Vec2::new(50.0, 50.0);
        let mut b = Vec2::new(50.0, 50.0);
        assert!(separate_pair(&mut a, 5.0, &mut b, 5.0));
        assert!(a.distance(b) >= 10.0 - 1e-4);
    }

    proptest! {
        #[test]
        fn separation_removes_overlap(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            ra in 1.0f32..50.0, rb in 1.0f32..50.0,
        ) {
            let mut a = Vec2::new(ax, ay);
            let mut b = Vec2::new(bx, by);
            separate_pair(&mut a, ra, &mut b, rb);
            prop_assert!(a.distance(b) >= (ra + rb) - 1e-3);
        }

        #[test]
        fn wall_bounce_preserves_speed_and_stays_inside(
            px in -100.0f32..1100.0, py in -100.0f32..700.0,
            vx in -300.0f32..300.0, vy in -300.0f32..300.0,
            radius in 1.0f32..20.0,
        ) {
            let mut pos = Vec2::new(px, py);
            let mut vel = Vec2::new(vx, vy);
            let speed_before = vel.length();
            wall_bounce(&mut pos, &mut vel, radius, 960.0, 600.0);
            prop_assert!((vel.length() - speed_before).abs() < 1e-3);
            prop_assert!(pos.x >= radius && pos.x <= 960.0 - radius);
            prop_assert!(pos.y >= radius && pos.y <= 600.0 - radius);
        }
    }
}
