//! Per-frame physics advance
//!
//! One pass over the collection per displayed frame, bodies visited in
//! order. Each body runs collision response, wall reflection and the
//! pointer test against its pre-step position, then integrates - so later
//! bodies in the same pass collide against already-advanced positions of
//! earlier ones. That ordering matches the animation's observed behavior
//! and is kept.

use glam::Vec2;

use super::collision::{circles_overlap, elastic_impulse, reflect_walls};
use super::state::{Body, Viewport};
use crate::consts::POINTER_RADIUS;

/// Advance every body by one time unit, mutating the slice in place.
///
/// Per body: pairwise elastic response against every other body, look-ahead
/// wall reflection, pointer proximity, explicit Euler integration. Pairs
/// are visited from both directions; the separating-pair guard in
/// [`elastic_impulse`] keeps the reverse visit from re-kicking a pair the
/// forward visit already resolved, but when the interleaved integration
/// brings them back into approach the impulse does land again. Both-sides
/// processing is an observable property of the simulation, not an accident.
///
/// Returns one flag per body: whether it overlaps the active pointer this
/// frame. With no pointer every flag is false.
pub fn advance(bodies: &mut [Body], viewport: Viewport, pointer: Option<Vec2>) -> Vec<bool> {
    let mut touched = vec![false; bodies.len()];

    for i in 0..bodies.len() {
        for j in 0..bodies.len() {
            if i == j {
                continue;
            }
            let (body, other) = pair_mut(bodies, i, j);
            if circles_overlap(body.pos, body.radius, other.pos, other.radius) {
                elastic_impulse(body, other);
            }
        }

        let body = &mut bodies[i];
        reflect_walls(body, viewport);

        if let Some(p) = pointer {
            touched[i] = circles_overlap(p, POINTER_RADIUS, body.pos, body.radius);
        }

        body.pos += body.vel;
    }

    touched
}

/// Mutable references to two distinct bodies of the slice.
fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    debug_assert_ne!(i, j);
    if i < j {
        let (head, tail) = bodies.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    } else {
        let (head, tail) = bodies.split_at_mut(i);
        (&mut tail[0], &mut head[j])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Color;
    use proptest::prelude::*;

    fn body(x: f32, y: f32, vx: f32, vy: f32, radius: f32) -> Body {
        Body {
            pos: Vec2::new(x, y),
            vel: Vec2::new(vx, vy),
            radius,
            color: Color::new(255, 255, 255),
            mass: 1.0,
        }
    }

    #[test]
    fn test_head_on_exchange_after_one_step() {
        let viewport = Viewport::new(600.0, 400.0);
        let mut bodies = [
            body(10.0, 10.0, 2.0, 0.0, 5.0),
            body(14.0, 10.0, -2.0, 0.0, 5.0),
        ];

        advance(&mut bodies, viewport, None);

        // Equal masses swap velocities; the reverse visit sees a separating
        // pair and leaves them alone.
        assert!((bodies[0].vel.x - (-2.0)).abs() < 1e-4);
        assert!((bodies[1].vel.x - 2.0).abs() < 1e-4);
        // Both integrated with their post-collision velocity
        assert!((bodies[0].pos.x - 8.0).abs() < 1e-4);
        assert!((bodies[1].pos.x - 16.0).abs() < 1e-4);
    }

    #[test]
    fn test_later_bodies_see_advanced_positions() {
        // b0 is out of range of b1 until it integrates; the collision then
        // happens during b1's turn of the same pass.
        let viewport = Viewport::new(600.0, 400.0);
        let mut bodies = [
            body(100.0, 100.0, 10.0, 0.0, 10.0),
            body(130.0, 100.0, 0.0, 0.0, 10.0),
        ];

        advance(&mut bodies, viewport, None);

        assert_eq!(bodies[0].pos, Vec2::new(110.0, 100.0));
        assert!((bodies[0].vel.x - 0.0).abs() < 1e-4);
        assert!((bodies[1].vel.x - 10.0).abs() < 1e-4);
        assert!((bodies[1].pos.x - 140.0).abs() < 1e-4);
    }

    #[test]
    fn test_separating_overlap_only_integrates() {
        let viewport = Viewport::new(600.0, 400.0);
        let mut bodies = [
            body(100.0, 100.0, -1.0, 0.0, 5.0),
            body(104.0, 100.0, 1.0, 0.0, 5.0),
        ];

        advance(&mut bodies, viewport, None);

        assert_eq!(bodies[0].vel, Vec2::new(-1.0, 0.0));
        assert_eq!(bodies[1].vel, Vec2::new(1.0, 0.0));
        assert_eq!(bodies[0].pos, Vec2::new(99.0, 100.0));
        assert_eq!(bodies[1].pos, Vec2::new(105.0, 100.0));
    }

    #[test]
    fn test_wall_flip_happens_before_exit() {
        let viewport = Viewport::new(600.0, 400.0);
        let mut bodies = [body(5.0, 200.0, -1.0, 0.0, 5.0)];

        advance(&mut bodies, viewport, None);

        assert_eq!(bodies[0].vel.x, 1.0);
        assert_eq!(bodies[0].pos.x, 6.0);
    }

    #[test]
    fn test_pointer_touch_flags() {
        let viewport = Viewport::new(600.0, 400.0);
        let mut bodies = [
            body(100.0, 100.0, 0.0, 0.0, 10.0),
            body(500.0, 300.0, 0.0, 0.0, 10.0),
        ];

        // Pointer radius is 100: body 0 at distance 50 touches, body 1 does
        // not.
        let touched = advance(&mut bodies, viewport, Some(Vec2::new(150.0, 100.0)));
        assert_eq!(touched, vec![true, false]);

        // No active pointer, no touches
        let touched = advance(&mut bodies, viewport, None);
        assert_eq!(touched, vec![false, false]);
    }

    proptest! {
        // Containment under wall reflection: a lone body spawned inside the
        // band with frame velocities well below the band width never leaves
        // the viewport.
        #[test]
        fn test_lone_body_stays_contained(
            radius in 5.0f32..20.0,
            fx in 0.0f32..1.0,
            fy in 0.0f32..1.0,
            vx in -6.0f32..6.0,
            vy in -6.0f32..6.0,
        ) {
            let viewport = Viewport::new(600.0, 400.0);
            let x = radius + fx * (viewport.width - 2.0 * radius);
            let y = radius + fy * (viewport.height - 2.0 * radius);
            let mut bodies = [body(x, y, vx, vy, radius)];

            for _ in 0..1000 {
                advance(&mut bodies, viewport, None);
                let b = &bodies[0];
                prop_assert!(b.pos.x >= b.radius - 1e-3);
                prop_assert!(b.pos.x <= viewport.width - b.radius + 1e-3);
                prop_assert!(b.pos.y >= b.radius - 1e-3);
                prop_assert!(b.pos.y <= viewport.height - b.radius + 1e-3);
            }
        }
    }
}
