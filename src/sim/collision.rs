//! Circle collision detection and response
//!
//! Overlap is a plain center-distance test; the response is the two-body
//! elastic impulse applied to both velocities in place. Wall handling is a
//! look-ahead reflection: a velocity axis flips on the frame before the body
//! would cross the viewport edge, never after penetration.

use glam::Vec2;

use super::state::{Body, Viewport};

/// Two circles collide iff the distance between centers is at most the sum
/// of their radii - touching counts.
pub fn circles_overlap(p1: Vec2, r1: f32, p2: Vec2, r2: f32) -> bool {
    p1.distance(p2) <= r1 + r2
}

/// Elastic two-body collision response.
///
/// With `d = p1 - p2` and `j = 2 (v1 - v2)·d / ((m1 + m2) |d|²)`, applies
/// `v1 -= m1 j d` and `v2 += m2 j d`. Pairs that are already separating
/// (`(v1 - v2)·d >= 0`) are left untouched so a sustained overlap does not
/// jitter or stick.
pub fn elastic_impulse(b1: &mut Body, b2: &mut Body) {
    let delta = b1.pos - b2.pos;
    let rel_vel = b1.vel - b2.vel;

    let approach = rel_vel.dot(delta);
    if approach >= 0.0 {
        return;
    }

    let dist_sq = delta.length_squared();
    let impulse = 2.0 * approach / ((b1.mass + b2.mass) * dist_sq);

    b1.vel -= b1.mass * impulse * delta;
    b2.vel += b2.mass * impulse * delta;
}

/// Look-ahead wall reflection: negate a velocity axis when the next Euler
/// step would leave the `[radius, dimension - radius]` band on that axis.
pub fn reflect_walls(body: &mut Body, viewport: Viewport) {
    let next = body.pos + body.vel;
    if next.x > viewport.width - body.radius || next.x < body.radius {
        body.vel.x = -body.vel.x;
    }
    if next.y > viewport.height - body.radius || next.y < body.radius {
        body.vel.y = -body.vel.y;
    }
}
