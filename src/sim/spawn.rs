//! Initial body population
//!
//! Creation is the only place constraints are consulted; after spawn the
//! collection lives for the session and is only mutated in place.

use glam::Vec2;
use rand::Rng;

use super::state::{Body, Color, Viewport};
use crate::config::SpawnConstraints;

/// Create `count` bodies inside the viewport.
///
/// Radius is sampled first, then x and y inside `[radius, dim - radius]` so
/// every body starts fully contained. Bodies are not checked against each
/// other - overlap at spawn is allowed and resolved by the first collision
/// pass. Pure given the RNG.
///
/// A radius above half of a viewport dimension inverts the containment band
/// and panics in the sampler; constraints are the caller's to keep sane.
pub fn spawn(
    count: usize,
    viewport: Viewport,
    constraints: &SpawnConstraints,
    rng: &mut impl Rng,
) -> Vec<Body> {
    (0..count)
        .map(|_| {
            let radius = rng.random_range(constraints.min_radius..=constraints.max_radius);
            let pos = Vec2::new(
                rng.random_range(radius..=viewport.width - radius),
                rng.random_range(radius..=viewport.height - radius),
            );
            let vel = Vec2::new(
                rng.random_range(constraints.min_velocity_x..=constraints.max_velocity_x),
                rng.random_range(constraints.min_velocity_y..=constraints.max_velocity_y),
            );
            let color = Color::new(
                rng.random_range(0..=255),
                rng.random_range(0..=255),
                rng.random_range(0..=255),
            );

            Body {
                pos,
                vel,
                radius,
                color,
                mass: constraints.mass,
            }
        })
        .collect()
}
