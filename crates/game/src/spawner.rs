//! Scatters collectibles over the play area at session start.

use engine_core::{Entity, Vec3, Visibility};
use hecs::World;
use rand::prelude::*;

use crate::collectible::Collectible;

/// Places collectibles uniformly over a square play area at a fixed height.
pub struct CollectibleSpawner {
    /// Spawn within +/- this on x and z.
    pub half_extent: f32,
    pub height: f32,
    pub value: i32,
    /// Random number generator.
    rng: StdRng,
}

impl CollectibleSpawner {
    /// A seeded spawner reproduces the same layout; `None` uses OS entropy.
    pub fn new(half_extent: f32, height: f32, value: i32, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            half_extent,
            height,
            value,
            rng,
        }
    }

    /// Spawn `count` visible, active collectibles.
    pub fn spawn(&mut self, world: &mut World, count: usize) -> Vec<Entity> {
        let e = self.half_extent;
        (0..count)
            .map(|_| {
                let position = Vec3::new(
                    self.rng.gen_range(-e..=e),
                    self.height,
                    self.rng.gen_range(-e..=e),
                );
                world.spawn((Collectible::new(position, self.value), Visibility::visible()))
            })
            .collect()
    }
}
