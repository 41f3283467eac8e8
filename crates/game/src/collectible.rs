//! Collectibles and proximity pickup.

use engine_core::{Vec3, Visibility, World};

/// A one-shot pickup. Once inactive it never becomes active again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collectible {
    pub position: Vec3,
    pub active: bool,
    pub value: i32,
}

impl Collectible {
    pub fn new(position: Vec3, value: i32) -> Self {
        Self {
            position,
            active: true,
            value,
        }
    }
}

/// Consumes active collectibles within reach of the player.
#[derive(Debug, Clone, Copy)]
pub struct CollectibleDetector {
    pub pickup_radius: f32,
}

impl Default for CollectibleDetector {
    fn default() -> Self {
        Self { pickup_radius: 5.0 }
    }
}

impl CollectibleDetector {
    pub fn new(pickup_radius: f32) -> Self {
        Self { pickup_radius }
    }

    /// Deactivate every active collectible strictly closer than the pickup
    /// radius and hide its visual. Returns the points gained.
    pub fn detect(&self, player_position: Vec3, world: &mut World) -> i32 {
        let r2 = self.pickup_radius * self.pickup_radius;
        let mut gained = 0;
        for (entity, (c, vis)) in world.query_mut::<(&mut Collectible, Option<&mut Visibility>)>() {
            if !c.active || c.position.distance_squared(player_position) >= r2 {
                continue;
            }
            c.active = false;
            if let Some(vis) = vis {
                *vis = Visibility::hidden();
            }
            gained += c.value;
            log::info!("Picked up {:?} at {:?} (+{})", entity, c.position, c.value);
        }
        gained
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world_with(position: Vec3) -> (World, engine_core::Entity) {
        let mut world = World::new();
        let e = world.spawn((Collectible::new(position, 1), Visibility::visible()));
        (world, e)
    }

    #[test]
    fn pickup_needs_matching_height() {
        let d = CollectibleDetector::default();
        let (mut world, e) = world_with(Vec3::new(3.0, 1.5, 0.0));

        assert_eq!(d.detect(Vec3::new(0.0, 10.0, 0.0), &mut world), 0);
        assert_eq!(d.detect(Vec3::new(2.0, 10.0, 0.0), &mut world), 0);
        assert!(world.get::<&Collectible>(e).unwrap().active);

        assert_eq!(d.detect(Vec3::new(2.0, 1.5, 0.0), &mut world), 1);
        assert!(!world.get::<&Collectible>(e).unwrap().active);
        assert!(!world.get::<&Visibility>(e).unwrap().is_visible());
    }

    #[test]
    fn each_collectible_pays_once() {
        let d = CollectibleDetector::default();
        let mut world = World::new();
        world.spawn((Collectible::new(Vec3::ZERO, 3), Visibility::visible()));
        let mut total = 0;
        for _ in 0..100 {
            total += d.detect(Vec3::new(1.0, 0.0, 0.0), &mut world);
        }
        assert_eq!(total, 3);
    }

    #[test]
    fn radius_is_strict() {
        let d = CollectibleDetector::default();
        let (mut world, _) = world_with(Vec3::ZERO);
        assert_eq!(d.detect(Vec3::new(5.0, 0.0, 0.0), &mut world), 0);
        assert_eq!(d.detect(Vec3::new(4.99, 0.0, 0.0), &mut world), 1);
    }

    #[test]
    fn several_in_range_same_frame() {
        let d = CollectibleDetector::default();
        let mut world = World::new();
        for x in [-2.0, 0.0, 2.0, 50.0] {
            world.spawn((Collectible::new(Vec3::new(x, 0.0, 0.0), 1), Visibility::visible()));
        }
        assert_eq!(d.detect(Vec3::ZERO, &mut world), 3);
        let remaining = world
            .query_mut::<&Collectible>()
            .into_iter()
            .filter(|(_, c)| c.active)
            .count();
        assert_eq!(remaining, 1);
    }

    #[test]
    fn collectible_without_visual_still_counts() {
        let d = CollectibleDetector::default();
        let mut world = World::new();
        world.spawn((Collectible::new(Vec3::ZERO, 1),));
        assert_eq!(d.detect(Vec3::ZERO, &mut world), 1);
    }

    #[test]
    fn scans_thousands() {
        let d = CollectibleDetector::default();
        let mut world = World::new();
        for i in 0..5000 {
            let x = (i % 100) as f32 * 20.0;
            let z = (i / 100) as f32 * 20.0;
            world.spawn((Collectible::new(Vec3::new(x, 0.0, z), 1), Visibility::visible()));
        }
        for _ in 0..60 {
            d.detect(Vec3::new(-500.0, 0.0, -500.0), &mut world);
        }
        assert_eq!(d.detect(Vec3::new(0.0, 0.0, 0.0), &mut world), 1);
    }
}
