//! Spaceship versus planet collision checks
//!
//! The ship has no transform of its own: it is rendered a fixed distance in
//! front of the camera, and its collision box is a cube around that point.
//! Planet counts stay small (the streamer culls everything behind the camera)
//! so a linear scan per frame is enough.

use crate::foundation::math::Vec3;
use crate::physics::Aabb;
use crate::render::Camera;
use crate::world::Planet;

/// A detected ship/planet overlap
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionReport {
    /// Index of the planet in the slice that was checked
    pub planet_index: usize,
    /// Center of the planet that was hit
    pub planet_position: Vec3,
    /// Ship volume at the time of the hit
    pub ship_bounds: Aabb,
}

/// Ship placement and collision volume relative to the camera
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionChecker {
    ship_offset: f32,
    ship_half_extent: f32,
}

impl CollisionChecker {
    /// Ship `ship_offset` units along the view direction with a cube of `ship_half_extent`
    pub fn new(ship_offset: f32, ship_half_extent: f32) -> Self {
        Self {
            ship_offset,
            ship_half_extent,
        }
    }

    /// World-space ship position for the current camera
    pub fn ship_position(&self, camera: &Camera) -> Vec3 {
        camera.position() + camera.view_direction() * self.ship_offset
    }

    /// Ship collision volume for the current camera
    pub fn ship_bounds(&self, camera: &Camera) -> Aabb {
        Aabb::from_center_half_extent(self.ship_position(camera), self.ship_half_extent)
    }

    /// First planet overlapping the ship, if any
    pub fn check(&self, camera: &Camera, planets: &[Planet]) -> Option<CollisionReport> {
        let ship_bounds = self.ship_bounds(camera);
        planets
            .iter()
            .position(|planet| ship_bounds.intersects(planet.bounds()))
            .map(|planet_index| CollisionReport {
                planet_index,
                planet_position: planets[planet_index].position(),
                ship_bounds,
            })
    }
}

impl Default for CollisionChecker {
    fn default() -> Self {
        Self::new(10.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ship_sits_in_front_of_camera() {
        let checker = CollisionChecker::default();
        let camera = Camera::new(Vec3::zeros(), 0.0, -90.0);
        assert_relative_eq!(checker.ship_position(&camera), Vec3::new(0.0, 0.0, -10.0), epsilon = 1e-5);

        let bounds = checker.ship_bounds(&camera);
        assert_relative_eq!(bounds.extents(), Vec3::repeat(1.0), epsilon = 1e-5);
    }

    #[test]
    fn test_planet_on_ship_collides() {
        let checker = CollisionChecker::default();
        let camera = Camera::new(Vec3::new(0.0, 5.0, 20.0), -15.0, -90.0);
        let ship = checker.ship_position(&camera);
        let planets = vec![
            Planet::new(Vec3::new(500.0, 0.0, -1000.0), 10.0, 3.0),
            Planet::new(ship, 1.0, 3.0),
        ];

        let report = checker.check(&camera, &planets).expect("collision");
        assert_eq!(report.planet_index, 1);
        assert_relative_eq!(report.planet_position, ship);
    }

    #[test]
    fn test_near_miss_does_not_collide() {
        let checker = CollisionChecker::default();
        let camera = Camera::new(Vec3::zeros(), 0.0, -90.0);
        // Planet box half extent 3, ship half extent 1: separated by more than 4 on X
        let planets = vec![Planet::new(Vec3::new(4.5, 0.0, -10.0), 1.0, 3.0)];
        assert!(checker.check(&camera, &planets).is_none());

        // Touching boxes collide
        let planets = vec![Planet::new(Vec3::new(4.0, 0.0, -10.0), 1.0, 3.0)];
        assert!(checker.check(&camera, &planets).is_some());
    }

    #[test]
    fn test_empty_field() {
        let checker = CollisionChecker::default();
        assert!(checker.check(&Camera::default(), &[]).is_none());
    }
}
