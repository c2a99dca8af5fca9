//! Procedural planet streaming
//!
//! Keeps a locally dense field of planets around the moving camera. New
//! batches are spawned ahead of the camera every time it travels further than
//! the trigger distance from the previous spawn point; planets that fall
//! behind the camera are dropped.

use crate::config::SpawnConfig;
use crate::foundation::math::Vec3;
use crate::render::Camera;
use crate::world::Planet;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Bounds for one generated batch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnVolume {
    /// Lower bound of the per-axis offset around the camera
    pub range_min: f32,
    /// Upper bound of the per-axis offset around the camera
    pub range_max: f32,
    /// Smallest planet scale
    pub min_scale: f32,
    /// Largest planet scale
    pub max_scale: f32,
}

impl From<&SpawnConfig> for SpawnVolume {
    fn from(config: &SpawnConfig) -> Self {
        Self {
            range_min: config.range_min,
            range_max: config.range_max,
            min_scale: config.min_scale,
            max_scale: config.max_scale,
        }
    }
}

/// What a call to [`PlanetStreamer::update`] did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamUpdate {
    /// Planets generated this frame
    pub spawned: usize,
    /// Planets culled this frame
    pub culled: usize,
}

/// Owner of the planet field
pub struct PlanetStreamer {
    planets: Vec<Planet>,
    settings: SpawnConfig,
    spawn_origin: Vec3,
    rng: StdRng,
}

impl PlanetStreamer {
    /// Create an empty streamer whose first trigger reference is `origin`
    ///
    /// A `seed` makes generation reproducible; `None` seeds from entropy.
    pub fn new(settings: SpawnConfig, seed: Option<u64>, origin: Vec3) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            planets: Vec::new(),
            settings,
            spawn_origin: origin,
            rng,
        }
    }

    /// Planets currently alive, in spawn order
    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    /// Number of live planets
    pub fn len(&self) -> usize {
        self.planets.len()
    }

    /// Whether no planet is alive
    pub fn is_empty(&self) -> bool {
        self.planets.is_empty()
    }

    /// Camera position at the last spawn trigger
    pub fn spawn_origin(&self) -> Vec3 {
        self.spawn_origin
    }

    /// Spawn settings
    pub fn settings(&self) -> &SpawnConfig {
        &self.settings
    }

    /// Append `count` random planets around `camera_position`
    ///
    /// Each axis gets a uniform offset in `[range_min, range_max]`; Z is
    /// additionally shifted by the configured ahead offset. Bounds given in
    /// either order are accepted.
    pub fn generate(&mut self, camera_position: Vec3, count: usize, volume: SpawnVolume) {
        let ahead = Vec3::new(0.0, 0.0, self.settings.ahead_offset);
        let factor = self.settings.bounding_box_scale_factor;

        self.planets.reserve(count);
        for _ in 0..count {
            let offset = Vec3::new(
                sample(&mut self.rng, volume.range_min, volume.range_max),
                sample(&mut self.rng, volume.range_min, volume.range_max),
                sample(&mut self.rng, volume.range_min, volume.range_max),
            );
            let scale = sample(&mut self.rng, volume.min_scale, volume.max_scale);
            self.planets.push(Planet::new(camera_position + offset + ahead, scale, factor));
        }
        log::debug!(
            "Generated {} planets around {:?} ({} alive)",
            count,
            camera_position,
            self.planets.len()
        );
    }

    /// Append `count` planets using the configured spawn volume
    pub fn spawn_batch(&mut self, camera_position: Vec3, count: usize) {
        let volume = SpawnVolume::from(&self.settings);
        self.generate(camera_position, count, volume);
    }

    /// Place a planet at an exact position
    pub fn insert(&mut self, position: Vec3, scale: f32) {
        let factor = self.settings.bounding_box_scale_factor;
        self.planets.push(Planet::new(position, scale, factor));
    }

    /// Per-frame streaming step
    ///
    /// Spawns a batch of `batch_size` planets when the camera has moved more
    /// than the trigger distance since the last spawn, then culls everything
    /// behind the camera. Call exactly once per frame.
    pub fn update(&mut self, camera: &Camera, batch_size: usize) -> StreamUpdate {
        let position = camera.position();
        let mut report = StreamUpdate::default();

        if (position - self.spawn_origin).norm() > self.settings.trigger_distance {
            self.spawn_batch(position, batch_size);
            self.spawn_origin = position;
            report.spawned = batch_size;
        }

        report.culled = self.cull_behind(camera);
        if report.culled > 0 {
            log::trace!("Culled {} planets behind the camera", report.culled);
        }
        report
    }

    /// Remove every planet behind the camera, keeping the order of the rest
    pub fn cull_behind(&mut self, camera: &Camera) -> usize {
        let (eye, view) = (camera.position(), camera.view_direction());
        let before = self.planets.len();
        self.planets.retain(|planet| !planet.is_behind(eye, view));
        before - self.planets.len()
    }

    /// Remove and return every planet matching `predicate`, preserving order
    pub fn remove_where(&mut self, mut predicate: impl FnMut(&Planet) -> bool) -> Vec<Planet> {
        let mut removed = Vec::new();
        self.planets.retain(|planet| {
            if predicate(planet) {
                removed.push(*planet);
                false
            } else {
                true
            }
        });
        removed
    }

    /// Drop every planet and repopulate with `count` planets around `camera_position`
    pub fn reset(&mut self, camera_position: Vec3, count: usize) {
        self.planets.clear();
        self.spawn_origin = camera_position;
        self.spawn_batch(camera_position, count);
    }
}

/// Uniform sample between two bounds in any order
///
/// Spans too wide for `gen_range` fall back to a plain lerp.
fn sample(rng: &mut StdRng, a: f32, b: f32) -> f32 {
    let (low, high) = (a.min(b), a.max(b));
    let span = high - low;
    if span.is_finite() && span < f32::MAX * 0.5 {
        rng.gen_range(low..=high)
    } else {
        low + span * rng.gen::<f32>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn streamer() -> PlanetStreamer {
        PlanetStreamer::new(SpawnConfig::default(), Some(42), Vec3::zeros())
    }

    fn facing_neg_z(position: Vec3) -> Camera {
        Camera::new(position, 0.0, -90.0)
    }

    #[test]
    fn test_generate_adds_exactly_n() {
        let mut streamer = streamer();
        streamer.spawn_batch(Vec3::zeros(), 45);
        assert_eq!(streamer.len(), 45);
        streamer.spawn_batch(Vec3::new(0.0, 0.0, -500.0), 7);
        assert_eq!(streamer.len(), 52);
        streamer.spawn_batch(Vec3::zeros(), 0);
        assert_eq!(streamer.len(), 52);
    }

    #[test]
    fn test_generate_respects_volume() {
        let mut streamer = streamer();
        let camera = Vec3::new(10.0, -20.0, 30.0);
        let volume = SpawnVolume {
            range_min: -100.0,
            range_max: 100.0,
            min_scale: 2.0,
            max_scale: 4.0,
        };
        streamer.generate(camera, 10, volume);

        let offset = streamer.settings().ahead_offset;
        assert_eq!(streamer.len(), 10);
        for planet in streamer.planets() {
            let p = planet.position();
            assert!((p.x - camera.x).abs() <= 100.0);
            assert!((p.y - camera.y).abs() <= 100.0);
            assert!((p.z - (camera.z + offset)).abs() <= 100.0);
            assert!((2.0..=4.0).contains(&planet.scale()));
            let extent = planet.scale() * streamer.settings().bounding_box_scale_factor;
            assert!((planet.bounds().extents().x - extent).abs() < 1e-3);
        }
    }

    #[test]
    fn test_generate_accepts_inverted_volume() {
        let mut streamer = streamer();
        let volume = SpawnVolume {
            range_min: 100.0,
            range_max: -100.0,
            min_scale: 4.0,
            max_scale: 2.0,
        };
        streamer.generate(Vec3::zeros(), 10, volume);

        let offset = streamer.settings().ahead_offset;
        assert_eq!(streamer.len(), 10);
        for planet in streamer.planets() {
            let p = planet.position();
            assert!(p.x.abs() <= 100.0 && p.y.abs() <= 100.0);
            assert!((p.z - offset).abs() <= 100.0);
            assert!((2.0..=4.0).contains(&planet.scale()));
        }
    }

    #[test]
    fn test_generate_survives_unbounded_volume() {
        let mut streamer = streamer();
        let volume = SpawnVolume {
            range_min: -f32::MAX,
            range_max: f32::INFINITY,
            min_scale: 1.0,
            max_scale: 1.0,
        };
        streamer.generate(Vec3::zeros(), 3, volume);
        assert_eq!(streamer.len(), 3);
        assert!(streamer.planets().iter().all(|p| p.scale() == 1.0));
    }

    #[test]
    fn test_same_seed_same_field() {
        let mut a = streamer();
        let mut b = streamer();
        a.spawn_batch(Vec3::zeros(), 20);
        b.spawn_batch(Vec3::zeros(), 20);
        assert_eq!(a.planets(), b.planets());
    }

    #[test]
    fn test_update_spawns_only_past_trigger_distance() {
        let mut streamer = streamer();
        let update = streamer.update(&facing_neg_z(Vec3::new(0.0, 0.0, -799.0)), 30);
        assert_eq!(update.spawned, 0);
        assert!(streamer.is_empty());

        let camera = facing_neg_z(Vec3::new(0.0, 0.0, -801.0));
        let update = streamer.update(&camera, 30);
        assert_eq!(update.spawned, 30);
        assert_eq!(streamer.len(), 30);
        assert_eq!(streamer.spawn_origin(), camera.position());

        // Same position again: no second batch
        let update = streamer.update(&camera, 30);
        assert_eq!(update.spawned, 0);
        assert_eq!(streamer.len(), 30);
    }

    #[test]
    fn test_update_culls_planet_behind_camera() {
        let mut streamer = streamer();
        streamer.insert(Vec3::new(0.0, 0.0, 50.0), 1.0);
        streamer.insert(Vec3::new(0.0, 0.0, -50.0), 1.0);
        streamer.insert(Vec3::new(0.0, 0.0, 10.0), 1.0);

        let update = streamer.update(&facing_neg_z(Vec3::zeros()), 45);
        assert_eq!(update.culled, 2);
        assert_eq!(streamer.len(), 1);
        assert_eq!(streamer.planets()[0].position(), Vec3::new(0.0, 0.0, -50.0));
    }

    #[test]
    fn test_no_planet_behind_after_update() {
        let mut streamer = streamer();
        streamer.spawn_batch(Vec3::zeros(), 60);
        // Turn sideways so part of the field ends up behind
        let camera = Camera::new(Vec3::new(0.0, 0.0, -3000.0), 10.0, 0.0);
        streamer.update(&camera, 45);

        for planet in streamer.planets() {
            assert!(!planet.is_behind(camera.position(), camera.view_direction()));
        }
    }

    #[test]
    fn test_remove_where_preserves_order() {
        let mut streamer = streamer();
        for z in 1..=5 {
            streamer.insert(Vec3::new(0.0, 0.0, -(z as f32) * 10.0), 1.0);
        }
        let removed = streamer.remove_where(|p| p.position().z == -20.0 || p.position().z == -40.0);
        assert_eq!(removed.len(), 2);

        let remaining: Vec<f32> = streamer.planets().iter().map(|p| p.position().z).collect();
        assert_eq!(remaining, vec![-10.0, -30.0, -50.0]);
    }

    #[test]
    fn test_reset_repopulates() {
        let mut streamer = streamer();
        streamer.spawn_batch(Vec3::zeros(), 80);
        let origin = Vec3::new(0.0, 5.0, 20.0);
        streamer.reset(origin, 45);
        assert_eq!(streamer.len(), 45);
        assert_eq!(streamer.spawn_origin(), origin);
    }
}
