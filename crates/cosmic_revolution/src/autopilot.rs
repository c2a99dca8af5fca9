//! Scripted pilot standing in for a keyboard
//!
//! Looks down the ship's lane for the nearest planet that would hit it,
//! strafes away from it, and fires when the planet is too close to dodge.

use cosmic_engine::game::GameSession;
use cosmic_engine::input::ActionSet;
use cosmic_engine::physics::Aabb;
use cosmic_engine::world::Planet;
use nalgebra::Vector2;

/// How far ahead of the ship planets are considered
const LOOKAHEAD: f32 = 600.0;
/// Planets closer than this that still cover the ship get shot
const FIRE_DISTANCE: f32 = 150.0;
/// Extra clearance kept around every planet box
const DODGE_MARGIN: f32 = 4.0;

/// Headless input driver
#[derive(Debug, Clone)]
pub struct Autopilot {
    max_frames: u64,
    frames: u64,
    restarts_left: u32,
}

impl Autopilot {
    /// Fly for `max_frames` frames, restarting up to `restarts` times after a crash
    pub fn new(max_frames: u64, restarts: u32) -> Self {
        Self {
            max_frames,
            frames: 0,
            restarts_left: restarts,
        }
    }

    /// Frames flown so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Actions to hold during the next frame of `session`
    pub fn next_actions(&mut self, session: &GameSession) -> ActionSet {
        if self.frames >= self.max_frames {
            return ActionSet::QUIT;
        }
        self.frames += 1;

        if session.state().is_game_over() {
            if self.restarts_left == 0 {
                return ActionSet::QUIT;
            }
            self.restarts_left -= 1;
            return ActionSet::RESTART;
        }
        Self::steer(session)
    }

    fn steer(session: &GameSession) -> ActionSet {
        let camera = session.camera();
        let ship = session.collision_checker().ship_position(camera);
        let forward = camera.horizontal_direction();

        let threat = session
            .planets()
            .iter()
            .filter_map(|planet| {
                let distance = forward.dot(&(planet.position() - ship));
                let reach = planet.bounds().extents().z;
                (distance > -reach && distance < LOOKAHEAD).then_some((distance, planet))
            })
            .filter(|(_, planet)| clearance_box(planet).contains_point_xy(ship))
            .min_by(|a, b| a.0.total_cmp(&b.0));

        let Some((distance, planet)) = threat else {
            return ActionSet::empty();
        };

        if distance < FIRE_DISTANCE && planet.bounds().contains_point_xy(ship) {
            log::debug!("Autopilot firing at planet {:.0} units ahead", distance);
            return ActionSet::FIRE;
        }

        let away = Vector2::new(ship.x - planet.position().x, ship.y - planet.position().y);
        if away.x.abs() >= away.y.abs() {
            if away.x >= 0.0 {
                ActionSet::MOVE_RIGHT
            } else {
                ActionSet::MOVE_LEFT
            }
        } else if away.y >= 0.0 {
            ActionSet::MOVE_UP
        } else {
            ActionSet::MOVE_DOWN
        }
    }
}

fn clearance_box(planet: &Planet) -> Aabb {
    let bounds = planet.bounds();
    Aabb::from_center_extents(bounds.center(), bounds.extents().add_scalar(DODGE_MARGIN))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmic_engine::config::GameConfig;
    use cosmic_engine::foundation::math::Vec3;

    fn empty_session() -> GameSession {
        let mut config = GameConfig::default();
        config.seed = Some(11);
        config.camera.start_position = Vec3::zeros();
        config.camera.start_pitch = 0.0;
        let mut session = GameSession::new(config).unwrap();
        session.streamer_mut().remove_where(|_| true);
        session
    }

    fn ship(session: &GameSession) -> Vec3 {
        session.collision_checker().ship_position(session.camera())
    }

    #[test]
    fn test_clear_lane_holds_nothing() {
        let mut session = empty_session();
        let ship = ship(&session);
        session.streamer_mut().insert(ship + Vec3::new(80.0, 0.0, -100.0), 1.0);

        let mut pilot = Autopilot::new(10, 0);
        assert_eq!(pilot.next_actions(&session), ActionSet::empty());
    }

    #[test]
    fn test_strafes_away_from_distant_planet() {
        let mut session = empty_session();
        let ship = ship(&session);
        session.streamer_mut().insert(ship + Vec3::new(2.0, 0.0, -300.0), 1.0);

        let mut pilot = Autopilot::new(10, 0);
        assert_eq!(pilot.next_actions(&session), ActionSet::MOVE_LEFT);
    }

    #[test]
    fn test_fires_at_close_planet() {
        let mut session = empty_session();
        let ship = ship(&session);
        session.streamer_mut().insert(ship + Vec3::new(0.0, 0.0, -100.0), 1.0);

        let mut pilot = Autopilot::new(10, 0);
        assert_eq!(pilot.next_actions(&session), ActionSet::FIRE);
    }

    #[test]
    fn test_restarts_then_quits_after_crash() {
        let mut session = empty_session();
        let ship = ship(&session);
        session.streamer_mut().insert(ship, 1.0);
        session.step(ActionSet::empty(), 1.0 / 60.0);
        assert!(session.state().is_game_over());

        let mut pilot = Autopilot::new(10, 1);
        assert_eq!(pilot.next_actions(&session), ActionSet::RESTART);
        assert_eq!(pilot.next_actions(&session), ActionSet::QUIT);
    }

    #[test]
    fn test_quits_after_frame_budget() {
        let session = empty_session();
        let mut pilot = Autopilot::new(2, 0);
        assert_eq!(pilot.next_actions(&session), ActionSet::empty());
        assert_eq!(pilot.next_actions(&session), ActionSet::empty());
        assert_eq!(pilot.next_actions(&session), ActionSet::QUIT);
        assert_eq!(pilot.frames(), 2);
    }
}
