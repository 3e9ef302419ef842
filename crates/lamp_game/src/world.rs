use glam::Vec2;
use lamp_core::input::Intent;
use lamp_render::Camera2D;

use crate::enemy::Enemy;
use crate::player::Player;
use crate::pointer::Pointer;
use crate::props::{Door, Light, Platform};

pub const CAMERA_START: Vec2 = Vec2::new(6.0, 3.5);
pub const CAMERA_VIEW_HEIGHT: f32 = 7.0;
pub const CAMERA_MIN_X: f32 = 6.0;
pub const CAMERA_MAX_X: f32 = 24.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Quit,
}

/// Every entity in the level plus the camera, owned by the frame loop.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub camera: Camera2D,
    pub player: Player,
    pub enemy: Enemy,
    pub light: Light,
    pub door: Door,
    pub platform: Platform,
    pub pointer: Pointer,
}

impl GameState {
    pub fn new(aspect_ratio: f32) -> Self {
        Self {
            camera: Camera2D::new(CAMERA_START, CAMERA_VIEW_HEIGHT, aspect_ratio),
            player: Player::default(),
            enemy: Enemy::default(),
            light: Light::default(),
            door: Door::default(),
            platform: Platform::default(),
            pointer: Pointer::default(),
        }
    }

    pub fn apply_intent(&mut self, intent: Intent) {
        match intent {
            Intent::PointerMoved { x, y } => self.pointer.pos = Vec2::new(x, y),
            Intent::Quit => {}
            other => self.player.apply_intent(other),
        }
    }

    /// Applies a frame's drained intents, then steps unless one of them was quit.
    pub fn advance(&mut self, intents: &[Intent], dt: f32) -> FrameOutcome {
        let mut outcome = FrameOutcome::Continue;
        for &intent in intents {
            if intent == Intent::Quit {
                outcome = FrameOutcome::Quit;
            }
            self.apply_intent(intent);
        }
        if outcome == FrameOutcome::Continue {
            self.step(dt);
        }
        outcome
    }

    pub fn step(&mut self, dt: f32) {
        self.player.integrate(dt);
        track_player(&mut self.camera, &self.player, dt);
        self.enemy.update(dt);
    }
}

/// Moves with the player's velocity, but pins to the edge stops whenever the
/// player stands at or beyond them.
pub fn track_player(camera: &mut Camera2D, player: &Player, dt: f32) {
    camera.position.x += player.vel.x * dt;
    if player.pos.x <= CAMERA_MIN_X {
        camera.position.x = CAMERA_MIN_X;
    } else if player.pos.x >= CAMERA_MAX_X {
        camera.position.x = CAMERA_MAX_X;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lamp_core::input::KeyState;

    const ASPECT: f32 = 1200.0 / 700.0;

    #[test]
    fn camera_starts_at_left_stop_with_aspect_width() {
        let state = GameState::new(ASPECT);
        assert_eq!(state.camera.position, CAMERA_START);
        assert!((state.camera.size.x - 12.0).abs() < 1e-5);
    }

    #[test]
    fn camera_pins_at_right_stop_regardless_of_drift() {
        let mut camera = GameState::new(ASPECT).camera;
        camera.position.x = 19.3;
        let player = Player {
            pos: Vec2::new(24.0, 1.0),
            vel: Vec2::new(2.5, 0.0),
            ..Player::default()
        };
        track_player(&mut camera, &player, 0.1);
        assert_eq!(camera.position.x, 24.0);
    }

    #[test]
    fn camera_pins_at_left_stop_regardless_of_drift() {
        let mut camera = GameState::new(ASPECT).camera;
        camera.position.x = 8.7;
        let player = Player {
            pos: Vec2::new(6.0, 1.0),
            vel: Vec2::new(-1.0, 0.0),
            ..Player::default()
        };
        track_player(&mut camera, &player, 0.1);
        assert_eq!(camera.position.x, 6.0);
    }

    #[test]
    fn camera_follows_velocity_between_stops() {
        let mut camera = GameState::new(ASPECT).camera;
        camera.position.x = 10.0;
        let player = Player {
            pos: Vec2::new(12.0, 1.0),
            vel: Vec2::new(2.5, 0.0),
            ..Player::default()
        };
        track_player(&mut camera, &player, 0.5);
        // Velocity-driven: the camera moves by vel*dt, not to the player.
        assert!((camera.position.x - 11.25).abs() < 1e-6);
    }

    #[test]
    fn walking_right_across_level_leaves_camera_at_right_stop() {
        let mut state = GameState::new(ASPECT);
        state.apply_intent(Intent::MoveRight(KeyState::Pressed));
        state.apply_intent(Intent::Run(KeyState::Pressed));
        for _ in 0..(60 * 14) {
            state.step(1.0 / 60.0);
        }
        assert_eq!(state.player.pos.x, crate::player::MAX_X);
        assert_eq!(state.camera.position.x, CAMERA_MAX_X);
    }

    #[test]
    fn pointer_intent_moves_cursor_only() {
        let mut state = GameState::new(ASPECT);
        let before = state.player;
        state.apply_intent(Intent::PointerMoved { x: 0.25, y: -0.5 });
        assert_eq!(state.pointer.pos, Vec2::new(0.25, -0.5));
        assert_eq!(state.player, before);
    }

    #[test]
    fn quit_skips_the_simulation_step() {
        let mut state = GameState::new(ASPECT);
        let outcome = state.advance(
            &[Intent::MoveRight(KeyState::Pressed), Intent::Quit],
            1.0,
        );
        assert_eq!(outcome, FrameOutcome::Quit);
        // Earlier intents in the drain still apply; integration does not.
        assert_eq!(state.player.vel.x, 1.0);
        assert_eq!(state.player.pos.x, crate::player::MIN_X);
    }

    #[test]
    fn advance_is_deterministic() {
        let intents = [
            Intent::MoveRight(KeyState::Pressed),
            Intent::Jump,
            Intent::Run(KeyState::Pressed),
        ];
        let mut a = GameState::new(ASPECT);
        let mut b = GameState::new(ASPECT);
        a.advance(&intents, 0.016);
        b.advance(&intents, 0.016);
        for _ in 0..300 {
            a.advance(&[], 0.016);
            b.advance(&[], 0.016);
        }
        assert_eq!(a, b);
    }

    #[test]
    fn enemy_patrols_while_player_idles() {
        let mut state = GameState::new(ASPECT);
        state.advance(&[], 5.0);
        assert!(state.enemy.walking);
        assert_eq!(state.player.pos, Vec2::new(crate::player::MIN_X, 1.0));
    }
}
