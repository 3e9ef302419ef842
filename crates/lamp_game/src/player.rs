use glam::Vec2;
use lamp_core::input::{AbilityMode, Intent, KeyState};
use lamp_render::SpriteRegion;

use crate::atlas;

pub const MIN_X: f32 = 0.25;
pub const MAX_X: f32 = 29.75;
pub const FLOOR_Y: f32 = 1.0;
pub const GRAVITY: f32 = 9.0;
pub const JUMP_SPEED: f32 = 6.0;
pub const WALK_SPEED: f32 = 1.0;
pub const RUN_SPEED: f32 = 2.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerVisual {
    Stand,
    Walk,
    Run,
    Jump,
    Throw,
    Shoot,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerSprites {
    pub stand: SpriteRegion,
    pub walk: SpriteRegion,
    pub run: SpriteRegion,
    pub jump: SpriteRegion,
    pub throw: SpriteRegion,
    pub shoot: SpriteRegion,
}

impl Default for PlayerSprites {
    fn default() -> Self {
        Self {
            stand: atlas::PLAYER_STAND,
            walk: atlas::PLAYER_WALK,
            run: atlas::PLAYER_RUN,
            jump: atlas::PLAYER_JUMP,
            throw: atlas::PLAYER_THROW,
            shoot: atlas::PLAYER_SHOOT,
        }
    }
}

impl PlayerSprites {
    pub fn region(&self, visual: PlayerVisual) -> &SpriteRegion {
        match visual {
            PlayerVisual::Stand => &self.stand,
            PlayerVisual::Walk => &self.walk,
            PlayerVisual::Run => &self.run,
            PlayerVisual::Jump => &self.jump,
            PlayerVisual::Throw => &self.throw,
            PlayerVisual::Shoot => &self.shoot,
        }
    }
}

/// The player body. `pos.x` stays within `[MIN_X, MAX_X]` and `pos.y` never
/// drops below `FLOOR_Y` after `integrate`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
    pub ability_mode: AbilityMode,
    pub jumping: bool,
    pub running: bool,
    #[allow(dead_code)]
    pub behind_door: bool,
    pub aiming: bool,
    #[allow(dead_code)]
    pub visible: bool,
    #[allow(dead_code)]
    pub num_projectiles: u32,
    pub sprites: PlayerSprites,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(MIN_X, FLOOR_Y),
            size: Vec2::new(0.5, 1.0),
            vel: Vec2::ZERO,
            ability_mode: AbilityMode::Throw,
            jumping: false,
            running: false,
            behind_door: false,
            aiming: false,
            visible: false,
            num_projectiles: 0,
            sprites: PlayerSprites::default(),
        }
    }
}

impl Player {
    /// Applies the movement and ability intents; the rest are not the player's.
    pub fn apply_intent(&mut self, intent: Intent) {
        match intent {
            Intent::Jump => self.jump(),
            Intent::MoveLeft(state) => self.steer(-1.0, state),
            Intent::MoveRight(state) => self.steer(1.0, state),
            Intent::Run(state) => self.set_running(state == KeyState::Pressed),
            Intent::SetAbilityMode(mode) => self.ability_mode = mode,
            Intent::PointerMoved { .. } | Intent::Quit => {}
        }
    }

    /// Fixed launch impulse, accepted only from the ground.
    pub fn jump(&mut self) {
        if !self.jumping {
            self.jumping = true;
            self.vel.y = JUMP_SPEED;
        }
    }

    /// A release only cancels velocity that still belongs to the released key,
    /// so letting go of one direction never stops motion set by the other.
    fn steer(&mut self, sign: f32, state: KeyState) {
        match state {
            KeyState::Pressed => {
                let speed = if self.running { RUN_SPEED } else { WALK_SPEED };
                self.vel.x = sign * speed;
            }
            KeyState::Released => {
                if self.vel.x == sign * WALK_SPEED || self.vel.x == sign * RUN_SPEED {
                    self.vel.x = 0.0;
                }
            }
        }
    }

    /// Rescales a held direction in place.
    pub fn set_running(&mut self, running: bool) {
        if running {
            if self.vel.x == WALK_SPEED {
                self.vel.x = RUN_SPEED;
            } else if self.vel.x == -WALK_SPEED {
                self.vel.x = -RUN_SPEED;
            }
        } else if self.vel.x == RUN_SPEED {
            self.vel.x = WALK_SPEED;
        } else if self.vel.x == -RUN_SPEED {
            self.vel.x = -WALK_SPEED;
        }
        self.running = running;
    }

    pub fn integrate(&mut self, dt: f32) {
        if self.jumping {
            self.vel.y -= GRAVITY * dt;
        }

        self.pos += self.vel * dt;
        self.pos.x = self.pos.x.clamp(MIN_X, MAX_X);

        if self.pos.y < FLOOR_Y {
            self.jumping = false;
            self.pos.y = FLOOR_Y;
            self.vel.y = 0.0;
        }
    }

    pub fn visual(&self) -> PlayerVisual {
        if self.jumping {
            PlayerVisual::Jump
        } else if self.vel.x != 0.0 && self.running {
            PlayerVisual::Run
        } else if self.vel.x != 0.0 {
            PlayerVisual::Walk
        } else {
            PlayerVisual::Stand
        }
    }

    pub fn sprite(&self) -> &SpriteRegion {
        self.sprites.region(self.visual())
    }
}
