use glam::Vec2;
use lamp_core::input::AbilityMode;
use lamp_render::{Camera2D, SpriteRegion};

use crate::atlas;
use crate::player::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerVisual {
    Basic,
    AimThrow,
    AimShoot,
}

/// Cursor overlay. `pos` is in normalized device coordinates, y up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    pub pos: Vec2,
    pub size: Vec2,
    pub sprite_basic: SpriteRegion,
    pub sprite_aim_throw: SpriteRegion,
    pub sprite_aim_shoot: SpriteRegion,
}

impl Default for Pointer {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            size: Vec2::splat(0.5),
            sprite_basic: atlas::POINTER_BASIC,
            sprite_aim_throw: atlas::POINTER_AIM_THROW,
            sprite_aim_shoot: atlas::POINTER_AIM_SHOOT,
        }
    }
}

impl Pointer {
    pub fn visual(&self, player: &Player) -> PointerVisual {
        match (player.aiming, player.ability_mode) {
            (false, _) => PointerVisual::Basic,
            (true, AbilityMode::Throw) => PointerVisual::AimThrow,
            (true, AbilityMode::Shoot) => PointerVisual::AimShoot,
        }
    }

    pub fn sprite(&self, player: &Player) -> &SpriteRegion {
        match self.visual(player) {
            PointerVisual::Basic => &self.sprite_basic,
            PointerVisual::AimThrow => &self.sprite_aim_throw,
            PointerVisual::AimShoot => &self.sprite_aim_shoot,
        }
    }

    pub fn world_position(&self, camera: &Camera2D) -> Vec2 {
        camera.ndc_to_world(self.pos)
    }
}
