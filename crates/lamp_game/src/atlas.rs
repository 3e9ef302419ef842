//! Authored regions of `elements.png`.
//!
//! Every entity carries its regions by value; nothing is looked up at runtime.
//! Several player and door states still share the placeholder cell in the
//! bottom-left corner of the sheet.

use glam::Vec2;
use lamp_render::SpriteRegion;

pub const PLACEHOLDER: SpriteRegion = SpriteRegion::diagonal(0.0, 0.2);

pub const POINTER_BASIC: SpriteRegion = SpriteRegion::diagonal(0.0, 0.2);
pub const POINTER_AIM_THROW: SpriteRegion = SpriteRegion::diagonal(0.2, 0.4);
pub const POINTER_AIM_SHOOT: SpriteRegion = SpriteRegion::diagonal(0.4, 0.6);

pub const PLAYER_STAND: SpriteRegion = PLACEHOLDER;
pub const PLAYER_WALK: SpriteRegion = PLACEHOLDER;
pub const PLAYER_RUN: SpriteRegion = PLACEHOLDER;
pub const PLAYER_JUMP: SpriteRegion = PLACEHOLDER;
pub const PLAYER_THROW: SpriteRegion = PLACEHOLDER;
pub const PLAYER_SHOOT: SpriteRegion = PLACEHOLDER;

pub const ENEMY_STAND: SpriteRegion = SpriteRegion::new(Vec2::new(0.0, 0.5), Vec2::new(0.5, 1.0));
pub const ENEMY_WALK: SpriteRegion = SpriteRegion::diagonal(0.2, 0.4);
pub const ENEMY_ALERT: SpriteRegion = SpriteRegion::diagonal(0.4, 0.6);

pub const LIGHT_ON: SpriteRegion = SpriteRegion::diagonal(0.0, 0.2);
pub const LIGHT_OFF: SpriteRegion = SpriteRegion::diagonal(0.2, 0.4);

pub const DOOR_EMPTY: SpriteRegion = PLACEHOLDER;
pub const DOOR_USED: SpriteRegion = PLACEHOLDER;

pub const PLATFORM: SpriteRegion = SpriteRegion::diagonal(0.5, 0.75);
