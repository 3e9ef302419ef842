//! Static level furniture. Positions are authored; nothing here is simulated.

use std::f32::consts::PI;

use glam::Vec2;
use lamp_render::SpriteRegion;

use crate::atlas;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightVisual {
    On,
    Off,
}

/// Ceiling lamp. `dir`, `angle` and `range` describe its cone in radians and
/// world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub pos: Vec2,
    pub size: Vec2,
    #[allow(dead_code)]
    pub dir: f32,
    #[allow(dead_code)]
    pub angle: f32,
    #[allow(dead_code)]
    pub range: f32,
    pub light_on: bool,
    pub sprite_on: SpriteRegion,
    pub sprite_off: SpriteRegion,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            pos: Vec2::new(18.0, 5.5),
            size: Vec2::new(1.0, 3.0),
            dir: PI * 1.5,
            angle: PI * 0.25,
            range: 3.0,
            light_on: true,
            sprite_on: atlas::LIGHT_ON,
            sprite_off: atlas::LIGHT_OFF,
        }
    }
}

impl Light {
    pub fn visual(&self) -> LightVisual {
        if self.light_on {
            LightVisual::On
        } else {
            LightVisual::Off
        }
    }

    pub fn sprite(&self) -> &SpriteRegion {
        match self.visual() {
            LightVisual::On => &self.sprite_on,
            LightVisual::Off => &self.sprite_off,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorVisual {
    Empty,
    Used,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Door {
    pub pos: Vec2,
    pub size: Vec2,
    pub in_use: bool,
    pub sprite_empty: SpriteRegion,
    pub sprite_used: SpriteRegion,
}

impl Default for Door {
    fn default() -> Self {
        Self {
            pos: Vec2::new(20.0, 1.0),
            size: Vec2::ONE,
            in_use: false,
            sprite_empty: atlas::DOOR_EMPTY,
            sprite_used: atlas::DOOR_USED,
        }
    }
}

impl Door {
    pub fn visual(&self) -> DoorVisual {
        if self.in_use {
            DoorVisual::Used
        } else {
            DoorVisual::Empty
        }
    }

    pub fn sprite(&self) -> &SpriteRegion {
        match self.visual() {
            DoorVisual::Empty => &self.sprite_empty,
            DoorVisual::Used => &self.sprite_used,
        }
    }
}

/// Floor slab spanning the whole 30-unit level, top surface at y = 0.5.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Platform {
    pub pos: Vec2,
    pub size: Vec2,
    pub sprite: SpriteRegion,
}

impl Default for Platform {
    fn default() -> Self {
        Self {
            pos: Vec2::new(15.0, 0.25),
            size: Vec2::new(30.0, 0.5),
            sprite: atlas::PLATFORM,
        }
    }
}
