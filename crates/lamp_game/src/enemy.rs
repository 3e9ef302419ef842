use glam::Vec2;
use lamp_render::SpriteRegion;

use crate::atlas;

pub const PATROL_SPEED: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatrolStop {
    pub waypoint: Vec2,
    pub wait: f32,
}

/// Ordered, cyclic list of stops. Indices wrap modulo the stop count.
#[derive(Debug, Clone, PartialEq)]
pub struct PatrolRoute {
    stops: Vec<PatrolStop>,
}

impl PatrolRoute {
    /// Returns `None` for an empty route.
    #[allow(dead_code)]
    pub fn new(stops: Vec<PatrolStop>) -> Option<Self> {
        if stops.is_empty() {
            None
        } else {
            Some(Self { stops })
        }
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn stop(&self, index: usize) -> &PatrolStop {
        &self.stops[index % self.stops.len()]
    }

    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.stops.len()
    }
}

impl Default for PatrolRoute {
    fn default() -> Self {
        Self {
            stops: vec![
                PatrolStop {
                    waypoint: Vec2::new(10.0, 1.0),
                    wait: 5.0,
                },
                PatrolStop {
                    waypoint: Vec2::new(4.0, 1.0),
                    wait: 5.0,
                },
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyVisual {
    Stand,
    Walk,
    Alert,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemySprites {
    pub stand: SpriteRegion,
    pub walk: SpriteRegion,
    pub alert: SpriteRegion,
}

impl Default for EnemySprites {
    fn default() -> Self {
        Self {
            stand: atlas::ENEMY_STAND,
            walk: atlas::ENEMY_WALK,
            alert: atlas::ENEMY_ALERT,
        }
    }
}

impl EnemySprites {
    pub fn region(&self, visual: EnemyVisual) -> &SpriteRegion {
        match visual {
            EnemyVisual::Stand => &self.stand,
            EnemyVisual::Walk => &self.walk,
            EnemyVisual::Alert => &self.alert,
        }
    }
}

/// Patrolling guard. Alternates between waiting at a stop (`walking == false`)
/// and walking to the next one.
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub face_right: bool,
    pub alerted: bool,
    pub walking: bool,
    pub route: PatrolRoute,
    pub curr_index: usize,
    pub remaining_wait: f32,
    pub sprites: EnemySprites,
}

impl Default for Enemy {
    fn default() -> Self {
        Self::on_route(PatrolRoute::default())
    }
}

impl Enemy {
    /// Starts waiting at the first stop, facing right.
    pub fn on_route(route: PatrolRoute) -> Self {
        let first = *route.stop(0);
        Self {
            pos: first.waypoint,
            vel: Vec2::ZERO,
            size: Vec2::new(0.5, 1.0),
            face_right: true,
            alerted: false,
            walking: false,
            route,
            curr_index: 0,
            remaining_wait: first.wait,
            sprites: EnemySprites::default(),
        }
    }

    pub fn update(&mut self, dt: f32) {
        if !self.walking {
            self.remaining_wait -= dt;
            if self.remaining_wait <= 0.0 {
                self.walking = true;
                self.face_right = !self.face_right;
                self.curr_index = self.route.next_index(self.curr_index);
                self.vel.x = if self.face_right {
                    PATROL_SPEED
                } else {
                    -PATROL_SPEED
                };
                log::trace!("Enemy walking to {}", self.target());
            }
        } else {
            self.pos += self.vel * dt;
            let target = *self.route.stop(self.curr_index);
            let arrived = (self.face_right && self.pos.x > target.waypoint.x)
                || (!self.face_right && self.pos.x < target.waypoint.x);
            if arrived {
                self.pos = target.waypoint;
                self.remaining_wait = target.wait;
                self.walking = false;
            }
        }
    }

    pub fn target(&self) -> Vec2 {
        self.route.stop(self.curr_index).waypoint
    }

    pub fn visual(&self) -> EnemyVisual {
        if self.alerted {
            EnemyVisual::Alert
        } else if self.walking {
            EnemyVisual::Walk
        } else {
            EnemyVisual::Stand
        }
    }

    pub fn sprite(&self) -> &SpriteRegion {
        self.sprites.region(self.visual())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step_for(enemy: &mut Enemy, dt: f32, steps: usize) {
        for _ in 0..steps {
            enemy.update(dt);
        }
    }

    #[test]
    fn initial_state_waits_at_first_stop() {
        let enemy = Enemy::default();
        assert!(!enemy.walking);
        assert!(enemy.face_right);
        assert_eq!(enemy.curr_index, 0);
        assert_eq!(enemy.pos, Vec2::new(10.0, 1.0));
        assert_eq!(enemy.remaining_wait, 5.0);
        assert_eq!(enemy.route.len(), 2);
    }

    #[test]
    fn starts_walking_after_exactly_five_seconds() {
        let mut enemy = Enemy::default();
        step_for(&mut enemy, 0.5, 9);
        assert!(!enemy.walking, "still waiting at 4.5s");

        enemy.update(0.5);
        assert!(enemy.walking);
        assert!(!enemy.face_right);
        assert_eq!(enemy.vel.x, -1.0);
        assert_eq!(enemy.curr_index, 1);
        assert_eq!(enemy.pos, Vec2::new(10.0, 1.0));
    }

    #[test]
    fn single_five_second_frame_also_transitions() {
        let mut enemy = Enemy::default();
        enemy.update(5.0);
        assert!(enemy.walking);
        assert_eq!(enemy.curr_index, 1);
    }

    #[test]
    fn arrival_snaps_to_waypoint_and_reloads_wait() {
        let mut enemy = Enemy::default();
        enemy.update(5.0);

        // 10.0 - 0.7 * 9 = 3.7 overshoots the stop at 4.0.
        step_for(&mut enemy, 0.7, 8);
        assert!(enemy.walking);
        assert!(enemy.pos.x > 4.0);

        enemy.update(0.7);
        assert!(!enemy.walking);
        assert_eq!(enemy.pos, Vec2::new(4.0, 1.0));
        assert_eq!(enemy.remaining_wait, 5.0);
    }

    #[test]
    fn landing_exactly_on_waypoint_keeps_walking_one_more_frame() {
        let mut enemy = Enemy::default();
        enemy.update(5.0);
        enemy.update(6.0);
        assert_eq!(enemy.pos.x, 4.0);
        assert!(enemy.walking, "arrival requires passing the waypoint");
        enemy.update(0.1);
        assert!(!enemy.walking);
        assert_eq!(enemy.pos, Vec2::new(4.0, 1.0));
    }

    #[test]
    fn full_cycle_returns_and_faces_right() {
        let mut enemy = Enemy::default();
        enemy.update(5.0);
        enemy.update(7.0);
        assert!(!enemy.walking);
        enemy.update(5.0);
        assert!(enemy.walking);
        assert!(enemy.face_right);
        assert_eq!(enemy.vel.x, 1.0);
        assert_eq!(enemy.curr_index, 0);
        enemy.update(7.0);
        assert!(!enemy.walking);
        assert_eq!(enemy.pos, Vec2::new(10.0, 1.0));
    }

    #[test]
    fn longer_routes_wrap_around() {
        let route = PatrolRoute::new(vec![
            PatrolStop {
                waypoint: Vec2::new(2.0, 1.0),
                wait: 1.0,
            },
            PatrolStop {
                waypoint: Vec2::new(6.0, 1.0),
                wait: 2.0,
            },
            PatrolStop {
                waypoint: Vec2::new(3.0, 1.0),
                wait: 3.0,
            },
        ])
        .expect("non-empty route");
        assert_eq!(route.next_index(2), 0);

        let mut enemy = Enemy::on_route(route);
        enemy.face_right = false;
        enemy.update(1.0);
        assert!(enemy.face_right);
        assert_eq!(enemy.target(), Vec2::new(6.0, 1.0));
        enemy.update(10.0);
        assert_eq!(enemy.pos, Vec2::new(6.0, 1.0));
        assert_eq!(enemy.remaining_wait, 2.0);
    }

    #[test]
    fn empty_route_is_rejected() {
        assert!(PatrolRoute::new(Vec::new()).is_none());
    }

    #[test]
    fn visual_tracks_patrol_state() {
        let mut enemy = Enemy::default();
        assert_eq!(enemy.visual(), EnemyVisual::Stand);
        enemy.update(5.0);
        assert_eq!(enemy.visual(), EnemyVisual::Walk);
        enemy.alerted = true;
        assert_eq!(enemy.sprite(), &enemy.sprites.alert);
    }
}
