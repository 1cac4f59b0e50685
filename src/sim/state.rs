//! World state and core simulation types
//!
//! The `World` owns everything the simulation mutates: the active balls, the
//! vacuumed inventory, the deletion zone and the seeded RNG. It is the only
//! state there is; the tick loop borrows it exclusively between frames.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::color::Rgb;

/// A ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Constant for the ball's lifetime, always positive
    pub radius: f32,
    pub color: Rgb,
}

impl Ball {
    /// Integrate position one step: `pos += vel * dt`
    pub fn advance(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }
}

/// An axis-aligned rectangle (x, y is the top-left corner)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Check whether a circle overlaps this rectangle (touching counts)
    pub fn intersects_circle(&self, center: Vec2, radius: f32) -> bool {
        let closest = Vec2::new(
            center.x.clamp(self.x, self.x + self.w),
            center.y.clamp(self.y, self.y + self.h),
        );
        center.distance_squared(closest) <= radius * radius
    }
}

impl From<(f32, f32, f32, f32)> for Rect {
    fn from((x, y, w, h): (f32, f32, f32, f32)) -> Self {
        Self::new(x, y, w, h)
    }
}

/// World tuning knobs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Window dimensions (the walls)
    pub width: f32,
    pub height: f32,
    /// Constant acceleration applied to every ball (pixels/sec^2)
    pub gravity: Vec2,
    /// Velocity fraction lost per second (0 = no damping)
    pub linear_damping: f32,
    /// Speed cap (0 disables)
    pub max_speed: f32,
    /// Vacuum pull acceleration at zero distance (pixels/sec^2)
    pub suction_strength: f32,
    /// Vacuum influence radius around the cursor
    pub suction_radius: f32,
    /// Distance at which a vacuumed ball is captured into the inventory
    pub capture_distance: f32,
    /// Spit launch speed (pixels/sec)
    pub spit_speed: f32,
    /// Per-ball spit direction jitter (radians, +/-)
    pub spit_jitter_angle: f32,
    /// Per-ball spit speed jitter (fraction of spit_speed, +/-)
    pub spit_jitter_speed: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        use crate::consts::*;
        Self {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            gravity: Vec2::ZERO,
            linear_damping: 0.05,
            max_speed: 0.0,
            suction_strength: SUCTION_STRENGTH,
            suction_radius: SUCTION_RADIUS,
            capture_distance: CAPTURE_DISTANCE,
            spit_speed: SPIT_SPEED,
            spit_jitter_angle: 0.12,
            spit_jitter_speed: 0.08,
        }
    }
}

/// Something observable that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorldEvent {
    /// Ball captured into the inventory
    Vacuumed { id: u32 },
    /// Ball released from the inventory back into the world
    Spat { id: u32 },
    /// Two balls touched and mixed paint
    Mixed { a: u32, b: u32 },
    /// Ball entered the deletion zone and is gone
    Deleted { id: u32 },
}

/// Complete world state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub config: WorldConfig,
    /// Run seed for reproducibility
    pub seed: u64,
    /// Active balls, kept sorted by id for deterministic pairwise order
    pub balls: Vec<Ball>,
    /// Vacuumed balls, in vacuum order (spit pops from the back)
    pub inventory: Vec<Ball>,
    /// Balls overlapping this rectangle are permanently removed
    pub deletion_zone: Option<Rect>,
    /// Simulation tick counter
    pub time_ticks: u64,
    rng: Pcg32,
    next_id: u32,
}

impl World {
    pub fn new(config: WorldConfig, seed: u64) -> Self {
        Self {
            config,
            seed,
            balls: Vec::new(),
            inventory: Vec::new(),
            deletion_zone: None,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Total balls in existence, active plus inventory
    pub fn total_count(&self) -> usize {
        self.balls.len() + self.inventory.len()
    }

    /// Add a ball with explicit attributes
    pub fn add_ball(&mut self, pos: Vec2, radius: f32, color: Rgb, vel: Vec2) -> u32 {
        debug_assert!(radius > 0.0);
        let id = self.next_entity_id();
        self.balls.push(Ball {
            id,
            pos,
            vel,
            radius,
            color,
        });
        id
    }

    /// Populate the world with `count` randomized balls.
    ///
    /// Positions are inset by radius so nothing spawns overlapping a wall;
    /// velocities are uniform per axis in `[-axis_speed, axis_speed]`.
    pub fn spawn_initial(&mut self, count: usize, radius_range: (f32, f32), axis_speed: f32) {
        assert!(
            radius_range.0 > 0.0 && radius_range.1 >= radius_range.0,
            "ball radius range must be positive"
        );
        let (width, height) = (self.config.width, self.config.height);
        for _ in 0..count {
            let radius = self.rng.random_range(radius_range.0..=radius_range.1);
            let pos = Vec2::new(
                self.rng.random_range(radius..=width - radius),
                self.rng.random_range(radius..=height - radius),
            );
            let vel = Vec2::new(
                self.rng.random_range(-axis_speed..=axis_speed),
                self.rng.random_range(-axis_speed..=axis_speed),
            );
            let color = Rgb::new(self.rng.random(), self.rng.random(), self.rng.random());
            self.add_ball(pos, radius, color, vel);
        }
    }

    /// Vacuum interaction around `point`, two phases in a fixed order:
    /// pickup, then pull.
    ///
    /// A ball already within `capture_distance` is moved into the inventory
    /// before any velocity is altered; everything else inside
    /// `radius_of_effect` is accelerated toward the cursor with linear
    /// falloff.
    pub fn vacuum_toward(
        &mut self,
        point: Vec2,
        strength: f32,
        radius_of_effect: f32,
        dt: f32,
        events: &mut Vec<WorldEvent>,
    ) {
        let capture = self.config.capture_distance;
        let mut kept = Vec::with_capacity(self.balls.len());
        for ball in self.balls.drain(..) {
            if ball.pos.distance(point) <= capture {
                events.push(WorldEvent::Vacuumed { id: ball.id });
                self.inventory.push(ball);
            } else {
                kept.push(ball);
            }
        }
        self.balls = kept;

        for ball in &mut self.balls {
            let delta = point - ball.pos;
            let dist = delta.length();
            if dist <= 1e-6 || dist > radius_of_effect {
                continue;
            }
            let falloff = (1.0 - dist / radius_of_effect).max(0.05);
            ball.vel += delta / dist * (strength * falloff * dt);
        }
    }

    /// Release up to `count` balls from the inventory at `origin`, most
    /// recently vacuumed first.
    ///
    /// Each ball gets `direction` (normalized) times `spit_speed`, with a
    /// small per-ball angle/speed jitter so a multi-ball spit fans out.
    /// Fewer balls than requested is not an error; a zero direction is a
    /// no-op since there is nothing well-defined to aim at.
    pub fn spit(
        &mut self,
        origin: Vec2,
        direction: Vec2,
        count: usize,
        events: &mut Vec<WorldEvent>,
    ) {
        let Some(dir) = direction.try_normalize() else {
            return;
        };
        let jitter_angle = self.config.spit_jitter_angle;
        let jitter_speed = self.config.spit_jitter_speed;
        let speed = self.config.spit_speed;

        let mut released = 0;
        while released < count {
            let Some(mut ball) = self.inventory.pop() else {
                break;
            };
            let angle = self.rng.random_range(-jitter_angle..=jitter_angle);
            let scale = 1.0 + self.rng.random_range(-jitter_speed..=jitter_speed);
            ball.pos = origin;
            ball.vel = Vec2::from_angle(angle).rotate(dir) * (speed * scale);
            events.push(WorldEvent::Spat { id: ball.id });
            self.balls.push(ball);
            released += 1;
        }
    }

    /// Permanently remove every active ball whose bounding circle touches
    /// the deletion zone. No salvage to the inventory.
    pub fn remove_if_in_deletion_zone(&mut self, events: &mut Vec<WorldEvent>) {
        let Some(zone) = self.deletion_zone else {
            return;
        };
        self.balls.retain(|ball| {
            if zone.intersects_circle(ball.pos, ball.radius) {
                events.push(WorldEvent::Deleted { id: ball.id });
                false
            } else {
                true
            }
        });
    }

    /// Restore sorted-by-id iteration order after mutations
    pub fn normalize_order(&mut self) {
        self.balls.sort_by_key(|b| b.id);
    }
}
