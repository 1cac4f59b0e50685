//! Fixed timestep simulation tick
//!
//! One tick runs the phases in a fixed order: input (spit, then vacuum),
//! integration, wall bounce, pairwise contacts, deletion sweep. The input
//! phase running before the sweep is what guarantees a ball can be vacuumed
//! or deleted in a tick, never both.

use glam::Vec2;

use super::collision::{circles_overlap, separate_pair, wall_bounce};
use super::color::Rgb;
use super::state::{World, WorldEvent};

/// Relaxation passes for positional separation; enough to settle the small
/// clusters a spit or vacuum can produce
const SEPARATION_ITERATIONS: usize = 4;

/// A spit gesture released this tick
#[derive(Debug, Clone, PartialEq)]
pub struct SpitCommand {
    /// Where released balls appear (the drag start point)
    pub origin: Vec2,
    /// Normalized launch direction
    pub direction: Vec2,
    /// Maximum balls to release
    pub count: usize,
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Cursor position in window space
    pub pointer: Vec2,
    /// Left button held: vacuum toward the cursor
    pub vacuum: bool,
    /// Completed right-button drag, if any
    pub spit: Option<SpitCommand>,
}

/// Advance the world by one fixed timestep
pub fn tick(world: &mut World, input: &TickInput, dt: f32) -> Vec<WorldEvent> {
    let mut events = Vec::new();
    world.time_ticks += 1;

    // Input phase
    if let Some(cmd) = &input.spit {
        world.spit(cmd.origin, cmd.direction, cmd.count, &mut events);
    }
    if input.vacuum {
        let strength = world.config.suction_strength;
        let radius = world.config.suction_radius;
        world.vacuum_toward(input.pointer, strength, radius, dt, &mut events);
    }

    // Physics phase
    integrate(world, dt);
    let (width, height) = (world.config.width, world.config.height);
    for ball in &mut world.balls {
        wall_bounce(&mut ball.pos, &mut ball.vel, ball.radius, width, height);
    }
    resolve_contacts(world, &mut events);

    // Deletion sweep, always last
    world.remove_if_in_deletion_zone(&mut events);

    world.normalize_order();
    events
}

/// Apply gravity, damping and the speed cap, then advance positions
fn integrate(world: &mut World, dt: f32) {
    let gravity = world.config.gravity;
    let damping = world.config.linear_damping;
    let max_speed = world.config.max_speed;
    for ball in &mut world.balls {
        ball.vel += gravity * dt;
        if damping > 0.0 {
            ball.vel *= (1.0 - damping * dt).max(0.0);
        }
        if max_speed > 0.0 {
            ball.vel = ball.vel.clamp_length_max(max_speed);
        }
        ball.advance(dt);
    }
}

/// Pairwise ball-ball contact: mix paint, then push overlaps apart.
///
/// Paint mixing reads a pre-contact color snapshot so the result is the same
/// whichever pair is visited first. Separation never touches velocities;
/// this world has no momentum exchange on contact.
fn resolve_contacts(world: &mut World, events: &mut Vec<WorldEvent>) {
    let n = world.balls.len();
    if n < 2 {
        return;
    }

    let colors_before: Vec<Rgb> = world.balls.iter().map(|b| b.color).collect();
    for i in 0..n {
        for j in (i + 1)..n {
            let a = &world.balls[i];
            let b = &world.balls[j];
            if circles_overlap(a.pos, a.radius, b.pos, b.radius) {
                let mixed = colors_before[i].mixed_with(colors_before[j]);
                events.push(WorldEvent::Mixed {
                    a: a.id,
                    b: b.id,
                });
                world.balls[i].color = mixed;
                world.balls[j].color = mixed;
            }
        }
    }

    for _ in 0..SEPARATION_ITERATIONS {
        let mut any_overlap = false;
        for i in 0..n {
            for j in (i + 1)..n {
                let (left, right) = world.balls.split_at_mut(j);
                let a = &mut left[i];
                let b = &mut right[0];
                if separate_pair(&mut a.pos, a.radius, &mut b.pos, b.radius) {
                    any_overlap = true;
                }
            }
        }
        if !any_overlap {
            break;
        }
    }
}
