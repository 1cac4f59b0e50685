//! Ball World - a desktop toy of drifting paint balls
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, contacts, vacuum/spit, world state)
//! - `main.rs` binary: macroquad window, frame loop and drawing
//!
//! The left mouse button vacuums nearby balls into an inventory, a
//! right-button drag-and-release spits them back out, and anything that
//! drifts into the red corner rectangle is gone for good.

pub mod sim;

/// Compiled-in tuning constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Window dimensions
    pub const WINDOW_WIDTH: f32 = 960.0;
    pub const WINDOW_HEIGHT: f32 = 600.0;

    /// Balls spawned at startup
    pub const INITIAL_BALL_COUNT: usize = 60;
    /// Spawn radius range (pixels)
    pub const BALL_RADIUS_MIN: f32 = 8.0;
    pub const BALL_RADIUS_MAX: f32 = 16.0;
    /// Spawn velocity range, per axis (pixels/sec)
    pub const BALL_SPEED_MAX: f32 = 60.0;

    /// Vacuum: outer influence radius around the cursor
    pub const SUCTION_RADIUS: f32 = 100.0;
    /// Vacuum: acceleration toward the cursor at zero distance (pixels/sec^2)
    pub const SUCTION_STRENGTH: f32 = 400.0;
    /// Vacuum: distance at which a ball is captured into the inventory
    pub const CAPTURE_DISTANCE: f32 = 12.0;

    /// Balls released per spit gesture
    pub const SPIT_COUNT: usize = 3;
    /// Spit launch speed (pixels/sec)
    pub const SPIT_SPEED: f32 = 320.0;

    /// Deletion zone (x, y, w, h), bottom-right corner
    pub const DELETION_ZONE: (f32, f32, f32, f32) =
        (WINDOW_WIDTH - 140.0, WINDOW_HEIGHT - 120.0, 120.0, 100.0);

    /// Drags shorter than this are treated as a click, not an aim
    pub const MIN_AIM_LENGTH: f32 = 1e-3;

    /// Default RNG seed (overridable via BALL_WORLD_SEED)
    pub const DEFAULT_SEED: u64 = 1337;
}
