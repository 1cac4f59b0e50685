//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod color;
pub mod input;
pub mod state;
pub mod tick;

pub use collision::{circles_overlap, separate_pair, wall_bounce};
pub use color::Rgb;
pub use input::{InputInterpreter, PointerButton, PointerEvent, PointerMode};
pub use state::{Ball, Rect, World, WorldConfig, WorldEvent};
pub use tick::{SpitCommand, TickInput, tick};
