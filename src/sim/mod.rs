//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One tick per frame, no wall-clock time
//! - No randomness
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod motion;
pub mod opponent;
pub mod round;
pub mod state;

pub use collision::{BoundaryEvents, resolve_boundaries, within_paddle};
pub use input::{InputQueue, PaddleCommand, paddle_x_for_pointer};
pub use motion::advance;
pub use round::{RoundController, TickOutcome};
pub use state::{Ball, MatchPhase, MatchState, Winner};
