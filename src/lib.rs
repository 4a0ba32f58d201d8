//! Rally Pong - two paddles, one ball, first to seven
//!
//! Core modules:
//! - `sim`: Simulation (ball motion, boundaries, scoring, opponent, rounds)
//! - `platform`: Collaborator contracts (render surface, game-over display, frame scheduler)
//! - `renderer`: 2D canvas drawing (wasm only)
//! - `tuning`: Device presets for ball and opponent speed

pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::{DeviceProfile, Tuning};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions
    pub const FIELD_WIDTH: f32 = 500.0;
    pub const FIELD_HEIGHT: f32 = 700.0;

    /// Paddle geometry
    pub const PADDLE_WIDTH: f32 = 50.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Depth of each paddle's contact zone, also half the paddle width
    pub const PADDLE_EDGE_MARGIN: f32 = 25.0;
    /// Both paddles start centred
    pub const PADDLE_START_X: f32 = (FIELD_WIDTH - PADDLE_WIDTH) / 2.0;
    /// Rightmost legal paddle X (left edge)
    pub const PADDLE_MAX_X: f32 = FIELD_WIDTH - PADDLE_WIDTH;
    /// Drawn Y of the paddles (top edge)
    pub const HUMAN_PADDLE_Y: f32 = FIELD_HEIGHT - 20.0;
    pub const AI_PADDLE_Y: f32 = 10.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 5.0;
    /// Vertical speed after every ball reset (toward the human)
    pub const SERVE_VELOCITY_Y: f32 = -3.0;
    /// Cap on |velocity_y| from paddle speed-ups
    pub const MAX_VELOCITY_Y: f32 = 5.0;
    /// Speed added on each paddle hit once the human has engaged
    pub const PADDLE_SPEED_STEP: f32 = 1.0;
    /// Horizontal speed per pixel of off-centre contact
    pub const DEFLECTION_FACTOR: f32 = 0.3;

    /// Opponent step once the ball first hits max speed
    pub const ESCALATED_AI_SPEED: f32 = 6.0;

    /// Match length
    pub const WINNING_SCORE: u8 = 7;

    /// Pointer events held between ticks before the oldest is dropped
    pub const MAX_PENDING_INPUTS: usize = 64;
}

/// Clamp a paddle's left edge to the playfield
#[inline]
pub fn clamp_paddle_x(x: f32) -> f32 {
    x.clamp(0.0, consts::PADDLE_MAX_X)
}
