//! Platform abstraction layer
//!
//! The simulation consumes three collaborators:
//! - a render surface, drawn once per frame before the tick
//! - a game-over display, shown with the winner and hidden on restart
//! - a frame scheduler, asked for one more frame while the match runs

pub mod headless;
#[cfg(target_arch = "wasm32")]
pub mod web;

use crate::sim::{MatchState, RoundController, TickOutcome, Winner};
use crate::tuning::DeviceProfile;

/// Draws the playfield
pub trait RenderSurface {
    fn render(&mut self, state: &MatchState);
}

/// End-of-match screen
pub trait GameOverDisplay {
    fn show_winner(&mut self, winner: Winner);
    fn hide(&mut self);
}

/// Runs the next frame at the next display refresh
pub trait FrameScheduler {
    fn request_frame(&mut self);
}

/// Start (or restart) the match and kick off the frame loop
///
/// Returns false, touching nothing, when a match is already running.
pub fn start_match(
    controller: &mut RoundController,
    display: &mut impl GameOverDisplay,
    scheduler: &mut impl FrameScheduler,
) -> bool {
    if !controller.start() {
        return false;
    }
    display.hide();
    scheduler.request_frame();
    true
}

/// One display frame: render, tick, then reschedule or show the winner
pub fn run_frame(
    controller: &mut RoundController,
    surface: &mut impl RenderSurface,
    display: &mut impl GameOverDisplay,
    scheduler: &mut impl FrameScheduler,
) -> TickOutcome {
    if !controller.state().is_round_active() {
        return TickOutcome::Idle;
    }

    surface.render(controller.state());
    let outcome = controller.tick();

    if outcome.wants_next_frame() {
        scheduler.request_frame();
    } else if let TickOutcome::GameOver(winner) = outcome {
        display.show_winner(winner);
    }
    outcome
}

/// Device profile for this process, read once at startup
#[cfg(target_arch = "wasm32")]
pub fn detect_device_profile() -> DeviceProfile {
    web::detect_device_profile()
}

/// Device profile from `PONG_DEVICE` (defaults to desktop)
#[cfg(not(target_arch = "wasm32"))]
pub fn detect_device_profile() -> DeviceProfile {
    match std::env::var("PONG_DEVICE") {
        Ok(value) => DeviceProfile::from_str(&value).unwrap_or_else(|| {
            log::warn!("Unknown PONG_DEVICE '{}', using desktop", value);
            DeviceProfile::Desktop
        }),
        Err(_) => DeviceProfile::Desktop,
    }
}
