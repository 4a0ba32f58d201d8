//! Headless collaborators for the native runner and tests

use super::{FrameScheduler, GameOverDisplay, RenderSurface, run_frame, start_match};
use crate::consts::PADDLE_EDGE_MARGIN;
use crate::sim::{BoundaryEvents, MatchState, PaddleCommand, RoundController, Winner};

/// Frames after which a headless match is abandoned
pub const MAX_HEADLESS_FRAMES: u64 = 200_000;

/// Counts frames instead of drawing them
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    pub frames: u64,
}

impl RenderSurface for HeadlessSurface {
    fn render(&mut self, state: &MatchState) {
        self.frames += 1;
        log::trace!(
            "frame {}: ball ({:.1}, {:.1}) paddles {:.1}/{:.1}",
            self.frames,
            state.ball.pos.x,
            state.ball.pos.y,
            state.human_paddle_x,
            state.ai_paddle_x
        );
    }
}

/// Remembers the winner
#[derive(Debug, Default)]
pub struct HeadlessDisplay {
    pub winner: Option<Winner>,
    pub visible: bool,
}

impl GameOverDisplay for HeadlessDisplay {
    fn show_winner(&mut self, winner: Winner) {
        log::info!("{} Wins!", winner.label());
        self.winner = Some(winner);
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }
}

/// Grants frames from a plain loop
#[derive(Debug, Default)]
pub struct HeadlessScheduler {
    pending: bool,
}

impl HeadlessScheduler {
    /// Consume the pending frame request, if any
    pub fn take_frame(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }
}

impl FrameScheduler for HeadlessScheduler {
    fn request_frame(&mut self) {
        self.pending = true;
    }
}

/// Off-centre contact offsets, cycled one per return
const RETURN_OFFSETS: [f32; 6] = [12.0, -18.0, 6.0, -22.0, 16.0, -9.0];

/// Plays the human side
///
/// Keeps the paddle under the ball so it lands a little off-centre, which
/// angles every return differently.
#[derive(Debug, Default)]
pub struct Autopilot {
    returns: usize,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Note the last tick's events
    pub fn observe(&mut self, events: &BoundaryEvents) {
        if events.human_paddle_hit {
            self.returns += 1;
        }
    }

    pub fn command_for(&self, state: &MatchState) -> PaddleCommand {
        let offset = RETURN_OFFSETS[self.returns % RETURN_OFFSETS.len()];
        PaddleCommand::MoveHumanPaddle {
            x: state.ball.pos.x - PADDLE_EDGE_MARGIN - offset,
        }
    }
}

/// How a headless match finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadlessRun {
    pub winner: Option<Winner>,
    pub frames: u64,
}

/// Play one match to the end (or the frame cap) with the autopilot
pub fn play_match(controller: &mut RoundController, max_frames: u64) -> HeadlessRun {
    let mut surface = HeadlessSurface::default();
    let mut display = HeadlessDisplay::default();
    let mut scheduler = HeadlessScheduler::default();
    let mut pilot = Autopilot::new();

    if !start_match(controller, &mut display, &mut scheduler) {
        log::warn!("Match already running, not starting another");
    }

    while scheduler.take_frame() {
        if surface.frames >= max_frames {
            log::warn!("Stopping after {} frames without a winner", surface.frames);
            break;
        }
        controller.queue_command(pilot.command_for(controller.state()));
        run_frame(controller, &mut surface, &mut display, &mut scheduler);
        pilot.observe(&controller.last_events());
    }

    HeadlessRun {
        winner: display.winner,
        frames: surface.frames,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::WINNING_SCORE;
    use crate::sim::{MatchPhase, TickOutcome};
    use crate::tuning::Tuning;

    #[test]
    fn test_frame_renders_before_tick() {
        let mut controller = RoundController::new(Tuning::default());
        let mut surface = HeadlessSurface::default();
        let mut display = HeadlessDisplay::default();
        let mut scheduler = HeadlessScheduler::default();

        assert!(start_match(&mut controller, &mut display, &mut scheduler));
        assert!(scheduler.take_frame());

        let outcome = run_frame(&mut controller, &mut surface, &mut display, &mut scheduler);
        assert_eq!(outcome, TickOutcome::Continue);
        assert_eq!(surface.frames, 1);
        assert!(scheduler.take_frame());
        assert!(!scheduler.take_frame());
    }

    #[test]
    fn test_game_over_stops_scheduling() {
        let mut controller = RoundController::new(Tuning::default());
        let mut surface = HeadlessSurface::default();
        let mut display = HeadlessDisplay::default();
        let mut scheduler = HeadlessScheduler::default();

        start_match(&mut controller, &mut display, &mut scheduler);
        scheduler.take_frame();
        controller.state_mut().human_score = WINNING_SCORE;

        let outcome = run_frame(&mut controller, &mut surface, &mut display, &mut scheduler);

        assert_eq!(outcome, TickOutcome::GameOver(Winner::Human));
        assert_eq!(display.winner, Some(Winner::Human));
        assert!(display.visible);
        assert!(!scheduler.take_frame());

        // Frames after game over draw nothing
        let outcome = run_frame(&mut controller, &mut surface, &mut display, &mut scheduler);
        assert_eq!(outcome, TickOutcome::Idle);
        assert_eq!(surface.frames, 1);
    }

    #[test]
    fn test_restart_hides_display() {
        let mut controller = RoundController::new(Tuning::default());
        let mut display = HeadlessDisplay::default();
        let mut scheduler = HeadlessScheduler::default();

        start_match(&mut controller, &mut display, &mut scheduler);
        controller.state_mut().ai_score = WINNING_SCORE;
        controller.tick();
        display.show_winner(Winner::Opponent);

        assert!(start_match(&mut controller, &mut display, &mut scheduler));
        assert!(!display.visible);
        assert_eq!(controller.phase(), MatchPhase::Active);
        // Second start while active is refused
        assert!(!start_match(&mut controller, &mut display, &mut scheduler));
    }

    #[test]
    fn test_autopilot_aims_off_centre() {
        let controller = RoundController::new(Tuning::default());
        let mut pilot = Autopilot::new();

        assert_eq!(
            pilot.command_for(controller.state()),
            PaddleCommand::MoveHumanPaddle { x: 213.0 }
        );

        pilot.observe(&BoundaryEvents {
            human_paddle_hit: true,
            ..Default::default()
        });
        assert_eq!(
            pilot.command_for(controller.state()),
            PaddleCommand::MoveHumanPaddle { x: 243.0 }
        );
    }

    #[test]
    fn test_play_match_respects_frame_cap() {
        let mut controller = RoundController::new(Tuning::default());
        let run = play_match(&mut controller, 10);
        assert_eq!(run.frames, 10);
        assert_eq!(run.winner, None);
        assert!(controller.state().is_round_active());
    }
}
