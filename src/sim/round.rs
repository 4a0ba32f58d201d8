//! Round controller
//!
//! Owns the `MatchState` and walks it through
//! `NotStarted -> Active -> GameOver -> Active -> ...`.
//! Each tick applies queued input, moves the ball, resolves boundaries,
//! steps the opponent and checks for a winner.

use super::collision::{self, BoundaryEvents};
use super::input::{InputQueue, PaddleCommand};
use super::motion;
use super::opponent;
use super::state::{MatchPhase, MatchState, Winner};
use crate::tuning::Tuning;

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Match not active, nothing changed
    Idle,
    /// Still playing, schedule another tick
    Continue,
    /// The match ended this tick
    GameOver(Winner),
}

impl TickOutcome {
    pub fn wants_next_frame(&self) -> bool {
        matches!(self, TickOutcome::Continue)
    }
}

/// Drives the match
#[derive(Debug, Clone)]
pub struct RoundController {
    state: MatchState,
    input: InputQueue,
    last_events: BoundaryEvents,
    /// Ticks since the last start
    ticks: u64,
}

impl RoundController {
    pub fn new(tuning: Tuning) -> Self {
        log::debug!("Match created with {:?}", tuning);
        Self {
            state: MatchState::new(&tuning),
            input: InputQueue::new(),
            last_events: BoundaryEvents::default(),
            ticks: 0,
        }
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Direct access for scenario setup
    pub fn state_mut(&mut self) -> &mut MatchState {
        &mut self.state
    }

    pub fn phase(&self) -> MatchPhase {
        self.state.phase
    }

    /// Boundary events from the most recent tick
    pub fn last_events(&self) -> BoundaryEvents {
        self.last_events
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Queue input for the next tick
    pub fn queue_command(&mut self, command: PaddleCommand) {
        self.input.push(command);
    }

    pub fn pending_inputs(&self) -> usize {
        self.input.len()
    }

    /// Start or restart the match
    ///
    /// Zeroes the scores and serves a fresh ball. Ignored while a match is
    /// already active. Returns whether the match (re)started.
    pub fn start(&mut self) -> bool {
        if self.state.is_round_active() {
            log::debug!("Start ignored, match already active");
            return false;
        }

        let restarted = !self.state.is_fresh_match();
        self.state.human_score = 0;
        self.state.ai_score = 0;
        self.state.reset_ball();
        self.state.phase = MatchPhase::Active;
        self.last_events = BoundaryEvents::default();
        self.ticks = 0;

        if restarted {
            log::info!("Match restarted");
        } else {
            log::info!("Match started");
        }
        true
    }

    /// Advance the match by one tick
    pub fn tick(&mut self) -> TickOutcome {
        if !self.state.is_round_active() {
            log::trace!("Tick ignored in {:?}", self.state.phase);
            return TickOutcome::Idle;
        }

        self.apply_pending_input();

        motion::advance(&mut self.state);
        self.last_events = collision::resolve_boundaries(&mut self.state);
        opponent::step(&mut self.state);
        self.ticks += 1;

        if let Some(winner) = self.state.winner() {
            self.state.phase = MatchPhase::GameOver { winner };
            log::info!(
                "{} wins {}-{} after {} ticks",
                winner.label(),
                self.state.human_score,
                self.state.ai_score,
                self.ticks
            );
            return TickOutcome::GameOver(winner);
        }

        TickOutcome::Continue
    }

    fn apply_pending_input(&mut self) {
        for command in self.input.drain() {
            match command {
                PaddleCommand::MoveHumanPaddle { x } => {
                    if !self.state.human_has_moved {
                        log::debug!("Player engaged, opponent active");
                    }
                    self.state.set_human_paddle_x(x);
                }
            }
        }
    }
}
