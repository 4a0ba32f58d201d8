//! Match state and core simulation types
//!
//! One `MatchState` lives for the whole process and is threaded by reference
//! through every simulation phase.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::clamp_paddle_x;
use crate::consts::*;
use crate::tuning::Tuning;

/// Which side won a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    Human,
    Opponent,
}

impl Winner {
    /// Name shown on the game-over screen
    pub fn label(&self) -> &'static str {
        match self {
            Winner::Human => "Player 1",
            Winner::Opponent => "Computer",
        }
    }
}

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Never started
    NotStarted,
    /// Ticking
    Active,
    /// Ended, waiting for a restart
    GameOver { winner: Winner },
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Centre
    pub pos: Vec2,
    /// Positive `vel.y` travels toward the opponent (screen Y decreasing)
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn centre() -> Vec2 {
        Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0)
    }
}

/// Complete match state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    /// Left edge of the bottom paddle
    pub human_paddle_x: f32,
    /// Left edge of the top paddle
    pub ai_paddle_x: f32,
    pub ball: Ball,
    /// Opponent paddle step per tick
    pub ai_speed: f32,
    /// Set by the first pointer move; the opponent and horizontal drift wait for it
    pub human_has_moved: bool,
    /// Ball has struck the human paddle this rally
    pub paddle_contact_made: bool,
    pub human_score: u8,
    pub ai_score: u8,
    pub phase: MatchPhase,
}

impl MatchState {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            human_paddle_x: PADDLE_START_X,
            ai_paddle_x: PADDLE_START_X,
            ball: Ball {
                pos: Ball::centre(),
                vel: Vec2::new(tuning.initial_velocity_x, tuning.initial_velocity_y),
                radius: BALL_RADIUS,
            },
            ai_speed: tuning.ai_speed,
            human_has_moved: false,
            paddle_contact_made: false,
            human_score: 0,
            ai_score: 0,
            phase: MatchPhase::NotStarted,
        }
    }

    /// Re-centre the ball and serve it toward the human
    pub fn reset_ball(&mut self) {
        self.ball.pos = Ball::centre();
        self.ball.vel.y = SERVE_VELOCITY_Y;
        self.paddle_contact_made = false;
    }

    /// Move the human paddle, clamped to the field
    pub fn set_human_paddle_x(&mut self, x: f32) {
        self.human_paddle_x = clamp_paddle_x(x);
        self.human_has_moved = true;
    }

    pub fn is_round_active(&self) -> bool {
        self.phase == MatchPhase::Active
    }

    pub fn is_fresh_match(&self) -> bool {
        self.phase == MatchPhase::NotStarted
    }

    /// Winner once either score reaches `WINNING_SCORE`
    pub fn winner(&self) -> Option<Winner> {
        if self.human_score == WINNING_SCORE {
            Some(Winner::Human)
        } else if self.ai_score == WINNING_SCORE {
            Some(Winner::Opponent)
        } else {
            None
        }
    }
}
