//! Computer-controlled paddle

use super::state::MatchState;
use crate::clamp_paddle_x;
use crate::consts::PADDLE_EDGE_MARGIN;

/// Chase the ball by a fixed step
///
/// Inert until the human first moves. The paddle always steps a full
/// `ai_speed` toward the ball, so it can overshoot and correct next tick.
pub fn step(state: &mut MatchState) {
    if !state.human_has_moved {
        return;
    }

    let paddle_centre = state.ai_paddle_x + PADDLE_EDGE_MARGIN;
    let next_x = if paddle_centre < state.ball.pos.x {
        state.ai_paddle_x + state.ai_speed
    } else {
        state.ai_paddle_x - state.ai_speed
    };
    state.ai_paddle_x = clamp_paddle_x(next_x);
}
