//! Ball motion integration

use super::state::MatchState;

/// Move the ball one tick along its velocity
///
/// The ball only drifts sideways once the human has moved and has struck the
/// ball this rally; before that it travels straight up and down.
pub fn advance(state: &mut MatchState) {
    state.ball.pos.y -= state.ball.vel.y;

    if state.human_has_moved && state.paddle_contact_made {
        state.ball.pos.x += state.ball.vel.x;
    }
}
