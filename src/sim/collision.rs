//! Boundary resolution and scoring
//!
//! Runs once per tick after the ball has moved: side walls reflect, paddles
//! return the ball (and speed it up once the human is playing), and a ball
//! that slips past a paddle scores for the other side.

use super::state::{MatchState, Winner};
use crate::consts::*;

/// What happened at the boundaries this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoundaryEvents {
    pub wall_bounce: bool,
    pub human_paddle_hit: bool,
    pub ai_paddle_hit: bool,
    /// The ball hit max speed and the opponent sped up for the first time
    pub escalated: bool,
    /// A point was scored; the ball has been reset
    pub rally_won_by: Option<Winner>,
}

impl BoundaryEvents {
    pub fn any(&self) -> bool {
        self.wall_bounce
            || self.human_paddle_hit
            || self.ai_paddle_hit
            || self.rally_won_by.is_some()
    }
}

/// Is `ball_x` over a paddle whose left edge is `paddle_x`?
#[inline]
pub fn within_paddle(ball_x: f32, paddle_x: f32) -> bool {
    ball_x >= paddle_x && ball_x <= paddle_x + PADDLE_WIDTH
}

/// Resolve walls, paddles and scoring for the ball's current position
pub fn resolve_boundaries(state: &mut MatchState) -> BoundaryEvents {
    let mut events = BoundaryEvents::default();

    bounce_side_walls(state, &mut events);
    resolve_human_zone(state, &mut events);
    resolve_ai_zone(state, &mut events);

    events
}

fn bounce_side_walls(state: &mut MatchState, events: &mut BoundaryEvents) {
    let ball = &mut state.ball;
    let leaving_left = ball.pos.x < 0.0 && ball.vel.x < 0.0;
    let leaving_right = ball.pos.x > FIELD_WIDTH && ball.vel.x > 0.0;

    if leaving_left || leaving_right {
        ball.vel.x = -ball.vel.x;
        events.wall_bounce = true;
    }
}

/// Bottom zone: the human paddle
fn resolve_human_zone(state: &mut MatchState, events: &mut BoundaryEvents) {
    if state.ball.pos.y <= FIELD_HEIGHT - PADDLE_EDGE_MARGIN {
        return;
    }

    if within_paddle(state.ball.pos.x, state.human_paddle_x) {
        state.paddle_contact_made = true;

        if state.human_has_moved {
            state.ball.vel.y -= PADDLE_SPEED_STEP;
            if state.ball.vel.y < -MAX_VELOCITY_Y {
                state.ball.vel.y = -MAX_VELOCITY_Y;
                if state.ai_speed != ESCALATED_AI_SPEED {
                    log::debug!(
                        "Ball at max speed, opponent {} -> {}",
                        state.ai_speed,
                        ESCALATED_AI_SPEED
                    );
                    state.ai_speed = ESCALATED_AI_SPEED;
                    events.escalated = true;
                }
            }
        }
        state.ball.vel.y = -state.ball.vel.y;

        // Off-centre hits angle the return
        let trajectory_x = state.ball.pos.x - (state.human_paddle_x + PADDLE_EDGE_MARGIN);
        state.ball.vel.x = trajectory_x * DEFLECTION_FACTOR;

        events.human_paddle_hit = true;
    } else if state.ball.pos.y > FIELD_HEIGHT {
        state.reset_ball();
        state.ai_score += 1;
        events.rally_won_by = Some(Winner::Opponent);
        log::info!("Computer scores ({}-{})", state.human_score, state.ai_score);
    }
}

/// Top zone: the opponent paddle
fn resolve_ai_zone(state: &mut MatchState, events: &mut BoundaryEvents) {
    if state.ball.pos.y >= PADDLE_EDGE_MARGIN {
        return;
    }

    if within_paddle(state.ball.pos.x, state.ai_paddle_x) {
        if state.human_has_moved {
            state.ball.vel.y = (state.ball.vel.y + PADDLE_SPEED_STEP).min(MAX_VELOCITY_Y);
        }
        state.ball.vel.y = -state.ball.vel.y;
        events.ai_paddle_hit = true;
    } else if state.ball.pos.y < 0.0 {
        state.reset_ball();
        state.human_score += 1;
        events.rally_won_by = Some(Winner::Human);
        log::info!("Player 1 scores ({}-{})", state.human_score, state.ai_score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn state_with_ball(x: f32, y: f32, vel: Vec2) -> MatchState {
        let mut state = MatchState::new(&Tuning::default());
        state.ball.pos = Vec2::new(x, y);
        state.ball.vel = vel;
        state
    }

    #[test]
    fn test_left_wall_reflects_outgoing_ball() {
        let mut state = state_with_ball(-1.0, 300.0, Vec2::new(-2.0, 3.0));
        let events = resolve_boundaries(&mut state);
        assert!(events.wall_bounce);
        assert_eq!(state.ball.vel.x, 2.0);
    }

    #[test]
    fn test_right_wall_reflects_outgoing_ball() {
        let mut state = state_with_ball(501.0, 300.0, Vec2::new(2.5, 3.0));
        resolve_boundaries(&mut state);
        assert_eq!(state.ball.vel.x, -2.5);
    }

    #[test]
    fn test_wall_ignores_returning_ball() {
        // Already heading back in; reflecting again would trap it outside
        let mut state = state_with_ball(-1.0, 300.0, Vec2::new(2.0, 3.0));
        let events = resolve_boundaries(&mut state);
        assert!(!events.wall_bounce);
        assert_eq!(state.ball.vel.x, 2.0);
    }

    #[test]
    fn test_human_hit_before_engaging_keeps_speed() {
        let mut state = state_with_ball(250.0, 680.0, Vec2::new(0.0, -3.0));
        let events = resolve_boundaries(&mut state);

        assert!(events.human_paddle_hit);
        assert!(state.paddle_contact_made);
        assert_eq!(state.ball.vel.y, 3.0);
        assert_eq!(state.ball.vel.x, 0.0, "centre hit returns straight");
    }

    #[test]
    fn test_human_hit_speeds_up_and_angles() {
        let mut state = state_with_ball(240.0, 680.0, Vec2::new(0.0, -3.0));
        state.human_has_moved = true;
        state.human_paddle_x = 200.0;

        resolve_boundaries(&mut state);

        assert_eq!(state.ball.vel.y, 4.0);
        // 240 - (200 + 25) = 15 px right of centre
        assert!((state.ball.vel.x - 4.5).abs() < 1e-5);
    }

    #[test]
    fn test_human_hit_at_max_speed_escalates_opponent() {
        let mut state = state_with_ball(250.0, 680.0, Vec2::new(0.0, -5.0));
        state.human_has_moved = true;

        let events = resolve_boundaries(&mut state);

        assert!(events.escalated);
        assert_eq!(state.ball.vel.y, 5.0);
        assert_eq!(state.ai_speed, ESCALATED_AI_SPEED);

        // Second max-speed hit is not a new escalation
        state.ball.pos = Vec2::new(250.0, 680.0);
        state.ball.vel.y = -5.0;
        let events = resolve_boundaries(&mut state);
        assert!(!events.escalated);
        assert_eq!(state.ai_speed, ESCALATED_AI_SPEED);
    }

    #[test]
    fn test_miss_at_bottom_scores_for_opponent() {
        let mut state = state_with_ball(20.0, 701.0, Vec2::new(1.0, -4.0));
        state.paddle_contact_made = true;

        let events = resolve_boundaries(&mut state);

        assert_eq!(events.rally_won_by, Some(Winner::Opponent));
        assert_eq!(state.ai_score, 1);
        assert_eq!(state.human_score, 0);
        assert_eq!(state.ball.pos, Vec2::new(250.0, 350.0));
        assert_eq!(state.ball.vel.y, -3.0);
        assert!(!state.paddle_contact_made);
    }

    #[test]
    fn test_ball_in_bottom_zone_but_inside_field_is_not_a_point() {
        let mut state = state_with_ball(20.0, 690.0, Vec2::new(1.0, -4.0));
        let events = resolve_boundaries(&mut state);
        assert_eq!(events, BoundaryEvents::default());
        assert_eq!(state.ai_score, 0);
    }

    #[test]
    fn test_opponent_hit_speeds_up_capped() {
        let mut state = state_with_ball(250.0, 20.0, Vec2::new(0.0, 5.0));
        state.human_has_moved = true;

        let events = resolve_boundaries(&mut state);

        assert!(events.ai_paddle_hit);
        assert_eq!(state.ball.vel.y, -5.0);
        assert_eq!(state.ai_speed, 3.0, "only the human paddle escalates");
    }

    #[test]
    fn test_opponent_hit_before_engaging_keeps_speed() {
        let mut state = state_with_ball(250.0, 20.0, Vec2::new(0.0, 3.0));
        resolve_boundaries(&mut state);
        assert_eq!(state.ball.vel.y, -3.0);
    }

    #[test]
    fn test_miss_at_top_scores_for_human() {
        let mut state = state_with_ball(480.0, -1.0, Vec2::new(2.0, 4.0));

        let events = resolve_boundaries(&mut state);

        assert_eq!(events.rally_won_by, Some(Winner::Human));
        assert_eq!(state.human_score, 1);
        assert_eq!(state.ball.pos, Vec2::new(250.0, 350.0));
        assert_eq!(state.ball.vel.y, -3.0);
    }

    #[test]
    fn test_within_paddle_edges() {
        assert!(within_paddle(100.0, 100.0));
        assert!(within_paddle(150.0, 100.0));
        assert!(!within_paddle(99.9, 100.0));
        assert!(!within_paddle(150.1, 100.0));
    }
}
