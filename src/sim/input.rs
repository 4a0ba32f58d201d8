//! Pointer input queue
//!
//! Input handlers never touch `MatchState` directly. They push commands here
//! and the round controller drains them at the start of the next tick.

use std::collections::VecDeque;

use crate::consts::{MAX_PENDING_INPUTS, PADDLE_EDGE_MARGIN, PADDLE_MAX_X};

/// A request from the player
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaddleCommand {
    /// Put the human paddle's left edge at `x` (clamped when applied)
    MoveHumanPaddle { x: f32 },
}

/// Paddle left edge for a pointer at `pointer_x`, with the field's left edge
/// at `field_left` in the same coordinates. The paddle centre tracks the pointer.
///
/// Near the left wall the paddle snaps flush to 0 rather than stopping short.
#[inline]
pub fn paddle_x_for_pointer(pointer_x: f32, field_left: f32) -> f32 {
    let x = pointer_x - field_left - PADDLE_EDGE_MARGIN;
    if x < PADDLE_EDGE_MARGIN {
        0.0
    } else {
        x.min(PADDLE_MAX_X)
    }
}

/// Bounded FIFO of pending commands
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pending: VecDeque<PaddleCommand>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a command, dropping the oldest when full
    pub fn push(&mut self, command: PaddleCommand) {
        if self.pending.len() >= MAX_PENDING_INPUTS {
            self.pending.pop_front();
        }
        self.pending.push_back(command);
    }

    /// Take every pending command in arrival order
    pub fn drain(&mut self) -> impl Iterator<Item = PaddleCommand> + '_ {
        self.pending.drain(..)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_centres_paddle() {
        // Field starts at x=100 on screen; pointer over field x=250
        assert_eq!(paddle_x_for_pointer(350.0, 100.0), 225.0);
    }

    #[test]
    fn test_drain_in_order() {
        let mut queue = InputQueue::new();
        queue.push(PaddleCommand::MoveHumanPaddle { x: 10.0 });
        queue.push(PaddleCommand::MoveHumanPaddle { x: 20.0 });

        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(
            drained,
            vec![
                PaddleCommand::MoveHumanPaddle { x: 10.0 },
                PaddleCommand::MoveHumanPaddle { x: 20.0 },
            ]
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn test_full_queue_drops_oldest() {
        let mut queue = InputQueue::new();
        for i in 0..(MAX_PENDING_INPUTS + 3) {
            queue.push(PaddleCommand::MoveHumanPaddle { x: i as f32 });
        }
        assert_eq!(queue.len(), MAX_PENDING_INPUTS);
        assert_eq!(
            queue.drain().next(),
            Some(PaddleCommand::MoveHumanPaddle { x: 3.0 })
        );
    }

    #[test]
    fn test_pointer_near_left_wall_snaps_flush() {
        // 40 px in would leave the paddle at 15
        assert_eq!(paddle_x_for_pointer(140.0, 100.0), 0.0);
        assert_eq!(paddle_x_for_pointer(149.9, 100.0), 0.0);
        assert_eq!(paddle_x_for_pointer(150.0, 100.0), 25.0);
        assert_eq!(paddle_x_for_pointer(20.0, 100.0), 0.0);
    }

    #[test]
    fn test_pointer_past_right_wall_clamps() {
        assert_eq!(paddle_x_for_pointer(900.0, 100.0), PADDLE_MAX_X);
    }
}
