//! Player kinematics: continuous position, velocity and facing.

use crate::types::{Direction, ScreenPoint};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    x: f64,
    y: f64,
    dx: f64,
    dy: f64,
    facing: Direction,
}

impl Player {
    pub fn new(position: ScreenPoint, facing: Direction) -> Self {
        Self {
            x: position.x,
            y: position.y,
            dx: 0.0,
            dy: 0.0,
            facing,
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn dx(&self) -> f64 {
        self.dx
    }

    pub fn dy(&self) -> f64 {
        self.dy
    }

    pub fn position(&self) -> ScreenPoint {
        ScreenPoint::new(self.x, self.y)
    }

    pub fn velocity(&self) -> (f64, f64) {
        (self.dx, self.dy)
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }

    pub fn is_moving(&self) -> bool {
        self.dx != 0.0 || self.dy != 0.0
    }

    pub fn reset_position(&mut self, position: ScreenPoint) {
        self.x = position.x;
        self.y = position.y;
    }

    pub fn set_velocity(&mut self, dx: f64, dy: f64) {
        self.dx = dx;
        self.dy = dy;
    }

    pub fn stop(&mut self) {
        self.set_velocity(0.0, 0.0);
    }

    pub fn set_facing(&mut self, facing: Direction) {
        self.facing = facing;
    }

    /// Advance one frame along the current velocity.
    pub fn update(&mut self) {
        self.x += self.dx;
        self.y += self.dy;
    }
}
