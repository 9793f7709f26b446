/// Direction the snake can be steered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the unit velocity for this direction
    pub fn velocity(&self) -> Velocity {
        match self {
            Direction::Up => Velocity::new(0, -1),
            Direction::Down => Velocity::new(0, 1),
            Direction::Left => Velocity::new(-1, 0),
            Direction::Right => Velocity::new(1, 0),
        }
    }
}

/// Movement vector applied to the snake head each tick.
///
/// Restricted to the four unit directions, plus the zero vector which only
/// occurs before the first steering input and after a restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Velocity {
    pub dx: i32,
    pub dy: i32,
}

impl Velocity {
    pub const ZERO: Velocity = Velocity { dx: 0, dy: 0 };

    pub fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    pub fn is_zero(&self) -> bool {
        self.dx == 0 && self.dy == 0
    }

    /// Returns true if `other` is the exact reversal of this velocity.
    /// The zero vector has no opposite.
    pub fn opposes(&self, other: Velocity) -> bool {
        !self.is_zero() && self.dx == -other.dx && self.dy == -other.dy
    }
}

impl From<Direction> for Velocity {
    fn from(direction: Direction) -> Self {
        direction.velocity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_velocity() {
        assert_eq!(Direction::Up.velocity(), Velocity::new(0, -1));
        assert_eq!(Direction::Down.velocity(), Velocity::new(0, 1));
        assert_eq!(Direction::Left.velocity(), Velocity::new(-1, 0));
        assert_eq!(Direction::Right.velocity(), Velocity::new(1, 0));
    }

    #[test]
    fn test_opposing_velocities() {
        assert!(Velocity::new(1, 0).opposes(Velocity::new(-1, 0)));
        assert!(Velocity::new(-1, 0).opposes(Velocity::new(1, 0)));
        assert!(Velocity::new(0, 1).opposes(Velocity::new(0, -1)));
        assert!(Velocity::new(0, -1).opposes(Velocity::new(0, 1)));

        assert!(!Velocity::new(1, 0).opposes(Velocity::new(0, 1)));
        assert!(!Velocity::new(1, 0).opposes(Velocity::new(1, 0)));
    }

    #[test]
    fn test_zero_velocity_has_no_opposite() {
        assert!(!Velocity::ZERO.opposes(Velocity::new(1, 0)));
        assert!(!Velocity::ZERO.opposes(Velocity::ZERO));
    }
}
