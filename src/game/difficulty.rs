use std::time::Duration;

use super::config::GameConfig;

/// Maps cumulative food consumption to the game tick delay.
///
/// The delay shrinks by `decrement_ms` every `step` food items, down to a
/// floor of `min_ms`. Recomputation only happens when the count crosses a
/// step boundary; between boundaries the delay is left untouched. Pure
/// computation; re-arming the tick timer is the caller's side effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Difficulty {
    base_ms: u64,
    step: u32,
    decrement_ms: u64,
    min_ms: u64,
    delay_ms: u64,
}

impl Difficulty {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            base_ms: config.base_delay_ms,
            step: config.difficulty_step,
            decrement_ms: config.decrement_ms,
            min_ms: config.min_delay_ms,
            delay_ms: config.base_delay_ms,
        }
    }

    /// Recompute the delay for the given cumulative food count. Returns true
    /// if the delay changed, so the caller can re-arm its timer.
    pub fn on_food_consumed(&mut self, count: u32) -> bool {
        if count == 0 || count % self.step != 0 {
            return false;
        }
        let steps = (count / self.step) as u64;
        let new_delay = self
            .base_ms
            .saturating_sub(steps * self.decrement_ms)
            .max(self.min_ms);
        let changed = new_delay != self.delay_ms;
        self.delay_ms = new_delay;
        changed
    }

    /// Current tick period
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Reset to the base delay (new game)
    pub fn reset(&mut self) {
        self.delay_ms = self.base_ms;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn difficulty() -> Difficulty {
        Difficulty::from_config(&GameConfig::default())
    }

    #[test]
    fn test_initial_delay() {
        assert_eq!(difficulty().delay_ms(), 100);
    }

    #[test]
    fn test_delay_unchanged_between_steps() {
        let mut d = difficulty();
        for count in [0, 1, 2, 3, 4] {
            assert!(!d.on_food_consumed(count));
            assert_eq!(d.delay_ms(), 100);
        }
    }

    #[test]
    fn test_delay_drops_at_step_boundary() {
        let mut d = difficulty();
        assert!(d.on_food_consumed(5));
        assert_eq!(d.delay_ms(), 90);
        assert!(d.on_food_consumed(10));
        assert_eq!(d.delay_ms(), 80);
    }

    #[test]
    fn test_delay_floors_at_minimum() {
        let mut d = difficulty();
        d.on_food_consumed(50);
        assert_eq!(d.delay_ms(), 50);

        // Past the floor the boundary is crossed but nothing changes.
        assert!(!d.on_food_consumed(100));
        assert_eq!(d.delay_ms(), 50);
    }

    #[test]
    fn test_delay_is_non_increasing() {
        let mut d = difficulty();
        let mut previous = d.delay_ms();
        for count in 1..=200 {
            d.on_food_consumed(count);
            assert!(d.delay_ms() <= previous);
            previous = d.delay_ms();
        }
    }

    #[test]
    fn test_reset_restores_base_delay() {
        let mut d = difficulty();
        d.on_food_consumed(25);
        assert!(d.delay_ms() < 100);
        d.reset();
        assert_eq!(d.delay_ms(), 100);
    }
}
