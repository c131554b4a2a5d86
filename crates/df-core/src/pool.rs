//! Clamped resource pools (Hope, Fear, hit points).
//!
//! A pool is a numeric value that can never leave its 0..=max range.
//! Mutations clamp instead of erroring, so callers can apply deltas
//! blindly and the invariant holds after every write.

use serde::{Deserialize, Serialize};

/// Upper bound shared by the Hope and Fear pools.
pub const RESOURCE_POOL_MAX: u32 = 10;

/// A numeric resource clamped to 0..=max.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pool {
    current: u32,
    max: u32,
}

impl Pool {
    /// Create a pool with the given starting value, clamped to 0..=max.
    pub fn new(current: u32, max: u32) -> Self {
        Self {
            current: current.min(max),
            max,
        }
    }

    /// Create a pool starting at its maximum value.
    pub fn full(max: u32) -> Self {
        Self { current: max, max }
    }

    /// A Hope/Fear pool (0..=10) at the given starting value.
    pub fn resource(current: u32) -> Self {
        Self::new(current, RESOURCE_POOL_MAX)
    }

    /// Current value.
    pub fn current(&self) -> u32 {
        self.current
    }

    /// Maximum value.
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Add `amount`, clamping at max. Returns the new value.
    pub fn gain(&mut self, amount: u32) -> u32 {
        self.current = (self.current + amount).min(self.max);
        self.current
    }

    /// Remove `amount`, clamping at 0. Returns the new value.
    pub fn spend(&mut self, amount: u32) -> u32 {
        self.current = self.current.saturating_sub(amount);
        self.current
    }

    /// Apply a signed delta, clamping to 0..=max. Returns the new value.
    pub fn adjust(&mut self, delta: i32) -> u32 {
        let next = self.current as i64 + delta as i64;
        self.current = next.clamp(0, self.max as i64) as u32;
        self.current
    }

    /// Overwrite the current value, clamped to 0..=max.
    pub fn set(&mut self, value: u32) {
        self.current = value.min(self.max);
    }

    /// True when the pool is at 0.
    pub fn is_empty(&self) -> bool {
        self.current == 0
    }

    /// True when the pool is at its maximum.
    pub fn is_full(&self) -> bool {
        self.current >= self.max
    }
}

impl std::fmt::Display for Pool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.current, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_starting_value() {
        let p = Pool::new(15, 10);
        assert_eq!(p.current(), 10);
        assert!(p.is_full());
    }

    #[test]
    fn full_starts_at_max() {
        let p = Pool::full(25);
        assert_eq!(p.current(), 25);
        assert_eq!(p.max(), 25);
    }

    #[test]
    fn resource_pool_caps_at_ten() {
        let mut p = Pool::resource(5);
        assert_eq!(p.gain(20), 10);
        assert!(p.is_full());
    }

    #[test]
    fn spend_floors_at_zero() {
        let mut p = Pool::resource(3);
        assert_eq!(p.spend(7), 0);
        assert!(p.is_empty());
    }

    #[test]
    fn adjust_clamps_both_ways() {
        let mut p = Pool::resource(5);
        assert_eq!(p.adjust(100), 10);
        assert_eq!(p.adjust(-100), 0);
        assert_eq!(p.adjust(3), 3);
    }

    #[test]
    fn set_clamps() {
        let mut p = Pool::new(0, 20);
        p.set(99);
        assert_eq!(p.current(), 20);
        p.set(7);
        assert_eq!(p.current(), 7);
    }

    #[test]
    fn display() {
        let p = Pool::new(3, 10);
        assert_eq!(p.to_string(), "3/10");
    }

    #[test]
    fn serde_roundtrip() {
        let p = Pool::resource(6);
        let json = serde_json::to_string(&p).unwrap();
        let p2: Pool = serde_json::from_str(&json).unwrap();
        assert_eq!(p, p2);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn adjust_never_leaves_bounds(start in 0u32..=10, delta in -100i32..=100) {
                let mut p = Pool::resource(start);
                let value = p.adjust(delta);
                prop_assert!(value <= RESOURCE_POOL_MAX);
                prop_assert_eq!(value, p.current());
            }

            #[test]
            fn gain_then_spend_stays_in_bounds(
                start in 0u32..=10,
                gain in 0u32..=50,
                spend in 0u32..=50,
            ) {
                let mut p = Pool::resource(start);
                p.gain(gain);
                p.spend(spend);
                prop_assert!(p.current() <= p.max());
            }
        }
    }
}
