//! Discrete orbit index with wraparound.

use std::f32::consts::TAU;

/// Fewest orbit steps per revolution.
pub const MIN_STEPS: u32 = 1;
/// Most orbit steps per revolution.
pub const MAX_STEPS: u32 = 99;

/// `lo + ((n - lo) mod (hi - lo))` with a true modulo, so negative inputs
/// land in range too. An empty range collapses to `lo`.
#[must_use]
pub fn wraparound(n: i64, lo: i64, hi: i64) -> i64 {
    let span = hi - lo;
    if span <= 0 {
        return lo;
    }
    lo + (n - lo).rem_euclid(span)
}

/// Which of `step_count` evenly spaced azimuth positions is current.
///
/// All inputs are clamped or wrapped; no transition can fail. The angle is
/// always derived from the index, never accumulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrbitStepper {
    index: u32,
    step_count: u32,
}

impl Default for OrbitStepper {
    fn default() -> Self {
        Self::new(8)
    }
}

impl OrbitStepper {
    /// Stepper at index 0 with `step_count` clamped to [1, 99].
    #[must_use]
    pub fn new(step_count: i64) -> Self {
        Self {
            index: 0,
            step_count: clamp_step_count(step_count),
        }
    }

    /// Current index, in `[0, step_count)`.
    #[must_use]
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Steps per revolution.
    #[must_use]
    pub fn step_count(&self) -> u32 {
        self.step_count
    }

    /// Change the step count, pulling the index back into range.
    /// Returns whether anything changed.
    pub fn set_step_count(&mut self, n: i64) -> bool {
        let step_count = clamp_step_count(n);
        let index = self.index.min(step_count - 1);
        let changed = step_count != self.step_count || index != self.index;
        self.step_count = step_count;
        self.index = index;
        changed
    }

    /// Jump to `i` modulo the step count. Returns whether the index changed.
    pub fn set_index(&mut self, i: i64) -> bool {
        let index = wraparound(i, 0, i64::from(self.step_count)) as u32;
        let changed = index != self.index;
        self.index = index;
        changed
    }

    /// Move `delta` steps forward (or backward when negative).
    pub fn advance(&mut self, delta: i64) -> bool {
        self.set_index(i64::from(self.index).saturating_add(delta))
    }

    /// Orbit angle of the current index, in radians.
    #[must_use]
    pub fn current_angle(&self) -> f32 {
        self.angle_of(self.index)
    }

    /// Orbit angle of an arbitrary step, wrapped into range first.
    #[must_use]
    pub fn angle_of(&self, index: u32) -> f32 {
        let index = index % self.step_count;
        TAU * index as f32 / self.step_count as f32
    }

    /// Indices of one full revolution, starting at 0.
    pub fn steps(&self) -> impl Iterator<Item = u32> {
        0..self.step_count
    }
}

fn clamp_step_count(n: i64) -> u32 {
    let clamped = n.clamp(i64::from(MIN_STEPS), i64::from(MAX_STEPS)) as u32;
    if i64::from(clamped) != n {
        log::debug!("step count {n} clamped to {clamped}");
    }
    clamped
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use super::*;

    #[test]
    fn set_index_is_true_modulo() {
        for count in MIN_STEPS..=MAX_STEPS {
            let mut stepper = OrbitStepper::new(i64::from(count));
            for i in -250..250_i64 {
                let _ = stepper.set_index(i);
                let idx = i64::from(stepper.index());
                assert!((0..i64::from(count)).contains(&idx));
                assert_eq!((idx - i).rem_euclid(i64::from(count)), 0);
            }
        }
    }

    #[test]
    fn step_count_is_clamped() {
        let mut stepper = OrbitStepper::default();
        let _ = stepper.set_step_count(0);
        assert_eq!(stepper.step_count(), 1);
        let _ = stepper.set_step_count(150);
        assert_eq!(stepper.step_count(), 99);
        let _ = stepper.set_step_count(-4);
        assert_eq!(stepper.step_count(), 1);
    }

    #[test]
    fn shrinking_step_count_clamps_index() {
        let mut stepper = OrbitStepper::new(12);
        let _ = stepper.set_index(10);
        assert!(stepper.set_step_count(4));
        assert_eq!(stepper.index(), 3);

        // Growing keeps the index where it was
        assert!(stepper.set_step_count(20));
        assert_eq!(stepper.index(), 3);
    }

    #[test]
    fn advance_wraps_both_ways() {
        let mut stepper = OrbitStepper::new(8);
        assert!(stepper.advance(-1));
        assert_eq!(stepper.index(), 7);
        assert!(stepper.advance(1));
        assert_eq!(stepper.index(), 0);
        assert!(!stepper.advance(16));
        assert_eq!(stepper.index(), 0);
    }

    #[test]
    fn full_revolution_returns_home() {
        let mut stepper = OrbitStepper::new(7);
        let _ = stepper.set_index(3);
        let start = (stepper.index(), stepper.current_angle());
        for _ in 0..stepper.step_count() {
            let _ = stepper.advance(1);
        }
        assert_eq!((stepper.index(), stepper.current_angle()), start);
    }

    #[test]
    fn angle_follows_index() {
        let mut stepper = OrbitStepper::new(8);
        assert_eq!(stepper.current_angle(), 0.0);
        let _ = stepper.set_index(4);
        assert!((stepper.current_angle() - PI).abs() < 1e-6);
        let _ = stepper.set_index(2);
        assert!((stepper.current_angle() - PI / 2.0).abs() < 1e-6);
    }

    #[test]
    fn wraparound_handles_offsets() {
        assert_eq!(wraparound(-1, 0, 8), 7);
        assert_eq!(wraparound(17, 0, 8), 1);
        assert_eq!(wraparound(2, 5, 9), 6);
        assert_eq!(wraparound(3, 4, 4), 4);
    }
}
