//! Rotary encoder decoding.
//!
//! The A/B pins of a quadrature encoder walk the Gray sequence
//! `00 → 01 → 11 → 10 → 00` clockwise and the reverse counter-clockwise.
//! Each valid transition is a quarter step; a detent is reported once the
//! accumulated steps reach [`ENCODER_STEPS_PER_DETENT`].

use crate::config::ENCODER_STEPS_PER_DETENT;

/// Quarter-step direction indexed by `(previous << 2) | current`.
/// Impossible jumps (both pins changed) count as zero.
const TRANSITIONS: [i8; 16] = [
    0, 1, -1, 0, //
    -1, 0, 0, 1, //
    1, 0, 0, -1, //
    0, -1, 1, 0,
];

#[derive(Clone, Copy, Debug)]
pub struct Quadrature {
    state: u8,
    steps: i8,
}

impl Quadrature {
    /// Start from the current pin levels.
    pub fn new(a: bool, b: bool) -> Self {
        Self {
            state: pins(a, b),
            steps: 0,
        }
    }

    /// Feed new pin levels; returns `Some(±1)` when a full detent completes.
    pub fn update(&mut self, a: bool, b: bool) -> Option<i32> {
        let next = pins(a, b);
        let step = TRANSITIONS[usize::from((self.state << 2) | next)];
        self.state = next;
        self.steps += step;

        if self.steps >= ENCODER_STEPS_PER_DETENT {
            self.steps = 0;
            Some(1)
        } else if self.steps <= -ENCODER_STEPS_PER_DETENT {
            self.steps = 0;
            Some(-1)
        } else {
            None
        }
    }
}

fn pins(a: bool, b: bool) -> u8 {
    (u8::from(a) << 1) | u8::from(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLOCKWISE: [(bool, bool); 4] = [(false, true), (true, true), (true, false), (false, false)];

    fn feed(q: &mut Quadrature, seq: impl Iterator<Item = (bool, bool)>) -> i32 {
        seq.filter_map(|(a, b)| q.update(a, b)).sum()
    }

    #[test]
    fn full_clockwise_cycle_is_one_detent() {
        let mut q = Quadrature::new(false, false);
        assert_eq!(feed(&mut q, CLOCKWISE.iter().copied()), 1);
    }

    #[test]
    fn full_counter_clockwise_cycle_is_minus_one() {
        let mut q = Quadrature::new(false, false);
        let ccw = [(true, false), (true, true), (false, true), (false, false)];
        assert_eq!(feed(&mut q, ccw.iter().copied()), -1);
    }

    #[test]
    fn partial_cycle_reports_nothing() {
        let mut q = Quadrature::new(false, false);
        assert_eq!(q.update(false, true), None);
        assert_eq!(q.update(true, true), None);
        // Bounce back to the start.
        assert_eq!(q.update(false, true), None);
        assert_eq!(q.update(false, false), None);
    }

    #[test]
    fn invalid_jump_is_ignored() {
        let mut q = Quadrature::new(false, false);
        assert_eq!(q.update(true, true), None);
        assert_eq!(q.update(false, false), None);
        assert_eq!(feed(&mut q, CLOCKWISE.iter().copied()), 1);
    }

    #[test]
    fn several_detents() {
        let mut q = Quadrature::new(false, false);
        let seq = CLOCKWISE.iter().copied().cycle().take(12);
        assert_eq!(feed(&mut q, seq), 3);
    }
}
