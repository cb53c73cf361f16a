use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::RefCell;

/// Source of uniform samples in `[0, 1)`.
///
/// The dashboard fabricates all of its market numbers, so every generator
/// takes one of these instead of reaching for a global RNG. Browser builds
/// plug in `Math.random`, tests use [`SeededRandom`].
pub trait RandomSource {
    fn next_f64(&self) -> f64;

    /// Uniform sample in `[low, high)`. Returns `low` when the range is empty.
    fn range(&self, low: f64, high: f64) -> f64 {
        if !(low < high) {
            return low;
        }
        let value = low + self.next_f64() * (high - low);
        // rounding can land exactly on the excluded bound
        if value < high { value } else { low }
    }

    /// Sample centred on zero: `[-half_width, half_width)`.
    fn centered(&self, half_width: f64) -> f64 {
        self.range(-half_width, half_width)
    }

    /// True with the given probability.
    fn chance(&self, probability: f64) -> bool {
        self.next_f64() < probability
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn index(&self, len: usize) -> usize {
        ((self.next_f64() * len as f64) as usize).min(len.saturating_sub(1))
    }
}

/// Reproducible source backed by `StdRng`, for tests and native runs.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: RefCell<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self { rng: RefCell::new(StdRng::seed_from_u64(seed)) }
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&self) -> f64 {
        self.rng.borrow_mut().r#gen::<f64>()
    }

    fn range(&self, low: f64, high: f64) -> f64 {
        if !(low < high) {
            return low;
        }
        self.rng.borrow_mut().gen_range(low..high)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for std::rc::Rc<R> {
    fn next_f64(&self) -> f64 {
        (**self).next_f64()
    }

    fn range(&self, low: f64, high: f64) -> f64 {
        (**self).range(low, high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_stay_in_unit_interval() {
        let rng = SeededRandom::new(7);
        for _ in 0..10_000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let a = SeededRandom::new(42);
        let b = SeededRandom::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_f64(), b.next_f64());
        }
    }

    /// Largest sample below one; scaling it up rounds to the upper bound.
    struct NearOne;

    impl RandomSource for NearOne {
        fn next_f64(&self) -> f64 {
            1.0 - f64::EPSILON / 2.0
        }
    }

    #[test]
    fn range_excludes_upper_bound() {
        assert!(NearOne.range(50_000.0, 60_000.0) < 60_000.0);
        assert!(NearOne.centered(1_000.0) < 1_000.0);
        assert_eq!(NearOne.range(5.0, 5.0), 5.0);

        let rng = SeededRandom::new(1);
        for _ in 0..10_000 {
            assert!((45_000.0..50_000.0).contains(&rng.range(45_000.0, 50_000.0)));
        }
    }

    #[test]
    fn index_never_out_of_bounds() {
        let rng = SeededRandom::new(0);
        for _ in 0..1_000 {
            assert!(rng.index(3) < 3);
        }
    }
}
