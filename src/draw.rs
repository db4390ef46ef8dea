//! Unit-interval sampling on top of any [`RngCore`].

use rand_core::RngCore;

const TWO_POW_32: f64 = 4_294_967_296.0;

/// Float draws shaped the way the scribble routine consumes randomness.
///
/// Every helper costs exactly one `next_u32`, so the number and order of
/// calls fully determines the output for a given seed.
pub trait Draw {
    /// Uniform value in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Uniform value in `[-amount, amount)`.
    fn jitter(&mut self, amount: f64) -> f64 {
        self.unit() * amount * 2.0 - amount
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.unit() < probability
    }

    /// `floor(unit() * n)`, in `0..n`; `0` when `n` is `0`.
    fn below(&mut self, n: u32) -> u32 {
        (self.unit() * f64::from(n)).floor() as u32
    }

    /// Uniformly chosen element of `items`.
    ///
    /// # Panics
    ///
    /// Panics if `items` is empty.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.below(items.len() as u32) as usize]
    }
}

impl<R: RngCore + ?Sized> Draw for R {
    fn unit(&mut self) -> f64 {
        f64::from(self.next_u32()) / TWO_POW_32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lcg::Lcg32;

    #[test]
    fn unit_matches_state_over_two_pow_32() {
        let mut rng = Lcg32::new(1);
        assert_eq!(rng.unit(), 1_015_568_748.0 / TWO_POW_32);
    }

    #[test]
    fn unit_stays_below_one() {
        struct Max;
        impl RngCore for Max {
            fn next_u32(&mut self) -> u32 {
                u32::MAX
            }
            fn next_u64(&mut self) -> u64 {
                u64::MAX
            }
            fn fill_bytes(&mut self, dest: &mut [u8]) {
                dest.fill(0xff)
            }
            fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
                self.fill_bytes(dest);
                Ok(())
            }
        }

        let mut rng = Max;
        assert!(rng.unit() < 1.0);
        assert_eq!(rng.below(13), 12);
        assert!(rng.jitter(5.0) < 5.0);
    }

    #[test]
    fn jitter_is_symmetric_range() {
        let mut rng = Lcg32::new(3);
        for _ in 0..1000 {
            let j = rng.jitter(30.0);
            assert!((-30.0..30.0).contains(&j));
        }
    }

    #[test]
    fn below_covers_range() {
        let mut rng = Lcg32::new(11);
        let mut seen = [false; 6];
        for _ in 0..500 {
            seen[rng.below(6) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn below_zero_is_zero() {
        let mut rng = Lcg32::new(2);
        assert_eq!(rng.below(0), 0);
    }

    #[test]
    #[should_panic]
    fn pick_from_empty_slice_panics() {
        let mut rng = Lcg32::new(2);
        let empty: [u8; 0] = [];
        rng.pick(&empty);
    }

    #[test]
    fn each_helper_consumes_one_draw() {
        let mut a = Lcg32::new(5);
        let mut b = Lcg32::new(5);
        a.jitter(1.0);
        a.chance(0.5);
        a.below(4);
        a.pick(&[1, 2, 3]);
        for _ in 0..4 {
            b.next_u32();
        }
        assert_eq!(a, b);
    }
}
