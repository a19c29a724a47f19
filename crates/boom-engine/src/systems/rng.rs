//! Seedable pseudo-random number generator (xorshift64).
//! Deterministic, so a seeded match drops the same loot every run.

#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Generate a random number in [0, upper_bound). Zero bound yields 0.
    pub fn next_below(&mut self, upper_bound: u32) -> u32 {
        if upper_bound == 0 {
            return 0;
        }
        (self.next_u64() % upper_bound as u64) as u32
    }

    /// Pick one element uniformly, or `None` from an empty slice.
    pub fn pick<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        if items.is_empty() {
            return None;
        }
        let index = self.next_below(items.len() as u32) as usize;
        items.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_deterministic() {
        let mut rng1 = Rng::new(42);
        let mut rng2 = Rng::new(42);
        for _ in 0..10 {
            assert_eq!(rng1.next_below(1000), rng2.next_below(1000));
        }
    }

    #[test]
    fn rng_zero_seed_handled() {
        let mut rng = Rng::new(0);
        assert!(rng.next_below(100) < 100);
        assert_eq!(rng.next_below(0), 0);
    }

    #[test]
    fn pick_covers_slice() {
        let mut rng = Rng::new(7);
        let items = [1, 2, 3];
        let mut seen = [false; 3];
        for _ in 0..200 {
            let v = rng.pick(&items).unwrap();
            seen[v as usize - 1] = true;
        }
        assert!(seen.iter().all(|s| *s));
        assert_eq!(rng.pick::<u8>(&[]), None);
    }
}
