/// Deterministic xorshift64 source so a seed reproduces the same batch.
#[derive(Debug, Clone)]
pub struct SeedRng {
    state: u64,
}

impl SeedRng {
    pub fn new(seed: u64) -> Self {
        let state = scramble(seed);
        Self {
            state: if state == 0 { 1 } else { state },
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Uniform in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform in `[low, high]`.
    pub fn range_u32(&mut self, low: u32, high: u32) -> u32 {
        if high <= low {
            return low;
        }
        let span = u64::from(high - low) + 1;
        low + (self.next_u64() % span) as u32
    }

    /// Uniform in `[low, high)`.
    pub fn range_f64(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.next_f64()
    }

    pub fn chance(&mut self, probability: f64) -> bool {
        self.next_f64() < probability
    }

    pub fn pick<'a, T>(&mut self, options: &'a [T]) -> &'a T {
        let index = (self.next_u64() % options.len() as u64) as usize;
        &options[index]
    }

    /// Picks by relative weight. Zero total weight falls back to the first option.
    pub fn weighted<'a, T>(&mut self, options: &'a [(T, u32)]) -> &'a T {
        let total: u64 = options.iter().map(|(_, weight)| u64::from(*weight)).sum();
        if total == 0 {
            return &options[0].0;
        }
        let mut roll = self.next_u64() % total;
        for (value, weight) in options {
            let weight = u64::from(*weight);
            if roll < weight {
                return value;
            }
            roll -= weight;
        }
        &options[options.len() - 1].0
    }
}

// splitmix64 finaliser; keeps nearby seeds from producing correlated streams.
fn scramble(seed: u64) -> u64 {
    let mut z = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SeedRng::new(42);
        let mut b = SeedRng::new(42);
        for _ in 0..32 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn ranges_stay_in_bounds() {
        let mut rng = SeedRng::new(7);
        for _ in 0..1_000 {
            let value = rng.range_u32(10, 20);
            assert!((10..=20).contains(&value));
            let float = rng.range_f64(1.5, 2.5);
            assert!((1.5..2.5).contains(&float));
        }
        assert_eq!(rng.range_u32(5, 5), 5);
    }

    #[test]
    fn weighted_skips_zero_weights() {
        let mut rng = SeedRng::new(3);
        let options = [("never", 0), ("always", 10)];
        for _ in 0..100 {
            assert_eq!(*rng.weighted(&options), "always");
        }
    }
}
