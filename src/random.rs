/// Reproducible pseudo-random stream derived from a text seed.
///
/// The state is initialised with the sum of the seed's code points (so anagrams share a stream)
/// and advanced with a linear congruential step modulo 2^31. Draws are in `[0, 1)`.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    state: u32,
}

impl SeededRandom {
    const MULTIPLIER: u32 = 1_103_515_245;
    const INCREMENT: u32 = 12_345;
    /// Modulus of the generator, 2^31.
    const MODULUS: u32 = 1 << 31;

    pub fn new(seed: &str) -> Self {
        let state = seed
            .chars()
            .fold(0u32, |acc, c| acc.wrapping_add(c as u32));
        SeededRandom { state }
    }

    /// Current internal state, mostly useful to reproduce a carve sequence in tests.
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Advance the generator and return the next value in `[0, 1)`.
    pub fn draw(&mut self) -> f64 {
        // The modulus is a power of two, so reducing mod 2^32 first and masking is exact.
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
            & (Self::MODULUS - 1);
        self.state as f64 / Self::MODULUS as f64
    }

    /// Draw an index in `0..bound`. `bound` must be non-zero.
    pub fn index_below(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0, "index_below requires a non-empty range");
        // draw() < 1, so the product stays below bound; min() guards float rounding.
        ((self.draw() * bound as f64) as usize).min(bound - 1)
    }

    /// Fisher-Yates shuffle consuming exactly `len - 1` draws.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.index_below(i + 1);
            items.swap(i, j);
        }
    }
}

impl Iterator for SeededRandom {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.draw())
    }
}
