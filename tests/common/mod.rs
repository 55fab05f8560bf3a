//! Shared helpers for the integration tests.
//!
//! Tiny, fast LCG so the randomised cases need no `rand` dependency and are
//! reproducible from their seed.

#![allow(dead_code)]

use std::path::PathBuf;

#[derive(Clone)]
pub struct Lcg(u64);

impl Lcg {
    #[must_use]
    pub fn seed(seed: u64) -> Self {
        Self(seed)
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1);
        (self.0 >> 32) as u32
    }

    /// Uniform sample in `[0, 1]`.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / f64::from(u32::MAX)
    }

    /// Uniform integer in `lo..=hi`.
    pub fn range(&mut self, lo: usize, hi: usize) -> usize {
        lo + self.next_u32() as usize % (hi - lo + 1)
    }

    /// Float spread over many magnitudes, either sign.
    pub fn float(&mut self) -> f64 {
        let mantissa = self.next_f64() * 2.0 - 1.0;
        let exponent = self.range(0, 12) as i32 - 6;
        mantissa * 10f64.powi(exponent)
    }

    /// `n` random floats separated by single spaces.
    pub fn float_line(&mut self, n: usize) -> String {
        (0..n)
            .map(|_| self.float().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Absolute path of a file under `testdata/`.
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("testdata")
        .join(name)
}
