// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{EntropySource, RandomError};

/// Number of mantissa bits used for unit-interval sampling, matching the
/// precision of an f64.
const UNIT_PRECISION_BITS: u32 = 53;

/// Bias-free uniform draws over `[0, bound)` from a secure entropy source.
///
/// This is the sole entropy-to-value conversion path in the crate. Draws
/// are 128 bits wide so the widest span the integer generator can request
/// (the full i64 range, 2^64 values) fits without machine-width overflow.
pub struct UniformSource<E: EntropySource> {
    entropy: E,
}

impl<E: EntropySource> UniformSource<E> {
    pub fn new(entropy: E) -> Self {
        Self { entropy }
    }

    /// Returns a uniform value in `[0, bound)`. `bound` must be at least 1.
    ///
    /// Uses rejection sampling: a draw is accepted only if it falls below
    /// the largest multiple of `bound` representable in 128 bits, then is
    /// reduced modulo `bound`. Reducing an unfiltered draw would skew the
    /// distribution whenever `bound` does not divide 2^128.
    pub fn below(&self, bound: u128) -> Result<u128, RandomError> {
        debug_assert!(bound > 0, "bound must be at least 1");
        // 2^128 mod bound, computed without overflowing u128.
        let remainder = (u128::MAX - bound + 1) % bound;
        let max_valid = u128::MAX - remainder;
        loop {
            let draw = self.next_u128()?;
            if draw <= max_valid {
                return Ok(draw % bound);
            }
        }
    }

    /// Returns a uniform value in `[0, 1)` with 53 bits of precision.
    pub fn unit_f64(&self) -> Result<f64, RandomError> {
        let steps = 1u128 << UNIT_PRECISION_BITS;
        let value = self.below(steps)?;
        Ok(value as f64 / steps as f64)
    }

    fn next_u128(&self) -> Result<u128, RandomError> {
        let mut bytes = [0u8; 16];
        self.entropy.fill_bytes(&mut bytes)?;
        Ok(u128::from_be_bytes(bytes))
    }
}
