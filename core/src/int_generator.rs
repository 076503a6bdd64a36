// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{EntropySource, RandomError, UniformSource};

/// Uniform signed 64-bit integers over an inclusive range.
pub struct IntGenerator<'a, E: EntropySource> {
    uniform: &'a UniformSource<E>,
}

impl<'a, E: EntropySource> IntGenerator<'a, E> {
    pub fn new(uniform: &'a UniformSource<E>) -> Self {
        Self { uniform }
    }

    /// Returns a uniform value in `[min, max]`.
    ///
    /// Fails with [`RandomError::InvalidRange`] when `min > max`. This is
    /// the only validation at this layer; inclusivity adjustment belongs
    /// to the caller.
    pub fn generate(&self, min: i64, max: i64) -> Result<i64, RandomError> {
        if min > max {
            return Err(RandomError::InvalidRange);
        }

        // The span of (i64::MIN, i64::MAX) is 2^64, which overflows any
        // 64-bit subtraction, so widen before computing it.
        let span = (max as i128 - min as i128 + 1) as u128;
        let offset = self.uniform.below(span)?;
        Ok((min as i128 + offset as i128) as i64)
    }
}
