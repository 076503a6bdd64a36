// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{EntropySource, RandomError, UniformSource};

/// First printable ASCII character (space).
const ASCII_START: u128 = 32;
/// Last printable ASCII character (tilde).
const ASCII_END: u128 = 126;
/// Alphabet size, both ends inclusive.
const ASCII_RANGE: u128 = ASCII_END - ASCII_START + 1;

/// Fixed-length strings of uniformly chosen printable ASCII characters.
pub struct AsciiGenerator<'a, E: EntropySource> {
    uniform: &'a UniformSource<E>,
}

impl<'a, E: EntropySource> AsciiGenerator<'a, E> {
    pub fn new(uniform: &'a UniformSource<E>) -> Self {
        Self { uniform }
    }

    /// Returns a string of exactly `length` characters, each drawn
    /// independently from the printable range `[32, 126]`.
    ///
    /// Fails with [`RandomError::ZeroLength`] for a non-positive length;
    /// an empty string is never a valid output.
    pub fn generate(&self, length: i64) -> Result<String, RandomError> {
        if length <= 0 {
            return Err(RandomError::ZeroLength(length));
        }

        let mut result = String::with_capacity(length as usize);
        for _ in 0..length {
            let offset = self.uniform.below(ASCII_RANGE)?;
            result.push((ASCII_START + offset) as u8 as char);
        }
        Ok(result)
    }
}
