// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use serde::{Deserialize, Deserializer};

/// A range bound that the caller either supplied explicitly or left to
/// its default.
///
/// Exclusivity only ever applies to a `Provided` bound; there is nothing
/// to exclude at an implicit default. Modelling this as a sum type keeps
/// "was this bound supplied" an exhaustively matched case instead of a
/// null check.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum BoundArg<T> {
    Provided(T),
    #[default]
    Default,
}

impl<T: Copy> BoundArg<T> {
    /// The supplied value, or `default` when the bound was absent.
    pub fn value_or(&self, default: T) -> T {
        match self {
            BoundArg::Provided(value) => *value,
            BoundArg::Default => default,
        }
    }
}

// A present JSON field deserializes to `Provided`; an absent one falls
// back to `Default` via `#[serde(default)]` on the containing struct.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for BoundArg<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(BoundArg::Provided)
    }
}
