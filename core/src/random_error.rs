// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Errors produced by the generators and the tool layer.
///
/// Every variant except `EntropyUnavailable` describes a caller input
/// problem. None of them is transient: the same request fails the same
/// way every time, regardless of concurrent activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RandomError {
    /// Lower bound exceeds upper bound.
    InvalidRange,

    /// Exclusivity was requested at a bound that is already the extreme
    /// representable value in that direction, so no adjacent value exists.
    BoundaryExhausted { bound: &'static str },

    /// The bounds are individually valid, but equal bounds with an
    /// exclusion (or two exclusions collapsing adjacent values) leave
    /// nothing to sample.
    EmptyRange,

    /// A float bound was NaN.
    NaNInput,

    /// A float bound was positive or negative infinity.
    NonFiniteInput,

    /// A non-positive string length was requested.
    ZeroLength(i64),

    /// The secure entropy source failed to supply bytes.
    EntropyUnavailable(String),
}

impl std::fmt::Display for RandomError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RandomError::InvalidRange => write!(f, "min cannot be greater than max"),
            RandomError::BoundaryExhausted { bound } => {
                write!(
                    f,
                    "{} cannot be excluded at the limit of the representable range",
                    bound
                )
            }
            RandomError::EmptyRange => {
                write!(f, "range is empty after applying bound exclusions")
            }
            RandomError::NaNInput => write!(f, "min and max must not be NaN"),
            RandomError::NonFiniteInput => write!(f, "min and max must be finite"),
            RandomError::ZeroLength(length) => {
                write!(f, "length must be greater than zero, got {}", length)
            }
            RandomError::EntropyUnavailable(msg) => {
                write!(f, "entropy source unavailable: {}", msg)
            }
        }
    }
}

impl std::error::Error for RandomError {}
