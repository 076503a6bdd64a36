// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::RandomError;

/// Supplier of cryptographically secure random bytes.
///
/// Implementations must be safe for concurrent use; the generators hold
/// no state of their own between calls.
pub trait EntropySource: Send + Sync {
    /// Fill `dest` with random bytes, or fail with
    /// [`RandomError::EntropyUnavailable`]. Failures are not retried here.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), RandomError>;
}
