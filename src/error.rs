// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error types.
//!
//! Every error in this crate describes a mistake by the caller: an
//! index outside the map, a mutation a view can't perform, or a
//! cursor used after the map changed underneath it. None of them are
//! transient, so there is nothing to retry.

use thiserror::Error;

/// Result type alias for fallible collection operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for index-addressed and cursor operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The load factor was zero, negative, NaN or infinite.
    #[error("illegal load factor: {0}")]
    InvalidLoadFactor(String),

    /// An index fell outside the valid range.
    #[error("index: {index}, size: {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// The view doesn't support the requested mutation.
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),

    /// The map was structurally modified after the cursor was created,
    /// by something other than the cursor itself.
    #[error("concurrent modification: expected version {expected}, found {actual}")]
    ConcurrentModification { expected: u64, actual: u64 },

    /// A cursor was stepped past either end of the map.
    #[error("no such element")]
    NoSuchElement,

    /// A cursor was asked to act on its last element, but there isn't one.
    #[error("illegal state: {0}")]
    IllegalState(&'static str),
}

impl Error {
    pub(crate) fn out_of_bounds(index: usize, len: usize) -> Self {
        Error::IndexOutOfBounds { index, len }
    }
}

#[inline]
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(Error::out_of_bounds(index, len))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!("index: 3, size: 2", Error::out_of_bounds(3, 2).to_string());
        assert_eq!(
            "illegal load factor: -1",
            Error::InvalidLoadFactor((-1.0f32).to_string()).to_string()
        );
        assert!(check_index(1, 2).is_ok());
        assert_eq!(Err(Error::out_of_bounds(2, 2)), check_index(2, 2));
    }
}
