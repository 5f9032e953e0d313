// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Table sizing.

use crate::error::{Error, Result};

/// Initial number of buckets when no capacity is given.
pub const DEFAULT_INITIAL_CAPACITY: usize = 16;

/// Load factor used when none is given.
pub const DEFAULT_LOAD_FACTOR: f32 = 0.75;

/// Bucket arrays never grow past this many slots.
pub const MAXIMUM_CAPACITY: usize = 1 << 30;

/// Sizing parameters for a hash table.
///
/// A table starts with [`capacity()`][TableConfig::capacity] buckets and
/// doubles whenever an insertion pushes its size past
/// [`threshold()`][TableConfig::threshold].
///
/// # Examples
///
/// ```
/// # use ordhash::TableConfig;
/// let config = TableConfig::new(10, 0.5).unwrap();
/// assert_eq!(16, config.capacity());
/// assert_eq!(8, config.threshold());
///
/// assert!(TableConfig::new(16, 0.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize))]
pub struct TableConfig {
    initial_capacity: usize,
    load_factor: f32,
}

impl TableConfig {
    /// Validate a set of sizing parameters.
    ///
    /// Fails if the load factor isn't a positive, finite number.
    /// Capacities above [`MAXIMUM_CAPACITY`] are clamped.
    pub fn new(initial_capacity: usize, load_factor: f32) -> Result<Self> {
        if !(load_factor > 0.0) || !load_factor.is_finite() {
            return Err(Error::InvalidLoadFactor(load_factor.to_string()));
        }
        Ok(TableConfig {
            initial_capacity: initial_capacity.min(MAXIMUM_CAPACITY),
            load_factor,
        })
    }

    /// Default load factor, custom capacity.
    #[must_use]
    pub fn with_capacity(initial_capacity: usize) -> Self {
        TableConfig {
            initial_capacity: initial_capacity.min(MAXIMUM_CAPACITY),
            load_factor: DEFAULT_LOAD_FACTOR,
        }
    }

    /// Capacity large enough to hold `len` entries without growing.
    pub(crate) fn for_len(len: usize) -> Self {
        let wanted = (len as f32 / DEFAULT_LOAD_FACTOR) as usize + 1;
        Self::with_capacity(wanted.max(DEFAULT_INITIAL_CAPACITY))
    }

    #[must_use]
    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    #[must_use]
    pub fn load_factor(&self) -> f32 {
        self.load_factor
    }

    /// The number of buckets a fresh table gets: the smallest power of
    /// two no less than the requested capacity, and never zero.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.initial_capacity.max(1).next_power_of_two()
    }

    /// Maximum size before the first resize.
    #[must_use]
    pub fn threshold(&self) -> usize {
        threshold_for(self.capacity(), self.load_factor)
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            load_factor: DEFAULT_LOAD_FACTOR,
        }
    }
}

#[cfg(any(test, feature = "serde"))]
impl<'de> serde::Deserialize<'de> for TableConfig {
    fn deserialize<D>(des: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(deny_unknown_fields)]
        struct Raw {
            #[serde(default = "default_capacity")]
            initial_capacity: usize,
            #[serde(default = "default_load_factor")]
            load_factor: f32,
        }

        fn default_capacity() -> usize {
            DEFAULT_INITIAL_CAPACITY
        }

        fn default_load_factor() -> f32 {
            DEFAULT_LOAD_FACTOR
        }

        let raw = Raw::deserialize(des)?;
        TableConfig::new(raw.initial_capacity, raw.load_factor).map_err(serde::de::Error::custom)
    }
}

// Computed in f32 so that e.g. 16 * 1.000001 truncates to 16.
#[inline]
pub(crate) fn threshold_for(capacity: usize, load_factor: f32) -> usize {
    (capacity as f32 * load_factor) as usize
}
