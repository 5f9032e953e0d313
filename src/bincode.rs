// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The encoded form of every collection is its length followed by its
//! elements. Ordered collections write their elements in insertion
//! order, and decoding inserts them back in the order they're read.

use std::hash::{BuildHasher, Hash};

use bincode::de::Decoder;
use bincode::enc::Encoder;
use bincode::error::{DecodeError, EncodeError};
use bincode::{Decode, Encode};

use crate::arrayhashmap::ArrayHashMap;
use crate::arrayhashset::ArrayHashSet;
use crate::defaulthashmap::DefaultHashMap;
use crate::inthashmap::IntHashMap;

// ArrayHashMap

impl<C, K, V, S> Decode<C> for ArrayHashMap<K, V, S>
where
    K: Decode<C> + Hash + Eq,
    V: Decode<C>,
    S: BuildHasher + Default,
{
    fn decode<D: Decoder<Context = C>>(decoder: &mut D) -> Result<Self, DecodeError> {
        let len: usize = Decode::decode(decoder)?;
        let mut output = Self::default();
        for _ in 0..len {
            let (k, v): (K, V) = Decode::decode(decoder)?;
            // A repeated key keeps its first position.
            output.insert(k, v);
        }
        Ok(output)
    }
}

impl<K: Encode, V: Encode, S> Encode for ArrayHashMap<K, V, S> {
    fn encode<E: Encoder>(&self, encoder: &mut E) -> Result<(), EncodeError> {
        Encode::encode(&self.len(), encoder)?;
        for (k, v) in self.iter() {
            Encode::encode(&(k, v), encoder)?;
        }
        Ok(())
    }
}

// ArrayHashSet

impl<C, A, S> Decode<C> for ArrayHashSet<A, S>
where
    A: Decode<C> + Hash + Eq,
    S: BuildHasher + Default,
{
    fn decode<D: Decoder<Context = C>>(decoder: &mut D) -> Result<Self, DecodeError> {
        let mut output = Self::default();
        let length: usize = Decode::decode(decoder)?;
        for _ in 0..length {
            let item: A = Decode::decode(decoder)?;
            // Duplicates are silently ignored.
            output.insert(item);
        }
        Ok(output)
    }
}

impl<A: Encode, S> Encode for ArrayHashSet<A, S> {
    fn encode<E: Encoder>(&self, encoder: &mut E) -> Result<(), EncodeError> {
        Encode::encode(&self.len(), encoder)?;
        for item in self.iter() {
            Encode::encode(item, encoder)?;
        }
        Ok(())
    }
}

// DefaultHashMap

impl<C, K, V, S> Decode<C> for DefaultHashMap<K, V, S>
where
    K: Decode<C> + Hash + Eq,
    V: Decode<C>,
    S: BuildHasher + Default,
{
    fn decode<D: Decoder<Context = C>>(decoder: &mut D) -> Result<Self, DecodeError> {
        let len: usize = Decode::decode(decoder)?;
        let mut output = Self::default();
        for _ in 0..len {
            let (k, v): (K, V) = Decode::decode(decoder)?;
            output.insert(k, v);
        }
        Ok(output)
    }
}

impl<K: Encode, V: Encode, S> Encode for DefaultHashMap<K, V, S> {
    fn encode<E: Encoder>(&self, encoder: &mut E) -> Result<(), EncodeError> {
        Encode::encode(&self.len(), encoder)?;
        for (k, v) in self.iter() {
            Encode::encode(&(k, v), encoder)?;
        }
        Ok(())
    }
}

// IntHashMap

impl<C, V: Decode<C>> Decode<C> for IntHashMap<V> {
    fn decode<D: Decoder<Context = C>>(decoder: &mut D) -> Result<Self, DecodeError> {
        let len: usize = Decode::decode(decoder)?;
        let mut output = Self::new();
        for _ in 0..len {
            let (k, v): (i32, V) = Decode::decode(decoder)?;
            output.insert(k, v);
        }
        Ok(output)
    }
}

impl<V: Encode> Encode for IntHashMap<V> {
    fn encode<E: Encoder>(&self, encoder: &mut E) -> Result<(), EncodeError> {
        Encode::encode(&self.len(), encoder)?;
        for (k, v) in self.iter() {
            Encode::encode(&(k, v), encoder)?;
        }
        Ok(())
    }
}

// Tests
