//! Dynamic collections: a compact item count followed by the items.
//!
//! Decoding checks the count against the capacity of the target before allocating, and
//! fails with [`DecodeError::TooManyItems`] when it is exceeded. Items that aren't zero
//! sized take at least one byte each, so a count larger than the input left fails with
//! [`DecodeError::NotEnoughData`] before any item is read.

use crate::{
    compact::{decode_len, encode_len},
    encoding::{Decode, Encode, Sink, Source},
    errors::{DecodeError, EncodeError},
};
use bytes::Bytes;
use std::{
    cmp,
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    convert::TryFrom,
    hash::{BuildHasher, Hash},
    mem,
    ops::Deref,
};

/// Zero-sized items carry no bytes, so their count is the only bound on the work done.
const MAX_ZERO_SIZED_ITEMS: usize = 1 << 16;

/// Most items an unbounded collection of `T` can hold.
#[inline]
pub(crate) fn max_items<T>() -> usize {
    match mem::size_of::<T>() {
        0 => MAX_ZERO_SIZED_ITEMS,
        size => isize::max_value() as usize / size,
    }
}

/// Reads an item count of at most `max`.
fn decode_count<T, D: Source>(d: &mut D, max: usize) -> Result<usize, DecodeError> {
    let len = decode_len(d, cmp::min(max, max_items::<T>()))?;
    if mem::size_of::<T>() != 0 && len > d.remaining() {
        return Err(DecodeError::NotEnoughData);
    }
    Ok(len)
}

/// Items worth reserving up front: never more than there are bytes left.
#[inline]
fn prealloc<D: Source>(d: &D, len: usize) -> usize { cmp::min(len, d.remaining()) }

fn encode_items<'a, T, I, S>(len: usize, items: I, s: &mut S) -> Result<(), EncodeError>
where
    T: Encode + 'a,
    I: IntoIterator<Item = &'a T>,
    S: Sink,
{
    encode_len(len, s)?;
    for item in items {
        item.encode_to(s)?;
    }
    Ok(())
}

impl<T: Encode> Encode for [T] {
    fn encode_to<S: Sink>(&self, s: &mut S) -> Result<(), EncodeError> {
        encode_items(self.len(), self, s)
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode_to<S: Sink>(&self, s: &mut S) -> Result<(), EncodeError> { self.as_slice().encode_to(s) }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode_from<D: Source>(d: &mut D) -> Result<Self, DecodeError> {
        let mut out = Vec::new();
        out.decode_into(d)?;
        Ok(out)
    }

    /// Overwrites the existing items in place, then pushes the rest.
    fn decode_into<D: Source>(&mut self, d: &mut D) -> Result<(), DecodeError> {
        let len = decode_count::<T, _>(d, usize::max_value())?;

        self.truncate(len);
        for item in self.iter_mut() {
            item.decode_into(d)?;
        }

        let missing = len - self.len();
        self.try_reserve(prealloc(d, missing))
            .map_err(|_| DecodeError::TooManyItems)?;
        for _ in 0..missing {
            self.push(T::decode_from(d)?);
        }
        Ok(())
    }
}

impl<T: Encode> Encode for VecDeque<T> {
    fn encode_to<S: Sink>(&self, s: &mut S) -> Result<(), EncodeError> {
        encode_items(self.len(), self, s)
    }
}

impl<T: Decode> Decode for VecDeque<T> {
    fn decode_from<D: Source>(d: &mut D) -> Result<Self, DecodeError> {
        let len = decode_count::<T, _>(d, usize::max_value())?;

        let mut out = VecDeque::new();
        out.try_reserve(prealloc(d, len))
            .map_err(|_| DecodeError::TooManyItems)?;
        for _ in 0..len {
            out.push_back(T::decode_from(d)?);
        }
        Ok(out)
    }
}

impl<K: Encode, V: Encode> Encode for BTreeMap<K, V> {
    fn encode_to<S: Sink>(&self, s: &mut S) -> Result<(), EncodeError> {
        encode_len(self.len(), s)?;
        for (k, v) in self {
            k.encode_to(s)?;
            v.encode_to(s)?;
        }
        Ok(())
    }
}

impl<K: Decode + Ord, V: Decode> Decode for BTreeMap<K, V> {
    fn decode_from<D: Source>(d: &mut D) -> Result<Self, DecodeError> {
        let len = decode_count::<(K, V), _>(d, usize::max_value())?;

        let mut out = BTreeMap::new();
        for _ in 0..len {
            let (k, v) = <(K, V)>::decode_from(d)?;
            out.insert(k, v);
        }
        Ok(out)
    }
}

impl<T: Encode> Encode for BTreeSet<T> {
    fn encode_to<S: Sink>(&self, s: &mut S) -> Result<(), EncodeError> {
        encode_items(self.len(), self, s)
    }
}

impl<T: Decode + Ord> Decode for BTreeSet<T> {
    fn decode_from<D: Source>(d: &mut D) -> Result<Self, DecodeError> {
        let len = decode_count::<T, _>(d, usize::max_value())?;

        let mut out = BTreeSet::new();
        for _ in 0..len {
            out.insert(T::decode_from(d)?);
        }
        Ok(out)
    }
}

/// Items are written in the iteration order of the map, which is not deterministic.
impl<K: Encode, V: Encode, H> Encode for HashMap<K, V, H> {
    fn encode_to<S: Sink>(&self, s: &mut S) -> Result<(), EncodeError> {
        encode_len(self.len(), s)?;
        for (k, v) in self {
            k.encode_to(s)?;
            v.encode_to(s)?;
        }
        Ok(())
    }
}

impl<K, V, H> Decode for HashMap<K, V, H>
where
    K: Decode + Eq + Hash,
    V: Decode,
    H: BuildHasher + Default,
{
    fn decode_from<D: Source>(d: &mut D) -> Result<Self, DecodeError> {
        let len = decode_count::<(K, V), _>(d, usize::max_value())?;

        let mut out = HashMap::with_hasher(H::default());
        for _ in 0..len {
            let (k, v) = <(K, V)>::decode_from(d)?;
            out.insert(k, v);
        }
        Ok(out)
    }
}

/// Items are written in the iteration order of the set, which is not deterministic.
impl<T: Encode, H> Encode for HashSet<T, H> {
    fn encode_to<S: Sink>(&self, s: &mut S) -> Result<(), EncodeError> {
        encode_items(self.len(), self, s)
    }
}

impl<T, H> Decode for HashSet<T, H>
where
    T: Decode + Eq + Hash,
    H: BuildHasher + Default,
{
    fn decode_from<D: Source>(d: &mut D) -> Result<Self, DecodeError> {
        let len = decode_count::<T, _>(d, usize::max_value())?;

        let mut out = HashSet::with_hasher(H::default());
        for _ in 0..len {
            out.insert(T::decode_from(d)?);
        }
        Ok(out)
    }
}

// Raw spans: the length prefix is followed by the bytes verbatim.

impl Encode for str {
    fn encode_to<S: Sink>(&self, s: &mut S) -> Result<(), EncodeError> {
        encode_len(self.len(), s)?;
        s.put_slice(self.as_bytes());
        Ok(())
    }
}

impl Encode for String {
    fn encode_to<S: Sink>(&self, s: &mut S) -> Result<(), EncodeError> { self.as_str().encode_to(s) }
}

impl Decode for String {
    fn decode_from<D: Source>(d: &mut D) -> Result<Self, DecodeError> {
        let bs = Bytes::decode_from(d)?;
        String::from_utf8(bs.to_vec()).map_err(|_| DecodeError::UnexpectedValue)
    }
}

impl Encode for Bytes {
    fn encode_to<S: Sink>(&self, s: &mut S) -> Result<(), EncodeError> {
        encode_len(self.len(), s)?;
        s.put_slice(self);
        Ok(())
    }
}

impl Decode for Bytes {
    fn decode_from<D: Source>(d: &mut D) -> Result<Self, DecodeError> {
        let len = decode_len(d, max_items::<u8>())?;
        d.read_many(len)
    }
}

/// A vector holding at most `N` items.
///
/// Its encoding is the same as [`Vec`], but decoding rejects more than `N` items before
/// reading any of them.
///
/// # Example
///
/// ```
/// use scale_codec::prelude::*;
///
/// let enc = encode_full(&vec![1u8, 2, 3]).unwrap();
///
/// assert!(decode_full::<BoundedVec<u8, 3>>(&enc).is_ok());
/// assert_eq!(
///     decode_full::<BoundedVec<u8, 2>>(&enc),
///     Err(DecodeError::TooManyItems)
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoundedVec<T, const N: usize>(Vec<T>);

impl<T, const N: usize> BoundedVec<T, N> {
    /// Creates an empty vector.
    pub fn new() -> Self { BoundedVec(Vec::new()) }

    /// The capacity bound.
    pub const fn bound() -> usize { N }

    /// Pushes `item`, handing it back if the vector is full.
    pub fn try_push(&mut self, item: T) -> Result<(), T> {
        if self.0.len() < N {
            self.0.push(item);
            Ok(())
        } else {
            Err(item)
        }
    }

    /// Unwraps the items.
    pub fn into_inner(self) -> Vec<T> { self.0 }
}

impl<T, const N: usize> Default for BoundedVec<T, N> {
    fn default() -> Self { Self::new() }
}

impl<T, const N: usize> Deref for BoundedVec<T, N> {
    type Target = [T];
    fn deref(&self) -> &[T] { &self.0 }
}

impl<T, const N: usize> TryFrom<Vec<T>> for BoundedVec<T, N> {
    type Error = Vec<T>;

    fn try_from(v: Vec<T>) -> Result<Self, Vec<T>> {
        if v.len() <= N {
            Ok(BoundedVec(v))
        } else {
            Err(v)
        }
    }
}

impl<T: Encode, const N: usize> Encode for BoundedVec<T, N> {
    fn encode_to<S: Sink>(&self, s: &mut S) -> Result<(), EncodeError> { self.0.encode_to(s) }
}

impl<T: Decode, const N: usize> Decode for BoundedVec<T, N> {
    fn decode_from<D: Source>(d: &mut D) -> Result<Self, DecodeError> {
        let len = decode_count::<T, _>(d, N)?;

        let mut out = Vec::new();
        out.try_reserve(prealloc(d, len))
            .map_err(|_| DecodeError::TooManyItems)?;
        for _ in 0..len {
            out.push(T::decode_from(d)?);
        }
        Ok(BoundedVec(out))
    }
}
