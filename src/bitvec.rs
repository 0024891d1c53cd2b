//! A packed sequence of booleans.
//!
//! Coded as a compact bit count followed by `ceil(count / 8)` bytes, bit `i` stored at bit
//! `i % 8` of byte `i / 8`. Padding bits in the last byte are always zero.

use crate::{
    collections::max_items,
    compact::{decode_len, encode_len},
    encoding::{Decode, Encode, Sink, Source},
    errors::{DecodeError, EncodeError},
};
use std::iter::FromIterator;

#[inline]
fn bytes_for(bits: usize) -> usize { bits / 8 + (bits % 8 != 0) as usize }

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
/// A growable vector of bits, least significant bit first.
pub struct BitVec {
    len: usize,
    bytes: Vec<u8>,
}

impl BitVec {
    /// Creates an empty `BitVec`.
    pub fn new() -> Self { Self::default() }

    /// Creates a `BitVec` of `len` copies of `bit`.
    pub fn repeat(bit: bool, len: usize) -> Self {
        let mut bv = BitVec {
            len,
            bytes: vec![if bit { 0xff } else { 0 }; bytes_for(len)],
        };
        bv.clear_padding();
        bv
    }

    /// Number of bits.
    pub fn len(&self) -> usize { self.len }

    /// Whether there are no bits.
    pub fn is_empty(&self) -> bool { self.len == 0 }

    /// The bit at `idx`, if any.
    pub fn get(&self, idx: usize) -> Option<bool> {
        if idx < self.len {
            Some(self.bytes[idx / 8] & (1 << (idx % 8)) != 0)
        } else {
            None
        }
    }

    /// Sets the bit at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of bounds.
    pub fn set(&mut self, idx: usize, bit: bool) {
        assert!(idx < self.len, "bit index {} out of bounds for {}", idx, self.len);
        let mask = 1 << (idx % 8);
        if bit {
            self.bytes[idx / 8] |= mask;
        } else {
            self.bytes[idx / 8] &= !mask;
        }
    }

    /// Appends a bit.
    pub fn push(&mut self, bit: bool) {
        if self.len % 8 == 0 {
            self.bytes.push(0);
        }
        self.len += 1;
        self.set(self.len - 1, bit);
    }

    /// Removes the last bit.
    pub fn pop(&mut self) -> Option<bool> {
        let last = self.get(self.len.checked_sub(1)?)?;
        self.set(self.len - 1, false);
        self.len -= 1;
        self.bytes.truncate(bytes_for(self.len));
        Some(last)
    }

    /// Removes every bit.
    pub fn clear(&mut self) {
        self.len = 0;
        self.bytes.clear();
    }

    /// Iterates over the bits in order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |i| self.bytes[i / 8] & (1 << (i % 8)) != 0)
    }

    /// The packed bytes.
    pub fn as_bytes(&self) -> &[u8] { &self.bytes }

    fn clear_padding(&mut self) {
        let used = self.len % 8;
        if used != 0 {
            if let Some(last) = self.bytes.last_mut() {
                *last &= (1u8 << used) - 1;
            }
        }
    }
}

impl FromIterator<bool> for BitVec {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut bv = BitVec::new();
        bv.extend(iter);
        bv
    }
}

impl Extend<bool> for BitVec {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        for bit in iter {
            self.push(bit);
        }
    }
}

impl From<Vec<bool>> for BitVec {
    fn from(v: Vec<bool>) -> Self { v.into_iter().collect() }
}

impl Encode for BitVec {
    fn encode_to<S: Sink>(&self, s: &mut S) -> Result<(), EncodeError> {
        encode_len(self.len, s)?;
        s.put_slice(&self.bytes);
        Ok(())
    }
}

impl Decode for BitVec {
    fn decode_from<D: Source>(d: &mut D) -> Result<Self, DecodeError> {
        let len = decode_len(d, max_items::<u8>())?;
        let byte_count = bytes_for(len);
        if !d.has(byte_count) {
            return Err(DecodeError::NotEnoughData);
        }

        let mut bytes = vec![0u8; byte_count];
        d.read_into(&mut bytes)?;

        let used = len % 8;
        if used != 0 && bytes[byte_count - 1] >> used != 0 {
            return Err(DecodeError::UnusedBitsAreSet);
        }
        Ok(BitVec { len, bytes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{decode_full, encode_full};

    #[test]
    fn packing() {
        let bv: BitVec = vec![true, false, true, true, false, false, false, false, true].into();
        let enc = encode_full(&bv).unwrap();
        assert_eq!(enc, vec![0x24, 0b0000_1101, 0b0000_0001]);
        assert_eq!(decode_full::<BitVec>(&enc), Ok(bv));
    }

    #[test]
    fn padding_must_be_clear() {
        assert_eq!(
            decode_full::<BitVec>(&[0x0c, 0b0000_1000]),
            Err(DecodeError::UnusedBitsAreSet)
        );
        assert_eq!(decode_full::<BitVec>(&[0x0c, 0b0000_0100]).unwrap().get(2), Some(true));
        assert_eq!(decode_full::<BitVec>(&[0x24, 0xff]), Err(DecodeError::NotEnoughData));
    }

    #[test]
    fn across_byte_boundaries() {
        for &len in [100usize, 500].iter() {
            for &bit in [false, true].iter() {
                let bv = BitVec::repeat(bit, len);
                let enc = encode_full(&bv).unwrap();
                let dec = decode_full::<BitVec>(&enc).unwrap();
                assert_eq!(dec.len(), len);
                assert!(dec.iter().all(|b| b == bit));
                assert_eq!(dec, bv);
            }
        }
    }

    #[test]
    fn push_pop() {
        let mut bv = BitVec::new();
        for i in 0..17 {
            bv.push(i % 3 == 0);
        }
        assert_eq!(bv.as_bytes().len(), 3);
        assert_eq!(bv.pop(), Some(false));
        assert_eq!(bv.pop(), Some(true));
        assert_eq!(bv.as_bytes().len(), 2);
        assert_eq!(bv.get(15), None);
        bv.set(0, false);
        assert_eq!(bv.get(0), Some(false));
        bv.clear();
        assert!(bv.is_empty());
        assert_eq!(bv.pop(), None);
    }
}
