//! # Compact integers
//!
//! Variable-length unsigned integers. Two wire-incompatible schemes are available, picked
//! per stream through [`Sink::Scheme`] and [`Source::Scheme`]:
//!
//! * [`Classic`], the 4-tier layout:
//!
//! | Value range       | Encoding                                                     |
//! | ---               | ---                                                          |
//! | `[0, 2^6)`        | 1 byte, `value << 2 \| 0b00`                                 |
//! | `[2^6, 2^14)`     | 2 bytes LE, `value << 2 \| 0b01`                             |
//! | `[2^14, 2^30)`    | 4 bytes LE, `value << 2 \| 0b10`                             |
//! | `[2^30, 2^536)`   | `((n - 4) << 2) \| 0b11`, then `n` LE magnitude bytes, `n` in `4..=67` |
//!
//! * [`Jam`], a prefix-length layout for values below `2^64`: the number of leading one
//!   bits of the first byte is the number of extra little-endian bytes, and the rest of the
//!   first byte holds the high bits of the value.
//!
//! Both schemes only accept the shortest encoding of a value.
//!
//! # Example
//!
//! ```
//! use scale_codec::prelude::*;
//!
//! assert_eq!(encode_full(&Compact(64u32)).unwrap(), vec![0x01, 0x01]);
//! assert_eq!(encode_full_with::<Jam, _>(&Compact(64u32)).unwrap(), vec![0x40]);
//!
//! // the same value in two bytes is rejected
//! assert_eq!(
//!     decode_full::<Compact<u32>>(&[0b0000_0001, 0]),
//!     Err(DecodeError::RedundantCompactEncoding)
//! );
//! ```

use crate::{
    encoding::{constants::*, Decode, Encode, Sink, Source},
    errors::{DecodeError, EncodeError},
    util::*,
};
use num_bigint::{BigInt, BigUint, Sign, ToBigUint};
use smallvec::SmallVec;
use std::convert::TryFrom;

/// A compact integer layout.
///
/// Schemes work on trimmed little-endian magnitude digits, so every integer type shares
/// the same code path.
pub trait CompactScheme {
    /// Write the shortest encoding of `digs`. Trailing zero digits are ignored.
    fn put<S: Sink>(digs: &[u8], s: &mut S) -> Result<(), EncodeError>;
    /// Read one encoding, rejecting non-minimal forms.
    fn take<D: Source>(d: &mut D) -> Result<Digits, DecodeError>;
}

/// The classic 4-tier compact layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classic {}

/// The JAM compact layout, limited to 64-bit values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Jam {}

#[cold]
#[inline(never)]
fn redundant<T>() -> Result<T, DecodeError> { Err(DecodeError::RedundantCompactEncoding) }

impl CompactScheme for Classic {
    fn put<S: Sink>(digs: &[u8], s: &mut S) -> Result<(), EncodeError> {
        let digs = trim_digits(digs);

        if digs.len() <= BIG_MIN_LEN {
            let mut buf = [0u8; 4];
            buf[..digs.len()].copy_from_slice(digs);
            let v = u32::from_le_bytes(buf);

            if v < SINGLE_LIMIT {
                s.put_u8((v << 2) as u8 | MODE_SINGLE);
                return Ok(());
            }
            if v < TWO_LIMIT {
                s.put_slice(&((v << 2) as u16 | MODE_TWO as u16).to_le_bytes());
                return Ok(());
            }
            if v < FOUR_LIMIT {
                s.put_slice(&((v << 2) | MODE_FOUR as u32).to_le_bytes());
                return Ok(());
            }
        }

        if digs.len() > BIG_MAX_LEN {
            return Err(EncodeError::ValueTooBigForCompactRepresentation);
        }

        s.put_u8((((digs.len() - BIG_MIN_LEN) as u8) << 2) | MODE_BIG);
        s.put_slice(digs);
        Ok(())
    }

    fn take<D: Source>(d: &mut D) -> Result<Digits, DecodeError> {
        let first = d.take_byte()?;

        match first & MASK_MODE {
            MODE_SINGLE => Ok(u128_to_digits(u128::from(first >> 2))),
            MODE_TWO => {
                let v = u16::from_le_bytes([first, d.take_byte()?]) >> 2;
                if u32::from(v) < SINGLE_LIMIT {
                    return redundant();
                }
                Ok(u128_to_digits(u128::from(v)))
            }
            MODE_FOUR => {
                let mut rest = [0u8; 3];
                d.read_into(&mut rest)?;
                let v = u32::from_le_bytes([first, rest[0], rest[1], rest[2]]) >> 2;
                if v < TWO_LIMIT {
                    return redundant();
                }
                Ok(u128_to_digits(u128::from(v)))
            }
            _ => {
                let len = (first >> 2) as usize + BIG_MIN_LEN;
                if !d.has(len) {
                    return Err(DecodeError::NotEnoughData);
                }

                let mut digs: Digits = SmallVec::from_elem(0, len);
                d.read_into(&mut digs)?;

                // the top byte carries the length, so it can't be zero
                if digs[len - 1] == 0 {
                    return redundant();
                }
                if len == BIG_MIN_LEN
                    && u32::from_le_bytes([digs[0], digs[1], digs[2], digs[3]]) < FOUR_LIMIT
                {
                    return redundant();
                }
                Ok(digs)
            }
        }
    }
}

impl CompactScheme for Jam {
    fn put<S: Sink>(digs: &[u8], s: &mut S) -> Result<(), EncodeError> {
        let v = match digits_to_u128(trim_digits(digs)).map(u64::try_from) {
            Some(Ok(v)) => v,
            _ => return Err(EncodeError::ValueTooBigForCompactRepresentation),
        };

        if v <= JAM_SINGLE_MAX {
            s.put_u8(v as u8);
            return Ok(());
        }

        let extra = (1..JAM_MAX_EXTRA)
            .find(|l| v >> (7 * (l + 1)) == 0)
            .unwrap_or(JAM_MAX_EXTRA);

        let high = if extra == JAM_MAX_EXTRA {
            0
        } else {
            (v >> (8 * extra)) as u8
        };

        s.put_u8((0xff00u16 >> extra) as u8 | high);
        s.put_slice(&v.to_le_bytes()[..extra as usize]);
        Ok(())
    }

    fn take<D: Source>(d: &mut D) -> Result<Digits, DecodeError> {
        let first = d.take_byte()?;
        let extra = first.leading_ones();

        if extra == 0 {
            return Ok(u128_to_digits(u128::from(first)));
        }

        let mut low = [0u8; 8];
        d.read_into(&mut low[..extra as usize])?;
        let low = u64::from_le_bytes(low);

        let v = if extra == JAM_MAX_EXTRA {
            low
        } else {
            let high = u64::from(first & (0xffu16 >> (extra + 1)) as u8);
            low | (high << (8 * extra))
        };

        if v >> (7 * extra) == 0 {
            return redundant();
        }
        Ok(u128_to_digits(u128::from(v)))
    }
}

/// Integers that can be written as compact integers.
pub trait CompactInt: Sized {
    /// The trimmed little-endian magnitude of `self`.
    ///
    /// Fails with [`EncodeError::NegativeInteger`] for values below zero.
    fn to_digits(&self) -> Result<Digits, EncodeError>;

    /// Rebuilds a value from trimmed digits.
    ///
    /// Fails with [`DecodeError::DecodedValueOverflowsTarget`] when the value is out of range.
    fn from_digits(digs: &[u8]) -> Result<Self, DecodeError>;
}

fn narrow<T: TryFrom<u128>>(digs: &[u8]) -> Result<T, DecodeError> {
    digits_to_u128(digs)
        .and_then(|v| T::try_from(v).ok())
        .ok_or(DecodeError::DecodedValueOverflowsTarget)
}

macro_rules! compact_unsigned {
    ($($typ:ty),*) => {
        $(
            impl CompactInt for $typ {
                #[inline]
                fn to_digits(&self) -> Result<Digits, EncodeError> {
                    Ok(u128_to_digits(*self as u128))
                }

                #[inline]
                fn from_digits(digs: &[u8]) -> Result<Self, DecodeError> { narrow(digs) }
            }
        )*
    };
}

macro_rules! compact_signed {
    ($($typ:ty),*) => {
        $(
            impl CompactInt for $typ {
                #[inline]
                fn to_digits(&self) -> Result<Digits, EncodeError> {
                    if *self < 0 {
                        Err(EncodeError::NegativeInteger)
                    } else {
                        Ok(u128_to_digits(*self as u128))
                    }
                }

                #[inline]
                fn from_digits(digs: &[u8]) -> Result<Self, DecodeError> { narrow(digs) }
            }
        )*
    };
}

compact_unsigned!(u8, u16, u32, u64, u128, usize);
compact_signed!(i8, i16, i32, i64, i128, isize);

impl CompactInt for BigUint {
    fn to_digits(&self) -> Result<Digits, EncodeError> {
        Ok(SmallVec::from_slice(trim_digits(&self.to_bytes_le())))
    }

    fn from_digits(digs: &[u8]) -> Result<Self, DecodeError> { Ok(BigUint::from_bytes_le(digs)) }
}

impl CompactInt for BigInt {
    fn to_digits(&self) -> Result<Digits, EncodeError> {
        match self.to_biguint() {
            Some(mag) => mag.to_digits(),
            None => Err(EncodeError::NegativeInteger),
        }
    }

    fn from_digits(digs: &[u8]) -> Result<Self, DecodeError> {
        Ok(BigInt::from_biguint(Sign::Plus, BigUint::from_bytes_le(digs)))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// An integer coded with the compact scheme of the stream instead of its fixed width.
pub struct Compact<T>(pub T);

impl<T> From<T> for Compact<T> {
    fn from(t: T) -> Self { Compact(t) }
}

impl<T: CompactInt> Encode for Compact<T> {
    #[inline]
    fn encode_to<S: Sink>(&self, s: &mut S) -> Result<(), EncodeError> {
        let digs = self.0.to_digits()?;
        S::Scheme::put(&digs, s)
    }
}

impl<T: CompactInt> Decode for Compact<T> {
    #[inline]
    fn decode_from<D: Source>(d: &mut D) -> Result<Self, DecodeError> {
        let digs = D::Scheme::take(d)?;
        T::from_digits(&digs).map(Compact)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// A borrowed view of an integer in compact mode.
pub struct CompactRef<'a, T>(pub &'a T);

impl<'a, T: CompactInt> Encode for CompactRef<'a, T> {
    #[inline]
    fn encode_to<S: Sink>(&self, s: &mut S) -> Result<(), EncodeError> {
        let digs = self.0.to_digits()?;
        S::Scheme::put(&digs, s)
    }
}

/// Views `t` as a compact integer without copying it.
///
/// # Example
///
/// ```
/// use scale_codec::prelude::*;
///
/// let big = 1u64 << 35;
/// assert_eq!(
///     encode_full(&as_compact(&big)).unwrap(),
///     vec![0x07, 0, 0, 0, 0, 0x08]
/// );
/// ```
pub fn as_compact<T: CompactInt>(t: &T) -> CompactRef<'_, T> { CompactRef(t) }

/// Writes a collection length.
#[inline]
pub(crate) fn encode_len<S: Sink>(len: usize, s: &mut S) -> Result<(), EncodeError> {
    S::Scheme::put(&u128_to_digits(len as u128), s)
}

/// Reads a collection length, failing with [`DecodeError::TooManyItems`] above `max`.
#[inline]
pub(crate) fn decode_len<D: Source>(d: &mut D, max: usize) -> Result<usize, DecodeError> {
    let Compact(len) = Compact::<usize>::decode_from(d)?;
    if len > max {
        Err(DecodeError::TooManyItems)
    } else {
        Ok(len)
    }
}
