//! Closed sums: one tag byte holding the index of the active alternative, then its value.
//!
//! Enums deriving [`Encode`]/[`Decode`] use these helpers, with alternatives numbered in
//! declaration order.

use crate::{
    encoding::{Decode, Encode, Sink, Source},
    errors::{DecodeError, EncodeError},
};

/// Most alternatives a one-byte tag can address.
pub const MAX_ALTERNATIVES: usize = 256;

/// Writes the tag of alternative `index`.
#[inline]
pub fn encode_tag<S: Sink>(index: u8, s: &mut S) -> Result<(), EncodeError> {
    s.put_u8(index);
    Ok(())
}

/// Reads a tag, failing with [`DecodeError::WrongTypeIndex`] unless it is below `count`.
///
/// # Example
///
/// ```
/// use scale_codec::{variant::decode_tag, DecodeError};
///
/// assert_eq!(decode_tag(&mut &[1u8][..], 2), Ok(1));
/// assert_eq!(decode_tag(&mut &[2u8][..], 2), Err(DecodeError::WrongTypeIndex));
/// ```
#[inline]
pub fn decode_tag<D: Source>(d: &mut D, count: usize) -> Result<u8, DecodeError> {
    debug_assert!(count <= MAX_ALTERNATIVES);
    let tag = d.take_byte()?;
    if (tag as usize) < count {
        Ok(tag)
    } else {
        Err(DecodeError::WrongTypeIndex)
    }
}

/// `Ok` is alternative 0, `Err` is alternative 1.
impl<T: Encode, E: Encode> Encode for Result<T, E> {
    fn encode_to<S: Sink>(&self, s: &mut S) -> Result<(), EncodeError> {
        match self {
            Ok(t) => {
                encode_tag(0, s)?;
                t.encode_to(s)
            }
            Err(e) => {
                encode_tag(1, s)?;
                e.encode_to(s)
            }
        }
    }
}

impl<T: Decode, E: Decode> Decode for Result<T, E> {
    fn decode_from<D: Source>(d: &mut D) -> Result<Self, DecodeError> {
        match decode_tag(d, 2)? {
            0 => Ok(Ok(T::decode_from(d)?)),
            _ => Ok(Err(E::decode_from(d)?)),
        }
    }
}
