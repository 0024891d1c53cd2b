//! Field-less enums coded as their underlying integer.
//!
//! Decoding validates the integer against the values the enum declares, failing with
//! [`DecodeError::InvalidEnumValue`] otherwise. Deriving with `#[scale(repr = "..")]`
//! checks against the declared discriminants; a hand-written [`ScaleEnum`] can check a
//! contiguous range instead.
//!
//! The derived [`ScaleEnum`] impl comes with `#[derive(Encode)]`, so such enums derive both
//! traits.
//!
//! # Example
//!
//! ```
//! use scale_codec::prelude::*;
//!
//! #[derive(Encode, Decode, Clone, Copy, Debug, PartialEq)]
//! #[scale(repr = "u16")]
//! enum Level {
//!     Low = 1,
//!     High = 0x100,
//! }
//!
//! assert_eq!(encode_full(&Level::High).unwrap(), vec![0x00, 0x01]);
//! assert_eq!(decode_full::<Level>(&[1, 0]), Ok(Level::Low));
//! assert_eq!(decode_full::<Level>(&[2, 0]), Err(DecodeError::InvalidEnumValue));
//! ```

use crate::{
    encoding::{Decode, Encode, Sink, Source},
    errors::{DecodeError, EncodeError},
};

/// An enum with an integer representation and a closed set of valid values.
pub trait ScaleEnum: Sized {
    /// The underlying integer.
    type Repr: Encode + Decode;

    /// The integer value of `self`.
    fn to_repr(&self) -> Self::Repr;

    /// The enum value for `repr`, if it is one.
    fn from_repr(repr: Self::Repr) -> Option<Self>;
}

/// Writes the underlying integer of `e`.
#[inline]
pub fn encode_enum<E: ScaleEnum, S: Sink>(e: &E, s: &mut S) -> Result<(), EncodeError> {
    e.to_repr().encode_to(s)
}

/// Reads an underlying integer and validates it.
#[inline]
pub fn decode_enum<E: ScaleEnum, D: Source>(d: &mut D) -> Result<E, DecodeError> {
    E::from_repr(E::Repr::decode_from(d)?).ok_or(DecodeError::InvalidEnumValue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{decode_full, encode_full};

    #[derive(Clone, Copy, Debug, PartialEq)]
    struct Percent(u8);

    // every value from 0 to 100 inclusive is valid
    impl ScaleEnum for Percent {
        type Repr = u8;

        fn to_repr(&self) -> u8 { self.0 }

        fn from_repr(repr: u8) -> Option<Self> {
            if repr <= 100 {
                Some(Percent(repr))
            } else {
                None
            }
        }
    }

    impl Encode for Percent {
        fn encode_to<S: Sink>(&self, s: &mut S) -> Result<(), EncodeError> { encode_enum(self, s) }
    }

    impl Decode for Percent {
        fn decode_from<D: Source>(d: &mut D) -> Result<Self, DecodeError> { decode_enum(d) }
    }

    #[test]
    fn range_validated() {
        assert_eq!(encode_full(&Percent(42)).unwrap(), vec![42]);
        assert_eq!(decode_full::<Percent>(&[100]), Ok(Percent(100)));
        assert_eq!(decode_full::<Percent>(&[101]), Err(DecodeError::InvalidEnumValue));
        assert_eq!(decode_full::<Percent>(&[]), Err(DecodeError::NotEnoughData));
    }
}
