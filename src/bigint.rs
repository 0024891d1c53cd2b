//! Fixed-width unsigned integers wider than `u128`.
//!
//! Each type is coded as exactly `BITS / 8` little-endian magnitude bytes, like the native
//! integers.

use crate::{
    encoding::{Decode, Encode, Sink, Source},
    errors::{DecodeError, EncodeError},
};
use num_bigint::BigUint;
use std::{convert::TryFrom, fmt};

macro_rules! fixed_uint {
    ($name:ident, $bits:expr) => {
        #[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[doc = concat!("An unsigned integer of exactly ", stringify!($bits), " bits.")]
        pub struct $name(BigUint);

        impl $name {
            /// Width in bits.
            pub const BITS: usize = $bits;
            /// Width of the encoding in bytes.
            pub const BYTES: usize = $bits / 8;

            /// Wraps `v`, or `None` if it is wider than the type.
            pub fn new(v: BigUint) -> Option<Self> {
                if v.bits() <= Self::BITS {
                    Some($name(v))
                } else {
                    None
                }
            }

            /// The largest value of the type.
            pub fn max_value() -> Self { $name(BigUint::from_bytes_le(&[0xff; $bits / 8])) }

            /// The value as a [`BigUint`].
            pub fn as_biguint(&self) -> &BigUint { &self.0 }

            /// Unwraps the value.
            pub fn into_biguint(self) -> BigUint { self.0 }
        }

        impl From<u64> for $name {
            fn from(v: u64) -> Self { $name(BigUint::from(v)) }
        }

        impl From<u128> for $name {
            fn from(v: u128) -> Self { $name(BigUint::from_bytes_le(&v.to_le_bytes())) }
        }

        impl TryFrom<BigUint> for $name {
            type Error = BigUint;

            fn try_from(v: BigUint) -> Result<Self, BigUint> {
                if v.bits() <= Self::BITS {
                    Ok($name(v))
                } else {
                    Err(v)
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { fmt::Display::fmt(&self.0, f) }
        }

        impl Encode for $name {
            fn encode_to<S: Sink>(&self, s: &mut S) -> Result<(), EncodeError> {
                let mut digs = self.0.to_bytes_le();
                digs.resize(Self::BYTES, 0);
                s.put_slice(&digs);
                Ok(())
            }
        }

        impl Decode for $name {
            fn decode_from<D: Source>(d: &mut D) -> Result<Self, DecodeError> {
                let mut buf = [0u8; $bits / 8];
                d.read_into(&mut buf)?;
                Ok($name(BigUint::from_bytes_le(&buf)))
            }
        }
    };
}

fixed_uint!(U256, 256);
fixed_uint!(U512, 512);
fixed_uint!(U1024, 1024);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{decode_full, encode_full};

    #[test]
    fn fixed_width() {
        let one = U256::from(1u64);
        let enc = encode_full(&one).unwrap();
        assert_eq!(enc.len(), 32);
        assert_eq!(enc[0], 1);
        assert!(enc[1..].iter().all(|b| *b == 0));
        assert_eq!(decode_full::<U256>(&enc), Ok(one));

        assert_eq!(encode_full(&U512::default()).unwrap(), vec![0; 64]);
        assert_eq!(encode_full(&U1024::max_value()).unwrap(), vec![0xff; 128]);
    }

    #[test]
    fn width_checked() {
        let wide = BigUint::from_bytes_le(&[1; 33]);
        assert!(U256::new(wide.clone()).is_none());
        assert!(U512::try_from(wide).is_ok());
        assert_eq!(
            decode_full::<U512>(&[0; 63]),
            Err(DecodeError::NotEnoughData)
        );
    }
}
