//! # SCALE binary encoder and decoder
//!
//! Encode and decode functions for SCALE.
//!
//! # Example
//!
//! ```
//! use scale_codec::prelude::*;
//!
//! // a struct that will store some data
//! #[derive(Encode, Decode, PartialEq, Debug, Clone)]
//! struct SomeData {
//!     #[scale(compact)]
//!     x: u64,
//!     y: i32,
//! }
//!
//! // here it is storing some data
//! let some_data = SomeData { x: 1, y: 2 };
//!
//! // and we've encoded it
//! let enc_full = encode_full(&some_data).unwrap();
//! assert_eq!(enc_full, vec![0x04, 2, 0, 0, 0]);
//!
//! // let's encode it a different way too
//!
//! // create a buffer
//! let out: &mut Vec<u8> = &mut Vec::new();
//!
//! // and we've encoded it a different way
//! encode(&some_data, out).unwrap();
//!
//! // but they are equivalent
//! assert_eq!(*out, enc_full);
//!
//! // Note: decoding returns a `Result`
//! let dec_full: SomeData = decode_full(&enc_full).unwrap();
//!
//! // success!
//! assert_eq!(dec_full, some_data);
//! ```

use crate::{
    compact::{Classic, CompactScheme},
    errors::{DecodeError, EncodeError},
};

pub mod ser;
pub use ser::*;
pub mod de;
pub use de::*;
pub(crate) mod constants;

/// Encodes `t` into `out`, all or nothing.
///
/// The value is staged with the compact scheme of `out` and only handed to the sink once
/// encoding succeeded, so a failure leaves `out` exactly as it was.
///
/// # Arguments
///
/// * `t` - A reference to the value to be encoded.
/// * `out` - The [`Sink`] where the encoder output will be stored.
///
/// # Example
///
/// ```
/// use scale_codec::prelude::*;
///
/// // output buffer
/// let out: &mut Vec<u8> = &mut Vec::new();
///
/// encode(&true, out).unwrap();
/// assert_eq!(*out, vec![0x01]);
///
/// // negative compacts are rejected and nothing is written
/// assert!(encode(&Compact(-1i64), out).is_err());
/// assert_eq!(out.len(), 1);
/// ```
pub fn encode<T: Encode + ?Sized, S: Sink>(t: &T, out: &mut S) -> Result<(), EncodeError> {
    let staged = encode_full_with::<S::Scheme, T>(t)?;
    out.put_slice(&staged);
    Ok(())
}

/// Tries to decode a value of type `T` from a source, advancing it past the value.
///
/// # Arguments
///
/// * `data` - A [`Source`] positioned at a SCALE encoded value.
///
/// # Example
///
/// ```
/// use scale_codec::prelude::*;
///
/// let bytes = [0x2a, 0, 0x04];
/// let mut src = &bytes[..];
///
/// let a: u16 = decode(&mut src).unwrap();
/// let b: Compact<u8> = decode(&mut src).unwrap();
///
/// assert_eq!((a, b.0), (42, 1));
/// assert!(src.is_empty());
/// ```
pub fn decode<T: Decode, D: Source>(data: &mut D) -> Result<T, DecodeError> { T::decode_from(data) }

/// Encodes a value into a vector of bytes with the [`Classic`] compact scheme.
///
/// # Arguments
///
/// * `t` - A reference to the value to be encoded.
///
/// # Example
///
/// ```
/// use scale_codec::prelude::*;
///
/// let enc = encode_full(&vec![1u16, 2, 3, 4]).unwrap();
///
/// assert_eq!(enc, vec![0x10, 1, 0, 2, 0, 3, 0, 4, 0]);
/// ```
pub fn encode_full<T: Encode + ?Sized>(t: &T) -> Result<Vec<u8>, EncodeError> {
    encode_full_with::<Classic, T>(t)
}

/// Encodes a value into a vector of bytes with the compact scheme `C`.
pub fn encode_full_with<C: CompactScheme, T: Encode + ?Sized>(t: &T) -> Result<Vec<u8>, EncodeError> {
    let mut out: Encoder<Vec<u8>, C> = Encoder::new(Vec::new());
    t.encode_to(&mut out)?;
    Ok(out.into_inner())
}

/// Decodes a value from the start of a buffer with the [`Classic`] compact scheme.
///
/// # Arguments
///
/// * `bs` - A buffer containing binary encoded SCALE.
///
/// # Example
///
/// ```
/// use scale_codec::prelude::*;
///
/// // Did the decoding succeed?
/// let dec: Option<bool> = match decode_full(&[2]) {
///     Ok(value) => value,
///     Err(_e) => panic!("Oh no. Whatever will I do?"),
/// };
///
/// assert_eq!(dec, Some(false));
/// ```
pub fn decode_full<T: Decode>(bs: &[u8]) -> Result<T, DecodeError> { decode_full_with::<Classic, T>(bs) }

/// Decodes a value from the start of a buffer with the compact scheme `C`.
pub fn decode_full_with<C: CompactScheme, T: Decode>(bs: &[u8]) -> Result<T, DecodeError> {
    let mut src: Decoder<&[u8], C> = Decoder::new(bs);
    T::decode_from(&mut src)
}

/// Number of bytes [`encode_full`] would produce for `t`.
///
/// # Example
///
/// ```
/// use scale_codec::prelude::*;
///
/// let v = vec![Compact(1u32 << 20); 3];
/// assert_eq!(encoded_size(&v).unwrap(), 1 + 3 * 4);
/// ```
pub fn encoded_size<T: Encode + ?Sized>(t: &T) -> Result<usize, EncodeError> {
    encoded_size_with::<Classic, T>(t)
}

/// Number of bytes `t` takes with the compact scheme `C`.
pub fn encoded_size_with<C: CompactScheme, T: Encode + ?Sized>(t: &T) -> Result<usize, EncodeError> {
    let mut counter: Counter<C> = Counter::new();
    t.encode_to(&mut counter)?;
    Ok(counter.size())
}
