//! # SCALE
//!
//! A deterministic, compact, little-endian binary codec. Encodings carry no type information
//! and no envelope: the reader must know the type it is decoding, and values are simply
//! concatenated.
//!
//! # Usage
//!
//! Types implement [`Encode`] and [`Decode`]. Both can usually be derived:
//!
//! ```
//! use scale_codec::prelude::*;
//!
//! #[derive(Clone, Debug, Encode, Decode, PartialEq)]
//! /// A silly enum, we shall make an example of it.
//! enum SillyEnum {
//!     Foo,
//!     Bar(u8, String),
//!     Baz { x: i32, y: Option<bool> },
//! }
//!
//! let silly_example = SillyEnum::Bar(1, "hi".to_string());
//!
//! // encode
//! let encoded = encode_full(&silly_example).unwrap();
//! assert_eq!(encoded, vec![1, 1, 0x08, b'h', b'i']);
//!
//! // and then immediately decode, because this is a silly example
//! let decoded: SillyEnum = decode_full(&encoded).unwrap();
//!
//! assert_eq!(silly_example, decoded);
//! ```
//!
//! # An overview of SCALE types
//!
//! ## Integers
//!
//! Fixed-width integers are written as their little-endian bytes. Wrapping an integer in
//! [`Compact`] (or marking a field `#[scale(compact)]`) selects the variable-length encoding
//! instead.
//!
//! ```
//! use scale_codec::prelude::*;
//!
//! assert_eq!(encode_full(&1u32).unwrap(), vec![1, 0, 0, 0]);
//! assert_eq!(encode_full(&Compact(1u32)).unwrap(), vec![0b100]);
//!
//! // big integers are compact only
//! let big = BigUint::from(1u8) << 100;
//! assert_eq!(encode_full(&Compact(big)).unwrap().len(), 14);
//! ```
//!
//! Fixed-size unsigned integers wider than 128 bits are provided as [`U256`], [`U512`] and
//! [`U1024`].
//!
//! ## Collections
//!
//! Sequences, sets, maps and strings are prefixed with their compact length. Fixed-size
//! arrays and tuples have no prefix.
//!
//! ```
//! use scale_codec::prelude::*;
//!
//! assert_eq!(encode_full(&vec![1u8, 2]).unwrap(), vec![0x08, 1, 2]);
//! assert_eq!(encode_full(&[1u8, 2]).unwrap(), vec![1, 2]);
//! assert_eq!(encode_full("ab").unwrap(), vec![0x08, b'a', b'b']);
//! ```
//!
//! `HashMap` and `HashSet` are written in their iteration order, so the same set can
//! encode to different bytes. Use `BTreeMap` and `BTreeSet` when the encoding has to be
//! reproducible.
//!
//! See also: [`BitVec`], [`BoundedVec`] and [`append_or_new_vec`].
//!
//! ## Choosing a compact scheme
//!
//! Two compact schemes exist, [`Classic`] and [`Jam`]. They are wire-incompatible; a whole
//! stream uses one of them. The plain functions use [`Classic`]; the `_with` variants and
//! the [`Encoder`]/[`Decoder`] adapters take the scheme as a type parameter.
//!
//! ```
//! use scale_codec::prelude::*;
//!
//! assert_eq!(encode_full_with::<Jam, _>(&Compact(128u32)).unwrap(), vec![0x80, 0x80]);
//! assert_eq!(decode_full_with::<Jam, Compact<u32>>(&[0x80, 0x80]), Ok(Compact(128)));
//! ```
//!
//! # Wire format
//!
//! This section describes the binary format.
//!
//! ## Fixed-width values
//!
//! Integers of 8 to 128 bits are their little-endian two's complement bytes. Booleans are
//! `0x00` or `0x01`; any other byte is rejected. [`U256`], [`U512`] and [`U1024`] are 32,
//! 64 and 128 little-endian magnitude bytes.
//!
//! ## Classic compact integers
//!
//! The low two bits of the first byte select the tier:
//!
//! | Range            | Mode | Layout                                              |
//! | ---              | ---  | ---                                                 |
//! | `[0, 2^6)`       | `00` | 1 byte, `n << 2`                                    |
//! | `[2^6, 2^14)`    | `01` | 2 bytes LE, `n << 2 \| 1`                           |
//! | `[2^14, 2^30)`   | `10` | 4 bytes LE, `n << 2 \| 2`                           |
//! | `[2^30, 2^536)`  | `11` | `(len - 4) << 2 \| 3`, then `len` LE bytes, `len` in 4..=67 |
//!
//! Only the shortest encoding of a value is accepted.
//!
//! ## JAM compact integers
//!
//! The number of leading one bits in the first byte, `l` (at most 8), is the number of
//! little-endian bytes that follow. The remaining bits of the first byte hold the value
//! shifted right by `8 * l`. Values need at most 9 bytes; only the shortest encoding is
//! accepted.
//!
//! | First byte   | Following bytes | Range            |
//! | ---          | ---             | ---              |
//! | `0xxxxxxx`   | 0               | `[0, 2^7)`       |
//! | `10xxxxxx`   | 1               | `[2^7, 2^14)`    |
//! | `110xxxxx`   | 2               | `[2^14, 2^21)`   |
//! | ...          | ...             | ...              |
//! | `11111111`   | 8               | `[2^56, 2^64)`   |
//!
//! ## Dynamic collections
//!
//! A compact element count, then every element. Bit vectors pack their bits least
//! significant first into `ceil(count / 8)` bytes, and unused bits must be zero.
//!
//! ## Options and variants
//!
//! An option is `0x00`, or `0x01` followed by the value. `Option<bool>` is a single byte:
//! `0x00` for none, `0x01` for true and `0x02` for false.
//!
//! A variant is a one-byte alternative index followed by the alternative. `Result` uses
//! index 0 for `Ok` and 1 for `Err`.
//!
//! ## Records and tuples
//!
//! The concatenation of the fields, in order, with no framing.

#![warn(
//    missing_docs,
    deprecated_in_future,
    unsafe_code,
    unused_labels,
    keyword_idents,
    missing_copy_implementations,
    missing_debug_implementations,
    macro_use_extern_crate,
    unreachable_pub,
    trivial_casts,
    unused_extern_crates,
    unused_import_braces
)]
#![allow(clippy::cast_lossless)]

#[allow(unused_extern_crates)]
extern crate self as scale_codec;

/// Procedural macros for deriving [`Encode`] and [`Decode`].
pub use scale_derive::{Decode, Encode};

pub mod append;
pub mod bigint;
pub mod bitvec;
pub mod collections;
pub mod compact;
pub mod encoding;
pub mod enums;
pub mod errors;
pub mod opaque;
pub mod option;
pub mod pointer;
pub mod prelude;
mod prims;
pub mod tuple;
pub mod util;
pub mod variant;

pub use crate::{
    append::{append_items, append_items_with, append_or_new_vec, append_or_new_vec_with},
    bigint::{U1024, U256, U512},
    bitvec::BitVec,
    collections::BoundedVec,
    compact::{as_compact, Classic, Compact, CompactInt, CompactRef, CompactScheme, Jam},
    encoding::{
        decode, decode_full, decode_full_with, encode, encode_full, encode_full_with, encoded_size,
        encoded_size_with, ByteSource, Counter, Decode, Decoder, Encode, Encoder, Sink, Source,
    },
    enums::ScaleEnum,
    errors::{DecodeError, EncodeError, Error},
    opaque::{EncodeOpaqueValue, OpaqueBytes},
};
