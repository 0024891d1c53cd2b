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
pub use bytes::{Bytes, BytesMut};
pub use num_bigint::{BigInt, BigUint};
pub use scale_derive::{Decode, Encode};
pub use std::convert::TryFrom;
