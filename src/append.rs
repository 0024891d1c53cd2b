//! Appending to an encoded collection without decoding its items.
//!
//! Only the compact count in front of the items is rewritten. When the new count needs more
//! (or fewer) bytes than the old one, the items are moved with an overlap-safe copy.
//!
//! # Example
//!
//! ```
//! use scale_codec::prelude::*;
//!
//! let mut buf = encode_full(&vec![1u32, 2]).unwrap();
//! append_or_new_vec(&mut buf, &encode_full(&3u32).unwrap()).unwrap();
//!
//! assert_eq!(buf, encode_full(&vec![1u32, 2, 3]).unwrap());
//! ```

use crate::{
    compact::{Classic, Compact, CompactScheme},
    encoding::{encode_full_with, encoded_size_with, Decode, Decoder},
    errors::{EncodeError, Error},
};

/// Appends one encoded item to the collection in `encoded`.
///
/// An empty buffer becomes a one-item collection.
pub fn append_or_new_vec(encoded: &mut Vec<u8>, item: &[u8]) -> Result<(), Error> {
    append_items_with::<Classic>(encoded, item, 1)
}

/// Appends `count` encoded items, concatenated in `items_raw`, to the collection in `encoded`.
pub fn append_items(encoded: &mut Vec<u8>, items_raw: &[u8], count: u64) -> Result<(), Error> {
    append_items_with::<Classic>(encoded, items_raw, count)
}

/// [`append_or_new_vec`] for a collection encoded with the compact scheme `C`.
pub fn append_or_new_vec_with<C: CompactScheme>(encoded: &mut Vec<u8>, item: &[u8]) -> Result<(), Error> {
    append_items_with::<C>(encoded, item, 1)
}

/// [`append_items`] for a collection encoded with the compact scheme `C`.
pub fn append_items_with<C: CompactScheme>(
    encoded: &mut Vec<u8>,
    items_raw: &[u8],
    count: u64,
) -> Result<(), Error> {
    if encoded.is_empty() {
        let prefix = encode_full_with::<C, _>(&Compact(count))?;
        encoded.reserve(prefix.len() + items_raw.len());
        encoded.extend_from_slice(&prefix);
        encoded.extend_from_slice(items_raw);
        return Ok(());
    }

    let (old_count, old_len) = {
        let mut src: Decoder<&[u8], C> = Decoder::new(&encoded[..]);
        let Compact(old_count) = Compact::<u64>::decode_from(&mut src)?;
        (old_count, encoded.len() - src.into_inner().len())
    };

    let new_count = old_count
        .checked_add(count)
        .ok_or(EncodeError::ValueTooBigForCompactRepresentation)?;
    let new_len = encoded_size_with::<C, _>(&Compact(new_count))?;
    let payload = encoded.len() - old_len;

    if new_len > old_len {
        encoded.resize(new_len + payload, 0);
        encoded.copy_within(old_len..old_len + payload, new_len);
    } else if new_len < old_len {
        encoded.copy_within(old_len.., new_len);
        encoded.truncate(new_len + payload);
    }

    let prefix = encode_full_with::<C, _>(&Compact(new_count))?;
    debug_assert_eq!(prefix.len(), new_len);
    encoded[..new_len].copy_from_slice(&prefix);

    encoded.extend_from_slice(items_raw);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{compact::Jam, decode_full, encode_full, DecodeError};

    #[test]
    fn empty_buffer() {
        let mut buf = Vec::new();
        append_or_new_vec(&mut buf, &[0x2a, 0, 0, 0]).unwrap();
        assert_eq!(buf, vec![0x04, 0x2a, 0, 0, 0]);
    }

    #[test]
    fn prefix_grows() {
        // 63 items fit a one byte count, 64 do not
        let items: Vec<u16> = (0..63).collect();
        let mut buf = encode_full(&items).unwrap();
        assert_eq!(buf[0], 0xfc);

        append_or_new_vec(&mut buf, &encode_full(&63u16).unwrap()).unwrap();

        let all: Vec<u16> = (0..64).collect();
        assert_eq!(buf, encode_full(&all).unwrap());
        assert_eq!(decode_full::<Vec<u16>>(&buf), Ok(all));
    }

    #[test]
    fn many_at_once() {
        let mut buf = encode_full(&vec![1u8]).unwrap();
        append_items(&mut buf, &[2, 3, 4], 3).unwrap();
        assert_eq!(buf, encode_full(&vec![1u8, 2, 3, 4]).unwrap());
    }

    #[test]
    fn jam_prefix() {
        let items: Vec<u8> = vec![0; 127];
        let mut buf = encode_full_with::<Jam, _>(&items).unwrap();
        append_or_new_vec_with::<Jam>(&mut buf, &[0]).unwrap();
        assert_eq!(&buf[..2], &[0x80, 0x80]);
        assert_eq!(buf, encode_full_with::<Jam, _>(&vec![0u8; 128]).unwrap());
    }

    #[test]
    fn corrupt_prefix() {
        let mut buf = vec![0b0000_0001, 0];
        assert_eq!(
            append_or_new_vec(&mut buf, &[1]),
            Err(Error::Decode(DecodeError::RedundantCompactEncoding))
        );
    }
}
