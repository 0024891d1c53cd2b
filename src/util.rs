use smallvec::SmallVec;

/// Little-endian magnitude digits with no trailing zero bytes. Zero is the empty buffer.
pub type Digits = SmallVec<[u8; 16]>;

/// Converts a `u128` to the smallest possible buffer of digits in little-endian order.
///
/// # Arguments
///
/// * `num: u128` - The integer to be converted.
///
/// # Example
///
/// ```
/// use scale_codec::util::u128_to_digits;
///
/// let digs = u128_to_digits(0x0102);
///
/// assert_eq!(&digs[..], &[2, 1]);
/// // zero has no digits at all
/// assert!(u128_to_digits(0).is_empty());
/// ```
pub fn u128_to_digits(num: u128) -> Digits {
    let len = 16 - (num.leading_zeros() / 8) as usize;
    SmallVec::from_slice(&num.to_le_bytes()[..len])
}

/// Reads trimmed digits back into a `u128`, or `None` if they do not fit.
pub fn digits_to_u128(digs: &[u8]) -> Option<u128> {
    if digs.len() > 16 {
        return None;
    }
    let mut buf = [0u8; 16];
    buf[..digs.len()].copy_from_slice(digs);
    Some(u128::from_le_bytes(buf))
}

/// Strips trailing zero bytes from a little-endian buffer.
pub fn trim_digits(bytes: &[u8]) -> &[u8] {
    let len = bytes.iter().rposition(|b| *b != 0).map_or(0, |i| i + 1);
    &bytes[..len]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits() {
        assert_eq!(&u128_to_digits(u128::max_value())[..], &[0xff; 16][..]);
        assert_eq!(&u128_to_digits(1 << 64)[..], &[0, 0, 0, 0, 0, 0, 0, 0, 1]);
        assert_eq!(digits_to_u128(&[0xff; 17]), None);
        assert_eq!(digits_to_u128(&[]), Some(0));
        assert_eq!(digits_to_u128(&[1, 1]), Some(257));
    }

    #[test]
    fn trim() {
        assert_eq!(trim_digits(&[1, 0, 2, 0, 0]), &[1, 0, 2]);
        assert!(trim_digits(&[0, 0]).is_empty());
    }
}
