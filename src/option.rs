use crate::{
    encoding::{Decode, Encode, Sink, Source},
    errors::{DecodeError, EncodeError},
};

/// A presence byte, then the value if present. `Option<bool>` is a single byte instead:
/// 0 for `None`, 1 for `Some(true)`, 2 for `Some(false)`.
impl<T: Encode> Encode for Option<T> {
    #[inline]
    fn encode_to<S: Sink>(&self, s: &mut S) -> Result<(), EncodeError> { T::encode_option(self.as_ref(), s) }
}

impl<T: Decode> Decode for Option<T> {
    #[inline]
    fn decode_from<D: Source>(d: &mut D) -> Result<Self, DecodeError> { T::decode_option(d) }
}

#[cfg(test)]
mod tests {
    use crate::{decode_full, encode_full, DecodeError};

    #[test]
    fn presence_byte() {
        assert_eq!(encode_full(&Some(7u16)).unwrap(), vec![1, 7, 0]);
        assert_eq!(encode_full(&None::<u16>).unwrap(), vec![0]);
        assert_eq!(decode_full::<Option<u16>>(&[1, 7, 0]), Ok(Some(7)));
        assert_eq!(decode_full::<Option<u16>>(&[0]), Ok(None));
        assert_eq!(decode_full::<Option<u16>>(&[2, 7, 0]), Err(DecodeError::UnexpectedValue));
    }

    #[test]
    fn optional_bool() {
        assert_eq!(encode_full(&None::<bool>).unwrap(), vec![0]);
        assert_eq!(encode_full(&Some(true)).unwrap(), vec![1]);
        assert_eq!(encode_full(&Some(false)).unwrap(), vec![2]);
        for &v in [None, Some(true), Some(false)].iter() {
            assert_eq!(decode_full::<Option<bool>>(&encode_full(&v).unwrap()), Ok(v));
        }
        assert_eq!(decode_full::<Option<bool>>(&[3]), Err(DecodeError::UnexpectedValue));
    }

    #[test]
    fn nested_bools_use_presence() {
        // only the innermost option packs the bool
        assert_eq!(encode_full(&Some(Some(false))).unwrap(), vec![1, 2]);
        assert_eq!(encode_full(&Some(None::<bool>)).unwrap(), vec![1, 0]);
        assert_eq!(decode_full::<Option<Option<bool>>>(&[1, 2]), Ok(Some(Some(false))));
    }
}
