use crate::{
    encoding::{Encode, Sink},
    errors::EncodeError,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// A view over bytes that are already encoded; written as-is, with no length prefix.
pub struct EncodeOpaqueValue<'a>(pub &'a [u8]);

impl<'a> Encode for EncodeOpaqueValue<'a> {
    #[inline]
    fn encode_to<S: Sink>(&self, s: &mut S) -> Result<(), EncodeError> {
        s.put_slice(self.0);
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
/// An owned, already encoded item.
///
/// Useful to build a collection out of items encoded elsewhere:
///
/// ```
/// use scale_codec::prelude::*;
///
/// let items = vec![
///     OpaqueBytes::encode(&1u16).unwrap(),
///     OpaqueBytes::encode(&2u16).unwrap(),
/// ];
///
/// assert_eq!(
///     encode_full(&items).unwrap(),
///     encode_full(&vec![1u16, 2]).unwrap()
/// );
/// ```
pub struct OpaqueBytes(pub Vec<u8>);

impl OpaqueBytes {
    /// Encodes `t` into a new opaque item.
    pub fn encode<T: Encode + ?Sized>(t: &T) -> Result<Self, EncodeError> {
        crate::encode_full(t).map(OpaqueBytes)
    }

    /// A borrowed view of the item.
    pub fn as_value(&self) -> EncodeOpaqueValue<'_> { EncodeOpaqueValue(&self.0) }
}

impl From<Vec<u8>> for OpaqueBytes {
    fn from(v: Vec<u8>) -> Self { OpaqueBytes(v) }
}

impl Encode for OpaqueBytes {
    #[inline]
    fn encode_to<S: Sink>(&self, s: &mut S) -> Result<(), EncodeError> { self.as_value().encode_to(s) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode_full;

    #[test]
    fn raw() {
        assert_eq!(encode_full(&EncodeOpaqueValue(&[1, 2, 3])).unwrap(), vec![1, 2, 3]);
        assert_eq!(
            encode_full(&vec![OpaqueBytes(vec![9]), OpaqueBytes(vec![8, 7])]).unwrap(),
            vec![0x08, 9, 8, 7]
        );
    }
}
