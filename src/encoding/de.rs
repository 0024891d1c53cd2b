use crate::{
    compact::{Classic, CompactScheme},
    errors::DecodeError,
};
use bytes::Bytes;
use std::{
    marker::PhantomData,
    ops::{Deref, DerefMut},
};

/// A read-only byte stream.
///
/// Once `has(n)` is false it stays false; a source never grows.
pub trait Source {
    /// Compact integer scheme of this stream.
    type Scheme: CompactScheme;

    /// Number of bytes left.
    fn remaining(&self) -> usize;

    /// Whether at least `amount` bytes are left.
    #[inline]
    fn has(&self, amount: usize) -> bool { self.remaining() >= amount }

    /// Take the next byte.
    fn take_byte(&mut self) -> Result<u8, DecodeError>;

    /// Fill `out` entirely, or fail without consuming anything.
    fn read_into(&mut self, out: &mut [u8]) -> Result<(), DecodeError>;

    /// Take the next `len` bytes as a span.
    ///
    /// The default copies; contiguous sources may hand out a view instead.
    fn read_many(&mut self, len: usize) -> Result<Bytes, DecodeError> {
        if !self.has(len) {
            return Err(DecodeError::NotEnoughData);
        }
        let mut buf = vec![0u8; len];
        self.read_into(&mut buf)?;
        Ok(Bytes::from(buf))
    }
}

impl<'a> Source for &'a [u8] {
    type Scheme = Classic;

    #[inline]
    fn remaining(&self) -> usize { self.len() }

    #[inline]
    fn take_byte(&mut self) -> Result<u8, DecodeError> {
        let slice: &'a [u8] = *self;
        match slice.split_first() {
            Some((byte, rest)) => {
                *self = rest;
                Ok(*byte)
            }
            None => Err(DecodeError::NotEnoughData),
        }
    }

    #[inline]
    fn read_into(&mut self, out: &mut [u8]) -> Result<(), DecodeError> {
        if self.len() < out.len() {
            return Err(DecodeError::NotEnoughData);
        }
        let slice: &'a [u8] = *self;
        let (head, rest) = slice.split_at(out.len());
        out.copy_from_slice(head);
        *self = rest;
        Ok(())
    }
}

impl<'a, D: Source> Source for &'a mut D {
    type Scheme = D::Scheme;

    fn remaining(&self) -> usize { (**self).remaining() }

    fn has(&self, amount: usize) -> bool { (**self).has(amount) }

    fn take_byte(&mut self) -> Result<u8, DecodeError> { (**self).take_byte() }

    fn read_into(&mut self, out: &mut [u8]) -> Result<(), DecodeError> { (**self).read_into(out) }

    fn read_many(&mut self, len: usize) -> Result<Bytes, DecodeError> { (**self).read_many(len) }
}

/// A source over shared [`Bytes`]; spans are handed out without copying.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ByteSource(Bytes);

impl ByteSource {
    /// Unwraps the bytes that have not been consumed yet.
    pub fn into_inner(self) -> Bytes { self.0 }
}

impl Deref for ByteSource {
    type Target = Bytes;
    fn deref(&self) -> &Bytes { &self.0 }
}

impl DerefMut for ByteSource {
    fn deref_mut(&mut self) -> &mut Bytes { &mut self.0 }
}

impl From<Bytes> for ByteSource {
    fn from(b: Bytes) -> Self { ByteSource(b) }
}

impl From<Vec<u8>> for ByteSource {
    fn from(v: Vec<u8>) -> Self { ByteSource(Bytes::from(v)) }
}

impl<'a> From<&'a [u8]> for ByteSource {
    fn from(s: &'a [u8]) -> Self { ByteSource(Bytes::from(s)) }
}

impl Source for ByteSource {
    type Scheme = Classic;

    #[inline]
    fn remaining(&self) -> usize { self.len() }

    #[inline]
    fn take_byte(&mut self) -> Result<u8, DecodeError> {
        if self.is_empty() {
            return Err(DecodeError::NotEnoughData);
        }
        let byte = self[0];
        self.advance(1);
        Ok(byte)
    }

    #[inline]
    fn read_into(&mut self, out: &mut [u8]) -> Result<(), DecodeError> {
        if self.len() < out.len() {
            return Err(DecodeError::NotEnoughData);
        }
        out.copy_from_slice(&self[..out.len()]);
        self.advance(out.len());
        Ok(())
    }

    #[inline]
    fn read_many(&mut self, len: usize) -> Result<Bytes, DecodeError> {
        if self.len() >= len {
            Ok(self.split_to(len))
        } else {
            Err(DecodeError::NotEnoughData)
        }
    }
}

/// Wraps a source and reads from it with the compact scheme `C`.
#[derive(Debug, Clone)]
pub struct Decoder<D, C> {
    inner: D,
    scheme: PhantomData<C>,
}

impl<D: Source, C: CompactScheme> Decoder<D, C> {
    /// Creates a new `Decoder` reading from `inner`.
    pub fn new(inner: D) -> Self {
        Decoder {
            inner,
            scheme: PhantomData,
        }
    }

    /// Unwraps the source.
    pub fn into_inner(self) -> D { self.inner }
}

impl<D: Source, C: CompactScheme> Source for Decoder<D, C> {
    type Scheme = C;

    fn remaining(&self) -> usize { self.inner.remaining() }

    fn has(&self, amount: usize) -> bool { self.inner.has(amount) }

    fn take_byte(&mut self) -> Result<u8, DecodeError> { self.inner.take_byte() }

    fn read_into(&mut self, out: &mut [u8]) -> Result<(), DecodeError> { self.inner.read_into(out) }

    fn read_many(&mut self, len: usize) -> Result<Bytes, DecodeError> { self.inner.read_many(len) }
}

/// Values that can be decoded.
pub trait Decode: Sized {
    /// Read a value of type `Self` from a [`Source`].
    ///
    /// # Arguments
    ///
    /// * `d` - The [`Source`] to be read from.
    fn decode_from<D: Source>(d: &mut D) -> Result<Self, DecodeError>;

    /// Decode over an existing value.
    ///
    /// Records deriving [`Decode`] only touch the fields that are part of their encoding.
    /// After a failure `self` must be treated as garbage.
    fn decode_into<D: Source>(&mut self, d: &mut D) -> Result<(), DecodeError> {
        *self = Self::decode_from(d)?;
        Ok(())
    }

    /// How `Option<Self>` is read. Only `bool` overrides this.
    #[doc(hidden)]
    fn decode_option<D: Source>(d: &mut D) -> Result<Option<Self>, DecodeError> {
        if bool::decode_from(d)? {
            Ok(Some(Self::decode_from(d)?))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_source() {
        let data = [1u8, 2, 3, 4];
        let mut src = &data[..];

        assert!(src.has(4));
        assert!(!src.has(5));
        assert_eq!(src.take_byte(), Ok(1));

        let mut out = [0u8; 2];
        src.read_into(&mut out).unwrap();
        assert_eq!(out, [2, 3]);

        let mut big = [0u8; 2];
        assert_eq!(src.read_into(&mut big), Err(DecodeError::NotEnoughData));
        // failed reads consume nothing
        assert_eq!(src.remaining(), 1);

        assert_eq!(&src.read_many(1).unwrap()[..], &[4]);
        assert_eq!(src.take_byte(), Err(DecodeError::NotEnoughData));
    }

    #[test]
    fn byte_source_views() {
        let mut src = ByteSource::from(vec![9u8, 8, 7]);

        assert_eq!(src.take_byte(), Ok(9));
        let span = src.read_many(2).unwrap();
        assert_eq!(&span[..], &[8, 7]);
        assert!(src.read_many(1).is_err());
        assert!(src.into_inner().is_empty());
    }

    #[test]
    // for completeness
    fn trivial() {
        let mut empty: &[u8] = &[];
        assert!(empty.read_many(3).is_err());
        assert!(ByteSource::default().take_byte().is_err());
    }
}
