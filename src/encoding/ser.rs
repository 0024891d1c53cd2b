use crate::{
    compact::{Classic, CompactScheme},
    errors::EncodeError,
};
use bytes::BytesMut;
use std::marker::PhantomData;

/// A write-only byte stream.
///
/// The compact scheme used for every length prefix and [`Compact`](crate::Compact) value
/// written to the sink is fixed by [`Sink::Scheme`].
pub trait Sink {
    /// Compact integer scheme of this stream.
    type Scheme: CompactScheme;
    /// Add a byte to the output.
    fn put_u8(&mut self, u: u8);
    /// Add a slice to the output.
    fn put_slice(&mut self, slice: &[u8]);
    /// Number of bytes written so far.
    fn size(&self) -> usize;
}

impl Sink for Vec<u8> {
    type Scheme = Classic;

    fn put_u8(&mut self, u: u8) { self.push(u) }

    fn put_slice(&mut self, slice: &[u8]) { self.extend_from_slice(slice) }

    fn size(&self) -> usize { self.len() }
}

impl Sink for BytesMut {
    type Scheme = Classic;

    fn put_u8(&mut self, u: u8) { self.extend_from_slice(&[u]) }

    fn put_slice(&mut self, slice: &[u8]) { self.extend_from_slice(slice) }

    fn size(&self) -> usize { self.len() }
}

impl<'a, S: Sink> Sink for &'a mut S {
    type Scheme = S::Scheme;

    fn put_u8(&mut self, u: u8) { (**self).put_u8(u) }

    fn put_slice(&mut self, slice: &[u8]) { (**self).put_slice(slice) }

    fn size(&self) -> usize { (**self).size() }
}

/// Wraps a sink and writes to it with the compact scheme `C`.
///
/// # Example
///
/// ```
/// use scale_codec::prelude::*;
///
/// let mut enc: Encoder<Vec<u8>, Jam> = Encoder::new(Vec::new());
/// Compact(0x80u32).encode_to(&mut enc).unwrap();
///
/// assert_eq!(enc.into_inner(), vec![0x80, 0x80]);
/// ```
#[derive(Debug, Clone)]
pub struct Encoder<S, C> {
    inner: S,
    scheme: PhantomData<C>,
}

impl<S: Sink, C: CompactScheme> Encoder<S, C> {
    /// Creates a new `Encoder` writing into `inner`.
    pub fn new(inner: S) -> Self {
        Encoder {
            inner,
            scheme: PhantomData,
        }
    }

    /// The wrapped sink.
    pub fn get_ref(&self) -> &S { &self.inner }

    /// Unwraps the sink.
    pub fn into_inner(self) -> S { self.inner }
}

impl<S: Sink, C: CompactScheme> Sink for Encoder<S, C> {
    type Scheme = C;

    fn put_u8(&mut self, u: u8) { self.inner.put_u8(u) }

    fn put_slice(&mut self, slice: &[u8]) { self.inner.put_slice(slice) }

    fn size(&self) -> usize { self.inner.size() }
}

/// A sink that discards its input and only counts it.
#[derive(Debug, Clone, Copy)]
pub struct Counter<C = Classic> {
    count: usize,
    scheme: PhantomData<C>,
}

impl<C: CompactScheme> Counter<C> {
    /// Creates a counter at zero.
    pub fn new() -> Self {
        Counter {
            count: 0,
            scheme: PhantomData,
        }
    }
}

impl<C: CompactScheme> Default for Counter<C> {
    fn default() -> Self { Self::new() }
}

impl<C: CompactScheme> Sink for Counter<C> {
    type Scheme = C;

    fn put_u8(&mut self, _: u8) { self.count += 1 }

    fn put_slice(&mut self, slice: &[u8]) { self.count += slice.len() }

    fn size(&self) -> usize { self.count }
}

/// Values that can be encoded.
pub trait Encode {
    /// Write `self` into a [`Sink`].
    ///
    /// This writes directly and may leave partial output behind on failure; use
    /// [`encode`](crate::encode) for the all-or-nothing variant.
    ///
    /// # Arguments
    ///
    /// * `s` - The [`Sink`] to be written to.
    fn encode_to<S: Sink>(&self, s: &mut S) -> Result<(), EncodeError>;

    /// How `Option<Self>` is written. Only `bool` overrides this.
    #[doc(hidden)]
    fn encode_option<S: Sink>(opt: Option<&Self>, s: &mut S) -> Result<(), EncodeError>
    where
        Self: Sized,
    {
        match opt {
            None => {
                s.put_u8(0);
                Ok(())
            }
            Some(v) => {
                s.put_u8(1);
                v.encode_to(s)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compact::Jam;

    #[test]
    fn sinks_count() {
        let mut v: Vec<u8> = Vec::new();
        v.put_u8(1);
        v.put_slice(&[2, 3]);
        assert_eq!(v.size(), 3);

        let mut b = BytesMut::new();
        b.put_slice(&[1; 40]);
        b.put_u8(2);
        assert_eq!(b.size(), 41);
        assert_eq!(b[40], 2);

        let mut c: Counter<Jam> = Counter::new();
        c.put_slice(&[0; 7]);
        c.put_u8(0);
        assert_eq!(c.size(), 8);
    }

    #[test]
    fn encoder_forwards() {
        let mut enc: Encoder<Vec<u8>, Jam> = Encoder::new(Vec::new());
        enc.put_slice(&[1, 2]);
        assert_eq!(enc.size(), 2);
        assert_eq!(enc.get_ref(), &vec![1, 2]);
    }
}
