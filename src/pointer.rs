use crate::{
    encoding::{Decode, Encode, Sink, Source},
    errors::{DecodeError, EncodeError},
};
use std::{
    borrow::Cow,
    rc::{self, Rc},
    sync::{self, Arc},
};

impl<'a, T: Encode + ?Sized> Encode for &'a T {
    #[inline]
    fn encode_to<S: Sink>(&self, s: &mut S) -> Result<(), EncodeError> { (**self).encode_to(s) }
}

impl<'a, T: Encode + ToOwned + ?Sized> Encode for Cow<'a, T> {
    #[inline]
    fn encode_to<S: Sink>(&self, s: &mut S) -> Result<(), EncodeError> { (**self).encode_to(s) }
}

macro_rules! owning_pointer {
    ($($ptr:ident),*) => {
        $(
            impl<T: Encode + ?Sized> Encode for $ptr<T> {
                #[inline]
                fn encode_to<S: Sink>(&self, s: &mut S) -> Result<(), EncodeError> {
                    (**self).encode_to(s)
                }
            }

            impl<T: Decode> Decode for $ptr<T> {
                #[inline]
                fn decode_from<D: Source>(d: &mut D) -> Result<Self, DecodeError> {
                    T::decode_from(d).map($ptr::new)
                }
            }
        )*
    };
}

owning_pointer!(Box, Rc, Arc);

/// A weak pointer whose value was dropped can't be encoded.
impl<T: Encode> Encode for rc::Weak<T> {
    fn encode_to<S: Sink>(&self, s: &mut S) -> Result<(), EncodeError> {
        match self.upgrade() {
            Some(v) => v.encode_to(s),
            None => Err(EncodeError::DerefNullPointer),
        }
    }
}

impl<T: Encode> Encode for sync::Weak<T> {
    fn encode_to<S: Sink>(&self, s: &mut S) -> Result<(), EncodeError> {
        match self.upgrade() {
            Some(v) => v.encode_to(s),
            None => Err(EncodeError::DerefNullPointer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{decode_full, encode, encode_full};

    #[test]
    fn pointees() {
        assert_eq!(encode_full(&Box::new(5u16)).unwrap(), vec![5, 0]);
        assert_eq!(encode_full(&Rc::new(true)).unwrap(), vec![1]);
        assert_eq!(encode_full(&Arc::new(Some(1u8))).unwrap(), vec![1, 1]);
        assert_eq!(decode_full::<Box<u16>>(&[5, 0]), Ok(Box::new(5)));
        assert_eq!(decode_full::<Arc<u8>>(&[9]), Ok(Arc::new(9)));

        let cow: Cow<str> = Cow::Borrowed("a");
        assert_eq!(encode_full(&cow).unwrap(), vec![0x04, b'a']);
        let boxed: Box<[u8]> = vec![1u8, 2].into_boxed_slice();
        assert_eq!(encode_full(&boxed).unwrap(), vec![0x08, 1, 2]);
    }

    #[test]
    fn dangling_weak() {
        let strong = Rc::new(3u8);
        let weak = Rc::downgrade(&strong);
        assert_eq!(encode_full(&weak).unwrap(), vec![3]);

        drop(strong);
        let mut out = vec![0xffu8];
        assert_eq!(encode(&weak, &mut out), Err(EncodeError::DerefNullPointer));
        assert_eq!(out, vec![0xff]);

        let gone: sync::Weak<u8> = sync::Weak::new();
        assert_eq!(encode_full(&gone), Err(EncodeError::DerefNullPointer));
    }
}
