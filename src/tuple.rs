//! Products with a length both sides already know: tuples and arrays are plain
//! concatenations of their items.

use crate::{
    encoding::{Decode, Encode, Sink, Source},
    errors::{DecodeError, EncodeError},
};
use std::convert::TryFrom;

macro_rules! tuple_codec {
    ($($typ:ident $idx:tt),*) => {
        impl<$($typ: Encode),*> Encode for ($($typ,)*) {
            #[inline]
            fn encode_to<Ser: Sink>(&self, s: &mut Ser) -> Result<(), EncodeError> {
                $(self.$idx.encode_to(s)?;)*
                Ok(())
            }
        }

        impl<$($typ: Decode),*> Decode for ($($typ,)*) {
            #[inline]
            fn decode_from<Des: Source>(d: &mut Des) -> Result<Self, DecodeError> {
                Ok(($($typ::decode_from(d)?,)*))
            }

            fn decode_into<Des: Source>(&mut self, d: &mut Des) -> Result<(), DecodeError> {
                $(self.$idx.decode_into(d)?;)*
                Ok(())
            }
        }
    };
}

tuple_codec!(A 0);
tuple_codec!(A 0, B 1);
tuple_codec!(A 0, B 1, C 2);
tuple_codec!(A 0, B 1, C 2, D 3);
tuple_codec!(A 0, B 1, C 2, D 3, E 4);
tuple_codec!(A 0, B 1, C 2, D 3, E 4, F 5);
tuple_codec!(A 0, B 1, C 2, D 3, E 4, F 5, G 6);
tuple_codec!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);
tuple_codec!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8);
tuple_codec!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9);
tuple_codec!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10);
tuple_codec!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10, L 11);

impl<T: Encode, const N: usize> Encode for [T; N] {
    fn encode_to<S: Sink>(&self, s: &mut S) -> Result<(), EncodeError> {
        for item in self.iter() {
            item.encode_to(s)?;
        }
        Ok(())
    }
}

impl<T: Decode, const N: usize> Decode for [T; N] {
    fn decode_from<D: Source>(d: &mut D) -> Result<Self, DecodeError> {
        let mut items = Vec::with_capacity(N);
        for _ in 0..N {
            items.push(T::decode_from(d)?);
        }
        match <[T; N]>::try_from(items) {
            Ok(arr) => Ok(arr),
            Err(_) => unreachable!("exactly {} items were decoded", N),
        }
    }

    fn decode_into<D: Source>(&mut self, d: &mut D) -> Result<(), DecodeError> {
        for item in self.iter_mut() {
            item.decode_into(d)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{decode_full, encode_full, Compact, DecodeError, Decode};

    #[test]
    fn no_framing() {
        let enc = encode_full(&(1u8, 2u16, true)).unwrap();
        assert_eq!(enc, vec![1, 2, 0, 1]);
        assert_eq!(decode_full::<(u8, u16, bool)>(&enc), Ok((1, 2, true)));

        assert_eq!(encode_full(&[1u16, 2, 3]).unwrap(), vec![1, 0, 2, 0, 3, 0]);
        assert_eq!(decode_full::<[u16; 3]>(&[1, 0, 2, 0, 3, 0]), Ok([1, 2, 3]));
        assert_eq!(decode_full::<[u16; 3]>(&[1, 0, 2, 0]), Err(DecodeError::NotEnoughData));
    }

    #[test]
    fn nested() {
        let v = (Compact(64u32), [(1u8, 2u8); 2], ((),));
        let enc = encode_full(&v).unwrap();
        assert_eq!(enc, vec![0x01, 0x01, 1, 2, 1, 2]);
        assert_eq!(decode_full(&enc), Ok(v));
    }

    #[test]
    fn in_place() {
        let mut t = (0u8, [0u8; 2]);
        t.decode_into(&mut &[5u8, 6, 7][..]).unwrap();
        assert_eq!(t, (5, [6, 7]));
    }
}
