use crate::{
    encoding::{Decode, Encode, Sink, Source},
    errors::{DecodeError, EncodeError},
};
use std::marker::PhantomData;

// Implementations for fixed-width integers
macro_rules! fixed_int {
    ($($typ:ty),*) => {
        $(
            impl Encode for $typ {
                #[inline]
                fn encode_to<S: Sink>(&self, s: &mut S) -> Result<(), EncodeError> {
                    s.put_slice(&self.to_le_bytes());
                    Ok(())
                }
            }

            impl Decode for $typ {
                #[inline]
                fn decode_from<D: Source>(d: &mut D) -> Result<Self, DecodeError> {
                    let mut buf = [0u8; std::mem::size_of::<$typ>()];
                    d.read_into(&mut buf)?;
                    Ok(<$typ>::from_le_bytes(buf))
                }
            }
        )*
    };
}

fixed_int!(u16, u32, u64, u128, i8, i16, i32, i64, i128);

impl Encode for u8 {
    #[inline]
    fn encode_to<S: Sink>(&self, s: &mut S) -> Result<(), EncodeError> {
        s.put_u8(*self);
        Ok(())
    }
}

impl Decode for u8 {
    #[inline]
    fn decode_from<D: Source>(d: &mut D) -> Result<Self, DecodeError> { d.take_byte() }
}

/// `Option<bool>` packed into one byte.
const OPT_NONE: u8 = 0;
const OPT_TRUE: u8 = 1;
const OPT_FALSE: u8 = 2;

impl Encode for bool {
    #[inline]
    fn encode_to<S: Sink>(&self, s: &mut S) -> Result<(), EncodeError> {
        s.put_u8(*self as u8);
        Ok(())
    }

    fn encode_option<S: Sink>(opt: Option<&Self>, s: &mut S) -> Result<(), EncodeError> {
        s.put_u8(match opt {
            None => OPT_NONE,
            Some(true) => OPT_TRUE,
            Some(false) => OPT_FALSE,
        });
        Ok(())
    }
}

impl Decode for bool {
    #[inline]
    fn decode_from<D: Source>(d: &mut D) -> Result<Self, DecodeError> {
        match d.take_byte()? {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(DecodeError::UnexpectedValue),
        }
    }

    fn decode_option<D: Source>(d: &mut D) -> Result<Option<Self>, DecodeError> {
        match d.take_byte()? {
            OPT_NONE => Ok(None),
            OPT_TRUE => Ok(Some(true)),
            OPT_FALSE => Ok(Some(false)),
            _ => Err(DecodeError::UnexpectedValue),
        }
    }
}

impl Encode for () {
    fn encode_to<S: Sink>(&self, _: &mut S) -> Result<(), EncodeError> { Ok(()) }
}

impl Decode for () {
    fn decode_from<D: Source>(_: &mut D) -> Result<Self, DecodeError> { Ok(()) }
}

impl<T: ?Sized> Encode for PhantomData<T> {
    fn encode_to<S: Sink>(&self, _: &mut S) -> Result<(), EncodeError> { Ok(()) }
}

impl<T: ?Sized> Decode for PhantomData<T> {
    fn decode_from<D: Source>(_: &mut D) -> Result<Self, DecodeError> { Ok(PhantomData) }
}

#[cfg(test)]
mod tests {
    use crate::{decode_full, encode_full, DecodeError};

    #[test]
    fn little_endian() {
        assert_eq!(encode_full(&0x0102_0304u32).unwrap(), vec![4, 3, 2, 1]);
        assert_eq!(encode_full(&-1i16).unwrap(), vec![0xff, 0xff]);
        assert_eq!(encode_full(&1u128).unwrap()[..2], [1, 0]);
        assert_eq!(encode_full(&1u128).unwrap().len(), 16);
        assert_eq!(decode_full::<i64>(&(-2i64).to_le_bytes()), Ok(-2));
        assert_eq!(decode_full::<u8>(&[0xab]), Ok(0xab));
    }

    #[test]
    fn short_input() {
        assert_eq!(decode_full::<u32>(&[1, 2, 3]), Err(DecodeError::NotEnoughData));
        assert_eq!(decode_full::<u8>(&[]), Err(DecodeError::NotEnoughData));
    }

    #[test]
    fn bools() {
        assert_eq!(encode_full(&true).unwrap(), vec![0x01]);
        assert_eq!(encode_full(&false).unwrap(), vec![0x00]);
        assert_eq!(decode_full::<bool>(&[1]), Ok(true));
        assert_eq!(decode_full::<bool>(&[2]), Err(DecodeError::UnexpectedValue));
    }

    #[test]
    fn units() {
        assert!(encode_full(&()).unwrap().is_empty());
        assert_eq!(decode_full::<()>(&[]), Ok(()));
    }
}
