use failure::Fail;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Fail)]
/// An error encountered when encoding fails.
///
/// A failed top-level encode never leaves partial output in the destination sink.
pub enum EncodeError {
    /// A compact integer was negative.
    #[fail(display = "SCALE encode: integer can not be negative")]
    NegativeInteger,
    /// A weak or otherwise dangling pointer was dereferenced.
    #[fail(display = "SCALE encode: attempt to dereference a nullptr")]
    DerefNullPointer,
    /// The value does not fit the compact scheme in use.
    #[fail(display = "SCALE encode: value is too big for compact representation")]
    ValueTooBigForCompactRepresentation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Fail)]
/// An error encountered when decoding fails.
///
/// On failure the target value is left in an unspecified state and should be discarded.
pub enum DecodeError {
    /// The source ran out of bytes.
    #[fail(display = "SCALE decode: not enough data to decode")]
    NotEnoughData,
    /// A byte held a value outside the allowed set, e.g. a bool that is neither 0 nor 1.
    #[fail(display = "SCALE decode: unexpected value occurred")]
    UnexpectedValue,
    /// A collection length exceeded the capacity of the target.
    #[fail(display = "SCALE decode: collection has too many items or memory is out")]
    TooManyItems,
    /// A variant tag pointed past the last alternative.
    #[fail(display = "SCALE decode: wrong type index, cannot decode variant")]
    WrongTypeIndex,
    /// The decoded integer is not a valid value of the enum.
    #[fail(display = "SCALE decode: decoded enum value does not belong to the enum")]
    InvalidEnumValue,
    /// Padding bits in the last byte of a bit vector were set.
    #[fail(display = "SCALE decode: more bits were set than expected in bit vector")]
    UnusedBitsAreSet,
    /// The compact integer was not in its shortest form.
    #[fail(display = "SCALE decode: redundant bytes in compact encoding")]
    RedundantCompactEncoding,
    /// The compact integer is too large for the requested integer type.
    #[fail(display = "SCALE decode: decoded value overflows target type")]
    DecodedValueOverflowsTarget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Fail)]
/// Either side of the codec failing, for operations that decode and re-encode.
pub enum Error {
    /// Encoding failed.
    #[fail(display = "{}", _0)]
    Encode(#[fail(cause)] EncodeError),
    /// Decoding failed.
    #[fail(display = "{}", _0)]
    Decode(#[fail(cause)] DecodeError),
}

impl From<EncodeError> for Error {
    fn from(e: EncodeError) -> Self { Error::Encode(e) }
}

impl From<DecodeError> for Error {
    fn from(e: DecodeError) -> Self { Error::Decode(e) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            DecodeError::NotEnoughData.to_string(),
            "SCALE decode: not enough data to decode"
        );
        assert_eq!(
            EncodeError::NegativeInteger.to_string(),
            "SCALE encode: integer can not be negative"
        );
    }

    #[test]
    fn umbrella_keeps_kind() {
        let e: Error = DecodeError::WrongTypeIndex.into();
        assert_eq!(e, Error::Decode(DecodeError::WrongTypeIndex));
        assert_eq!(e.to_string(), DecodeError::WrongTypeIndex.to_string());
        assert!(e.cause().is_some());
    }
}
