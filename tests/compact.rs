use num_bigint::BigUint;
use num_traits::One;
use proptest::prelude::*;
use scale_codec::prelude::*;
use scale_strategy::*;

fn classic_len(n: &BigUint) -> usize {
    let bits = n.bits() as usize;
    match bits {
        0..=6 => 1,
        7..=14 => 2,
        15..=30 => 4,
        _ => 1 + std::cmp::max(4, (bits + 7) / 8),
    }
}

fn jam_len(n: u64) -> usize {
    let bits = 64 - n.leading_zeros() as usize;
    if bits <= 7 {
        1
    } else {
        // every extra byte buys seven bits, capped at eight extra bytes
        std::cmp::min(1 + (bits - 1) / 7, 9)
    }
}

#[test]
fn classic_limits() {
    let max = (BigUint::one() << 536) - BigUint::one();
    let enc = encode_full(&Compact(max.clone())).unwrap();
    assert_eq!(enc.len(), 68);
    assert!(enc.iter().all(|b| *b == 0xff));
    assert_eq!(decode_full::<Compact<BigUint>>(&enc), Ok(Compact(max.clone())));

    let over = max + BigUint::one();
    assert_eq!(
        encode_full(&Compact(over)),
        Err(EncodeError::ValueTooBigForCompactRepresentation)
    );

    // a big-tier header promising more bytes than are present
    assert_eq!(
        decode_full::<Compact<BigUint>>(&[0xff, 1, 2, 3]),
        Err(DecodeError::NotEnoughData)
    );
}

#[test]
fn jam_limits() {
    let enc = encode_full_with::<Jam, _>(&Compact(u64::max_value())).unwrap();
    assert_eq!(enc, vec![0xff; 9]);
    assert_eq!(
        decode_full_with::<Jam, Compact<u64>>(&enc),
        Ok(Compact(u64::max_value()))
    );

    let big = BigUint::one() << 64;
    assert_eq!(
        encode_full_with::<Jam, _>(&Compact(big)),
        Err(EncodeError::ValueTooBigForCompactRepresentation)
    );
}

#[test]
fn narrowing() {
    let enc = encode_full(&Compact(256u32)).unwrap();
    assert_eq!(
        decode_full::<Compact<u8>>(&enc),
        Err(DecodeError::DecodedValueOverflowsTarget)
    );
    assert_eq!(decode_full::<Compact<u16>>(&enc), Ok(Compact(256)));
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 1_000, ..ProptestConfig::default() })]

    #[test]
    fn classic_biguint(n in arb_compact_biguint()) {
        let enc = encode_full(&Compact(n.clone())).unwrap();
        prop_assert_eq!(enc.len(), classic_len(&n));
        prop_assert_eq!(encoded_size(&Compact(n.clone())).unwrap(), enc.len());
        prop_assert_eq!(decode_full::<Compact<BigUint>>(&enc), Ok(Compact(n)));
    }

    #[test]
    fn classic_u64(n in arb_compact_u64()) {
        let enc = encode_full(&Compact(n)).unwrap();
        prop_assert_eq!(enc.clone(), encode_full(&Compact(BigUint::from(n))).unwrap());
        prop_assert_eq!(decode_full::<Compact<u64>>(&enc), Ok(Compact(n)));
    }

    #[test]
    fn classic_oversized(n in arb_oversized_biguint()) {
        prop_assert_eq!(
            encode_full(&Compact(n)),
            Err(EncodeError::ValueTooBigForCompactRepresentation)
        );
    }

    #[test]
    fn jam_u64(n in arb_compact_u64()) {
        let enc = encode_full_with::<Jam, _>(&Compact(n)).unwrap();
        prop_assert_eq!(enc.len(), jam_len(n));
        prop_assert_eq!(encoded_size_with::<Jam, _>(&Compact(n)).unwrap(), enc.len());
        prop_assert_eq!(decode_full_with::<Jam, Compact<u64>>(&enc), Ok(Compact(n)));
    }

    #[test]
    fn classic_only_canonical(bytes in prop::collection::vec(any::<u8>(), 0..80)) {
        let mut src = &bytes[..];
        if let Ok(Compact(n)) = decode::<Compact<BigUint>, _>(&mut src) {
            let used = bytes.len() - src.len();
            prop_assert_eq!(encode_full(&Compact(n)).unwrap(), bytes[..used].to_vec());
        }
    }

    #[test]
    fn jam_only_canonical(bytes in prop::collection::vec(any::<u8>(), 0..12)) {
        let mut src: Decoder<&[u8], Jam> = Decoder::new(&bytes[..]);
        if let Ok(Compact(n)) = decode::<Compact<u64>, _>(&mut src) {
            let used = bytes.len() - src.into_inner().len();
            prop_assert_eq!(encode_full_with::<Jam, _>(&Compact(n)).unwrap(), bytes[..used].to_vec());
        }
    }
}
