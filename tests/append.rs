use proptest::prelude::*;
use scale_codec::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig { cases: 200, ..ProptestConfig::default() })]

    #[test]
    fn one_at_a_time(items in prop::collection::vec(any::<i32>(), 0..300)) {
        let mut buf = Vec::new();
        for item in &items {
            append_or_new_vec(&mut buf, &encode_full(item).unwrap()).unwrap();
        }

        if items.is_empty() {
            prop_assert!(buf.is_empty());
        } else {
            prop_assert_eq!(&buf, &encode_full(&items).unwrap());

            let opaque: Vec<OpaqueBytes> = items.iter().map(|i| OpaqueBytes::encode(i).unwrap()).collect();
            prop_assert_eq!(&buf, &encode_full(&opaque).unwrap());
            prop_assert_eq!(decode_full::<Vec<i32>>(&buf), Ok(items));
        }
    }

    #[test]
    fn in_batches(
        head in prop::collection::vec(any::<u16>(), 0..100),
        tail in prop::collection::vec(any::<u16>(), 0..100),
    ) {
        let mut buf = encode_full(&head).unwrap();
        let raw: Vec<u8> = tail.iter().flat_map(|x| x.to_le_bytes().to_vec()).collect();
        append_items(&mut buf, &raw, tail.len() as u64).unwrap();

        let mut all = head;
        all.extend(tail);
        prop_assert_eq!(buf, encode_full(&all).unwrap());
    }

    #[test]
    fn jam_one_at_a_time(items in prop::collection::vec(any::<u8>(), 1..300)) {
        let mut buf = Vec::new();
        for item in &items {
            append_or_new_vec_with::<Jam>(&mut buf, &[*item]).unwrap();
        }
        prop_assert_eq!(decode_full_with::<Jam, Vec<u8>>(&buf), Ok(items));
    }
}

#[test]
fn opaque_items() {
    let mut buf = encode_full(&vec!["a".to_string()]).unwrap();
    let item = OpaqueBytes::encode("bc").unwrap();
    append_or_new_vec(&mut buf, &item.0).unwrap();
    assert_eq!(
        decode_full::<Vec<String>>(&buf),
        Ok(vec!["a".to_string(), "bc".to_string()])
    );
}

#[test]
fn crossing_into_the_four_byte_tier() {
    let items = vec![0u8; (1 << 14) - 1];
    let mut buf = encode_full(&items).unwrap();
    assert_eq!(buf.len(), 2 + items.len());

    append_or_new_vec(&mut buf, &[1]).unwrap();
    assert_eq!(buf.len(), 4 + items.len() + 1);

    let dec = decode_full::<Vec<u8>>(&buf).unwrap();
    assert_eq!(dec.len(), 1 << 14);
    assert_eq!(dec.last(), Some(&1));
}
