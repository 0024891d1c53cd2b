use bytes::Bytes;
use num_bigint::BigUint;
use num_traits::Num;
use proptest::prelude::*;
use scale_codec::{BitVec, U1024, U256, U512};

/// arbitrary unsigned integer that fits the classic compact range, for use with proptest
pub fn arb_compact_biguint() -> impl Strategy<Value = BigUint> {
    prop_oneof![
        any::<u64>().prop_map(BigUint::from),
        "1[0-1]{0,535}".prop_map(|n| -> BigUint { BigUint::from_str_radix(&n, 2).unwrap() }),
    ]
}

/// arbitrary unsigned integer too large for any compact encoding
pub fn arb_oversized_biguint() -> impl Strategy<Value = BigUint> {
    "1[0-1]{536,600}".prop_map(|n| -> BigUint { BigUint::from_str_radix(&n, 2).unwrap() })
}

/// arbitrary u64, biased towards the edges of the compact tiers
pub fn arb_compact_u64() -> impl Strategy<Value = u64> {
    prop_oneof![
        any::<u64>(),
        (0u32..64).prop_map(|b| 1u64 << b),
        (1u32..64).prop_map(|b| (1u64 << b) - 1),
    ]
}

/// arbitrary Bytes for use with proptest
pub fn arb_bs() -> impl Strategy<Value = Bytes> {
    ".*".prop_map(|s| -> Bytes { Bytes::from(s) })
}

/// arbitrary bit vector of up to `max_len` bits
pub fn arb_bitvec(max_len: usize) -> impl Strategy<Value = BitVec> {
    prop::collection::vec(any::<bool>(), 0..=max_len).prop_map(BitVec::from)
}

macro_rules! arb_fixed {
    ($name:ident, $t:ty, $bytes:expr) => {
        /// arbitrary fixed-size integer for use with proptest
        pub fn $name() -> impl Strategy<Value = $t> {
            prop::collection::vec(any::<u8>(), $bytes).prop_map(|digs| -> $t {
                <$t>::new(BigUint::from_bytes_le(&digs)).unwrap()
            })
        }
    };
}

arb_fixed!(arb_u256, U256, 32);
arb_fixed!(arb_u512, U512, 64);
arb_fixed!(arb_u1024, U1024, 128);
