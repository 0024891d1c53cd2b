/// Low two bits of the first classic compact byte, 0x03
pub(crate) const MASK_MODE: u8 = 0b0000_0011;
/// Single byte mode
pub(crate) const MODE_SINGLE: u8 = 0b00;
/// Two byte mode
pub(crate) const MODE_TWO: u8 = 0b01;
/// Four byte mode
pub(crate) const MODE_FOUR: u8 = 0b10;
/// Length-prefixed mode
pub(crate) const MODE_BIG: u8 = 0b11;

/// Exclusive upper bound of single byte mode, 2^6
pub(crate) const SINGLE_LIMIT: u32 = 1 << 6;
/// Exclusive upper bound of two byte mode, 2^14
pub(crate) const TWO_LIMIT: u32 = 1 << 14;
/// Exclusive upper bound of four byte mode, 2^30
pub(crate) const FOUR_LIMIT: u32 = 1 << 30;

/// Fewest magnitude bytes in length-prefixed mode.
pub(crate) const BIG_MIN_LEN: usize = 4;
/// Most magnitude bytes in length-prefixed mode, `(0b11_1111 + 4)`
pub(crate) const BIG_MAX_LEN: usize = (0b0011_1111) + BIG_MIN_LEN;

/// Most extra bytes after a JAM prefix byte.
pub(crate) const JAM_MAX_EXTRA: u32 = 8;
/// Largest single byte JAM value, 0x7f
pub(crate) const JAM_SINGLE_MAX: u64 = 0x7f;
