//! Fixed-size stat record and its byte-exact wire layout
//!
//! Each record serializes to exactly 17 bytes, little-endian, no padding:
//! - id (8 bytes, i64): merge key
//! - count (4 bytes, i32): saturating accumulator
//! - cost (4 bytes, f32): additive accumulator
//! - control byte: bit 0 = primary flag, bits 1..=3 = mode (0..=7),
//!   bits 4..=7 unspecified and ignored on decode
//!
//! The layout is explicit rather than a `repr(packed)` transmute so the
//! files stay portable across platforms.

/// Mask for the 3-bit `mode` field.
pub const MODE_MASK: u8 = 0x07;

const PRIMARY_BIT: u8 = 0x01;
const MODE_SHIFT: u32 = 1;

/// Pack the `primary` flag and 3-bit `mode` into a control byte.
///
/// `mode` values above 7 are truncated to their low 3 bits.
pub fn pack_flags(primary: bool, mode: u8) -> u8 {
    let mut byte = (mode & MODE_MASK) << MODE_SHIFT;
    if primary {
        byte |= PRIMARY_BIT;
    }
    byte
}

/// Decode a control byte into (`primary`, `mode`). High bits are ignored.
pub fn unpack_flags(byte: u8) -> (bool, u8) {
    let primary = byte & PRIMARY_BIT != 0;
    let mode = (byte >> MODE_SHIFT) & MODE_MASK;
    (primary, mode)
}

/// One fixed-size stat record (17 bytes on the wire)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatRecord {
    /// Merge key; unique after merging, not required unique in inputs
    pub id: i64,
    /// Saturating counter, clamped to [i32::MIN, i32::MAX] on merge
    pub count: i32,
    /// Additive cost; final output is sorted ascending by this field
    pub cost: f32,
    /// ANDed across duplicates during merge
    pub primary: bool,
    /// 3-bit mode in [0,7]; max across duplicates during merge
    pub mode: u8,
}

impl StatRecord {
    pub const SIZE: usize = 17;

    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut buf = [0u8; Self::SIZE];
        buf[0..8].copy_from_slice(&self.id.to_le_bytes());
        buf[8..12].copy_from_slice(&self.count.to_le_bytes());
        buf[12..16].copy_from_slice(&self.cost.to_le_bytes());
        buf[16] = pack_flags(self.primary, self.mode);
        buf
    }

    pub fn from_bytes(buf: &[u8; Self::SIZE]) -> Self {
        let (primary, mode) = unpack_flags(buf[16]);
        Self {
            id: i64::from_le_bytes([
                buf[0], buf[1], buf[2], buf[3], buf[4], buf[5], buf[6], buf[7],
            ]),
            count: i32::from_le_bytes([buf[8], buf[9], buf[10], buf[11]]),
            cost: f32::from_le_bytes([buf[12], buf[13], buf[14], buf[15]]),
            primary,
            mode,
        }
    }
}
