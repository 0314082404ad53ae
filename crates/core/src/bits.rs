//! Exact-length bit buffer for Huffman codes and encoded streams.
//!
//! A [`Bitstream`] stores bits MSB-first (most significant bit of each byte
//! first), which is the conventional order for Huffman output. Unlike a raw
//! byte buffer it tracks the exact bit length, so a 5-bit code and a 5-bit
//! stream are representable without ambiguity.
//!
//! # Invariants
//! - `len <= bytes.len() * 8 < len + 8` (no fully unused trailing byte)
//! - unused bits of the final byte are always zero
//!
//! The second invariant makes derived equality correct and lets the packer
//! emit `bytes` directly: the zero padding is already in place.
//!
//! # Example
//! ```
//! use huffpress_core::bits::Bitstream;
//!
//! let mut bits = Bitstream::new();
//! bits.push(true);
//! bits.push(false);
//! bits.push(true);
//! assert_eq!(bits.len(), 3);
//! assert_eq!(bits.to_string(), "101");
//! assert_eq!(bits.as_bytes(), &[0b1010_0000]);
//! ```

use std::fmt;

/// A growable sequence of bits, MSB-first within each backing byte.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bitstream {
    /// Backing bytes; the final byte may be partially used
    bytes: Vec<u8>,
    /// Exact number of valid bits
    len: usize,
}

impl Bitstream {
    /// Create an empty bitstream.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty bitstream with room for `bits` bits.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bits.div_ceil(8)),
            len: 0,
        }
    }

    /// Reconstruct a bitstream from packed bytes and an exact bit length.
    ///
    /// Only the first `len` bits of `bytes` are kept; any set bits beyond
    /// `len` in the final byte are masked off to restore the zero-padding
    /// invariant. Excess whole bytes are dropped.
    ///
    /// # Panics
    /// Panics if `len` exceeds `bytes.len() * 8`. Callers validate lengths
    /// before reconstruction (see `pack::unpack`).
    pub fn from_bytes(bytes: &[u8], len: usize) -> Self {
        assert!(len <= bytes.len() * 8, "bit length exceeds byte buffer");

        let mut bytes = bytes[..len.div_ceil(8)].to_vec();
        let used = len % 8;
        if used != 0 {
            // Zero the unused tail of the final byte
            if let Some(last) = bytes.last_mut() {
                *last &= 0xFF << (8 - used);
            }
        }
        Self { bytes, len }
    }

    /// Append a single bit.
    pub fn push(&mut self, bit: bool) {
        let offset = self.len % 8;
        if offset == 0 {
            self.bytes.push(0);
        }
        if bit {
            let last = self.bytes.len() - 1;
            self.bytes[last] |= 1 << (7 - offset);
        }
        self.len += 1;
    }

    /// Append every bit of `other`, in order.
    pub fn extend(&mut self, other: &Bitstream) {
        for bit in other.iter() {
            self.push(bit);
        }
    }

    /// Get the bit at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<bool> {
        if index < self.len {
            Some(self.bit(index))
        } else {
            None
        }
    }

    /// Iterate over all bits in order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |i| self.bit(i))
    }

    /// Number of valid bits.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if no bits have been pushed.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Backing bytes, final byte zero-padded on the right.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    fn bit(&self, index: usize) -> bool {
        (self.bytes[index / 8] >> (7 - index % 8)) & 1 == 1
    }
}

impl fmt::Display for Bitstream {
    /// Render as a string of `0`/`1` digits, e.g. `"10110"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromIterator<bool> for Bitstream {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut bits = Bitstream::new();
        for bit in iter {
            bits.push(bit);
        }
        bits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a bitstream from a literal like "1011".
    fn bits(s: &str) -> Bitstream {
        s.chars().map(|c| c == '1').collect()
    }

    #[test]
    fn test_push_and_get() {
        let mut b = Bitstream::new();
        b.push(true);
        b.push(false);
        b.push(true);
        b.push(true);

        assert_eq!(b.len(), 4);
        assert_eq!(b.get(0), Some(true));
        assert_eq!(b.get(1), Some(false));
        assert_eq!(b.get(3), Some(true));
        assert_eq!(b.get(4), None);
    }

    #[test]
    fn test_msb_first_layout() {
        let b = bits("10110010");
        assert_eq!(b.as_bytes(), &[0b10110010]);

        let b = bits("101");
        assert_eq!(b.as_bytes(), &[0b10100000]);
    }

    #[test]
    fn test_multi_byte() {
        let b = bits("1010101111110000");
        assert_eq!(b.as_bytes(), &[0b10101011, 0b11110000]);
        assert_eq!(b.len(), 16);
    }

    #[test]
    fn test_extend() {
        let mut b = bits("101");
        b.extend(&bits("11"));
        b.extend(&bits("000"));
        assert_eq!(b.to_string(), "10111000");
        assert_eq!(b.as_bytes(), &[0b10111000]);
    }

    #[test]
    fn test_display_round_trip() {
        let s = "0110111010001010110";
        assert_eq!(bits(s).to_string(), s);
    }

    #[test]
    fn test_from_bytes_masks_padding() {
        // 5 valid bits, but the source byte has junk in the padding area
        let b = Bitstream::from_bytes(&[0b10110111], 5);
        assert_eq!(b.len(), 5);
        assert_eq!(b.as_bytes(), &[0b10110000]);
        assert_eq!(b, bits("10110"));
    }

    #[test]
    fn test_from_bytes_drops_excess_bytes() {
        let b = Bitstream::from_bytes(&[0xFF, 0xFF, 0xFF], 9);
        assert_eq!(b.as_bytes(), &[0xFF, 0b10000000]);
    }

    #[test]
    #[should_panic(expected = "bit length exceeds")]
    fn test_from_bytes_length_overflow() {
        Bitstream::from_bytes(&[0xFF], 9);
    }

    #[test]
    fn test_empty() {
        let b = Bitstream::new();
        assert!(b.is_empty());
        assert_eq!(b.len(), 0);
        assert_eq!(b.as_bytes(), &[] as &[u8]);
        assert_eq!(b.to_string(), "");
    }

    #[test]
    fn test_iter_matches_get() {
        let b = bits("110100111");
        let collected: Vec<bool> = b.iter().collect();
        for (i, bit) in collected.iter().enumerate() {
            assert_eq!(b.get(i), Some(*bit));
        }
        assert_eq!(collected.len(), b.len());
    }
}
