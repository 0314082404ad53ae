//! Packed byte format for encoded bitstreams.
//!
//! # Format
//!
//! ```text
//! +------------------+
//! | padding (1 byte) |  number of trailing pad bits in the last data
//! +------------------+  byte, 0-7
//! | data (N bytes)   |  the bitstream, MSB-first, right-padded with
//! | (variable)       |  zero bits to a byte boundary
//! +------------------+
//! ```
//!
//! No symbol table is stored; the matching tree must be supplied out of
//! band when decoding. The format is not self-describing beyond padding.
//!
//! # Padding boundary
//!
//! When the bitstream length is already a multiple of 8 the padding count
//! is 0. (The reference implementation wrote 8 in that case and stripped a
//! full byte of real data on load; pack and unpack here apply the
//! normalized rule symmetrically, with a regression test.)

use std::fs;
use std::path::Path;

use crate::bits::Bitstream;
use crate::error::{BufferError, Result};

/// Pack a bitstream into the on-disk byte format.
///
/// The output is `1 + ceil(len / 8)` bytes: the padding header followed by
/// the zero-padded data bytes. An empty bitstream packs to the lone header
/// byte `[0]`.
pub fn pack(bits: &Bitstream) -> Vec<u8> {
    let padding = (8 - bits.len() % 8) % 8;

    let mut buffer = Vec::with_capacity(1 + bits.as_bytes().len());
    buffer.push(padding as u8);
    // The Bitstream invariant already zeroes the pad bits
    buffer.extend_from_slice(bits.as_bytes());
    buffer
}

/// Unpack a byte buffer produced by [`pack`] back into a bitstream.
///
/// # Errors
/// - `BufferError::Empty` if the buffer lacks the header byte
/// - `BufferError::InvalidPadding` if the declared padding is not 0-7
/// - `BufferError::PaddingExceedsData` if stripping the declared padding
///   would remove more bits than the buffer carries
pub fn unpack(buffer: &[u8]) -> Result<Bitstream> {
    let (&padding, data) = buffer.split_first().ok_or(BufferError::Empty)?;

    if padding >= 8 {
        return Err(BufferError::InvalidPadding { padding }.into());
    }

    let available = data.len() * 8;
    let padding = padding as usize;
    if padding > available {
        return Err(BufferError::PaddingExceedsData { padding, available }.into());
    }

    Ok(Bitstream::from_bytes(data, available - padding))
}

/// Pack `bits` and write the buffer to `path` in one scoped operation.
///
/// The file handle is flushed and closed on all exit paths; I/O errors
/// propagate unchanged.
pub fn save(bits: &Bitstream, path: &Path) -> Result<()> {
    fs::write(path, pack(bits))?;
    Ok(())
}

/// Read a packed file written by [`save`] and unpack it.
pub fn load(path: &Path) -> Result<Bitstream> {
    let buffer = fs::read(path)?;
    unpack(&buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn bits(s: &str) -> Bitstream {
        s.chars().map(|c| c == '1').collect()
    }

    #[test]
    fn test_pack_layout() {
        let buffer = pack(&bits("10110"));
        assert_eq!(buffer, vec![3, 0b10110000]);
    }

    #[test]
    fn test_pack_round_trip() {
        for s in ["1", "10110", "1011001", "101100111", "0000000000000001"] {
            let original = bits(s);
            assert_eq!(unpack(&pack(&original)).unwrap(), original, "case {s}");
        }
    }

    #[test]
    fn test_byte_aligned_padding_is_zero() {
        // Regression: a length that is an exact multiple of 8 must declare
        // padding 0, not 8, and must survive the round trip intact.
        let original = bits("10110010");
        let buffer = pack(&original);

        assert_eq!(buffer[0], 0);
        assert_eq!(buffer.len(), 2);
        assert_eq!(unpack(&buffer).unwrap(), original);
    }

    #[test]
    fn test_empty_bitstream() {
        let buffer = pack(&Bitstream::new());
        assert_eq!(buffer, vec![0]);
        assert!(unpack(&buffer).unwrap().is_empty());
    }

    #[test]
    fn test_buffer_length() {
        // 1 header byte + ceil(len / 8) data bytes
        let buffer = pack(&bits("101100111"));
        assert_eq!(buffer.len(), 1 + 2);
    }

    #[test]
    fn test_unpack_empty_buffer() {
        let err = unpack(&[]).unwrap_err();
        assert!(matches!(err, Error::Buffer(BufferError::Empty)));
    }

    #[test]
    fn test_unpack_padding_out_of_range() {
        let err = unpack(&[8, 0xFF]).unwrap_err();
        assert!(matches!(
            err,
            Error::Buffer(BufferError::InvalidPadding { padding: 8 })
        ));
    }

    #[test]
    fn test_unpack_padding_exceeds_data() {
        // Declares 5 pad bits but carries no data bytes at all
        let err = unpack(&[5]).unwrap_err();
        assert!(matches!(
            err,
            Error::Buffer(BufferError::PaddingExceedsData {
                padding: 5,
                available: 0
            })
        ));
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("packed.bin");

        let original = bits("011011101000101011011");
        save(&original, &path).unwrap();
        assert_eq!(load(&path).unwrap(), original);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load(Path::new("/nonexistent/packed.bin")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
