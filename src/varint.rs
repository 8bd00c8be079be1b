// Copyright 2024 Karpeles Lab Inc.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Little-endian base-128 varint encoding for the leading uncompressed length.
//!
//! Capped at 5 bytes, enough for any 32-bit length: this is the Snappy wire
//! format's length prefix, not a general-purpose varint.

use crate::error::{Error, Result};

/// Maximum number of bytes a varint may occupy on the wire.
const MAX_VARINT_BYTES: usize = 5;

/// Decode a varint from the beginning of `src`.
///
/// Returns `(value, bytes_read)`. Fails with [`Error::HeaderBad`] if the
/// continuation bit is still set after 5 bytes, if those 5 bytes would
/// overflow a 32-bit value, or if `src` ends before a terminating byte.
pub fn decode_varint(src: &[u8]) -> Result<(u32, usize)> {
    let mut value: u32 = 0;

    for (i, &byte) in src.iter().take(MAX_VARINT_BYTES).enumerate() {
        if byte < 0x80 {
            // The 5th byte only has 4 bits of payload room in a u32.
            if i == MAX_VARINT_BYTES - 1 && byte > 0x0f {
                return Err(Error::HeaderBad);
            }
            value |= (byte as u32) << (7 * i);
            return Ok((value, i + 1));
        }
        value |= ((byte & 0x7f) as u32) << (7 * i);
    }

    Err(Error::HeaderBad)
}

/// Encode `value` as a varint into `dst`, returning the number of bytes
/// written. `dst` must have at least [`varint_size`]`(value)` bytes free.
pub fn encode_varint(dst: &mut [u8], mut value: u32) -> usize {
    let mut i = 0;

    while value >= 0x80 {
        dst[i] = (value as u8) | 0x80;
        value >>= 7;
        i += 1;
    }

    dst[i] = value as u8;
    i + 1
}

/// Number of bytes needed to encode `value` as a varint.
pub fn varint_size(mut value: u32) -> usize {
    let mut n = 1;
    while value >= 0x80 {
        value >>= 7;
        n += 1;
    }
    n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let values = [0u32, 1, 127, 128, 255, 256, 65535, 65536, 0xffffffff];

        for &val in &values {
            let mut buf = [0u8; MAX_VARINT_BYTES];
            let n = encode_varint(&mut buf, val);
            assert_eq!(n, varint_size(val));
            let (decoded, bytes_read) = decode_varint(&buf).unwrap();
            assert_eq!(val, decoded);
            assert_eq!(n, bytes_read);
        }
    }

    #[test]
    fn rejects_overlong_continuation() {
        // 5 bytes, all with the continuation bit set.
        let buf = [0x80, 0x80, 0x80, 0x80, 0x80];
        assert_eq!(decode_varint(&buf), Err(Error::HeaderBad));
    }

    #[test]
    fn rejects_fifth_byte_overflowing_u32() {
        // Low 4 bytes all-ones, 5th byte has a bit above position 3 set.
        let buf = [0xff, 0xff, 0xff, 0xff, 0x10];
        assert_eq!(decode_varint(&buf), Err(Error::HeaderBad));
    }

    #[test]
    fn rejects_truncated_input() {
        let buf = [0x80, 0x80];
        assert_eq!(decode_varint(&buf), Err(Error::HeaderBad));
        assert_eq!(decode_varint(&[]), Err(Error::HeaderBad));
    }

    #[test]
    fn accepts_max_fifth_byte() {
        // 5th byte == 0x0f is the largest legal value (contributes bits 28..31).
        let mut buf = [0xff, 0xff, 0xff, 0xff, 0x0f];
        let (value, n) = decode_varint(&mut buf).unwrap();
        assert_eq!(value, u32::MAX);
        assert_eq!(n, 5);
    }
}
