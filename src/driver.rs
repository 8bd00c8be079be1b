// Copyright 2024 Karpeles Lab Inc.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! The streaming driver: writes the varint length prefix and calls the
//! fragment compressor repeatedly over [`MAX_FRAGMENT_SIZE`]-byte slices of
//! the input, picking the smallest sufficient scratch-table size for a
//! shorter final fragment so its zeroing cost stays proportional to its
//! size.

use crate::constants::{DEFAULT_TABLE_BITS, MAX_FRAGMENT_SIZE, MIN_TABLE_BITS};
use crate::fragment::{compress_fragment, max_compressed_length};
use crate::varint::encode_varint;

/// Minimal `W` in `[MIN_TABLE_BITS, max_bits]` such that `2^(W-1) >= n`.
fn table_bits_for(n: usize, max_bits: u32) -> u32 {
    let mut w = MIN_TABLE_BITS;
    while w < max_bits && (1usize << (w - 1)) < n {
        w += 1;
    }
    w
}

/// Compress the whole of `input`, returning a freshly allocated byte vector
/// containing the varint length prefix followed by the fragmented tag
/// stream. Never fails: this mirrors `compress()`'s C signature but returns
/// the output directly instead of threading an out-length pointer.
pub fn compress(input: &[u8]) -> Vec<u8> {
    let mut dst = vec![0u8; max_compressed_length(input.len())];
    let mut len_buf = [0u8; 5];
    let header_len = encode_varint(&mut len_buf, input.len() as u32);
    dst[..header_len].copy_from_slice(&len_buf[..header_len]);

    let mut d = header_len;
    let mut table = vec![0u16; 1 << DEFAULT_TABLE_BITS];
    let mut pos = 0usize;

    while pos < input.len() {
        let n = (input.len() - pos).min(MAX_FRAGMENT_SIZE);
        let table_bits = if n < MAX_FRAGMENT_SIZE {
            table_bits_for(n, DEFAULT_TABLE_BITS)
        } else {
            DEFAULT_TABLE_BITS
        };

        d += compress_fragment(
            &input[pos..pos + n],
            &mut dst[d..],
            &mut table[..1 << table_bits],
            table_bits,
        );
        pos += n;
    }

    dst.truncate(d);
    dst
}
