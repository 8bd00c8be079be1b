// Copyright 2024 Karpeles Lab Inc.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

/// Tag for literal chunks
pub const TAG_LITERAL: u8 = 0x00;

/// Tag for copy with 1-byte offset (11 bits), length 4..=11
pub const TAG_COPY1: u8 = 0x01;

/// Tag for copy with 2-byte offset (16 bits), length 1..=64
pub const TAG_COPY2: u8 = 0x02;

/// Tag for copy with 4-byte offset (32 bits). Never emitted by this
/// compressor; the decompressor accepts it for interoperability with other
/// Snappy encoders.
pub const TAG_COPY4: u8 = 0x03;

/// Largest fragment the compressor processes in a single call.
pub const MAX_FRAGMENT_SIZE: usize = 1 << 15;

/// Trailing slack the main compression loop requires past the scan cursor,
/// enabling unaligned multi-byte reads without per-byte bounds checks in the
/// hot path. Fragments shorter than this are emitted as a single LITERAL
/// without ever touching the hash table.
pub const INPUT_MARGIN: usize = 15;

/// Smallest scratch-table size, as a power of two (2^9 = 512 cells).
pub const MIN_TABLE_BITS: u32 = 9;

/// Largest scratch-table size, as a power of two (2^15 = 32768 cells).
pub const MAX_TABLE_BITS: u32 = 15;

/// Default scratch-table size: 32 Ki u16 cells, matching `MAX_FRAGMENT_SIZE`
/// so that half-addressed indices stay within `[0, 16384)`.
pub const DEFAULT_TABLE_BITS: u32 = MAX_TABLE_BITS;

/// Multiplicative hash constant. Any odd constant yields a valid stream;
/// this one is kept to match the documented ratio/throughput trade-off.
pub const HASH_MULTIPLIER: u32 = 0x1e35a7bd;
