// Copyright 2024 Karpeles Lab Inc.
// Based on the Snappy wire format, via the Linux kernel's csnappy
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! # snapfrag
//!
//! A from-scratch Rust port of the Linux kernel's `csnappy`: a
//! byte-oriented, lossless compressor and decompressor for the Snappy wire
//! format. The design target is high throughput with modest compression
//! ratios, not a general-purpose archiver (the encoder is a single-pass,
//! single-candidate hash-table match finder, not a ratio-optimising search).
//!
//! The crate exposes two layers:
//!
//! - [`compress`]/[`decompress`]: the whole-buffer streaming driver, for
//!   callers that just want bytes in, bytes out.
//! - [`compress_fragment`]/[`decompress_into`]: the lower-level fragment
//!   primitives, for callers that manage their own chunking, scratch
//!   tables, or destination buffers.
//!
//! ## Example
//!
//! ```rust
//! use snapfrag::{compress, decompress};
//!
//! let data = b"Hello, World! Hello, World! Hello, World!";
//! let compressed = compress(data);
//! let decompressed = decompress(&compressed).expect("decompression failed");
//! assert_eq!(data, &decompressed[..]);
//! ```

mod constants;
mod decode;
mod driver;
mod error;
mod fragment;
mod varint;

pub use constants::{
    DEFAULT_TABLE_BITS, HASH_MULTIPLIER, INPUT_MARGIN, MAX_FRAGMENT_SIZE, MAX_TABLE_BITS,
    MIN_TABLE_BITS,
};
pub use decode::{decompress, decompress_into, get_uncompressed_length};
pub use driver::compress;
pub use error::{Error, Result};
pub use fragment::{compress_fragment, max_compressed_length};
pub use varint::{decode_varint, encode_varint, varint_size};
