// Copyright 2024 Karpeles Lab Inc.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use std::fmt;

/// Result type for fragment compression/decompression operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure classification for the fragment decompressor.
///
/// Each variant corresponds to one of the six non-zero status codes the
/// reference implementation returns; [`Error::code`] recovers the numeric
/// value for callers that want the C-style integer status instead of the
/// Rust error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The length header is truncated or its varint encoding is over-long.
    HeaderBad,
    /// The declared uncompressed length exceeds the caller-provided
    /// destination capacity.
    OutputInsufficient,
    /// A tag would write past the declared destination length.
    OutputOverrun,
    /// The destination filled exactly but source bytes remain unconsumed.
    InputNotConsumed,
    /// The source was exhausted cleanly but fewer bytes were written than
    /// the header declared.
    UnexpectedOutputLen,
    /// A tag is structurally invalid: truncated length/offset fields, a
    /// COPY offset of zero, or a COPY offset larger than the number of
    /// bytes already written.
    DataMalformed,
}

impl Error {
    /// The numeric status code from the reference implementation
    /// (`SNAPPY_E_*` in `csnappy.h`).
    pub fn code(self) -> i32 {
        match self {
            Error::HeaderBad => -1,
            Error::OutputInsufficient => -2,
            Error::OutputOverrun => -3,
            Error::InputNotConsumed => -4,
            Error::UnexpectedOutputLen => -5,
            Error::DataMalformed => -6,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::HeaderBad => write!(f, "snappy: header malformed or truncated"),
            Error::OutputInsufficient => write!(f, "snappy: destination buffer too small"),
            Error::OutputOverrun => write!(f, "snappy: tag would overrun destination"),
            Error::InputNotConsumed => write!(f, "snappy: destination filled but input remains"),
            Error::UnexpectedOutputLen => {
                write!(f, "snappy: fewer bytes decoded than the header declared")
            }
            Error::DataMalformed => write!(f, "snappy: malformed tag stream"),
        }
    }
}

impl std::error::Error for Error {}
