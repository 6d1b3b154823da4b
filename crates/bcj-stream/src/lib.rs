//! Streaming BCJ (Branch/Call/Jump) encoders and decoders.
//!
//! BCJ filters are a preprocessing step for general-purpose compressors:
//! they rewrite the relative branch operands in executable code into
//! absolute addresses, which makes repeated calls to the same target
//! compress well, and restore the original bytes exactly on the way back.
//! No compression happens here and there is no framing: output length
//! always equals input length.
//!
//! The codecs are chunk-oriented. Feed input in pieces of any size; each
//! call returns the converted prefix and holds back a tail shorter than
//! the filter window until more input arrives. Any chunking produces
//! byte-identical output to a single-shot call. Encoders release the
//! final tail through `flush()`; decoders are built with the expected
//! total output length and release the tail on their own once that length
//! is reached.
//!
//! ```
//! use bcj_stream::{BCJDecoder, BCJEncoder};
//!
//! let code = [0x55, 0x48, 0x89, 0xE5, 0xE8, 0x10, 0x00, 0x00, 0x00, 0xC3];
//!
//! let mut encoder = BCJEncoder::new();
//! let mut filtered = encoder.encode(&code)?;
//! filtered.extend(encoder.flush());
//! assert_eq!(filtered.len(), code.len());
//!
//! let mut decoder = BCJDecoder::new(filtered.len() as u64);
//! let restored = decoder.decode(&filtered)?;
//! assert_eq!(restored, code);
//! # Ok::<(), bcj_stream::Error>(())
//! ```

mod codec;
mod error;
mod stream;

pub use codec::{
    ARM64Decoder, ARM64Encoder, ARMDecoder, ARMEncoder, ARMTDecoder, ARMTEncoder, BCJDecoder,
    BCJEncoder, IA64Decoder, IA64Encoder, PPCDecoder, PPCEncoder, SparcDecoder, SparcEncoder,
};
pub use error::{Error, Result};
pub use stream::FilterStream;

/// Re-export of the kernel crate for callers that drive kernels directly.
pub use bcj_core;
