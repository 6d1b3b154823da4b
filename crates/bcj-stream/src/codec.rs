//! Encoder/decoder façade, one constructor pair per architecture.
//!
//! The type names follow the reference filter family: `BCJ` is the x86
//! filter, `ARM` the A32 filter, `ARMT` the Thumb filter. Encoders and
//! decoders are distinct types, so using one in the other direction is a
//! compile error rather than a runtime check.

use bcj_core::Arch;

use crate::{FilterStream, Result};

macro_rules! filter_codec {
    (
        $(#[$enc_doc:meta])*
        $enc:ident,
        $(#[$dec_doc:meta])*
        $dec:ident,
        $arch:expr
    ) => {
        $(#[$enc_doc])*
        #[derive(Debug)]
        pub struct $enc {
            stream: FilterStream,
        }

        impl $enc {
            /// Creates an encoder positioned at the start of the stream.
            pub fn new() -> Self {
                Self {
                    stream: FilterStream::encoder($arch),
                }
            }

            /// Converts `input` and returns the transformed prefix. A tail
            /// shorter than the filter window stays buffered until more
            /// input arrives or [`flush`](Self::flush) is called.
            pub fn encode(&mut self, input: &[u8]) -> Result<Vec<u8>> {
                self.stream.process(input)
            }

            /// Returns the buffered tail unchanged and clears it.
            pub fn flush(&mut self) -> Vec<u8> {
                self.stream.flush()
            }
        }

        impl Default for $enc {
            fn default() -> Self {
                Self::new()
            }
        }

        $(#[$dec_doc])*
        #[derive(Debug)]
        pub struct $dec {
            stream: FilterStream,
        }

        impl $dec {
            /// Creates a decoder that expects `total_len` output bytes in
            /// all. The length caps only the final sub-window tail:
            /// overstating it is safe (the tail then comes out of
            /// [`flush`](Self::flush)), understating it truncates the
            /// output.
            pub fn new(total_len: u64) -> Self {
                Self {
                    stream: FilterStream::decoder($arch, total_len),
                }
            }

            /// Restores `input` and returns the converted prefix. Once the
            /// expected total length has been produced, further calls
            /// return empty output.
            pub fn decode(&mut self, input: &[u8]) -> Result<Vec<u8>> {
                self.stream.process(input)
            }

            /// Returns the buffered tail unchanged and clears it.
            pub fn flush(&mut self) -> Vec<u8> {
                self.stream.flush()
            }
        }
    };
}

filter_codec!(
    /// Streaming encoder for x86 code (the classic "BCJ" filter).
    BCJEncoder,
    /// Streaming decoder for x86 code.
    BCJDecoder,
    Arch::X86
);

filter_codec!(
    /// Streaming encoder for ARM (A32) code.
    ARMEncoder,
    /// Streaming decoder for ARM (A32) code.
    ARMDecoder,
    Arch::Arm
);

filter_codec!(
    /// Streaming encoder for ARM-Thumb (T32) code.
    ARMTEncoder,
    /// Streaming decoder for ARM-Thumb (T32) code.
    ARMTDecoder,
    Arch::ArmThumb
);

filter_codec!(
    /// Streaming encoder for ARM64 (AArch64) code.
    ARM64Encoder,
    /// Streaming decoder for ARM64 (AArch64) code.
    ARM64Decoder,
    Arch::Arm64
);

filter_codec!(
    /// Streaming encoder for PowerPC code.
    PPCEncoder,
    /// Streaming decoder for PowerPC code.
    PPCDecoder,
    Arch::Ppc
);

filter_codec!(
    /// Streaming encoder for SPARC code.
    SparcEncoder,
    /// Streaming decoder for SPARC code.
    SparcDecoder,
    Arch::Sparc
);

filter_codec!(
    /// Streaming encoder for IA-64 code.
    IA64Encoder,
    /// Streaming decoder for IA-64 code.
    IA64Decoder,
    Arch::Ia64
);
