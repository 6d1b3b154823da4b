//! Streaming transducer around the conversion kernels.
//!
//! Kernels only transform whole instruction windows, so a chunked caller
//! may hand over a buffer whose tail is shorter than the window. The
//! transducer keeps that tail between calls, prepends it to the next
//! chunk, and tracks the virtual program counter so that any chunking of
//! the input produces byte-identical output to a single-shot call.

use bcj_core::{arm, arm64, armt, ia64, ppc, sparc, x86, Arch, Direction, X86State};

use crate::{Error, Result};

/// Chunk-oriented wrapper around one conversion kernel.
///
/// Owns the carry-over buffer (always shorter than the architecture's
/// window) and the virtual program counter, i.e. the number of bytes
/// emitted since construction, which the kernel uses as the base address
/// of the next window. A decoder additionally tracks how many output
/// bytes are still expected, so the final sub-window tail can be released
/// without a flush once the stream is complete.
#[derive(Debug)]
pub struct FilterStream {
    arch: Arch,
    dir: Direction,
    ip: u64,
    carry: Vec<u8>,
    remaining: Option<u64>,
    x86: X86State,
}

impl FilterStream {
    /// Creates an encoding stream for `arch`.
    pub fn encoder(arch: Arch) -> Self {
        Self::new(arch, Direction::Encode, None)
    }

    /// Creates a decoding stream for `arch` that expects `total_len`
    /// output bytes in all.
    pub fn decoder(arch: Arch, total_len: u64) -> Self {
        Self::new(arch, Direction::Decode, Some(total_len))
    }

    fn new(arch: Arch, dir: Direction, remaining: Option<u64>) -> Self {
        Self {
            arch,
            dir,
            ip: 0,
            carry: Vec::new(),
            remaining,
            x86: X86State::new(),
        }
    }

    /// The architecture this stream converts.
    pub fn arch(&self) -> Arch {
        self.arch
    }

    /// Runs the kernel over the carried tail plus `input` and returns the
    /// converted prefix. Up to `window - 1` trailing bytes stay buffered
    /// until more input arrives or [`flush`](Self::flush) is called.
    pub fn process(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        if self.remaining == Some(0) {
            return Ok(Vec::new());
        }
        let mut buf = Vec::with_capacity(self.carry.len() + input.len());
        buf.append(&mut self.carry);
        buf.extend_from_slice(input);

        let consumed = self.run_kernel(&mut buf);
        let window = self.arch.min_window();
        if consumed > buf.len() || (buf.len() >= window && buf.len() - consumed >= window) {
            return Err(Error::Internal("consumed count out of range"));
        }

        let mut emit = consumed;
        if let Some(remaining) = self.remaining {
            if buf.len() as u64 >= remaining {
                // The buffer covers the whole rest of the stream; release
                // the raw tail along with the converted prefix.
                emit = remaining as usize;
            }
            self.remaining = Some(remaining - emit as u64);
        }

        self.carry = buf.split_off(emit);
        if self.remaining == Some(0) {
            self.carry.clear();
        }
        self.ip += buf.len() as u64;
        Ok(buf)
    }

    /// Releases the buffered tail verbatim and clears it. No conversion is
    /// applied: the carry is by definition shorter than one window.
    pub fn flush(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.carry)
    }

    fn run_kernel(&mut self, buf: &mut [u8]) -> usize {
        match self.arch {
            Arch::X86 => x86::convert(buf, self.ip, self.dir, &mut self.x86),
            Arch::Arm => arm::convert(buf, self.ip, self.dir),
            Arch::ArmThumb => armt::convert(buf, self.ip, self.dir),
            Arch::Arm64 => arm64::convert(buf, self.ip, self.dir),
            Arch::Ppc => ppc::convert(buf, self.ip, self.dir),
            Arch::Sparc => sparc::convert(buf, self.ip, self.dir),
            Arch::Ia64 => ia64::convert(buf, self.ip, self.dir),
        }
    }
}
