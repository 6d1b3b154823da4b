//! Branch/Call/Jump (BCJ) conversion kernels.
//!
//! BCJ filters rewrite the relative branch operands found in executable
//! machine code into absolute addresses, and back. A function that is
//! called from many places then encodes to one repeated byte pattern
//! instead of many distinct displacements, which is what makes the
//! filtered stream compress better (typically 10-15% on program code).
//!
//! Supported architectures:
//! - x86/x86_64: CALL (E8) and JMP (E9) rel32 operands
//! - ARM (A32): BL
//! - ARM-Thumb (T32): BL/BLX halfword pairs
//! - ARM64 (AArch64): BL and ADRP
//! - PowerPC (big-endian words): I-form branch with LK=1
//! - SPARC: CALL
//! - IA-64: B-unit branch slots in 16-byte bundles
//!
//! Each kernel transforms a caller buffer in place against a base stream
//! position and reports how many bytes it consumed from the front.
//! Trailing bytes shorter than the architecture's window are left for the
//! caller to retry once more input is available; the streaming layer that
//! does this bookkeeping lives in the `bcj-stream` crate.
//!
//! The kernels are total: any byte sequence is valid input, all address
//! arithmetic wraps modulo 2^32, and the reverse direction restores the
//! original bytes exactly.

mod arch;

pub mod arm;
pub mod arm64;
pub mod armt;
pub mod ia64;
pub mod ppc;
pub mod sparc;
pub mod x86;

pub use arch::{Arch, Direction};
pub use x86::X86State;
