//! Architecture and direction tags shared by all kernels.

/// Architectures with a BCJ conversion kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arch {
    /// x86 and x86_64.
    X86,
    /// ARM 32-bit (A32).
    Arm,
    /// ARM Thumb (T32).
    ArmThumb,
    /// ARM 64-bit (AArch64).
    Arm64,
    /// PowerPC with big-endian instruction words.
    Ppc,
    /// SPARC.
    Sparc,
    /// IA-64 (Itanium).
    Ia64,
}

impl Arch {
    /// Minimum number of contiguous bytes the kernel must see before it
    /// can transform the next instruction. Shorter tails are carried over
    /// to the next call by the streaming layer.
    pub const fn min_window(self) -> usize {
        match self {
            Arch::X86 => 5,
            Arch::Ia64 => 16,
            Arch::Arm | Arch::ArmThumb | Arch::Arm64 | Arch::Ppc | Arch::Sparc => 4,
        }
    }

    /// Picks the filter for a platform target string, e.g.
    /// `"x86_64-unknown-linux-gnu"` or `"aarch64-apple-darwin"`.
    pub fn from_target(target: &str) -> Option<Self> {
        if target.contains("x86_64") || target.contains("i686") || target.contains("i586") {
            Some(Arch::X86)
        } else if target.contains("aarch64") || target.contains("arm64") {
            Some(Arch::Arm64)
        } else if target.contains("thumb") {
            Some(Arch::ArmThumb)
        } else if target.contains("arm") {
            Some(Arch::Arm)
        } else if target.contains("powerpc") || target.contains("ppc") {
            Some(Arch::Ppc)
        } else if target.contains("sparc") {
            Some(Arch::Sparc)
        } else if target.contains("ia64") || target.contains("itanium") {
            Some(Arch::Ia64)
        } else {
            None
        }
    }

    /// Short lowercase name used in diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            Arch::X86 => "x86",
            Arch::Arm => "arm",
            Arch::ArmThumb => "armt",
            Arch::Arm64 => "arm64",
            Arch::Ppc => "ppc",
            Arch::Sparc => "sparc",
            Arch::Ia64 => "ia64",
        }
    }
}

impl std::fmt::Display for Arch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Transform direction shared by all kernels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Rewrite relative branch operands into absolute addresses.
    Encode,
    /// Restore absolute addresses back into relative operands.
    Decode,
}
