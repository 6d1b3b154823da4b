//! IA-64 conversion kernel.
//!
//! IA-64 packs three 41-bit instruction slots plus a 5-bit template into
//! every 16-byte bundle. Templates that can hold a B-unit branch are
//! looked up in [`BRANCH_TABLE`]; for each such slot, a long-branch
//! instruction (major opcode 5, zero low hint bits) has its 21-bit
//! bundle-scaled displacement converted. The slot is read and written
//! through a six-byte little-endian window at its bit offset.

use crate::Direction;

/// Per-template mask of slots that can hold an IP-relative branch,
/// indexed by the 5-bit bundle template.
const BRANCH_TABLE: [u32; 32] = [
    0, 0, 0, 0, 0, 0, 0, 0, //
    0, 0, 0, 0, 0, 0, 0, 0, //
    4, 4, 6, 6, 0, 0, 7, 7, //
    4, 4, 0, 0, 4, 4, 0, 0,
];

/// Converts branch displacements in whole 16-byte bundles of `buf`
/// against stream position `ip`.
pub fn convert(buf: &mut [u8], ip: u64, dir: Direction) -> usize {
    if buf.len() < 16 {
        return 0;
    }
    let end = buf.len() - 16;
    let mut i = 0;
    while i <= end {
        let mask = BRANCH_TABLE[(buf[i] & 0x1F) as usize];
        let mut bit_pos = 5;
        for slot in 0..3 {
            if (mask >> slot) & 1 == 0 {
                bit_pos += 41;
                continue;
            }
            let byte_pos = bit_pos >> 3;
            let bit_res = bit_pos & 7;
            let mut instr = 0u64;
            for j in 0..6 {
                instr |= (buf[i + byte_pos + j] as u64) << (8 * j);
            }
            let mut inst_norm = instr >> bit_res;
            if (inst_norm >> 37) & 0xF == 0x5 && (inst_norm >> 9) & 0x7 == 0 {
                let mut src = ((inst_norm >> 13) & 0xF_FFFF) as u32;
                src |= (((inst_norm >> 36) & 1) as u32) << 20;
                let src = src << 4;
                let dest = match dir {
                    Direction::Encode => src.wrapping_add((ip as u32).wrapping_add(i as u32)),
                    Direction::Decode => src.wrapping_sub((ip as u32).wrapping_add(i as u32)),
                };
                let dest = dest >> 4;
                inst_norm &= !(0x8F_FFFFu64 << 13);
                inst_norm |= ((dest & 0xF_FFFF) as u64) << 13;
                inst_norm |= ((dest & 0x10_0000) as u64) << (36 - 20);
                instr &= (1 << bit_res) - 1;
                instr |= inst_norm << bit_res;
                for j in 0..6 {
                    buf[i + byte_pos + j] = (instr >> (8 * j)) as u8;
                }
            }
            bit_pos += 41;
        }
        i += 16;
    }
    i
}
