//! Expansion Round-Trip Tests.
//!
//! Expands known compressed halfwords and checks the exact 32-bit word a
//! direct canonical encoding would produce, covering every structural
//! class the metadata table names. Expected words were cross-checked
//! against standard RV64GC assembler output.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use rvcmeta_core::decode::compressed_opcode;
use rvcmeta_core::expand::expand;
use rvcmeta_core::{Opcode, resolve};

#[rstest]
// CI family.
#[case(0x050D, 0x00350513)] // c.addi x10, 3        => addi x10, x10, 3
#[case(0x2505, 0x0015051B)] // c.addiw x10, 1       => addiw x10, x10, 1
#[case(0x557D, 0xFFF00513)] // c.li x10, -1         => addi x10, x0, -1
#[case(0x6785, 0x000017B7)] // c.lui x15, 1         => lui x15, 1
#[case(0x6105, 0x02010113)] // c.addi16sp 32        => addi x2, x2, 32
#[case(0x050A, 0x00251513)] // c.slli x10, 2        => slli x10, x10, 2
// Stack-relative loads (CI) and stores (CSS).
#[case(0x4522, 0x00812503)] // c.lwsp x10, 8(sp)    => lw x10, 8(x2)
#[case(0x60C2, 0x01013083)] // c.ldsp x1, 16(sp)    => ld x1, 16(x2)
#[case(0xC22A, 0x00A12223)] // c.swsp x10, 4(sp)    => sw x10, 4(x2)
#[case(0xE406, 0x00113423)] // c.sdsp x1, 8(sp)     => sd x1, 8(x2)
#[case(0xA022, 0x00813027)] // c.fsdsp f8, 0(sp)    => fsd f8, 0(x2)
// Wide-immediate stack allocation (CIW).
#[case(0x0800, 0x01010413)] // c.addi4spn x8, 16    => addi x8, x2, 16
// Register-relative loads (CL) and stores (CS).
#[case(0x4044, 0x00442483)] // c.lw x9, 4(x8)       => lw x9, 4(x8)
#[case(0x2004, 0x00043487)] // c.fld f9, 0(x8)      => fld f9, 0(x8)
#[case(0xC404, 0x00942423)] // c.sw x9, 8(x8)       => sw x9, 8(x8)
#[case(0xE004, 0x00943023)] // c.sd x9, 0(x8)       => sd x9, 0(x8)
#[case(0xA404, 0x00943427)] // c.fsd f9, 8(x8)      => fsd f9, 8(x8)
// Register-register (CR, CS).
#[case(0x852E, 0x00058513)] // c.mv x10, x11        => addi x10, x11, 0
#[case(0x952E, 0x00B50533)] // c.add x10, x11       => add x10, x10, x11
#[case(0x8C65, 0x00947433)] // c.and x8, x9         => and x8, x8, x9
#[case(0x9C05, 0x4094043B)] // c.subw x8, x9        => subw x8, x8, x9
// Immediate ALU on prime registers (CB).
#[case(0x8405, 0x40145413)] // c.srai x8, 1         => srai x8, x8, 1
#[case(0x883D, 0x00F47413)] // c.andi x8, 15        => andi x8, x8, 15
// Branches (CB) and jumps (CJ, CR).
#[case(0xC801, 0x00040863)] // c.beqz x8, +16       => beq x8, x0, +16
#[case(0xFCFD, 0xFE049FE3)] // c.bnez x9, -2        => bne x9, x0, -2
#[case(0xA021, 0x0080006F)] // c.j +8               => jal x0, +8
#[case(0x8082, 0x00008067)] // c.jr x1 (ret)        => jalr x0, 0(x1)
#[case(0x9282, 0x000280E7)] // c.jalr x5            => jalr x1, 0(x5)
// Operand-less (CR with fixed word).
#[case(0x9002, 0x00100073)] // c.ebreak             => ebreak
fn expands_to_canonical_word(#[case] half: u16, #[case] word: u32) {
    assert_eq!(expand(half), Some(word), "halfword {half:#06x}");
}

#[rstest]
#[case(0x0000)] // defined-illegal
#[case(0x8000)] // reserved q0 row
#[case(0x0003)] // 32-bit prefix, not compressed
#[case(0xFFFF)] // 32-bit prefix
fn illegal_halfwords_do_not_expand(#[case] half: u16) {
    assert_eq!(expand(half), None);
}

#[test]
fn expansion_follows_registry_metadata() {
    // The canonical major opcode of every expansion must match the
    // encoding selectors of the resolved canonical opcode.
    for half in 0..=u16::MAX {
        let Some(word) = expand(half) else { continue };
        let meta = resolve(compressed_opcode(half)).unwrap();
        if let Some(enc) = meta.op.encoding() {
            assert_eq!(word & 0x7F, enc.opcode, "halfword {half:#06x}");
        } else {
            assert_eq!(meta.op, Opcode::Sbreak);
        }
    }
}

proptest! {
    #[test]
    fn expansion_is_total_and_well_formed(half in any::<u16>()) {
        if let Some(word) = expand(half) {
            // Every expansion is a 32-bit (non-compressed) encoding of an
            // opcode the registry knows.
            prop_assert_eq!(word & 0b11, 0b11);
            prop_assert!(resolve(compressed_opcode(half)).is_some());
        } else {
            // Nothing expands unless the registry has metadata for it.
            prop_assert!(resolve(compressed_opcode(half)).is_none());
        }
    }
}
