//! Halfword Classification Tests.
//!
//! Verifies the quadrant/funct3 dispatch for the RV64 view of the C
//! extension, including the reserved and defined-illegal encodings.

use proptest::prelude::*;
use rstest::rstest;
use rvcmeta_core::decode::compressed_opcode;
use rvcmeta_core::{Opcode, resolve};

#[rstest]
// Quadrant 0.
#[case(0x0800, Opcode::CAddi4spn)] // c.addi4spn x8, 16
#[case(0x2004, Opcode::CFld)] // c.fld f9, 0(x8)
#[case(0x4044, Opcode::CLw)] // c.lw x9, 4(x8)
#[case(0x6000, Opcode::CLd)] // c.ld x8, 0(x8)
#[case(0xA404, Opcode::CFsd)] // c.fsd f9, 8(x8)
#[case(0xC404, Opcode::CSw)] // c.sw x9, 8(x8)
#[case(0xE004, Opcode::CSd)] // c.sd x9, 0(x8)
// Quadrant 1.
#[case(0x050D, Opcode::CAddi)] // c.addi x10, 3
#[case(0x2505, Opcode::CAddiw)] // c.addiw x10, 1
#[case(0x557D, Opcode::CLi)] // c.li x10, -1
#[case(0x6105, Opcode::CAddi16sp)] // c.addi16sp 32
#[case(0x6785, Opcode::CLui)] // c.lui x15, 1
#[case(0x8405, Opcode::CSrai)] // c.srai x8, 1
#[case(0x883D, Opcode::CAndi)] // c.andi x8, 15
#[case(0x8C65, Opcode::CAnd)] // c.and x8, x9
#[case(0x9C05, Opcode::CSubw)] // c.subw x8, x9
#[case(0xA021, Opcode::CJ)] // c.j +8
#[case(0xC801, Opcode::CBeqz)] // c.beqz x8, 16
#[case(0xFCFD, Opcode::CBnez)] // c.bnez x9, -2
// Quadrant 2.
#[case(0x050A, Opcode::CSlli)] // c.slli x10, 2
#[case(0x4522, Opcode::CLwsp)] // c.lwsp x10, 8(sp)
#[case(0x60C2, Opcode::CLdsp)] // c.ldsp x1, 16(sp)
#[case(0x8082, Opcode::CJr)] // c.jr x1 (ret)
#[case(0x852E, Opcode::CMv)] // c.mv x10, x11
#[case(0x9002, Opcode::CEbreak)] // c.ebreak
#[case(0x9282, Opcode::CJalr)] // c.jalr x5
#[case(0x952E, Opcode::CAdd)] // c.add x10, x11
#[case(0xA022, Opcode::CFsdsp)] // c.fsdsp f8, 0(sp)
#[case(0xC22A, Opcode::CSwsp)] // c.swsp x10, 4(sp)
#[case(0xE406, Opcode::CSdsp)] // c.sdsp x1, 8(sp)
fn classifies_known_encodings(#[case] half: u16, #[case] expected: Opcode) {
    assert_eq!(compressed_opcode(half), expected);
}

#[rstest]
#[case(0x0000)] // defined-illegal all-zero halfword
#[case(0x0010)] // c.addi4spn with nzuimm = 0
#[case(0x8000)] // q0 funct3 = 100 is reserved
#[case(0x2001)] // c.addiw with rd = x0
#[case(0x6001)] // c.lui with imm = 0
#[case(0x6101)] // c.addi16sp with imm = 0
#[case(0x4002)] // c.lwsp with rd = x0
#[case(0x6002)] // c.ldsp with rd = x0
#[case(0x8002)] // c.jr with rs1 = x0
#[case(0x9C45)] // misc-alu funct2 = 10 with bit 12 set
#[case(0xFFFF)] // bits 1:0 = 11 open a 32-bit encoding
#[case(0x0003)] // likewise, minimal 32-bit prefix
fn reserved_and_wide_encodings_are_illegal(#[case] half: u16) {
    assert_eq!(compressed_opcode(half), Opcode::Illegal);
}

#[test]
fn classified_opcodes_always_have_metadata() {
    // On RV64 every non-Illegal classification must hit a table row.
    for half in 0..=u16::MAX {
        let op = compressed_opcode(half);
        if op != Opcode::Illegal {
            assert!(
                resolve(op).is_some(),
                "{op:?} from {half:#06x} has no metadata"
            );
            assert!(op.is_compressed());
        }
    }
}

proptest! {
    #[test]
    fn classification_is_total_and_deterministic(half in any::<u16>()) {
        let first = compressed_opcode(half);
        prop_assert_eq!(compressed_opcode(half), first);
        if half & 0b11 == 0b11 {
            prop_assert_eq!(first, Opcode::Illegal);
        }
    }
}
