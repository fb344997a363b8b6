//! Compressed Opcode Classification.
//!
//! Classifies a raw 16-bit halfword into an [`Opcode`] for the RV64 view of
//! the C extension. Compressed instructions are divided into three quadrants
//! by the lowest 2 bits of the encoding; within a quadrant the `funct3`
//! field (bits 15:13) selects the instruction, with a further sub-dispatch
//! for the register-ALU and jump/move groups.
//!
//! Classification stops at identity: no operand fields are extracted here,
//! no immediates are sign-extended, and no 32-bit word is built. Those
//! steps belong to the `expand` collaborator, driven by the metadata the
//! registry resolves for the classified opcode.

use crate::opcode::Opcode;

/// Quadrant 0 (bits 1:0 = 00): loads, stores, stack allocation.
const QUADRANT_0: u16 = 0b00;
/// Quadrant 1 (bits 1:0 = 01): immediates, ALU, jumps, branches.
const QUADRANT_1: u16 = 0b01;
/// Quadrant 2 (bits 1:0 = 10): shifts, stack-relative loads/stores, moves.
const QUADRANT_2: u16 = 0b10;

/// `funct3` selectors within quadrant 0.
mod q0 {
    /// C.ADDI4SPN.
    pub const ADDI4SPN: u16 = 0b000;
    /// C.FLD.
    pub const FLD: u16 = 0b001;
    /// C.LW.
    pub const LW: u16 = 0b010;
    /// C.LD (RV64; C.FLW on RV32).
    pub const LD: u16 = 0b011;
    /// C.FSD.
    pub const FSD: u16 = 0b101;
    /// C.SW.
    pub const SW: u16 = 0b110;
    /// C.SD (RV64; C.FSW on RV32).
    pub const SD: u16 = 0b111;
}

/// `funct3` selectors within quadrant 1.
mod q1 {
    /// C.ADDI (C.NOP when rd = x0).
    pub const ADDI: u16 = 0b000;
    /// C.ADDIW (RV64; C.JAL on RV32).
    pub const ADDIW: u16 = 0b001;
    /// C.LI.
    pub const LI: u16 = 0b010;
    /// C.LUI, or C.ADDI16SP when rd = x2.
    pub const LUI_ADDI16SP: u16 = 0b011;
    /// Register-ALU group (C.SRLI, C.SRAI, C.ANDI, C.SUB, C.XOR, C.OR,
    /// C.AND, C.SUBW, C.ADDW).
    pub const MISC_ALU: u16 = 0b100;
    /// C.J.
    pub const J: u16 = 0b101;
    /// C.BEQZ.
    pub const BEQZ: u16 = 0b110;
    /// C.BNEZ.
    pub const BNEZ: u16 = 0b111;
}

/// `funct3` selectors within quadrant 2.
mod q2 {
    /// C.SLLI.
    pub const SLLI: u16 = 0b000;
    /// C.FLDSP.
    pub const FLDSP: u16 = 0b001;
    /// C.LWSP.
    pub const LWSP: u16 = 0b010;
    /// C.LDSP (RV64; C.FLWSP on RV32).
    pub const LDSP: u16 = 0b011;
    /// Jump/move group (C.JR, C.MV, C.EBREAK, C.JALR, C.ADD).
    pub const JR_MV_ADD: u16 = 0b100;
    /// C.FSDSP.
    pub const FSDSP: u16 = 0b101;
    /// C.SWSP.
    pub const SWSP: u16 = 0b110;
    /// C.SDSP (RV64; C.FSWSP on RV32).
    pub const SDSP: u16 = 0b111;
}

/// Classifies a 16-bit halfword as a compressed opcode (RV64 view).
///
/// Returns [`Opcode::Illegal`] for the defined-illegal all-zero halfword,
/// for reserved encodings (C.ADDI4SPN with a zero immediate, C.ADDIW with
/// rd = x0, C.LUI/C.ADDI16SP with a zero immediate, C.LWSP/C.LDSP with
/// rd = x0, C.JR with rs1 = x0, and the reserved register-ALU rows), and
/// for halfwords whose low 2 bits are `0b11` — those are the first parcel
/// of a 32-bit instruction, not a compressed encoding. Never panics.
pub const fn compressed_opcode(half: u16) -> Opcode {
    let funct3 = (half >> 13) & 0x7;
    let rd = (half >> 7) & 0x1F;
    let rs2 = (half >> 2) & 0x1F;

    match half & 0x3 {
        QUADRANT_0 => match funct3 {
            // nzuimm = 0 is reserved; it also covers the defined-illegal
            // all-zero halfword.
            q0::ADDI4SPN if (half >> 5) & 0xFF == 0 => Opcode::Illegal,
            q0::ADDI4SPN => Opcode::CAddi4spn,
            q0::FLD => Opcode::CFld,
            q0::LW => Opcode::CLw,
            q0::LD => Opcode::CLd,
            q0::FSD => Opcode::CFsd,
            q0::SW => Opcode::CSw,
            q0::SD => Opcode::CSd,
            _ => Opcode::Illegal,
        },
        QUADRANT_1 => match funct3 {
            q1::ADDI => Opcode::CAddi,
            q1::ADDIW if rd == 0 => Opcode::Illegal,
            q1::ADDIW => Opcode::CAddiw,
            q1::LI => Opcode::CLi,
            // imm = 0 is reserved for both C.LUI and C.ADDI16SP.
            q1::LUI_ADDI16SP if (half >> 12) & 1 == 0 && rs2 == 0 => Opcode::Illegal,
            q1::LUI_ADDI16SP if rd == 2 => Opcode::CAddi16sp,
            q1::LUI_ADDI16SP => Opcode::CLui,
            q1::MISC_ALU => misc_alu(half),
            q1::J => Opcode::CJ,
            q1::BEQZ => Opcode::CBeqz,
            q1::BNEZ => Opcode::CBnez,
            _ => Opcode::Illegal,
        },
        QUADRANT_2 => match funct3 {
            q2::SLLI => Opcode::CSlli,
            q2::FLDSP => Opcode::CFldsp,
            q2::LWSP if rd == 0 => Opcode::Illegal,
            q2::LWSP => Opcode::CLwsp,
            q2::LDSP if rd == 0 => Opcode::Illegal,
            q2::LDSP => Opcode::CLdsp,
            q2::JR_MV_ADD => jr_mv_add(half, rd, rs2),
            q2::FSDSP => Opcode::CFsdsp,
            q2::SWSP => Opcode::CSwsp,
            q2::SDSP => Opcode::CSdsp,
            _ => Opcode::Illegal,
        },
        // Bits 1:0 = 11 open a 32-bit encoding.
        _ => Opcode::Illegal,
    }
}

/// Sub-dispatch for the quadrant 1 register-ALU group.
const fn misc_alu(half: u16) -> Opcode {
    match (half >> 10) & 0x3 {
        0b00 => Opcode::CSrli,
        0b01 => Opcode::CSrai,
        0b10 => Opcode::CAndi,
        _ => match ((half >> 12) & 1, (half >> 5) & 0x3) {
            (0, 0b00) => Opcode::CSub,
            (0, 0b01) => Opcode::CXor,
            (0, 0b10) => Opcode::COr,
            (0, _) => Opcode::CAnd,
            (_, 0b00) => Opcode::CSubw,
            (_, 0b01) => Opcode::CAddw,
            // funct2 = 10 and 11 with bit 12 set are reserved.
            _ => Opcode::Illegal,
        },
    }
}

/// Sub-dispatch for the quadrant 2 jump/move group.
const fn jr_mv_add(half: u16, rd: u16, rs2: u16) -> Opcode {
    if (half >> 12) & 1 == 0 {
        match (rd, rs2) {
            (0, 0) => Opcode::Illegal,
            (_, 0) => Opcode::CJr,
            _ => Opcode::CMv,
        }
    } else {
        match (rd, rs2) {
            (0, 0) => Opcode::CEbreak,
            (_, 0) => Opcode::CJalr,
            _ => Opcode::CAdd,
        }
    }
}
