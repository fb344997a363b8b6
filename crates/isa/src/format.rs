//! Instruction Format Tags.
//!
//! A format tag names a structural class: which bit ranges of an encoding
//! hold which operand fields. Two enumerations are defined:
//! 1. **[`CompFormat`]:** The structural classes of the 16-bit compressed
//!    encodings, including the stack-relative and width-specific variants.
//! 2. **[`Format`]:** The structural classes of the canonical 32-bit
//!    encodings (R, I, S, SB, U, UJ, plus `None` for operand-less forms).
//!
//! Tags carry identity only. Field extraction per `CompFormat` and field
//! encoding per `Format` are owned by the `expand` collaborator; the
//! compression registry never touches bits.

use serde::Serialize;

/// Structural classes of the 16-bit compressed encodings.
///
/// Several classes share register field positions and differ only in how
/// the immediate is scattered (the scaled load/store offsets in particular),
/// so the scatter pattern is part of the class identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum CompFormat {
    /// Register-register: `funct4 | rd/rs1 | rs2 | op` (C.MV, C.ADD, C.JR,
    /// C.JALR, C.EBREAK).
    Cr,
    /// Immediate: `funct3 | imm[5] | rd/rs1 | imm[4:0] | op` (C.ADDI,
    /// C.ADDIW, C.SLLI).
    Ci,
    /// Load-immediate variant of CI with rs1 fixed to x0 (C.LI).
    CiLi,
    /// Upper-immediate variant of CI, immediate scaled by 4096 (C.LUI).
    CiLui,
    /// Stack-adjust variant of CI, rd/rs1 fixed to x2, immediate scaled by
    /// 16 (C.ADDI16SP).
    Ci16sp,
    /// Stack-relative word load: offset scaled by 4, base x2 (C.LWSP,
    /// C.FLWSP).
    CiLwsp,
    /// Stack-relative doubleword load: offset scaled by 8, base x2 (C.LDSP,
    /// C.FLDSP).
    CiLdsp,
    /// Wide-immediate stack allocation: zero-extended immediate scaled by 4,
    /// base x2, 3-bit rd' (C.ADDI4SPN).
    Ciw4spn,
    /// Word load: `funct3 | uimm | rs1' | uimm | rd' | op`, offset scaled by
    /// 4 (C.LW, C.FLW).
    ClLw,
    /// Doubleword load: offset scaled by 8 (C.LD, C.FLD).
    ClLd,
    /// Branch/immediate-ALU: `funct3 | offset | rs1' | offset | op` (C.BEQZ,
    /// C.BNEZ, C.SRLI, C.SRAI, C.ANDI).
    Cb,
    /// Register-register ALU on 3-bit register fields (C.AND, C.OR, C.XOR,
    /// C.SUB, C.ADDW, C.SUBW).
    Cs,
    /// Word store: mirror of [`Self::ClLw`] with rs2' in place of rd' (C.SW,
    /// C.FSW).
    CsSw,
    /// Doubleword store: mirror of [`Self::ClLd`] (C.SD, C.FSD).
    CsSd,
    /// Stack-relative word store: offset scaled by 4, base x2 (C.SWSP,
    /// C.FSWSP).
    CssSwsp,
    /// Stack-relative doubleword store: offset scaled by 8, base x2 (C.SDSP,
    /// C.FSDSP).
    CssSdsp,
    /// Jump: `funct3 | offset[11|4|9:8|10|6|7|3:1|5] | op` (C.J, C.JAL).
    Cj,
}

/// Structural classes of the canonical 32-bit encodings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Format {
    /// Register-register: `funct7 | rs2 | rs1 | funct3 | rd | opcode`.
    R,
    /// Immediate: `imm[11:0] | rs1 | funct3 | rd | opcode`.
    I,
    /// Store: `imm[11:5] | rs2 | rs1 | funct3 | imm[4:0] | opcode`.
    S,
    /// Branch: `imm[12|10:5] | rs2 | rs1 | funct3 | imm[4:1|11] | opcode`.
    Sb,
    /// Upper-immediate: `imm[31:12] | rd | opcode`.
    U,
    /// Jump: `imm[20|10:1|11|19:12] | rd | opcode`.
    Uj,
    /// Operand-less forms with a single fixed word (EBREAK, ECALL).
    None,
}
