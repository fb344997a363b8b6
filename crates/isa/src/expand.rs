//! Compressed Instruction Expansion.
//!
//! Expands a 16-bit compressed instruction into its canonical 32-bit
//! equivalent. The pipeline is the contract the registry documents:
//! 1. **Classify** the halfword into an [`Opcode`] (`decode` module).
//! 2. **Resolve** its [`CompMetadata`] — the opcode/format identity.
//! 3. **Extract** operand fields per the compressed structural class.
//! 4. **Re-encode** those fields per the canonical structural class, using
//!    the canonical opcode's [`Encoding`](crate::opcode::Encoding)
//!    selectors.
//!
//! All bit manipulation, including immediate sign extension, happens here;
//! the registry itself never sees a bit pattern.

use crate::compression::{self, CompMetadata};
use crate::decode;
use crate::format::{CompFormat, Format};
use crate::opcode::{Opcode, system};

/// Operand fields extracted from a compressed encoding, in canonical terms.
#[derive(Clone, Copy, Debug, Default)]
struct Operands {
    /// Destination register index.
    rd: u32,
    /// First source register index.
    rs1: u32,
    /// Second source register index.
    rs2: u32,
    /// Immediate, sign-extended where the format calls for it.
    imm: i32,
}

/// Sign-extends the low `bits` bits of `value`.
const fn sign_extend(value: u32, bits: u32) -> i32 {
    ((value << (32 - bits)) as i32) >> (32 - bits)
}

/// Maps a 3-bit register field to its full x8-x15 / f8-f15 index.
const fn prime(field: u32) -> u32 {
    8 + (field & 0x7)
}

/// Expands a compressed halfword into the equivalent 32-bit word.
///
/// Returns `None` when the halfword is not a compressed encoding (bits 1:0
/// are `0b11`), is reserved or defined-illegal, or classifies to an opcode
/// with no registered metadata. A returned word always has `0b11` in its
/// low 2 bits.
pub fn expand(half: u16) -> Option<u32> {
    let meta = *compression::resolve(decode::compressed_opcode(half))?;
    let ops = extract(half, meta);
    encode(ops, meta)
}

/// Extracts operand fields according to the compressed structural class.
///
/// The CB class is shared between branches and the immediate-ALU group;
/// the canonical format tag on the metadata record disambiguates which
/// immediate scatter applies.
fn extract(half: u16, meta: CompMetadata) -> Operands {
    let w = u32::from(half);
    let rd_full = (w >> 7) & 0x1F;
    let rs2_full = (w >> 2) & 0x1F;
    let rd_prime = prime(w >> 2);
    let rs1_prime = prime(w >> 7);
    let imm6 = ((w >> 12) & 1) << 5 | (w >> 2) & 0x1F;

    let mut ops = match meta.comp_format {
        CompFormat::Cr => Operands {
            rd: rd_full,
            rs1: rd_full,
            rs2: rs2_full,
            imm: 0,
        },
        CompFormat::Ci => Operands {
            rd: rd_full,
            rs1: rd_full,
            imm: sign_extend(imm6, 6),
            ..Operands::default()
        },
        CompFormat::CiLi => Operands {
            rd: rd_full,
            imm: sign_extend(imm6, 6),
            ..Operands::default()
        },
        CompFormat::CiLui => Operands {
            rd: rd_full,
            imm: sign_extend(imm6, 6),
            ..Operands::default()
        },
        CompFormat::Ci16sp => Operands {
            rd: 2,
            rs1: 2,
            imm: sign_extend(
                ((w >> 12) & 1) << 9
                    | ((w >> 3) & 0x3) << 7
                    | ((w >> 5) & 1) << 6
                    | ((w >> 2) & 1) << 5
                    | ((w >> 6) & 1) << 4,
                10,
            ),
            ..Operands::default()
        },
        CompFormat::CiLwsp => Operands {
            rd: rd_full,
            rs1: 2,
            imm: (((w >> 12) & 1) << 5 | ((w >> 4) & 0x7) << 2 | ((w >> 2) & 0x3) << 6) as i32,
            ..Operands::default()
        },
        CompFormat::CiLdsp => Operands {
            rd: rd_full,
            rs1: 2,
            imm: (((w >> 12) & 1) << 5 | ((w >> 5) & 0x3) << 3 | ((w >> 2) & 0x7) << 6) as i32,
            ..Operands::default()
        },
        CompFormat::Ciw4spn => Operands {
            rd: rd_prime,
            rs1: 2,
            imm: (((w >> 11) & 0x3) << 4
                | ((w >> 7) & 0xF) << 6
                | ((w >> 6) & 1) << 2
                | ((w >> 5) & 1) << 3) as i32,
            ..Operands::default()
        },
        CompFormat::ClLw => Operands {
            rd: rd_prime,
            rs1: rs1_prime,
            imm: load_store_word_offset(w) as i32,
            ..Operands::default()
        },
        CompFormat::ClLd => Operands {
            rd: rd_prime,
            rs1: rs1_prime,
            imm: load_store_double_offset(w) as i32,
            ..Operands::default()
        },
        CompFormat::Cb if meta.format == Format::Sb => Operands {
            rs1: rs1_prime,
            rs2: 0,
            imm: sign_extend(
                ((w >> 12) & 1) << 8
                    | ((w >> 10) & 0x3) << 3
                    | ((w >> 5) & 0x3) << 6
                    | ((w >> 3) & 0x3) << 1
                    | ((w >> 2) & 1) << 5,
                9,
            ),
            ..Operands::default()
        },
        CompFormat::Cb => Operands {
            rd: rs1_prime,
            rs1: rs1_prime,
            imm: sign_extend(imm6, 6),
            ..Operands::default()
        },
        CompFormat::Cs => Operands {
            rd: rs1_prime,
            rs1: rs1_prime,
            rs2: rd_prime,
            imm: 0,
        },
        CompFormat::CsSw => Operands {
            rs1: rs1_prime,
            rs2: rd_prime,
            imm: load_store_word_offset(w) as i32,
            ..Operands::default()
        },
        CompFormat::CsSd => Operands {
            rs1: rs1_prime,
            rs2: rd_prime,
            imm: load_store_double_offset(w) as i32,
            ..Operands::default()
        },
        CompFormat::CssSwsp => Operands {
            rs1: 2,
            rs2: rs2_full,
            imm: (((w >> 9) & 0xF) << 2 | ((w >> 7) & 0x3) << 6) as i32,
            ..Operands::default()
        },
        CompFormat::CssSdsp => Operands {
            rs1: 2,
            rs2: rs2_full,
            imm: (((w >> 10) & 0x7) << 3 | ((w >> 7) & 0x7) << 6) as i32,
            ..Operands::default()
        },
        CompFormat::Cj => Operands {
            imm: sign_extend(
                ((w >> 12) & 1) << 11
                    | ((w >> 11) & 1) << 4
                    | ((w >> 9) & 0x3) << 8
                    | ((w >> 8) & 1) << 10
                    | ((w >> 7) & 1) << 6
                    | ((w >> 6) & 1) << 7
                    | ((w >> 3) & 0x7) << 1
                    | ((w >> 2) & 1) << 5,
                12,
            ),
            ..Operands::default()
        },
    };

    fixups(&mut ops, meta.comp_op);
    ops
}

/// Scattered offset of the word-sized CL/CS loads and stores.
const fn load_store_word_offset(w: u32) -> u32 {
    ((w >> 10) & 0x7) << 3 | ((w >> 6) & 1) << 2 | ((w >> 5) & 1) << 6
}

/// Scattered offset of the doubleword-sized CL/CS loads and stores.
const fn load_store_double_offset(w: u32) -> u32 {
    ((w >> 10) & 0x7) << 3 | ((w >> 5) & 0x3) << 6
}

/// Architectural fixed operands the structural class alone cannot express.
const fn fixups(ops: &mut Operands, comp_op: Opcode) {
    match comp_op {
        // c.mv rd, rs2 expands to addi rd, rs2, 0.
        Opcode::CMv => {
            ops.rs1 = ops.rs2;
            ops.rs2 = 0;
        }
        // c.jr/c.jalr take the jump target from the rd/rs1 slot and link
        // into x0/x1.
        Opcode::CJr => {
            ops.rs1 = ops.rd;
            ops.rd = 0;
        }
        Opcode::CJalr => {
            ops.rs1 = ops.rd;
            ops.rd = 1;
        }
        Opcode::CJ => ops.rd = 0,
        Opcode::CJal => ops.rd = 1,
        // Shift amounts are zero-extended 6-bit fields, not signed
        // immediates.
        Opcode::CSlli | Opcode::CSrli | Opcode::CSrai => ops.imm &= 0x3F,
        _ => {}
    }
}

/// Re-encodes the operands per the canonical structural class.
fn encode(ops: Operands, meta: CompMetadata) -> Option<u32> {
    if meta.format == Format::None {
        return match meta.op {
            Opcode::Sbreak => Some(system::EBREAK),
            Opcode::Ecall => Some(system::ECALL),
            _ => None,
        };
    }

    let enc = meta.op.encoding()?;
    let imm = ops.imm as u32;
    let word = match meta.format {
        Format::R => {
            (enc.funct7 << 25)
                | (ops.rs2 << 20)
                | (ops.rs1 << 15)
                | (enc.funct3 << 12)
                | (ops.rd << 7)
                | enc.opcode
        }
        Format::I => {
            ((imm & 0xFFF) << 20)
                | (enc.funct7 << 25)
                | (ops.rs1 << 15)
                | (enc.funct3 << 12)
                | (ops.rd << 7)
                | enc.opcode
        }
        Format::S => {
            (((imm >> 5) & 0x7F) << 25)
                | (ops.rs2 << 20)
                | (ops.rs1 << 15)
                | (enc.funct3 << 12)
                | ((imm & 0x1F) << 7)
                | enc.opcode
        }
        Format::Sb => {
            (((imm >> 12) & 1) << 31)
                | (((imm >> 5) & 0x3F) << 25)
                | (ops.rs2 << 20)
                | (ops.rs1 << 15)
                | (enc.funct3 << 12)
                | (((imm >> 1) & 0xF) << 8)
                | (((imm >> 11) & 1) << 7)
                | enc.opcode
        }
        Format::U => ((imm & 0xFFFFF) << 12) | (ops.rd << 7) | enc.opcode,
        Format::Uj => {
            (((imm >> 20) & 1) << 31)
                | (((imm >> 1) & 0x3FF) << 21)
                | (((imm >> 11) & 1) << 20)
                | (((imm >> 12) & 0xFF) << 12)
                | (ops.rd << 7)
                | enc.opcode
        }
        Format::None => return None,
    };
    Some(word)
}
