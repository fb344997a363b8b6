//! RISC-V Opcode Identifiers.
//!
//! Defines the symbolic opcode universe shared by the compression metadata
//! registry and its collaborators. The enumeration covers:
//! 1. **Compressed opcodes:** Every 16-bit instruction of the C extension
//!    (base, floating-point, and RV32/RV64 width-specific variants).
//! 2. **Canonical opcodes:** The 32-bit instructions compressed forms expand
//!    to, plus the rest of the base integer set a decoder is likely to meet.
//! 3. **`Illegal`:** A sentinel for reserved or defined-illegal encodings.
//!
//! An opcode names a mnemonic, never a bit pattern; the canonical encoding
//! fields live in [`Encoding`] and the `major`/`funct3`/`funct7` constant
//! modules.

use serde::Serialize;

/// Major opcodes (bits 6:0) of the canonical 32-bit encodings.
pub mod major {
    /// Load instructions (LB, LH, LW, LD, ...).
    pub const OP_LOAD: u32 = 0b0000011;
    /// Floating-point load instructions (FLW, FLD).
    pub const OP_LOAD_FP: u32 = 0b0000111;
    /// Immediate arithmetic instructions (ADDI, ANDI, SLLI, ...).
    pub const OP_IMM: u32 = 0b0010011;
    /// Add Upper Immediate to PC (AUIPC).
    pub const OP_AUIPC: u32 = 0b0010111;
    /// 32-bit immediate arithmetic (ADDIW, SLLIW, ...) - RV64 only.
    pub const OP_IMM_32: u32 = 0b0011011;
    /// Store instructions (SB, SH, SW, SD).
    pub const OP_STORE: u32 = 0b0100011;
    /// Floating-point store instructions (FSW, FSD).
    pub const OP_STORE_FP: u32 = 0b0100111;
    /// Register-register arithmetic (ADD, SUB, SLL, ...).
    pub const OP_REG: u32 = 0b0110011;
    /// Load Upper Immediate (LUI).
    pub const OP_LUI: u32 = 0b0110111;
    /// 32-bit register-register arithmetic (ADDW, SUBW, ...) - RV64 only.
    pub const OP_REG_32: u32 = 0b0111011;
    /// Conditional branch instructions (BEQ, BNE, ...).
    pub const OP_BRANCH: u32 = 0b1100011;
    /// Jump and Link Register (JALR).
    pub const OP_JALR: u32 = 0b1100111;
    /// Jump and Link (JAL).
    pub const OP_JAL: u32 = 0b1101111;
    /// System instructions (ECALL, EBREAK, CSR access).
    pub const OP_SYSTEM: u32 = 0b1110011;
}

/// `funct3` values (bits 14:12) used by the canonical encodings.
pub mod funct3 {
    /// ADD/SUB and ADDI (selected by funct7 / major opcode).
    pub const ADD_SUB: u32 = 0b000;
    /// Shift Left Logical (SLL, SLLI).
    pub const SLL: u32 = 0b001;
    /// Set Less Than (signed).
    pub const SLT: u32 = 0b010;
    /// Set Less Than Unsigned.
    pub const SLTU: u32 = 0b011;
    /// Bitwise XOR.
    pub const XOR: u32 = 0b100;
    /// Shift Right Logical/Arithmetic (selected by funct7).
    pub const SRL_SRA: u32 = 0b101;
    /// Bitwise OR.
    pub const OR: u32 = 0b110;
    /// Bitwise AND.
    pub const AND: u32 = 0b111;

    /// Load Byte (signed).
    pub const LB: u32 = 0b000;
    /// Load Halfword (signed).
    pub const LH: u32 = 0b001;
    /// Load Word (signed); also FLW under `OP_LOAD_FP`.
    pub const LW: u32 = 0b010;
    /// Load Doubleword; also FLD under `OP_LOAD_FP`.
    pub const LD: u32 = 0b011;
    /// Load Byte Unsigned.
    pub const LBU: u32 = 0b100;
    /// Load Halfword Unsigned.
    pub const LHU: u32 = 0b101;
    /// Load Word Unsigned.
    pub const LWU: u32 = 0b110;

    /// Store Byte.
    pub const SB: u32 = 0b000;
    /// Store Halfword.
    pub const SH: u32 = 0b001;
    /// Store Word; also FSW under `OP_STORE_FP`.
    pub const SW: u32 = 0b010;
    /// Store Doubleword; also FSD under `OP_STORE_FP`.
    pub const SD: u32 = 0b011;

    /// Branch Equal.
    pub const BEQ: u32 = 0b000;
    /// Branch Not Equal.
    pub const BNE: u32 = 0b001;
    /// Branch Less Than (signed).
    pub const BLT: u32 = 0b100;
    /// Branch Greater or Equal (signed).
    pub const BGE: u32 = 0b101;
    /// Branch Less Than Unsigned.
    pub const BLTU: u32 = 0b110;
    /// Branch Greater or Equal Unsigned.
    pub const BGEU: u32 = 0b111;
}

/// `funct7` values (bits 31:25) used by the canonical encodings.
pub mod funct7 {
    /// Default function (ADD, SRL, plain shifts).
    pub const BASE: u32 = 0b0000000;
    /// Alternate function (SUB, SRA, SRAI).
    pub const ALT: u32 = 0b0100000;
}

/// Full 32-bit words for the operand-less system instructions.
pub mod system {
    /// Environment Call (ECALL).
    pub const ECALL: u32 = 0x0000_0073;
    /// Environment Break (EBREAK).
    pub const EBREAK: u32 = 0x0010_0073;
}

/// Symbolic RISC-V opcode identifiers.
///
/// Covers the compressed (C extension) opcodes, the canonical opcodes they
/// expand to, the remaining base integer instructions, and the `Illegal`
/// sentinel produced by decoders for reserved encodings. `Illegal` never has
/// compression metadata.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Opcode {
    /// Reserved or defined-illegal encoding; carries no metadata.
    Illegal,

    // Compressed (C extension), quadrant 0.
    /// Add scaled immediate to stack pointer (C.ADDI4SPN).
    CAddi4spn,
    /// Floating-point load double (C.FLD).
    CFld,
    /// Load word (C.LW).
    CLw,
    /// Floating-point load word, RV32 only (C.FLW).
    CFlw,
    /// Load doubleword, RV64 only (C.LD).
    CLd,
    /// Floating-point store double (C.FSD).
    CFsd,
    /// Store word (C.SW).
    CSw,
    /// Floating-point store word, RV32 only (C.FSW).
    CFsw,
    /// Store doubleword, RV64 only (C.SD).
    CSd,

    // Compressed, quadrant 1.
    /// Add immediate (C.ADDI).
    CAddi,
    /// Jump and link, RV32 only (C.JAL).
    CJal,
    /// Add immediate word, RV64 only (C.ADDIW).
    CAddiw,
    /// Load immediate (C.LI).
    CLi,
    /// Add immediate, scaled by 16, to stack pointer (C.ADDI16SP).
    CAddi16sp,
    /// Load upper immediate (C.LUI).
    CLui,
    /// Shift right logical immediate (C.SRLI).
    CSrli,
    /// Shift right arithmetic immediate (C.SRAI).
    CSrai,
    /// AND immediate (C.ANDI).
    CAndi,
    /// Subtract (C.SUB).
    CSub,
    /// Bitwise XOR (C.XOR).
    CXor,
    /// Bitwise OR (C.OR).
    COr,
    /// Bitwise AND (C.AND).
    CAnd,
    /// Subtract word, RV64 only (C.SUBW).
    CSubw,
    /// Add word, RV64 only (C.ADDW).
    CAddw,
    /// Unconditional jump (C.J).
    CJ,
    /// Branch if equal to zero (C.BEQZ).
    CBeqz,
    /// Branch if not equal to zero (C.BNEZ).
    CBnez,

    // Compressed, quadrant 2.
    /// Shift left logical immediate (C.SLLI).
    CSlli,
    /// Floating-point load double from stack (C.FLDSP).
    CFldsp,
    /// Load word from stack (C.LWSP).
    CLwsp,
    /// Floating-point load word from stack, RV32 only (C.FLWSP).
    CFlwsp,
    /// Load doubleword from stack, RV64 only (C.LDSP).
    CLdsp,
    /// Jump register (C.JR).
    CJr,
    /// Copy register (C.MV).
    CMv,
    /// Environment break (C.EBREAK).
    CEbreak,
    /// Jump and link register (C.JALR).
    CJalr,
    /// Add (C.ADD).
    CAdd,
    /// Floating-point store double to stack (C.FSDSP).
    CFsdsp,
    /// Store word to stack (C.SWSP).
    CSwsp,
    /// Floating-point store word to stack, RV32 only (C.FSWSP).
    CFswsp,
    /// Store doubleword to stack, RV64 only (C.SDSP).
    CSdsp,

    // Canonical base integer.
    /// Load upper immediate.
    Lui,
    /// Add upper immediate to PC.
    Auipc,
    /// Jump and link.
    Jal,
    /// Jump and link register.
    Jalr,
    /// Branch equal.
    Beq,
    /// Branch not equal.
    Bne,
    /// Branch less than (signed).
    Blt,
    /// Branch greater or equal (signed).
    Bge,
    /// Branch less than unsigned.
    Bltu,
    /// Branch greater or equal unsigned.
    Bgeu,
    /// Load byte (signed).
    Lb,
    /// Load halfword (signed).
    Lh,
    /// Load word (signed).
    Lw,
    /// Load doubleword.
    Ld,
    /// Load byte unsigned.
    Lbu,
    /// Load halfword unsigned.
    Lhu,
    /// Load word unsigned.
    Lwu,
    /// Store byte.
    Sb,
    /// Store halfword.
    Sh,
    /// Store word.
    Sw,
    /// Store doubleword.
    Sd,
    /// Add immediate.
    Addi,
    /// Set less than immediate (signed).
    Slti,
    /// Set less than immediate unsigned.
    Sltiu,
    /// XOR immediate.
    Xori,
    /// OR immediate.
    Ori,
    /// AND immediate.
    Andi,
    /// Shift left logical immediate.
    Slli,
    /// Shift right logical immediate.
    Srli,
    /// Shift right arithmetic immediate.
    Srai,
    /// Add.
    Add,
    /// Subtract.
    Sub,
    /// Shift left logical.
    Sll,
    /// Set less than (signed).
    Slt,
    /// Set less than unsigned.
    Sltu,
    /// Bitwise XOR.
    Xor,
    /// Shift right logical.
    Srl,
    /// Shift right arithmetic.
    Sra,
    /// Bitwise OR.
    Or,
    /// Bitwise AND.
    And,
    /// Add immediate word, RV64 only.
    Addiw,
    /// Add word, RV64 only.
    Addw,
    /// Subtract word, RV64 only.
    Subw,
    /// Environment call.
    Ecall,
    /// Software breakpoint (`EBREAK`; historically named SBREAK).
    Sbreak,

    // Canonical floating-point loads/stores.
    /// Floating-point load word.
    Flw,
    /// Floating-point load double.
    Fld,
    /// Floating-point store word.
    Fsw,
    /// Floating-point store double.
    Fsd,
}

/// Canonical 32-bit encoding fields of an opcode.
///
/// Field values the instruction format does not use are zero; combining
/// them into a word is the format encoder's job, never the registry's.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Encoding {
    /// Major opcode (bits 6:0).
    pub opcode: u32,
    /// `funct3` field (bits 14:12); zero when the format has none.
    pub funct3: u32,
    /// `funct7` field (bits 31:25); zero when the format has none.
    pub funct7: u32,
}

impl Encoding {
    /// Builds an encoding from its three selector fields.
    const fn new(opcode: u32, funct3: u32, funct7: u32) -> Self {
        Self {
            opcode,
            funct3,
            funct7,
        }
    }
}

impl Opcode {
    /// Returns `true` for opcodes of the compressed (C) extension.
    pub const fn is_compressed(self) -> bool {
        matches!(
            self,
            Self::CAddi4spn
                | Self::CFld
                | Self::CLw
                | Self::CFlw
                | Self::CLd
                | Self::CFsd
                | Self::CSw
                | Self::CFsw
                | Self::CSd
                | Self::CAddi
                | Self::CJal
                | Self::CAddiw
                | Self::CLi
                | Self::CAddi16sp
                | Self::CLui
                | Self::CSrli
                | Self::CSrai
                | Self::CAndi
                | Self::CSub
                | Self::CXor
                | Self::COr
                | Self::CAnd
                | Self::CSubw
                | Self::CAddw
                | Self::CJ
                | Self::CBeqz
                | Self::CBnez
                | Self::CSlli
                | Self::CFldsp
                | Self::CLwsp
                | Self::CFlwsp
                | Self::CLdsp
                | Self::CJr
                | Self::CMv
                | Self::CEbreak
                | Self::CJalr
                | Self::CAdd
                | Self::CFsdsp
                | Self::CSwsp
                | Self::CFswsp
                | Self::CSdsp
        )
    }

    /// Returns the assembler mnemonic for the opcode.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Illegal => "illegal",
            Self::CAddi4spn => "c.addi4spn",
            Self::CFld => "c.fld",
            Self::CLw => "c.lw",
            Self::CFlw => "c.flw",
            Self::CLd => "c.ld",
            Self::CFsd => "c.fsd",
            Self::CSw => "c.sw",
            Self::CFsw => "c.fsw",
            Self::CSd => "c.sd",
            Self::CAddi => "c.addi",
            Self::CJal => "c.jal",
            Self::CAddiw => "c.addiw",
            Self::CLi => "c.li",
            Self::CAddi16sp => "c.addi16sp",
            Self::CLui => "c.lui",
            Self::CSrli => "c.srli",
            Self::CSrai => "c.srai",
            Self::CAndi => "c.andi",
            Self::CSub => "c.sub",
            Self::CXor => "c.xor",
            Self::COr => "c.or",
            Self::CAnd => "c.and",
            Self::CSubw => "c.subw",
            Self::CAddw => "c.addw",
            Self::CJ => "c.j",
            Self::CBeqz => "c.beqz",
            Self::CBnez => "c.bnez",
            Self::CSlli => "c.slli",
            Self::CFldsp => "c.fldsp",
            Self::CLwsp => "c.lwsp",
            Self::CFlwsp => "c.flwsp",
            Self::CLdsp => "c.ldsp",
            Self::CJr => "c.jr",
            Self::CMv => "c.mv",
            Self::CEbreak => "c.ebreak",
            Self::CJalr => "c.jalr",
            Self::CAdd => "c.add",
            Self::CFsdsp => "c.fsdsp",
            Self::CSwsp => "c.swsp",
            Self::CFswsp => "c.fswsp",
            Self::CSdsp => "c.sdsp",
            Self::Lui => "lui",
            Self::Auipc => "auipc",
            Self::Jal => "jal",
            Self::Jalr => "jalr",
            Self::Beq => "beq",
            Self::Bne => "bne",
            Self::Blt => "blt",
            Self::Bge => "bge",
            Self::Bltu => "bltu",
            Self::Bgeu => "bgeu",
            Self::Lb => "lb",
            Self::Lh => "lh",
            Self::Lw => "lw",
            Self::Ld => "ld",
            Self::Lbu => "lbu",
            Self::Lhu => "lhu",
            Self::Lwu => "lwu",
            Self::Sb => "sb",
            Self::Sh => "sh",
            Self::Sw => "sw",
            Self::Sd => "sd",
            Self::Addi => "addi",
            Self::Slti => "slti",
            Self::Sltiu => "sltiu",
            Self::Xori => "xori",
            Self::Ori => "ori",
            Self::Andi => "andi",
            Self::Slli => "slli",
            Self::Srli => "srli",
            Self::Srai => "srai",
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Sll => "sll",
            Self::Slt => "slt",
            Self::Sltu => "sltu",
            Self::Xor => "xor",
            Self::Srl => "srl",
            Self::Sra => "sra",
            Self::Or => "or",
            Self::And => "and",
            Self::Addiw => "addiw",
            Self::Addw => "addw",
            Self::Subw => "subw",
            Self::Ecall => "ecall",
            Self::Sbreak => "ebreak",
            Self::Flw => "flw",
            Self::Fld => "fld",
            Self::Fsw => "fsw",
            Self::Fsd => "fsd",
        }
    }

    /// Returns the canonical 32-bit encoding fields, or `None` for
    /// compressed opcodes, the `Illegal` sentinel, and operand-less system
    /// instructions (whose full words live in [`system`]).
    pub const fn encoding(self) -> Option<Encoding> {
        let enc = match self {
            Self::Lui => Encoding::new(major::OP_LUI, 0, 0),
            Self::Auipc => Encoding::new(major::OP_AUIPC, 0, 0),
            Self::Jal => Encoding::new(major::OP_JAL, 0, 0),
            Self::Jalr => Encoding::new(major::OP_JALR, 0, 0),
            Self::Beq => Encoding::new(major::OP_BRANCH, funct3::BEQ, 0),
            Self::Bne => Encoding::new(major::OP_BRANCH, funct3::BNE, 0),
            Self::Blt => Encoding::new(major::OP_BRANCH, funct3::BLT, 0),
            Self::Bge => Encoding::new(major::OP_BRANCH, funct3::BGE, 0),
            Self::Bltu => Encoding::new(major::OP_BRANCH, funct3::BLTU, 0),
            Self::Bgeu => Encoding::new(major::OP_BRANCH, funct3::BGEU, 0),
            Self::Lb => Encoding::new(major::OP_LOAD, funct3::LB, 0),
            Self::Lh => Encoding::new(major::OP_LOAD, funct3::LH, 0),
            Self::Lw => Encoding::new(major::OP_LOAD, funct3::LW, 0),
            Self::Ld => Encoding::new(major::OP_LOAD, funct3::LD, 0),
            Self::Lbu => Encoding::new(major::OP_LOAD, funct3::LBU, 0),
            Self::Lhu => Encoding::new(major::OP_LOAD, funct3::LHU, 0),
            Self::Lwu => Encoding::new(major::OP_LOAD, funct3::LWU, 0),
            Self::Sb => Encoding::new(major::OP_STORE, funct3::SB, 0),
            Self::Sh => Encoding::new(major::OP_STORE, funct3::SH, 0),
            Self::Sw => Encoding::new(major::OP_STORE, funct3::SW, 0),
            Self::Sd => Encoding::new(major::OP_STORE, funct3::SD, 0),
            Self::Addi => Encoding::new(major::OP_IMM, funct3::ADD_SUB, 0),
            Self::Slti => Encoding::new(major::OP_IMM, funct3::SLT, 0),
            Self::Sltiu => Encoding::new(major::OP_IMM, funct3::SLTU, 0),
            Self::Xori => Encoding::new(major::OP_IMM, funct3::XOR, 0),
            Self::Ori => Encoding::new(major::OP_IMM, funct3::OR, 0),
            Self::Andi => Encoding::new(major::OP_IMM, funct3::AND, 0),
            Self::Slli => Encoding::new(major::OP_IMM, funct3::SLL, funct7::BASE),
            Self::Srli => Encoding::new(major::OP_IMM, funct3::SRL_SRA, funct7::BASE),
            Self::Srai => Encoding::new(major::OP_IMM, funct3::SRL_SRA, funct7::ALT),
            Self::Add => Encoding::new(major::OP_REG, funct3::ADD_SUB, funct7::BASE),
            Self::Sub => Encoding::new(major::OP_REG, funct3::ADD_SUB, funct7::ALT),
            Self::Sll => Encoding::new(major::OP_REG, funct3::SLL, funct7::BASE),
            Self::Slt => Encoding::new(major::OP_REG, funct3::SLT, funct7::BASE),
            Self::Sltu => Encoding::new(major::OP_REG, funct3::SLTU, funct7::BASE),
            Self::Xor => Encoding::new(major::OP_REG, funct3::XOR, funct7::BASE),
            Self::Srl => Encoding::new(major::OP_REG, funct3::SRL_SRA, funct7::BASE),
            Self::Sra => Encoding::new(major::OP_REG, funct3::SRL_SRA, funct7::ALT),
            Self::Or => Encoding::new(major::OP_REG, funct3::OR, funct7::BASE),
            Self::And => Encoding::new(major::OP_REG, funct3::AND, funct7::BASE),
            Self::Addiw => Encoding::new(major::OP_IMM_32, funct3::ADD_SUB, 0),
            Self::Addw => Encoding::new(major::OP_REG_32, funct3::ADD_SUB, funct7::BASE),
            Self::Subw => Encoding::new(major::OP_REG_32, funct3::ADD_SUB, funct7::ALT),
            Self::Flw => Encoding::new(major::OP_LOAD_FP, funct3::LW, 0),
            Self::Fld => Encoding::new(major::OP_LOAD_FP, funct3::LD, 0),
            Self::Fsw => Encoding::new(major::OP_STORE_FP, funct3::SW, 0),
            Self::Fsd => Encoding::new(major::OP_STORE_FP, funct3::SD, 0),
            _ => return None,
        };
        Some(enc)
    }
}
