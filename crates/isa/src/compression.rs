//! Compression Metadata Registry.
//!
//! Maps each compressed opcode to its semantically equivalent canonical
//! opcode, plus the structural format tags of both encodings. This module
//! implements:
//! 1. **Static Table:** One immutable [`CompMetadata`] record per compressed
//!    opcode, covering the base, floating-point, and width-specific
//!    variants of the C extension.
//! 2. **Lookup Index:** A hash index over the table, built exactly once on
//!    first use and read-only for the rest of the process lifetime.
//! 3. **Integrity Verification:** A duplicate-key scan that runs before the
//!    index is published; a corrupted table aborts rather than silently
//!    shadowing an entry.
//!
//! The registry supplies opcode/format identity only. Operand bit
//! extraction and re-encoding live in the `decode` and `expand`
//! collaborators.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;
use thiserror::Error;
use tracing::trace;

use crate::format::{CompFormat, Format};
use crate::opcode::Opcode;

/// Compression metadata for one compressed opcode.
///
/// A record ties a compressed opcode and its 16-bit structural class to the
/// canonical opcode it expands to and that opcode's 32-bit structural class.
/// Records are load-time constants; nothing mutates them after startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CompMetadata {
    /// The compressed opcode this record describes.
    pub comp_op: Opcode,
    /// Structural class of the 16-bit encoding.
    pub comp_format: CompFormat,
    /// The canonical opcode the instruction expands to.
    pub op: Opcode,
    /// Structural class of the canonical 32-bit encoding.
    pub format: Format,
}

/// Shorthand constructor for table rows.
const fn meta(comp_op: Opcode, comp_format: CompFormat, op: Opcode, format: Format) -> CompMetadata {
    CompMetadata {
        comp_op,
        comp_format,
        op,
        format,
    }
}

/// The compression metadata table.
///
/// Exhaustive over, and only over, the compressed opcodes of [`Opcode`]:
/// every `C*` variant has exactly one row, and an opcode's absence means no
/// compression metadata exists. The array carries its own length, so no
/// sentinel row is needed to bound iteration.
#[rustfmt::skip]
pub static COMPRESSION_TABLE: [CompMetadata; 41] = [
    meta(Opcode::CAddi,     CompFormat::Ci,      Opcode::Addi,   Format::I),
    meta(Opcode::CLw,       CompFormat::ClLw,    Opcode::Lw,     Format::I),
    meta(Opcode::CMv,       CompFormat::Cr,      Opcode::Addi,   Format::I),
    meta(Opcode::CBnez,     CompFormat::Cb,      Opcode::Bne,    Format::Sb),
    meta(Opcode::CSw,       CompFormat::CsSw,    Opcode::Sw,     Format::S),
    meta(Opcode::CLd,       CompFormat::ClLd,    Opcode::Ld,     Format::I),
    meta(Opcode::CSwsp,     CompFormat::CssSwsp, Opcode::Sw,     Format::S),
    meta(Opcode::CLwsp,     CompFormat::CiLwsp,  Opcode::Lw,     Format::I),
    meta(Opcode::CLi,       CompFormat::CiLi,    Opcode::Addi,   Format::I),
    meta(Opcode::CAdd,      CompFormat::Cr,      Opcode::Add,    Format::R),
    meta(Opcode::CSrli,     CompFormat::Cb,      Opcode::Srli,   Format::I),
    meta(Opcode::CJr,       CompFormat::Cr,      Opcode::Jalr,   Format::I),
    meta(Opcode::CFld,      CompFormat::ClLd,    Opcode::Fld,    Format::I),
    meta(Opcode::CSdsp,     CompFormat::CssSdsp, Opcode::Sd,     Format::S),
    meta(Opcode::CJ,        CompFormat::Cj,      Opcode::Jal,    Format::Uj),
    meta(Opcode::CLdsp,     CompFormat::CiLdsp,  Opcode::Ld,     Format::I),
    meta(Opcode::CAndi,     CompFormat::Cb,      Opcode::Andi,   Format::I),
    meta(Opcode::CAddiw,    CompFormat::Ci,      Opcode::Addiw,  Format::I),
    meta(Opcode::CSlli,     CompFormat::Ci,      Opcode::Slli,   Format::I),
    meta(Opcode::CSd,       CompFormat::CsSd,    Opcode::Sd,     Format::S),
    meta(Opcode::CBeqz,     CompFormat::Cb,      Opcode::Beq,    Format::Sb),
    meta(Opcode::CAnd,      CompFormat::Cs,      Opcode::And,    Format::R),
    meta(Opcode::CSrai,     CompFormat::Cb,      Opcode::Srai,   Format::I),
    meta(Opcode::CJal,      CompFormat::Cj,      Opcode::Jal,    Format::Uj),
    meta(Opcode::CAddi4spn, CompFormat::Ciw4spn, Opcode::Addi,   Format::I),
    meta(Opcode::CFldsp,    CompFormat::CiLdsp,  Opcode::Fld,    Format::I),
    meta(Opcode::CAddi16sp, CompFormat::Ci16sp,  Opcode::Addi,   Format::I),
    meta(Opcode::CFsd,      CompFormat::CsSd,    Opcode::Fsd,    Format::S),
    meta(Opcode::CFsdsp,    CompFormat::CssSdsp, Opcode::Fsd,    Format::S),
    meta(Opcode::CAddw,     CompFormat::Cs,      Opcode::Addw,   Format::R),
    meta(Opcode::CXor,      CompFormat::Cs,      Opcode::Xor,    Format::R),
    meta(Opcode::COr,       CompFormat::Cs,      Opcode::Or,     Format::R),
    meta(Opcode::CSub,      CompFormat::Cs,      Opcode::Sub,    Format::R),
    meta(Opcode::CLui,      CompFormat::CiLui,   Opcode::Lui,    Format::U),
    meta(Opcode::CJalr,     CompFormat::Cr,      Opcode::Jalr,   Format::I),
    meta(Opcode::CSubw,     CompFormat::Cs,      Opcode::Subw,   Format::R),
    meta(Opcode::CEbreak,   CompFormat::Cr,      Opcode::Sbreak, Format::None),
    meta(Opcode::CFlw,      CompFormat::ClLw,    Opcode::Flw,    Format::I),
    meta(Opcode::CFlwsp,    CompFormat::CiLwsp,  Opcode::Flw,    Format::I),
    meta(Opcode::CFsw,      CompFormat::CsSw,    Opcode::Fsw,    Format::S),
    meta(Opcode::CFswsp,    CompFormat::CssSwsp, Opcode::Fsw,    Format::S),
];

/// Table integrity defects detected while building the lookup index.
///
/// These are data defects in the static table, not runtime error
/// conditions: a query that merely finds nothing is `None` from
/// [`resolve`], never an error.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum TableError {
    /// Two table rows claim the same compressed opcode. Left unchecked, one
    /// row would silently shadow the other and corrupt every expansion of
    /// that opcode.
    #[error("duplicate compression metadata for opcode {op:?}")]
    DuplicateOpcode {
        /// The opcode keyed by more than one row.
        op: Opcode,
    },
}

/// Builds the compressed-opcode index, rejecting duplicate keys.
fn build_index(table: &[CompMetadata]) -> Result<HashMap<Opcode, &CompMetadata>, TableError> {
    let mut index = HashMap::with_capacity(table.len());
    for entry in table {
        if index.insert(entry.comp_op, entry).is_some() {
            return Err(TableError::DuplicateOpcode { op: entry.comp_op });
        }
    }
    Ok(index)
}

/// Runs the duplicate-key integrity scan over a metadata table.
///
/// The registry runs this scan on [`COMPRESSION_TABLE`] before publishing
/// its index; it is exposed so tests and embedders with their own tables
/// can run it as a `Result`.
///
/// # Errors
///
/// Returns [`TableError::DuplicateOpcode`] if two rows share a `comp_op`.
pub fn verify_table(table: &[CompMetadata]) -> Result<(), TableError> {
    build_index(table).map(|_| ())
}

/// Lookup index, built exactly once on first use. `LazyLock` guarantees
/// every caller observes the completed index before any lookup proceeds.
static INDEX: LazyLock<HashMap<Opcode, &'static CompMetadata>> = LazyLock::new(|| {
    match build_index(&COMPRESSION_TABLE) {
        Ok(index) => {
            trace!(records = index.len(), "compression metadata index built");
            index
        }
        Err(err) => panic!("compression metadata table is corrupt: {err}"),
    }
});

/// Looks up the compression metadata for an opcode.
///
/// Returns the unique record whose `comp_op` equals `op`, or `None` when no
/// metadata is registered — which is the expected outcome for canonical
/// opcodes and for the `Illegal` sentinel, and is how callers probe whether
/// an opcode is compressed at all. Pure function of its input and the
/// static table; safe to call from any number of threads.
///
/// # Panics
///
/// On first use only, if the static table fails its integrity scan. The
/// shipped table is verified by the test suite, so this is unreachable
/// outside of a corrupted build.
pub fn resolve(op: Opcode) -> Option<&'static CompMetadata> {
    INDEX.get(&op).copied()
}
