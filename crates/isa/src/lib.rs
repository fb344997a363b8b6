//! RISC-V compressed-instruction metadata registry.
//!
//! This crate maps each 16-bit compressed (C extension) opcode to its
//! semantically equivalent canonical 32-bit opcode, together with the
//! structural format tags of both encodings. It provides:
//! 1. **Opcodes:** The symbolic opcode universe (compressed, canonical, and
//!    the `Illegal` sentinel) plus canonical encoding selectors.
//! 2. **Formats:** Structural class tags for the 16-bit and 32-bit
//!    encodings.
//! 3. **Registry:** The static metadata table, its lookup index, and the
//!    [`resolve`] API with load-time integrity verification.
//! 4. **Collaborators:** Halfword classification and full 16-to-32-bit
//!    expansion built on top of the registry.
//!
//! # Example
//!
//! ```
//! use rvcmeta_core::{CompFormat, Format, Opcode, resolve};
//!
//! let meta = resolve(Opcode::CAddi).unwrap();
//! assert_eq!(meta.comp_format, CompFormat::Ci);
//! assert_eq!(meta.op, Opcode::Addi);
//! assert_eq!(meta.format, Format::I);
//!
//! // Canonical opcodes have no compression metadata.
//! assert!(resolve(Opcode::Auipc).is_none());
//! ```

/// Compression metadata table, lookup index, and `resolve` API.
pub mod compression;
/// Classification of raw 16-bit halfwords into compressed opcodes.
pub mod decode;
/// Expansion of compressed halfwords into canonical 32-bit words.
pub mod expand;
/// Structural format tags for compressed and canonical encodings.
pub mod format;
/// Symbolic opcode identifiers and canonical encoding selectors.
pub mod opcode;

/// Metadata record type returned by [`resolve`].
pub use crate::compression::{COMPRESSION_TABLE, CompMetadata, TableError, resolve, verify_table};
/// Structural class tags for both encoding widths.
pub use crate::format::{CompFormat, Format};
/// The symbolic opcode universe.
pub use crate::opcode::{Encoding, Opcode};
