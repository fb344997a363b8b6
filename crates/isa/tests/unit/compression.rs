//! Compression Metadata Registry Tests.
//!
//! Verifies the registry contract: every table entry resolves to itself,
//! opcodes without metadata resolve to `None`, the table holds no duplicate
//! keys, and lookups are idempotent under concurrent use.

use std::collections::HashSet;
use std::thread;

use rstest::rstest;
use rvcmeta_core::{COMPRESSION_TABLE, CompFormat, Format, Opcode, resolve, verify_table};

#[test]
fn every_entry_resolves_to_itself() {
    for entry in &COMPRESSION_TABLE {
        let meta = resolve(entry.comp_op)
            .unwrap_or_else(|| panic!("{:?} has a table row but no lookup result", entry.comp_op));
        assert_eq!(meta.comp_op, entry.comp_op);
        assert_eq!(meta, entry);
    }
}

#[test]
fn no_duplicate_compressed_opcodes() {
    let mut seen = HashSet::new();
    for entry in &COMPRESSION_TABLE {
        assert!(
            seen.insert(entry.comp_op),
            "{:?} appears in more than one table row",
            entry.comp_op
        );
    }
}

#[test]
fn table_is_exhaustive_over_compressed_opcodes() {
    for entry in &COMPRESSION_TABLE {
        assert!(
            entry.comp_op.is_compressed(),
            "{:?} keys a table row but is not a compressed opcode",
            entry.comp_op
        );
        assert!(
            !entry.op.is_compressed(),
            "{:?} expands to another compressed opcode {:?}",
            entry.comp_op,
            entry.op
        );
    }
}

#[test]
fn verify_table_accepts_the_real_table() {
    assert!(verify_table(&COMPRESSION_TABLE).is_ok());
}

#[test]
fn verify_table_rejects_duplicates() {
    let mut corrupt = COMPRESSION_TABLE.to_vec();
    corrupt.push(corrupt[0]);
    let err = verify_table(&corrupt).unwrap_err();
    assert_eq!(
        err,
        rvcmeta_core::TableError::DuplicateOpcode {
            op: COMPRESSION_TABLE[0].comp_op
        }
    );
}

// Concrete mapping scenarios.

#[rstest]
#[case(Opcode::CAddi, CompFormat::Ci, Opcode::Addi, Format::I)]
#[case(Opcode::CSw, CompFormat::CsSw, Opcode::Sw, Format::S)]
#[case(Opcode::CBeqz, CompFormat::Cb, Opcode::Beq, Format::Sb)]
#[case(Opcode::CEbreak, CompFormat::Cr, Opcode::Sbreak, Format::None)]
#[case(Opcode::CLui, CompFormat::CiLui, Opcode::Lui, Format::U)]
#[case(Opcode::CJ, CompFormat::Cj, Opcode::Jal, Format::Uj)]
#[case(Opcode::CMv, CompFormat::Cr, Opcode::Addi, Format::I)]
#[case(Opcode::CFsdsp, CompFormat::CssSdsp, Opcode::Fsd, Format::S)]
fn resolve_scenarios(
    #[case] comp_op: Opcode,
    #[case] comp_format: CompFormat,
    #[case] op: Opcode,
    #[case] format: Format,
) {
    let meta = resolve(comp_op).unwrap();
    assert_eq!(meta.comp_format, comp_format);
    assert_eq!(meta.op, op);
    assert_eq!(meta.format, format);
}

#[rstest]
#[case(Opcode::Illegal)]
#[case(Opcode::Addi)]
#[case(Opcode::Lw)]
#[case(Opcode::Auipc)]
#[case(Opcode::Ecall)]
#[case(Opcode::Sbreak)]
fn opcodes_without_metadata_resolve_to_none(#[case] op: Opcode) {
    assert!(resolve(op).is_none());
}

#[test]
fn resolve_is_idempotent() {
    let first = resolve(Opcode::CAddi);
    for _ in 0..100 {
        assert_eq!(resolve(Opcode::CAddi), first);
    }
}

#[test]
fn concurrent_first_use_agrees() {
    // Race the one-time index build from many threads; every caller must
    // observe the same completed index.
    thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    COMPRESSION_TABLE
                        .iter()
                        .map(|entry| {
                            let meta = resolve(entry.comp_op)?;
                            (meta == entry).then_some(meta.op)
                        })
                        .collect::<Option<Vec<_>>>()
                })
            })
            .collect();
        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for result in &results {
            assert_eq!(result, &results[0]);
            assert!(result.is_some());
        }
    });
}

#[test]
fn metadata_serializes_for_tooling() {
    let meta = resolve(Opcode::CAddi).unwrap();
    let json = serde_json::to_value(meta).unwrap();
    assert_eq!(json["comp_op"], "CAddi");
    assert_eq!(json["comp_format"], "Ci");
    assert_eq!(json["op"], "Addi");
    assert_eq!(json["format"], "I");
}

#[test]
fn mnemonics_match_compression_pairing() {
    // Each compressed mnemonic carries the "c." prefix; its expansion
    // never does.
    for entry in &COMPRESSION_TABLE {
        assert!(entry.comp_op.mnemonic().starts_with("c."));
        assert!(!entry.op.mnemonic().starts_with("c."));
    }
}
