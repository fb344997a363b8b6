//! Unit test modules, one per crate module under test.

/// Registry lookup, table integrity, and serialization tests.
pub mod compression;
/// Halfword classification tests.
pub mod decode;
/// Expansion round-trip and property tests.
pub mod expand;
