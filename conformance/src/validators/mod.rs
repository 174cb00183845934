//! Conformance validators.
//!
//! Each validator returns a [`ConformanceReport`](crate::ConformanceReport)
//! and fails only on file system errors; document-level problems become
//! failure results.

pub mod fixtures;
pub mod roundtrip;
pub mod vocabulary;
