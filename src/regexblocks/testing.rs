//! Testing helpers
//!
//! Factories for building blocks and tokens tersely in unit and integration tests, plus a
//! small set of patterns that exercise every grammar unit the tokenizer understands.

pub mod factories;
pub mod samples;
