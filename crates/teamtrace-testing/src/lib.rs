//! Testing infrastructure for teamtrace integration tests.
//!
//! - `TestWorld`: isolated log root with helpers to write session logs
//! - `fixtures`: builders for Claude Code JSONL records
//! - `assertions`: checks over exported session documents

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
