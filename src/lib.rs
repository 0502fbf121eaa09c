//! # skitscript
//!
//! Lexical value types for the skitscript dialogue format.
//!
//! File Layout
//!
//! A skitscript parser reads a document line by line, splits each line into tokens and
//! formatted runs, and hands those substrings (with the column they started on) to the
//! types in this crate. Everything the parser accepts goes through these constructors, so
//! every value that reaches an AST, a renderer or an interpreter is already well formed.
//!
//! src/skit
//!   ├── lexical      Identifier and Run, plus the lexical grammar rules they enforce
//!   ├── formats      Text / JSON / YAML rendering of lexical values
//!   └── config       Layered configuration for the `skit` binary

pub mod skit;

pub use skit::lexical::{ColumnSpan, Identifier, LexicalError, Run};
