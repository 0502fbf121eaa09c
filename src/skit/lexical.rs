//! Lexical value types
//!
//!     This module defines the two leaf values a skitscript parser produces from raw line
//!     text: identifiers (character names, scene labels, variable names) and runs (spans of
//!     formatted dialogue text). Both are validated once, at construction, and are immutable
//!     afterwards.
//!
//!     Related modules:
//!     - [rules](rules) - The lexical grammar: reserved words and character classes
//!     - [column](column) - 1-based column bookkeeping shared by both values
//!     - [error](error) - Failure taxonomy reported back to the parser
//!
//! Identifiers
//!
//!     An identifier keeps the text exactly as written, plus a normalized key used for
//!     lookups:
//!
//!         Example! Ident*ifier String   ->   example-ident-ifier-string
//!
//!     Identifiers may not:
//!     - Start or end with whitespace
//!     - Contain a reserved word as a whole word (`and`, `when`, `jump`, ...)
//!     - Contain `,`, `(` or `)`
//!     - Consist only of excluded punctuation and whitespace
//!
//! Runs
//!
//!     A run pairs the verbatim markup (e.g. `**Hello**`) with the plain text it renders
//!     to (`Hello`) and three independent formatting flags: bold, italic and code. The
//!     markup stripper is trusted to produce matching texts; the run only checks that
//!     neither is empty.
//!
//! Columns
//!
//!     Both values record the column their verbatim text started on. The end column is
//!     always derived from the verbatim length, so it can never drift from the text.

pub mod column;
pub mod error;
pub mod identifier;
pub mod rules;
pub mod run;

pub use column::ColumnSpan;
pub use error::{ErrorKind, LexicalError, Parameter, Violation};
pub use identifier::{Identifier, IdentifierRecord};
pub use run::{Run, RunRecord};
