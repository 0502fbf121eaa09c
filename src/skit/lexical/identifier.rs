//! Identifier value
//!
//!     An identifier names something a script refers to more than once: a character, a
//!     scene label, a variable. The parser hands over the token exactly as written together
//!     with its starting column; the identifier keeps both and derives a normalized key
//!     that two spellings of the same name share.
//!
//! Validation
//!
//!     Checks run in a fixed order and the first failure is reported:
//!         1. no leading or trailing whitespace
//!         2. no reserved word (case-insensitive, whole words only)
//!         3. no disallowed character (`,` `(` `)`)
//!         4. at least one character outside the excluded set
//!         5. start column of at least 1, with room for the whole text after it
//!
//!     An empty token fails check 4, since it has no significant character.
//!
//! Normalization
//!
//!     See [normalize](super::rules::normalize). The normalized key is computed once at
//!     construction; it cannot be set independently of the verbatim text.

use super::column::ColumnSpan;
use super::error::{LexicalError, Parameter, Violation};
use super::rules;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// A validated, normalized name token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "IdentifierRecord")]
pub struct Identifier {
    verbatim: String,
    normalized: String,
    columns: ColumnSpan,
}

/// Unvalidated identifier fields, as received from a deserializer or another loose source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct IdentifierRecord {
    #[serde(default)]
    pub verbatim: Option<String>,
    pub from_column: usize,
}

impl Identifier {
    /// Validates `verbatim` as an identifier starting on `from_column`.
    pub fn new(verbatim: impl Into<String>, from_column: usize) -> Result<Self, LexicalError> {
        let verbatim = verbatim.into();
        let columns = validate(&verbatim, from_column).inspect_err(|error| {
            tracing::debug!(%verbatim, from_column, %error, "rejected identifier");
        })?;

        let normalized = rules::normalize(&verbatim);
        tracing::trace!(%verbatim, %normalized, %columns, "identifier");
        Ok(Self {
            verbatim,
            normalized,
            columns,
        })
    }

    /// Like [`Identifier::new`], but reports an absent `verbatim` as a precondition failure.
    pub fn from_parts(verbatim: Option<String>, from_column: usize) -> Result<Self, LexicalError> {
        match verbatim {
            Some(verbatim) => Self::new(verbatim, from_column),
            None => Err(LexicalError::missing(Parameter::Verbatim)),
        }
    }

    /// The identifier's exact text as written in the original document.
    pub fn verbatim(&self) -> &str {
        &self.verbatim
    }

    /// Lower-cased text with each run of excluded characters replaced by `-`.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// The column on which the identifier started in the original document.
    pub fn from_column(&self) -> usize {
        self.columns.from()
    }

    /// The column on which the identifier ended in the original document.
    pub fn to_column(&self) -> usize {
        self.columns.to()
    }

    pub fn columns(&self) -> ColumnSpan {
        self.columns
    }

    /// Whether both identifiers name the same thing, however they were spelled.
    pub fn is_same_name(&self, other: &Identifier) -> bool {
        self.normalized == other.normalized
    }
}

fn validate(verbatim: &str, from_column: usize) -> Result<ColumnSpan, LexicalError> {
    let invalid = |violation| LexicalError::invalid(Parameter::Verbatim, violation);

    if verbatim.trim() != verbatim {
        return Err(invalid(Violation::SurroundingWhitespace));
    }
    if let Some(word) = rules::find_reserved_word(verbatim) {
        return Err(invalid(Violation::ReservedWord(word.to_string())));
    }
    if let Some(c) = rules::find_disallowed_character(verbatim) {
        return Err(invalid(Violation::DisallowedCharacter(c)));
    }
    if !rules::has_significant_character(verbatim) {
        return Err(invalid(Violation::OnlyExcludedCharacters));
    }
    if from_column < 1 {
        return Err(LexicalError::invalid(
            Parameter::FromColumn,
            Violation::ColumnBelowOne,
        ));
    }
    ColumnSpan::covering(from_column, verbatim).ok_or_else(|| {
        LexicalError::invalid(Parameter::FromColumn, Violation::ColumnOutOfRange)
    })
}

impl TryFrom<IdentifierRecord> for Identifier {
    type Error = LexicalError;

    fn try_from(record: IdentifierRecord) -> Result<Self, Self::Error> {
        Identifier::from_parts(record.verbatim, record.from_column)
    }
}

impl Serialize for Identifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Identifier", 4)?;
        state.serialize_field("verbatim", &self.verbatim)?;
        state.serialize_field("normalized", &self.normalized)?;
        state.serialize_field("from_column", &self.from_column())?;
        state.serialize_field("to_column", &self.to_column())?;
        state.end()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.verbatim)
    }
}
