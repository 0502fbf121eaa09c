//! Error types for lexical value construction

use std::fmt;
use thiserror::Error;

/// The constructor input a failure is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    Verbatim,
    PlainText,
    FromColumn,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parameter::Verbatim => write!(f, "verbatim"),
            Parameter::PlainText => write!(f, "plain_text"),
            Parameter::FromColumn => write!(f, "from_column"),
        }
    }
}

/// The lexical rule a rejected input broke.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Violation {
    /// The text is empty.
    Empty,
    /// The text starts or ends with whitespace.
    SurroundingWhitespace,
    /// The text contains a reserved word, reported as written.
    ReservedWord(String),
    /// The text contains a character the statement grammar uses as a separator.
    DisallowedCharacter(char),
    /// Nothing would be left of the text once excluded characters are removed.
    OnlyExcludedCharacters,
    /// Columns start at 1.
    ColumnBelowOne,
    /// The span would end past the largest representable column.
    ColumnOutOfRange,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Empty => write!(f, "must not be empty"),
            Violation::SurroundingWhitespace => {
                write!(f, "must not start or end with whitespace")
            }
            Violation::ReservedWord(word) => write!(f, "must not contain reserved word '{}'", word),
            Violation::DisallowedCharacter(c) => {
                write!(f, "must not contain disallowed character {:?}", c)
            }
            Violation::OnlyExcludedCharacters => {
                write!(f, "must contain at least one non-punctuation character")
            }
            Violation::ColumnBelowOne => write!(f, "must be at least 1"),
            Violation::ColumnOutOfRange => {
                write!(f, "leaves no room for the text before the last column")
            }
        }
    }
}

/// Broad classification of a construction failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required input was absent. Indicates a bug in the caller, not a document defect.
    Precondition,
    /// Empty or blank text.
    Blank,
    /// Reserved words or disallowed characters.
    ForbiddenContent,
    /// A column below 1.
    MalformedPosition,
}

/// Why an [`Identifier`](super::Identifier) or [`Run`](super::Run) could not be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexicalError {
    #[error("{parameter} was not provided")]
    Missing { parameter: Parameter },
    #[error("{parameter} {violation}")]
    Invalid {
        parameter: Parameter,
        violation: Violation,
    },
}

impl LexicalError {
    pub(crate) fn missing(parameter: Parameter) -> Self {
        LexicalError::Missing { parameter }
    }

    pub(crate) fn invalid(parameter: Parameter, violation: Violation) -> Self {
        LexicalError::Invalid {
            parameter,
            violation,
        }
    }

    /// The input the failure is attributed to.
    pub fn parameter(&self) -> Parameter {
        match self {
            LexicalError::Missing { parameter } | LexicalError::Invalid { parameter, .. } => {
                *parameter
            }
        }
    }

    /// The broken rule, if this is a validation failure.
    pub fn violation(&self) -> Option<&Violation> {
        match self {
            LexicalError::Missing { .. } => None,
            LexicalError::Invalid { violation, .. } => Some(violation),
        }
    }

    /// True when an input was absent rather than malformed.
    pub fn is_precondition(&self) -> bool {
        matches!(self, LexicalError::Missing { .. })
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            LexicalError::Missing { .. } => ErrorKind::Precondition,
            LexicalError::Invalid { violation, .. } => match violation {
                Violation::Empty
                | Violation::SurroundingWhitespace
                | Violation::OnlyExcludedCharacters => ErrorKind::Blank,
                Violation::ReservedWord(_) | Violation::DisallowedCharacter(_) => {
                    ErrorKind::ForbiddenContent
                }
                Violation::ColumnBelowOne | Violation::ColumnOutOfRange => {
                    ErrorKind::MalformedPosition
                }
            },
        }
    }
}
