//! Run value
//!
//!     A run is a span of dialogue text that shares one formatting state. It keeps the
//!     markup as written (`verbatim`) next to the text it renders to (`plain_text`):
//!
//!         **Hello**   ->   Hello        bold
//!         `x = 1`     ->   x = 1        code
//!
//!     Stripping the markup is the tokenizer's job. A run trusts that the two texts belong
//!     together and only requires that neither is empty. Columns are derived from the
//!     verbatim text, since that is what occupies the source line.

use super::column::ColumnSpan;
use super::error::{LexicalError, Parameter, Violation};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// A contiguous span of formatted text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "RunRecord")]
pub struct Run {
    bold: bool,
    italic: bool,
    code: bool,
    verbatim: String,
    plain_text: String,
    columns: ColumnSpan,
}

/// Unvalidated run fields, as received from a deserializer or another loose source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RunRecord {
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub code: bool,
    #[serde(default)]
    pub verbatim: Option<String>,
    #[serde(default)]
    pub plain_text: Option<String>,
    pub from_column: usize,
}

impl Run {
    pub fn new(
        bold: bool,
        italic: bool,
        code: bool,
        verbatim: impl Into<String>,
        plain_text: impl Into<String>,
        from_column: usize,
    ) -> Result<Self, LexicalError> {
        Self::from_parts(RunRecord {
            bold,
            italic,
            code,
            verbatim: Some(verbatim.into()),
            plain_text: Some(plain_text.into()),
            from_column,
        })
    }

    /// Builds a run from loose fields, reporting absent texts as precondition failures.
    ///
    /// Checks verbatim, then plain text, then the column; the first failure is returned.
    pub fn from_parts(record: RunRecord) -> Result<Self, LexicalError> {
        let RunRecord {
            bold,
            italic,
            code,
            verbatim,
            plain_text,
            from_column,
        } = record;

        let verbatim = require_text(verbatim, Parameter::Verbatim)?;
        let plain_text = require_text(plain_text, Parameter::PlainText)?;
        let columns = require_columns(from_column, &verbatim).inspect_err(|error| {
            tracing::debug!(%verbatim, from_column, %error, "rejected run");
        })?;
        tracing::trace!(bold, italic, code, %verbatim, %plain_text, %columns, "run");
        Ok(Self {
            bold,
            italic,
            code,
            verbatim,
            plain_text,
            columns,
        })
    }

    /// When true, the run is displayed in bold; otherwise at the default weight.
    pub fn bold(&self) -> bool {
        self.bold
    }

    /// When true, the run is displayed in italics; otherwise upright.
    pub fn italic(&self) -> bool {
        self.italic
    }

    /// When true, the run is displayed in a mono-space font.
    pub fn code(&self) -> bool {
        self.code
    }

    /// True when no formatting flag is set.
    pub fn is_plain(&self) -> bool {
        !(self.bold || self.italic || self.code)
    }

    /// The run's exact text as written in the original document, markup included.
    pub fn verbatim(&self) -> &str {
        &self.verbatim
    }

    pub fn plain_text(&self) -> &str {
        &self.plain_text
    }

    /// The column on which the run started in the original document.
    pub fn from_column(&self) -> usize {
        self.columns.from()
    }

    /// The column on which the run ended in the original document.
    pub fn to_column(&self) -> usize {
        self.columns.to()
    }

    pub fn columns(&self) -> ColumnSpan {
        self.columns
    }
}

fn require_text(text: Option<String>, parameter: Parameter) -> Result<String, LexicalError> {
    let error = match text {
        Some(text) if !text.is_empty() => return Ok(text),
        Some(_) => LexicalError::invalid(parameter, Violation::Empty),
        None => LexicalError::missing(parameter),
    };
    tracing::debug!(%error, "rejected run");
    Err(error)
}

fn require_columns(from_column: usize, verbatim: &str) -> Result<ColumnSpan, LexicalError> {
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

impl TryFrom<RunRecord> for Run {
    type Error = LexicalError;

    fn try_from(record: RunRecord) -> Result<Self, Self::Error> {
        Run::from_parts(record)
    }
}

impl Serialize for Run {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Run", 7)?;
        state.serialize_field("bold", &self.bold)?;
        state.serialize_field("italic", &self.italic)?;
        state.serialize_field("code", &self.code)?;
        state.serialize_field("verbatim", &self.verbatim)?;
        state.serialize_field("plain_text", &self.plain_text)?;
        state.serialize_field("from_column", &self.from_column())?;
        state.serialize_field("to_column", &self.to_column())?;
        state.end()
    }
}

impl fmt::Display for Run {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.plain_text)
    }
}
