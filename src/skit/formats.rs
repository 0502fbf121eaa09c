//! Output formats for lexical values
//!
//!     Lexical values are rendered for inspection tooling in one of three formats:
//!
//!         - text: a one-line summary, e.g. `identifier 15..41 "Example! Ident*ifier String" -> example-ident-ifier-string`
//!         - json: the serialized value, tagged with its `kind`
//!         - yaml: same shape as json
//!
//!     Derived fields (`normalized`, `to_column`) are included in the structured formats so
//!     consumers never have to recompute them.

use crate::skit::lexical::{Identifier, Run};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Any lexical value the formats know how to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Lexeme {
    Identifier(Identifier),
    Run(Run),
}

impl From<Identifier> for Lexeme {
    fn from(identifier: Identifier) -> Self {
        Lexeme::Identifier(identifier)
    }
}

impl From<Run> for Lexeme {
    fn from(run: Run) -> Self {
        Lexeme::Run(run)
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Format {
    Text,
    Json,
    Yaml,
}

impl Format {
    pub const ALL: [Format; 3] = [Format::Text, Format::Json, Format::Yaml];

    pub fn name(&self) -> &'static str {
        match self {
            Format::Text => "text",
            Format::Json => "json",
            Format::Yaml => "yaml",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Format {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| FormatError::UnknownFormat(s.to_string()))
    }
}

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("unknown format '{0}' (available: text, json, yaml)")]
    UnknownFormat(String),
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Render a lexical value in the given format.
///
/// `pretty` only affects JSON; YAML is always block-styled and text is always one line.
pub fn render(lexeme: &Lexeme, format: Format, pretty: bool) -> Result<String, FormatError> {
    let output = match format {
        Format::Text => summarize(lexeme),
        Format::Json if pretty => serde_json::to_string_pretty(lexeme)?,
        Format::Json => serde_json::to_string(lexeme)?,
        Format::Yaml => serde_yaml::to_string(lexeme)?,
    };
    Ok(output)
}

fn summarize(lexeme: &Lexeme) -> String {
    match lexeme {
        Lexeme::Identifier(identifier) => format!(
            "identifier {} {:?} -> {}",
            identifier.columns(),
            identifier.verbatim(),
            identifier.normalized()
        ),
        Lexeme::Run(run) => {
            let mut flags = Vec::new();
            if run.bold() {
                flags.push("bold");
            }
            if run.italic() {
                flags.push("italic");
            }
            if run.code() {
                flags.push("code");
            }
            let flags = if flags.is_empty() {
                "plain".to_string()
            } else {
                flags.join("+")
            };
            format!(
                "run {} [{}] {:?} -> {:?}",
                run.columns(),
                flags,
                run.verbatim(),
                run.plain_text()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!("text".parse::<Format>().unwrap(), Format::Text);
        assert_eq!("json".parse::<Format>().unwrap(), Format::Json);
        assert_eq!("yaml".parse::<Format>().unwrap(), Format::Yaml);
        let error = "xml".parse::<Format>().unwrap_err();
        assert_eq!(
            error.to_string(),
            "unknown format 'xml' (available: text, json, yaml)"
        );
    }

    #[test]
    fn test_format_display_round_trips_names() {
        for format in Format::ALL {
            assert_eq!(format.to_string().parse::<Format>().unwrap(), format);
        }
    }

    #[test]
    fn test_text_summary_for_identifier() {
        let lexeme = Lexeme::from(Identifier::new("Example! Ident*ifier String", 15).unwrap());
        assert_eq!(
            render(&lexeme, Format::Text, false).unwrap(),
            r#"identifier 15..41 "Example! Ident*ifier String" -> example-ident-ifier-string"#
        );
    }

    #[test]
    fn test_text_summary_for_run() {
        let lexeme = Lexeme::from(Run::new(true, false, true, "**`ls`**", "ls", 3).unwrap());
        assert_eq!(
            render(&lexeme, Format::Text, false).unwrap(),
            r#"run 3..10 [bold+code] "**`ls`**" -> "ls""#
        );
    }

    #[test]
    fn test_compact_json_is_tagged() {
        let lexeme = Lexeme::from(Identifier::new("Romeo", 1).unwrap());
        assert_eq!(
            render(&lexeme, Format::Json, false).unwrap(),
            r#"{"kind":"identifier","verbatim":"Romeo","normalized":"romeo","from_column":1,"to_column":5}"#
        );
    }

    #[test]
    fn test_yaml_contains_derived_fields() {
        let lexeme = Lexeme::from(Run::new(false, true, false, "_Hi_", "Hi", 2).unwrap());
        let yaml = render(&lexeme, Format::Yaml, false).unwrap();
        assert!(yaml.starts_with("kind: run\n"));
        assert!(yaml.contains("italic: true\n"));
        assert!(yaml.contains("to_column: 5\n"));
    }
}
