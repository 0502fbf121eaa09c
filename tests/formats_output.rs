//! Rendered output of lexical values

use skitscript::skit::formats::{render, Format, Lexeme};
use skitscript::{Identifier, Run};

#[test]
fn test_identifier_as_pretty_json() {
    let lexeme = Lexeme::from(Identifier::new("Example! Ident*ifier String", 15).unwrap());
    let output = render(&lexeme, Format::Json, true).unwrap();
    insta::assert_snapshot!(output, @r###"
    {
      "kind": "identifier",
      "verbatim": "Example! Ident*ifier String",
      "normalized": "example-ident-ifier-string",
      "from_column": 15,
      "to_column": 41
    }
    "###);
}

#[test]
fn test_run_as_pretty_json() {
    let lexeme = Lexeme::from(
        Run::new(
            false,
            false,
            false,
            "Example Verbatim String",
            "Example Plain Text String",
            15,
        )
        .unwrap(),
    );
    let output = render(&lexeme, Format::Json, true).unwrap();
    insta::assert_snapshot!(output, @r###"
    {
      "kind": "run",
      "bold": false,
      "italic": false,
      "code": false,
      "verbatim": "Example Verbatim String",
      "plain_text": "Example Plain Text String",
      "from_column": 15,
      "to_column": 37
    }
    "###);
}

#[test]
fn test_run_as_text() {
    let lexeme = Lexeme::from(Run::new(false, true, false, "_Hello_", "Hello", 9).unwrap());
    let output = render(&lexeme, Format::Text, true).unwrap();
    insta::assert_snapshot!(output, @r###"run 9..15 [italic] "_Hello_" -> "Hello""###);
}
