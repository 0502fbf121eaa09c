//! Run construction as seen by the markup stripper

use rstest::rstest;
use skitscript::skit::lexical::{
    ErrorKind, LexicalError, Parameter, Run, RunRecord, Violation,
};

fn example(bold: bool, italic: bool, code: bool, from_column: usize) -> Result<Run, LexicalError> {
    Run::new(
        bold,
        italic,
        code,
        "Example Verbatim String",
        "Example Plain Text String",
        from_column,
    )
}

#[test]
fn test_missing_verbatim_is_a_precondition_failure() {
    let error = Run::from_parts(RunRecord {
        plain_text: Some("Example Plain Text String".into()),
        from_column: 15,
        ..RunRecord::default()
    })
    .unwrap_err();
    assert!(error.is_precondition());
    assert_eq!(error.parameter(), Parameter::Verbatim);
}

#[test]
fn test_missing_plain_text_is_a_precondition_failure() {
    let error = Run::from_parts(RunRecord {
        verbatim: Some("Example Verbatim String".into()),
        from_column: 15,
        ..RunRecord::default()
    })
    .unwrap_err();
    assert!(error.is_precondition());
    assert_eq!(error.parameter(), Parameter::PlainText);
}

#[rstest]
#[case("")]
#[case("Example Plain Text String")]
fn test_empty_verbatim_is_rejected(#[case] plain_text: &str) {
    let error = Run::new(false, false, false, "", plain_text, 15).unwrap_err();
    assert_eq!(
        error,
        LexicalError::Invalid {
            parameter: Parameter::Verbatim,
            violation: Violation::Empty,
        }
    );
    assert_eq!(error.kind(), ErrorKind::Blank);
}

#[test]
fn test_empty_plain_text_is_rejected() {
    let error = Run::new(false, false, false, "Example Verbatim String", "", 15).unwrap_err();
    assert_eq!(error.parameter(), Parameter::PlainText);
    assert_eq!(error.violation(), Some(&Violation::Empty));
}

#[test]
fn test_from_column_below_one_is_rejected() {
    let error = example(false, false, false, 0).unwrap_err();
    assert_eq!(error.parameter(), Parameter::FromColumn);
    assert_eq!(error.kind(), ErrorKind::MalformedPosition);
}

#[rstest]
fn test_copies_flags(
    #[values(false, true)] bold: bool,
    #[values(false, true)] italic: bool,
    #[values(false, true)] code: bool,
) {
    let run = example(bold, italic, code, 15).unwrap();
    assert_eq!(run.bold(), bold);
    assert_eq!(run.italic(), italic);
    assert_eq!(run.code(), code);
    assert_eq!(run.is_plain(), !(bold || italic || code));
}

#[test]
fn test_copies_texts() {
    let run = example(false, false, false, 15).unwrap();
    assert_eq!(run.verbatim(), "Example Verbatim String");
    assert_eq!(run.plain_text(), "Example Plain Text String");
}

#[rstest]
#[case(1)]
#[case(15)]
fn test_copies_from_column(#[case] from_column: usize) {
    let run = example(false, false, false, from_column).unwrap();
    assert_eq!(run.from_column(), from_column);
}

#[test]
fn test_calculates_to_column_from_verbatim() {
    let run = example(false, false, false, 15).unwrap();
    assert_eq!(run.to_column(), 37);
}

#[test]
fn test_plain_text_may_be_longer_than_verbatim() {
    let run = Run::new(false, false, true, "`x`", "a longer rendering", 1).unwrap();
    assert_eq!(run.to_column(), 3);
}

#[test]
fn test_span_may_end_on_the_last_column() {
    let run = Run::new(true, false, false, "**x**", "x", usize::MAX - 4).unwrap();
    assert_eq!(run.to_column(), usize::MAX);
}

#[rstest]
#[case(usize::MAX)]
#[case(usize::MAX - 3)]
fn test_span_past_the_last_column_is_rejected(#[case] from_column: usize) {
    let error = Run::new(true, false, false, "**x**", "x", from_column).unwrap_err();
    assert_eq!(error.parameter(), Parameter::FromColumn);
    assert_eq!(error.violation(), Some(&Violation::ColumnOutOfRange));
    assert_eq!(error.kind(), ErrorKind::MalformedPosition);
}
