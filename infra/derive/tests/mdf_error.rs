use mdf_derive::mdf_error;
use std::borrow::Cow;

#[mdf_error]
pub enum SampleError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Internal sample error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn failing_io() -> Result<(), std::io::Error> {
    Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"))
}

#[test]
fn mdf_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/mdf_error_pass.rs");
    t.compile_fail("tests/ui/mdf_error_no_context.rs");
    t.compile_fail("tests/ui/mdf_error_tuple_variant.rs");
}

#[test]
fn source_errors_convert_with_question_mark() {
    fn run() -> Result<(), SampleError> {
        failing_io()?;
        Ok(())
    }

    let err = run().expect_err("io failure should propagate");
    assert!(matches!(err, SampleError::Io { context: None, .. }));
    assert_eq!(err.to_string(), "IO error: missing");
}

#[test]
fn context_is_attached_to_source_results() {
    let err = failing_io().context("Reading fixture").expect_err("should fail");
    assert_eq!(err.to_string(), "IO error (Reading fixture): missing");
}

#[test]
fn context_overrides_on_own_results() {
    let result: Result<(), SampleError> = Err("unbalanced".into());
    let err = result.context("Parsing").expect_err("should fail");
    assert_eq!(err.to_string(), "Internal sample error (Parsing): unbalanced");
}

#[test]
fn internal_accepts_owned_strings() {
    let err = SampleError::from(format!("node {} missing", 3));
    assert!(matches!(err, SampleError::Internal { .. }));
    assert_eq!(err.to_string(), "Internal sample error: node 3 missing");
}
