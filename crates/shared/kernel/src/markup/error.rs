use crate::dom::DocumentError;
use std::borrow::Cow;

/// Errors raised while reading or writing XHTML markup.
#[mdf_derive::mdf_error]
pub enum MarkupError {
    /// Malformed input (bad syntax, encoding, escapes or unbalanced tags).
    #[error("Markup syntax error{}: {message}", format_context(.context))]
    Syntax { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A fragment must contain exactly one top-level element.
    #[error("Invalid fragment{}: {message}", format_context(.context))]
    Fragment { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The parsed structure was rejected by the document tree.
    #[error("Document error{}: {source}", format_context(.context))]
    Document { source: DocumentError, context: Option<Cow<'static, str>> },
}
