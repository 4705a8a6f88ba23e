#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros for the workspace.
//! Currently a single attribute, [`macro@mdf_error`], which turns a plain enum
//! into a `thiserror` error with context support.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! mdf-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for defining crate-level error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `<Name>Ext` trait that adds `.context()`
///   to `Result<T, Name>` and to `Result<T, Source>` for every source-carrying variant.
/// * **Standard Conversions**: Implements `From<Source>` for variants with a `source` field
///   (or a field marked `#[source]`/`#[from]`), enabling `?`.
/// * **Internal Fallback**: Implements `From<&'static str>` and `From<String>` when an
///   `Internal { message, context }` variant exists.
/// * **`format_context`**: A private helper usable inside `#[error(...)]` strings.
///
/// # Requirements
///
/// 1. Only enums are accepted.
/// 2. Every variant must use named fields.
/// 3. A variant with a source must also carry `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use mdf_derive::mdf_error;
/// use std::borrow::Cow;
///
/// #[mdf_error]
/// pub enum MarkupError {
///     #[error("XML error{}: {source}", format_context(.context))]
///     Xml { source: quick_xml::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal markup error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn parse(reader: &mut Reader<&[u8]>) -> Result<(), MarkupError> {
///     reader.read_event().context("Reading document")?;
///     Err("unbalanced tags".into())
/// }
/// ```
#[proc_macro_attribute]
pub fn mdf_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}
