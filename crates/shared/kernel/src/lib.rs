//! Kernel utilities shared across slices.
//! Keep this crate lightweight: the document tree fields live in, markup
//! reading/writing and layered config loading.
//!
//! ## Documents
//! ```rust
//! use mdf_kernel::markup::{parse_document, render};
//!
//! let doc = parse_document(r#"<form id="post"><textarea data-md-editor="true"/></form>"#).unwrap();
//! let form = doc.find_by_id("post").unwrap();
//! assert_eq!(doc.descendants(form).count(), 2);
//! assert_eq!(render(&doc), r#"<form id="post"><textarea data-md-editor="true"></textarea></form>"#);
//! ```
//!
//! ## Config loading
//! ```rust,no_run
//! use mdf_kernel::config::load_config;
//! use mdf_kernel::domain::config::AppConfig;
//!
//! let cfg: AppConfig = load_config(Some("mdfield.toml")).unwrap();
//! ```
pub mod config;
pub mod dom;
pub mod markup;

pub use mdf_domain as domain;
