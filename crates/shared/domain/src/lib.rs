//! # Domain Models
//!
//! Pure data shared by every crate: configuration sections, the fixed editor
//! configuration and the attribute names that make up the field contract.
//! Keep it lean: no I/O and no document logic, only data and simple helpers.

pub mod config;
pub mod constants;
pub mod editor;
