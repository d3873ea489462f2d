//! # Inline Kinds
//!
//! Inline types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Bold`**: `DELIM = "**"`
//! - **`Italic`**: `DELIM = "_"`
//! - **`CodeSpan`**: ``DELIM = "`"`` - raw zone once created
//!
//! All delimiter constants live here, not scattered in parser code.

pub mod bold;
pub mod code_span;
pub mod italic;

pub use bold::Bold;
pub use code_span::CodeSpan;
pub use italic::Italic;
