//! # Persisted Markup
//!
//! The document is stored as one opaque string of structured markup.
//!
//! | block | element | inline | element |
//! |---|---|---|---|
//! | paragraph | `<p>` | bold | `<strong>` |
//! | heading 1-3 | `<h1>`..`<h3>` | italic | `<em>` |
//! | blockquote | `<blockquote>` | code | `<code>` |
//! | code fence | `<pre>` | | |
//!
//! Writing then reading then running the pipeline reproduces the same
//! markup byte for byte.

pub mod reader;
pub mod writer;

pub use reader::from_markup;
pub use writer::{block_markup, to_markup};
