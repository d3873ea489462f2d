//! # Block Classification
//!
//! Turns top-level content units into blocks.
//!
//! ## Modules
//!
//! - **`kinds`**: Block-specific types with owned delimiters (Heading, BlockQuote, CodeFence, Paragraph)
//! - **`classify`**: `BlockClassifier` maps one unit's text to a `UnitClass`
//! - **`builder`**: `BlockBuilder` collects blocks from a unit stream
//!
//! ## Rule Order
//!
//! First match wins: `### `, `## `, `# `, `> `, bare ```` ``` ````, any
//! visible text (paragraph). Whitespace-only units produce nothing.

pub mod builder;
pub mod classify;
pub mod kinds;

pub use builder::BlockBuilder;
pub use classify::{BlockClassifier, UnitClass};
