//! Block types that own their syntax delimiters.
//!
//! The classifier asks these types; it never hardcodes `#`, `>` or backticks.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod paragraph;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use paragraph::Paragraph;
