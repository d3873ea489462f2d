//! # Inline Transformation
//!
//! Rewrites inline delimiter pairs inside a block's content into style spans.
//!
//! ## Passes
//!
//! Three passes run in a fixed order, each over the output of the previous
//! one: bold (`**`), italic (`_`), code (`` ` ``). A pass that runs earlier
//! claims the outer delimiters, so `**_x_**` becomes bold wrapping italic.
//!
//! ## Modules
//!
//! - **`kinds`**: Inline types with owned delimiters (Bold, Italic, CodeSpan)
//! - **`cursor`**: `Cursor` for scanning text nodes
//! - **`parser`**: `transform_inline()` and the per-pass rewrite
//!
//! ## Raw Zones
//!
//! Code spans that already exist in the content are never looked inside.
//! Code fence blocks are skipped entirely.

pub mod cursor;
pub mod kinds;
pub mod parser;

pub use parser::{PASSES, parse_inline, transform_block, transform_inline};
