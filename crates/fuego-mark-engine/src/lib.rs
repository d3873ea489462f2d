pub mod commands;
pub mod markup;
pub mod model;
pub mod parsing;
pub mod session;
pub mod status;
pub mod store;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use commands::{LineEdit, StyleCommand, UnknownCommand, word_range};
pub use markup::{from_markup, to_markup};
pub use model::*;
pub use parsing::on_content_changed;
pub use session::{DEFAULT_DOCUMENT_KEY, EditorSession, PLACEHOLDER, SessionError};
pub use status::SaveStatus;
pub use store::{DocumentStore, FileStore, MemoryStore, StoreError};
