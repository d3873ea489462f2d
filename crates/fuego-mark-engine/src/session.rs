//! Editor session: the explicit context the host owns for one open document.
//!
//! Holds the store, the document key, the current document and its
//! serialized form, plus the small bits of display state the host toggles
//! (focus mode, save indicator).

use std::time::{Duration, Instant};

use crate::markup::{from_markup, to_markup};
use crate::model::{ContentUnit, Document};
use crate::parsing::on_content_changed;
use crate::status::SaveStatus;
use crate::store::{DocumentStore, StoreError};

/// Key the document is stored under unless configured otherwise.
pub const DEFAULT_DOCUMENT_KEY: &str = "fuego-mark-doc";

/// Shown in place of content while the document is blank.
pub const PLACEHOLDER: &str = "Start writing your ideas here...";

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Document store error: {0}")]
    Store(#[from] StoreError),
}

pub struct EditorSession<S: DocumentStore> {
    store: S,
    key: String,
    document: Document,
    markup: String,
    status: SaveStatus,
    focus_mode: bool,
}

impl<S: DocumentStore> EditorSession<S> {
    /// Opens the document stored under `key`, or an empty one.
    ///
    /// Reads the store exactly once. Stored markup is run through the
    /// pipeline so the session always holds fully classified blocks.
    pub fn open(store: S, key: &str) -> Result<Self, SessionError> {
        let stored = store.get(key)?;
        let document = match &stored {
            Some(markup) => on_content_changed(from_markup(markup)),
            None => Document::default(),
        };
        let markup = to_markup(&document);
        log::info!(
            "opened document {key:?}: {} blocks ({})",
            document.len(),
            if stored.is_some() { "stored" } else { "new" }
        );
        Ok(Self {
            store,
            key: key.to_string(),
            document,
            markup,
            status: SaveStatus::default(),
            focus_mode: false,
        })
    }

    /// Sets the window after which the status falls back to "Saved".
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.status = SaveStatus::new(debounce);
        self
    }

    /// Handles one content-change event: classify, transform, persist.
    ///
    /// On a store error the document still reflects the edit, while
    /// [`Self::markup`] keeps the last value the store accepted.
    pub fn on_content_changed(&mut self, units: Vec<ContentUnit>) -> Result<&Document, SessionError> {
        self.on_content_changed_at(units, Instant::now())
    }

    /// As [`Self::on_content_changed`], with the event time supplied.
    pub fn on_content_changed_at(
        &mut self,
        units: Vec<ContentUnit>,
        now: Instant,
    ) -> Result<&Document, SessionError> {
        self.status.touch(now);
        self.document = on_content_changed(Document::new(units));
        let markup = to_markup(&self.document);
        self.store.set(&self.key, &markup)?;
        self.markup = markup;
        Ok(&self.document)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Serialized form of the current document, as last persisted.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn is_blank(&self) -> bool {
        self.document.is_blank()
    }

    /// Placeholder text to show, if the document is blank.
    pub fn placeholder(&self) -> Option<&'static str> {
        self.is_blank().then_some(PLACEHOLDER)
    }

    pub fn status(&self) -> &SaveStatus {
        &self.status
    }

    pub fn status_label(&self, now: Instant) -> &'static str {
        self.status.label(now)
    }

    pub fn focus_mode(&self) -> bool {
        self.focus_mode
    }

    /// Flips focus mode and returns the new state.
    pub fn toggle_focus_mode(&mut self) -> bool {
        self.focus_mode = !self.focus_mode;
        self.focus_mode
    }
}
