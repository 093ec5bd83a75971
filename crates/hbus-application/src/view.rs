//! Response label view-model
//!
//! Stands in for the UI element the reply text lands on. The label is the
//! externally observable outcome of the round trip: the client's listener
//! writes it, tests and the CLI read it.

use hbus_domain::constants::INITIAL_RESPONSE_LABEL;
use hbus_domain::error::{Error, Result};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared mutable text label
///
/// Cloning is cheap and all clones observe the same text.
#[derive(Clone)]
pub struct ResponseLabel {
    text: Arc<RwLock<String>>,
}

impl ResponseLabel {
    /// Create a label showing the initial placeholder text
    pub fn new() -> Self {
        Self::with_text(INITIAL_RESPONSE_LABEL)
    }

    /// Create a label with specific text
    pub fn with_text<S: Into<String>>(text: S) -> Self {
        Self {
            text: Arc::new(RwLock::new(text.into())),
        }
    }

    /// Read the current text
    pub async fn text(&self) -> String {
        self.text.read().await.clone()
    }

    /// Overwrite the current text
    pub async fn set_text<S: Into<String>>(&self, text: S) {
        *self.text.write().await = text.into();
    }

    /// Check that the current text starts with `prefix`
    ///
    /// On mismatch the returned error embeds the text actually observed,
    /// so failures show what the label really said.
    pub async fn ensure_prefix(&self, prefix: &str) -> Result<()> {
        let actual = self.text().await;
        if actual.starts_with(prefix) {
            Ok(())
        } else {
            Err(Error::assertion(prefix, actual))
        }
    }
}

impl Default for ResponseLabel {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ResponseLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseLabel").finish_non_exhaustive()
    }
}
