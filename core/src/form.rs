//! Submit-gated form for creating a todo.
//!
//! # Design
//! Keystrokes only validate once the text is longer than the threshold;
//! blur and submit validate unconditionally. Submit clears the draft as soon
//! as the length gate passes, before the save resolves, and then validates
//! the title that was submitted. A failed save is reported and logged, never
//! returned as an error. Blur after a submit re-checks the field as it is
//! now, which is empty after a save.

use std::sync::Arc;

use tracing::warn;

use crate::config::ClientConfig;
use crate::diagnostics::DiagnosticSink;
use crate::store::TodoStore;
use crate::types::{DraftTodo, TodoItem};
use crate::validator::InputValidator;

/// What a call to `submit` ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The store saved the draft.
    Saved(TodoItem),
    /// The title was too short; nothing was sent.
    Rejected,
    /// The save was attempted and failed. The failure went to the sink.
    Failed,
}

pub struct TodoFormController {
    draft: DraftTodo,
    validator: InputValidator,
    store: TodoStore,
    sink: Arc<dyn DiagnosticSink>,
}

impl TodoFormController {
    /// Bind a form to `store`, reporting failures to the store's sink.
    pub fn new(store: TodoStore, config: &ClientConfig) -> Self {
        let sink = Arc::clone(store.sink());
        Self::with_sink(store, config, sink)
    }

    pub fn with_sink(store: TodoStore, config: &ClientConfig, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            draft: DraftTodo::default(),
            validator: InputValidator::with_threshold(config.min_title_len),
            store,
            sink,
        }
    }

    pub fn draft(&self) -> &DraftTodo {
        &self.draft
    }

    pub fn warning(&self) -> bool {
        self.validator.warning()
    }

    pub fn validator(&self) -> &InputValidator {
        &self.validator
    }

    pub fn store(&self) -> &TodoStore {
        &self.store
    }

    pub fn on_input(&mut self, text: &str) {
        self.draft.title = text.to_string();
        self.validator.set_value(text);
        if self.validator.accepts(text) {
            self.validator.validate(text);
        }
    }

    pub fn on_toggle_status(&mut self) {
        self.draft.status = !self.draft.status;
    }

    pub fn on_blur(&mut self) {
        self.validator.on_blur();
    }

    pub fn reset_warning(&mut self) {
        self.validator.reset();
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        let title = self.draft.title.clone();

        let outcome = if self.validator.accepts(&title) {
            let draft = std::mem::take(&mut self.draft);
            match self.store.save_todo(&draft).await {
                Ok(todo) => SubmitOutcome::Saved(todo),
                Err(err) => {
                    warn!(title = %draft.title, error = %err, "submit failed");
                    self.sink.report(&err);
                    SubmitOutcome::Failed
                }
            }
        } else {
            SubmitOutcome::Rejected
        };

        self.validator.validate(&title);
        self.validator.set_value(&self.draft.title);
        outcome
    }
}

impl std::fmt::Debug for TodoFormController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoFormController")
            .field("draft", &self.draft)
            .field("validator", &self.validator)
            .finish_non_exhaustive()
    }
}
