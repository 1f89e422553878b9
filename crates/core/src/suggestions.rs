//! Suggestion drafts
//!
//! The debounced-autosave state machine behind free-text order suggestions.
//! The machine is sans-IO: the caller owns the debounce timer and the remote
//! write, and feeds events in ([`SuggestionDraft::text_changed`],
//! [`SuggestionDraft::debounce_fired`], [`SuggestionDraft::save_settled`]).
//! When a remote write should be issued, an event returns its payload.
//!
//! At most one write is ever outstanding. A debounce firing that lands while
//! a write is in flight queues exactly one trailing resave, which runs
//! against the text current at the moment the in-flight write settles.

/// Where a draft currently stands, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DraftStatus {
    /// No text and nothing to save.
    #[default]
    Idle,

    /// Text present, waiting out the debounce window.
    Typing,

    /// A remote write is in flight.
    Saving,

    /// The last write succeeded and matched the text at the time.
    Saved,

    /// The last write failed; the message is kept for inline display.
    Failed(String),
}

/// One order's free-text suggestion draft.
#[derive(Debug, Default)]
pub struct SuggestionDraft {
    current_text: String,
    last_saved_text: String,
    in_flight_text: Option<String>,
    resave_queued: bool,
    status: DraftStatus,
}

impl SuggestionDraft {
    /// A fresh draft with no text and nothing saved.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current draft status.
    pub fn status(&self) -> &DraftStatus {
        &self.status
    }

    /// The text as last typed.
    pub fn current_text(&self) -> &str {
        &self.current_text
    }

    /// The text most recently confirmed by the remote store.
    pub fn last_saved_text(&self) -> &str {
        &self.last_saved_text
    }

    /// Whether a remote write is outstanding.
    pub fn save_in_flight(&self) -> bool {
        self.in_flight_text.is_some()
    }

    /// Whether a trailing resave is queued behind the in-flight write.
    pub fn resave_queued(&self) -> bool {
        self.resave_queued
    }

    /// Record a keystroke. The caller must restart its debounce timer after
    /// every call.
    pub fn text_changed(&mut self, text: impl Into<String>) {
        self.current_text = text.into();
        self.status = DraftStatus::Typing;
    }

    /// The debounce timer elapsed; decide what, if anything, to write.
    ///
    /// Returns the payload of the remote write the caller must now issue, or
    /// `None` when no write is needed: the trimmed text is empty (the draft
    /// resets to idle, clearing is a remote no-op), the trimmed text already
    /// matches the last saved value, or a write is still in flight (a single
    /// trailing resave is queued instead).
    pub fn debounce_fired(&mut self) -> Option<String> {
        let trimmed = self.current_text.trim();

        if trimmed.is_empty() {
            self.status = DraftStatus::Idle;
            self.last_saved_text.clear();
            self.resave_queued = false;
            return None;
        }

        if trimmed == self.last_saved_text {
            self.status = DraftStatus::Saved;
            return None;
        }

        if self.in_flight_text.is_some() {
            self.resave_queued = true;
            return None;
        }

        let payload = trimmed.to_owned();
        self.in_flight_text = Some(payload.clone());
        self.status = DraftStatus::Saving;

        Some(payload)
    }

    /// The in-flight write settled. On success the flown payload becomes the
    /// last saved text; on failure the message is retained and no automatic
    /// retry happens. Either way, a queued resave is then re-decided against
    /// the latest text and may return one more payload to write.
    ///
    /// A settlement arriving after the draft was cleared back to idle is
    /// discarded.
    pub fn save_settled(&mut self, result: Result<(), String>) -> Option<String> {
        let settled = self.in_flight_text.take();

        if self.status == DraftStatus::Idle {
            return None;
        }

        match result {
            Ok(()) => {
                if let Some(text) = settled {
                    self.last_saved_text = text;
                }
                self.status = DraftStatus::Saved;
            }
            Err(message) => {
                self.status = DraftStatus::Failed(message);
            }
        }

        if self.resave_queued {
            self.resave_queued = false;
            return self.debounce_fired();
        }

        None
    }
}
