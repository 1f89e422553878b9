//! Debounced autosave controller.
//!
//! Drives a [`SuggestionDraft`] on a background task: keystrokes restart a
//! single debounce timer, timer expiry asks the draft whether to write, and
//! writes run as subtasks that report settlement back through the same event
//! channel. The draft guarantees at most one write in flight and exactly one
//! trailing resave when edits land mid-write.
//!
//! Dropping the controller cancels the pending timer and detaches any
//! in-flight write; the write completes against the backend but its result
//! is never applied.

use std::{sync::Arc, time::Duration};

use tokio::{
    sync::{mpsc, watch},
    task::JoinHandle,
    time::{Instant, sleep},
};
use tracing::debug;
use tuckshop::suggestions::{DraftStatus, SuggestionDraft};

use crate::domain::orders::OrderUuid;

use super::service::SuggestionsApi;

enum Event {
    Input(String),
    Settled(Result<(), String>),
}

/// Autosave for one order's suggestion text.
#[derive(Debug)]
pub struct AutosaveController {
    events: mpsc::UnboundedSender<Event>,
    status: watch::Receiver<DraftStatus>,
    task: JoinHandle<()>,
}

impl AutosaveController {
    /// Start a controller for `order`, saving through `api` after `window`
    /// of quiet.
    #[must_use]
    pub fn spawn(api: Arc<dyn SuggestionsApi>, order: OrderUuid, window: Duration) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (status_tx, status_rx) = watch::channel(DraftStatus::Idle);

        let worker = Worker {
            api,
            order,
            window,
            draft: SuggestionDraft::new(),
            events: events_tx.clone(),
            status: status_tx,
        };

        Self {
            events: events_tx,
            status: status_rx,
            task: tokio::spawn(worker.run(events_rx)),
        }
    }

    /// Feed the latest text of the input field. Restarts the debounce window.
    pub fn input_changed(&self, text: impl Into<String>) {
        if self.events.send(Event::Input(text.into())).is_err() {
            debug!("autosave worker stopped, dropping input");
        }
    }

    /// The draft status as of the last transition.
    #[must_use]
    pub fn status(&self) -> DraftStatus {
        self.status.borrow().clone()
    }

    /// A watcher over status transitions, for UIs that render them live.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<DraftStatus> {
        self.status.clone()
    }
}

impl Drop for AutosaveController {
    fn drop(&mut self) {
        self.task.abort();
    }
}

struct Worker {
    api: Arc<dyn SuggestionsApi>,
    order: OrderUuid,
    window: Duration,
    draft: SuggestionDraft,
    events: mpsc::UnboundedSender<Event>,
    status: watch::Sender<DraftStatus>,
}

impl Worker {
    async fn run(mut self, mut events: mpsc::UnboundedReceiver<Event>) {
        let deadline = sleep(self.window);
        tokio::pin!(deadline);

        // the timer only counts while armed; every input re-arms it
        let mut armed = false;

        loop {
            tokio::select! {
                event = events.recv() => match event {
                    Some(Event::Input(text)) => {
                        self.draft.text_changed(text);
                        deadline.as_mut().reset(Instant::now() + self.window);
                        armed = true;
                        self.publish();
                    }
                    Some(Event::Settled(result)) => {
                        if let Some(payload) = self.draft.save_settled(result) {
                            self.dispatch(payload);
                        }
                        self.publish();
                    }
                    None => break,
                },
                () = deadline.as_mut(), if armed => {
                    armed = false;

                    if let Some(payload) = self.draft.debounce_fired() {
                        self.dispatch(payload);
                    }
                    self.publish();
                }
            }
        }
    }

    /// Issue the remote write as a subtask; settlement comes back as an event.
    fn dispatch(&self, payload: String) {
        let api = Arc::clone(&self.api);
        let order = self.order;
        let events = self.events.clone();

        tokio::spawn(async move {
            let result = api
                .save_suggestion(order, &payload)
                .await
                .map_err(|error| error.to_string());

            if events.send(Event::Settled(result)).is_err() {
                debug!("autosave worker stopped, discarding stale settlement");
            }
        });
    }

    fn publish(&self) {
        self.status.send_replace(self.draft.status().clone());
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use tokio::{task, time};

    use crate::domain::suggestions::errors::SuggestionsApiError;

    use super::*;

    const WINDOW: Duration = Duration::from_millis(600);

    /// Test double recording every payload, with a configurable settle
    /// latency and outcome.
    struct RecordingApi {
        calls: Mutex<Vec<String>>,
        latency: Duration,
        reject_with: Option<String>,
    }

    impl RecordingApi {
        fn instant() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                latency: Duration::ZERO,
                reject_with: None,
            }
        }

        fn slow(latency: Duration) -> Self {
            Self {
                latency,
                ..Self::instant()
            }
        }

        fn rejecting(message: &str) -> Self {
            Self {
                reject_with: Some(message.to_owned()),
                ..Self::instant()
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner)
                .clone()
        }
    }

    #[async_trait]
    impl SuggestionsApi for RecordingApi {
        async fn save_suggestion(
            &self,
            _order: OrderUuid,
            text: &str,
        ) -> Result<(), SuggestionsApiError> {
            self.calls
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner)
                .push(text.to_owned());

            time::sleep(self.latency).await;

            match &self.reject_with {
                Some(message) => Err(SuggestionsApiError::Rejected(message.clone())),
                None => Ok(()),
            }
        }
    }

    /// Let queued events and freshly woken tasks run to quiescence.
    async fn drain() {
        for _ in 0..16 {
            task::yield_now().await;
        }
    }

    async fn type_text(controller: &AutosaveController, text: &str) {
        controller.input_changed(text);
        drain().await;
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_typing_coalesces_into_one_write_with_the_final_text() {
        let api = Arc::new(RecordingApi::instant());
        let controller =
            AutosaveController::spawn(Arc::clone(&api) as Arc<dyn SuggestionsApi>, OrderUuid::generate(), WINDOW);

        for text in ["h", "he", "hel", "hello"] {
            type_text(&controller, text).await;
            time::advance(Duration::from_millis(100)).await;
            drain().await;
        }

        time::advance(WINDOW).await;
        drain().await;

        assert_eq!(api.calls(), vec!["hello".to_owned()]);
        assert_eq!(controller.status(), DraftStatus::Saved);
    }

    #[tokio::test(start_paused = true)]
    async fn an_edit_during_a_write_issues_one_follow_up_with_the_latest_text() {
        let api = Arc::new(RecordingApi::slow(Duration::from_secs(1)));
        let controller =
            AutosaveController::spawn(Arc::clone(&api) as Arc<dyn SuggestionsApi>, OrderUuid::generate(), WINDOW);

        type_text(&controller, "first").await;
        time::advance(WINDOW).await;
        drain().await;

        assert_eq!(api.calls(), vec!["first".to_owned()]);
        assert_eq!(controller.status(), DraftStatus::Saving);

        type_text(&controller, "second").await;
        time::advance(WINDOW).await;
        drain().await;

        // still only the in-flight write; the resave is queued behind it
        assert_eq!(api.calls().len(), 1);

        time::advance(Duration::from_secs(1)).await;
        drain().await;

        assert_eq!(api.calls(), vec!["first".to_owned(), "second".to_owned()]);

        time::advance(Duration::from_secs(1)).await;
        drain().await;

        assert_eq!(controller.status(), DraftStatus::Saved);
        assert_eq!(api.calls().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn identical_text_twice_writes_once_then_goes_straight_to_saved() {
        let api = Arc::new(RecordingApi::instant());
        let controller =
            AutosaveController::spawn(Arc::clone(&api) as Arc<dyn SuggestionsApi>, OrderUuid::generate(), WINDOW);

        type_text(&controller, "hello").await;
        time::advance(WINDOW).await;
        drain().await;

        type_text(&controller, "hello").await;
        time::advance(WINDOW).await;
        drain().await;

        assert_eq!(api.calls(), vec!["hello".to_owned()]);
        assert_eq!(controller.status(), DraftStatus::Saved);
    }

    #[tokio::test(start_paused = true)]
    async fn a_failed_write_surfaces_the_message_and_is_not_retried() {
        let api = Arc::new(RecordingApi::rejecting("suggestion too long"));
        let controller =
            AutosaveController::spawn(Arc::clone(&api) as Arc<dyn SuggestionsApi>, OrderUuid::generate(), WINDOW);

        type_text(&controller, "very long text").await;
        time::advance(WINDOW).await;
        drain().await;

        assert_eq!(
            controller.status(),
            DraftStatus::Failed("suggestion too long".to_owned())
        );

        time::advance(Duration::from_secs(30)).await;
        drain().await;

        assert_eq!(api.calls().len(), 1, "no automatic retry");
    }

    #[tokio::test(start_paused = true)]
    async fn clearing_the_text_goes_idle_without_a_remote_call() {
        let api = Arc::new(RecordingApi::instant());
        let controller =
            AutosaveController::spawn(Arc::clone(&api) as Arc<dyn SuggestionsApi>, OrderUuid::generate(), WINDOW);

        type_text(&controller, "keep the change").await;
        time::advance(WINDOW).await;
        drain().await;

        type_text(&controller, "   ").await;
        time::advance(WINDOW).await;
        drain().await;

        assert_eq!(controller.status(), DraftStatus::Idle);
        assert_eq!(api.calls().len(), 1, "clearing is a remote no-op");
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_controller_cancels_the_pending_debounce() {
        let api = Arc::new(RecordingApi::instant());
        let controller =
            AutosaveController::spawn(Arc::clone(&api) as Arc<dyn SuggestionsApi>, OrderUuid::generate(), WINDOW);

        type_text(&controller, "never saved").await;
        drop(controller);

        time::advance(WINDOW).await;
        drain().await;

        assert!(api.calls().is_empty(), "teardown cancels the timer");
    }
}
