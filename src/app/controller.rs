//! Session controller: the single owner of every state node.
//!
//! Each node has exactly one producer here. The review-text node feeds the
//! sentiment node through the inference dispatch; the route node gates the
//! admin table node. Nothing else writes them.

use crate::config::AppConfig;
use crate::router::Route;
use crate::sentiment::ReviewDraft;

use super::jobs::ControllerJobs;
use super::state::{AdminState, SentimentNode, StatusTone, TableNode, UiState};

/// Maintains one session's state and bridges it to the worker threads.
pub struct AppController {
    pub ui: UiState,
    pub(super) jobs: ControllerJobs,
}

impl AppController {
    /// Build a controller wired to the configured backend.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            ui: UiState::default(),
            jobs: ControllerJobs::new(config.api_base().to_string()),
        }
    }

    #[cfg(test)]
    pub(super) fn detached() -> Self {
        Self {
            ui: UiState::default(),
            jobs: ControllerJobs::detached("http://backend.invalid/api".to_string()),
        }
    }

    /// Replace the review-text node with the latest textarea content.
    ///
    /// An unchanged draft is a no-op, so page switches and repeated events
    /// never re-trigger inference. An empty draft resets the sentiment node
    /// locally; any in-flight call is superseded and its result will be
    /// discarded on arrival.
    pub fn set_review_text(&mut self, text: &str) {
        let draft = ReviewDraft::new(text);
        if draft == self.ui.home.draft {
            return;
        }
        self.ui.home.draft = draft;
        match self.ui.home.draft.raw() {
            None => {
                self.jobs.clear_pending_inference();
                self.ui.home.sentiment = SentimentNode::Idle;
                self.ui.home.rating = 0;
            }
            Some(raw) => {
                let request_id = self.jobs.dispatch_inference(raw.to_string());
                tracing::debug!(request_id, "Dispatched sentiment inference");
                self.ui.home.sentiment = SentimentNode::Pending;
            }
        }
    }

    /// Override the rating slider. Ignored until a suggestion exists.
    pub fn set_rating(&mut self, rating: u8) {
        if !self.ui.home.sentiment.submit_enabled() {
            return;
        }
        self.ui.home.rating = rating.clamp(1, 5);
    }

    /// Persist the current review, then reset the form.
    ///
    /// A no-op when the draft is empty or the submit control is disabled;
    /// no network call is made in that case. While a previous submit is
    /// still in flight the draft is kept so the review is never dropped
    /// without a persistence call.
    pub fn submit(&mut self) {
        let Some(review) = self.ui.home.draft.raw().map(str::to_string) else {
            return;
        };
        if !self.ui.home.sentiment.submit_enabled() {
            return;
        }
        let rating = self.ui.home.rating.clamp(1, 5);
        if !self.jobs.begin_submit(review, rating) {
            self.set_status("A submit is still in progress", StatusTone::Warning);
            return;
        }
        self.set_status("Submitting review", StatusTone::Busy);
        // Resetting the draft resets the sentiment node through the normal
        // reactive chain.
        self.set_review_text("");
    }

    /// Move to the page selected by `path`.
    ///
    /// Re-evaluating the same path changes nothing. Entering the admin page
    /// starts the reviews fetch exactly once per entry; leaving it drops the
    /// table so a later entry never shows stale rows.
    pub fn navigate(&mut self, path: &str) {
        let route = Route::parse(path);
        if route == self.ui.route {
            return;
        }
        if self.ui.route == Route::Admin {
            self.ui.admin = AdminState::default();
            self.jobs.clear_pending_reviews();
        }
        self.ui.route = route;
        if route == Route::Admin {
            self.ui.admin.table = TableNode::Loading;
            let entry_id = self.jobs.begin_reviews_fetch();
            tracing::debug!(entry_id, "Entered admin page; fetching reviews");
            self.set_status("Loading reviews", StatusTone::Busy);
        }
    }

    /// Whether any network-backed work is outstanding.
    pub fn busy(&self) -> bool {
        self.jobs.pending_inference().is_some()
            || self.jobs.pending_reviews().is_some()
            || self.jobs.submit_in_progress()
    }

    pub(super) fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status.text = text.into();
        self.ui.status.tone = tone;
    }
}
