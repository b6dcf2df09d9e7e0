//! Drain loop applying worker results back onto the state nodes.

use crate::review_table;
use crate::sentiment::SentimentResult;

use super::AppController;
use super::jobs::JobMessage;
use super::state::{SentimentNode, StatusTone, TableNode};
use crate::router::Route;

impl AppController {
    /// Apply every queued worker result.
    ///
    /// Results carry the id they were dispatched under; anything that no
    /// longer matches the pending id was superseded by newer input and is
    /// dropped here ("last input wins"). Each surviving result replaces its
    /// node wholesale, so the view never observes a partial update.
    pub fn poll_jobs(&mut self) {
        loop {
            let message = match self.jobs.try_recv_message() {
                Ok(message) => message,
                Err(
                    std::sync::mpsc::TryRecvError::Empty
                    | std::sync::mpsc::TryRecvError::Disconnected,
                ) => {
                    break;
                }
            };

            match message {
                JobMessage::Inference(message) => {
                    let Some(pending) = self.jobs.pending_inference() else {
                        continue;
                    };
                    if message.request_id != pending {
                        tracing::debug!(
                            request_id = message.request_id,
                            "Discarding superseded inference result"
                        );
                        continue;
                    }
                    self.jobs.clear_pending_inference();
                    if self.ui.home.draft.is_empty() {
                        continue;
                    }
                    match message.result {
                        Ok(probability) => {
                            let result = SentimentResult::from_probability(probability);
                            self.set_status(
                                format!("Sentiment: {}%", result.probability_percent),
                                StatusTone::Info,
                            );
                            self.ui.home.rating = result.suggested_rating;
                            self.ui.home.sentiment = SentimentNode::Ready(result);
                        }
                        Err(err) => {
                            tracing::warn!("Sentiment inference failed: {err}");
                            self.ui.home.rating = 0;
                            self.ui.home.sentiment = SentimentNode::Failed(err.to_string());
                            self.set_status(
                                format!("Sentiment analysis failed: {err}"),
                                StatusTone::Error,
                            );
                        }
                    }
                }
                JobMessage::ReviewsLoaded(message) => {
                    let Some(pending) = self.jobs.pending_reviews() else {
                        continue;
                    };
                    if message.entry_id != pending {
                        continue;
                    }
                    self.jobs.clear_pending_reviews();
                    if self.ui.route != Route::Admin {
                        continue;
                    }
                    match message.result {
                        Ok(records) => {
                            let table = review_table::project(&records);
                            self.set_status(
                                format!("{} reviews loaded", table.rows.len()),
                                StatusTone::Info,
                            );
                            self.ui.admin.table = TableNode::Ready(table);
                        }
                        Err(err) => {
                            tracing::warn!("Reviews fetch failed: {err}");
                            self.ui.admin.table = TableNode::Failed(err.to_string());
                            self.set_status(
                                format!("Failed to load reviews: {err}"),
                                StatusTone::Error,
                            );
                        }
                    }
                }
                JobMessage::SubmitFinished(message) => {
                    self.jobs.clear_submit();
                    match message.result {
                        Ok(()) => {
                            self.set_status("Review submitted", StatusTone::Info);
                        }
                        Err(err) => {
                            tracing::warn!("Review submit failed: {err}");
                            self.set_status(format!("Submit failed: {err}"), StatusTone::Error);
                        }
                    }
                }
            }
        }
    }
}
