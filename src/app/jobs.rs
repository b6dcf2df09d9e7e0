//! Worker threads and result channels for the controller.
//!
//! Network calls never run on the controller thread. Inference requests go
//! to a persistent worker over a job channel; reviews fetches and submits
//! are one-shot threads. Every result funnels into one message channel and
//! carries the id it was dispatched under so the drain loop can discard
//! superseded results.

use std::sync::mpsc::{Receiver, Sender, TryRecvError, channel};
use std::thread;

use crate::review_gateway::api;
use crate::review_table::ReviewRecord;

pub(super) struct InferenceJob {
    pub request_id: u64,
    pub review: String,
}

pub(super) struct InferenceResult {
    pub request_id: u64,
    pub result: Result<f64, api::PredictError>,
}

pub(super) struct ReviewsResult {
    pub entry_id: u64,
    pub result: Result<Vec<ReviewRecord>, api::ReviewsError>,
}

pub(super) struct SubmitResult {
    pub result: Result<(), api::SubmitError>,
}

pub(super) enum JobMessage {
    Inference(InferenceResult),
    ReviewsLoaded(ReviewsResult),
    SubmitFinished(SubmitResult),
}

pub(super) struct ControllerJobs {
    api_base: String,
    spawn_workers: bool,
    inference_tx: Sender<InferenceJob>,
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    pending_inference: Option<u64>,
    next_request_id: u64,
    pending_reviews: Option<u64>,
    next_entry_id: u64,
    submit_in_progress: bool,
    #[cfg(test)]
    pub(super) inference_job_rx: Option<Receiver<InferenceJob>>,
}

impl ControllerJobs {
    pub(super) fn new(api_base: String) -> Self {
        let (message_tx, message_rx) = channel::<JobMessage>();
        let inference_tx = spawn_inference_worker(api_base.clone(), message_tx.clone());
        Self {
            api_base,
            spawn_workers: true,
            inference_tx,
            message_tx,
            message_rx,
            pending_inference: None,
            next_request_id: 1,
            pending_reviews: None,
            next_entry_id: 1,
            submit_in_progress: false,
            #[cfg(test)]
            inference_job_rx: None,
        }
    }

    /// Channels without workers; jobs queue up for the test to inspect.
    #[cfg(test)]
    pub(super) fn detached(api_base: String) -> Self {
        let (message_tx, message_rx) = channel::<JobMessage>();
        let (inference_tx, inference_job_rx) = channel::<InferenceJob>();
        Self {
            api_base,
            spawn_workers: false,
            inference_tx,
            message_tx,
            message_rx,
            pending_inference: None,
            next_request_id: 1,
            pending_reviews: None,
            next_entry_id: 1,
            submit_in_progress: false,
            inference_job_rx: Some(inference_job_rx),
        }
    }

    pub(super) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    #[cfg(test)]
    pub(super) fn message_sender(&self) -> Sender<JobMessage> {
        self.message_tx.clone()
    }

    /// Dispatch an inference request and mark it as the only one whose
    /// result may be applied.
    pub(super) fn dispatch_inference(&mut self, review: String) -> u64 {
        let request_id = self.next_request_id;
        self.next_request_id = self.next_request_id.wrapping_add(1).max(1);
        self.pending_inference = Some(request_id);
        let _ = self.inference_tx.send(InferenceJob { request_id, review });
        request_id
    }

    pub(super) fn pending_inference(&self) -> Option<u64> {
        self.pending_inference
    }

    pub(super) fn clear_pending_inference(&mut self) {
        self.pending_inference = None;
    }

    /// Start a reviews fetch for a fresh admin entry.
    pub(super) fn begin_reviews_fetch(&mut self) -> u64 {
        let entry_id = self.next_entry_id;
        self.next_entry_id = self.next_entry_id.wrapping_add(1).max(1);
        self.pending_reviews = Some(entry_id);
        if self.spawn_workers {
            let api_base = self.api_base.clone();
            let tx = self.message_tx.clone();
            thread::spawn(move || {
                let result = api::fetch_reviews(&api_base);
                let _ = tx.send(JobMessage::ReviewsLoaded(ReviewsResult { entry_id, result }));
            });
        }
        entry_id
    }

    pub(super) fn pending_reviews(&self) -> Option<u64> {
        self.pending_reviews
    }

    pub(super) fn clear_pending_reviews(&mut self) {
        self.pending_reviews = None;
    }

    /// Dispatch a persistence call. Returns false without dispatching while
    /// a previous call is still outstanding; the caller decides what to do
    /// with the refused review.
    pub(super) fn begin_submit(&mut self, review: String, rating: u8) -> bool {
        if self.submit_in_progress {
            return false;
        }
        self.submit_in_progress = true;
        if self.spawn_workers {
            let api_base = self.api_base.clone();
            let tx = self.message_tx.clone();
            thread::spawn(move || {
                let result = api::submit_review(&api_base, &review, rating);
                let _ = tx.send(JobMessage::SubmitFinished(SubmitResult { result }));
            });
        }
        true
    }

    pub(super) fn submit_in_progress(&self) -> bool {
        self.submit_in_progress
    }

    pub(super) fn clear_submit(&mut self) {
        self.submit_in_progress = false;
    }
}

fn spawn_inference_worker(
    api_base: String,
    tx: Sender<JobMessage>,
) -> Sender<InferenceJob> {
    let (job_tx, job_rx) = channel::<InferenceJob>();
    thread::spawn(move || {
        while let Ok(job) = job_rx.recv() {
            let result = api::predict(&api_base, &job.review);
            let _ = tx.send(JobMessage::Inference(InferenceResult {
                request_id: job.request_id,
                result,
            }));
        }
    });
    job_tx
}
