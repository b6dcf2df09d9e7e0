//! Controller and reactive state for one dashboard session.
//!
//! The controller owns every state node; worker threads report back over a
//! single message channel drained by [`AppController::poll_jobs`].

mod background_jobs;
mod controller;
mod jobs;
pub mod state;
pub mod view_model;

pub use controller::AppController;
