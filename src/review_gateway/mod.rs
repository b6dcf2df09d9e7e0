//! Client gateway for the remote sentiment backend.

pub mod api;

pub use api::{PredictError, ReviewsError, SubmitError};
