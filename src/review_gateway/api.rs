//! Typed wrappers around the backend's predict, reviews, and submit
//! endpoints. Responses are treated as untrusted: bodies are size-bounded
//! and the probability payload is validated, never clamped.

use crate::http_client;
use crate::review_table::ReviewRecord;

const MAX_PREDICT_RESPONSE_BYTES: usize = 16 * 1024;
const MAX_REVIEWS_RESPONSE_BYTES: usize = 4 * 1024 * 1024;
const MAX_SUBMIT_RESPONSE_BYTES: usize = 64 * 1024;

/// Failures of the inference call.
#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    /// The service answered with a non-2xx status.
    #[error("Server error: HTTP {code}: {body}")]
    Status { code: u16, body: String },
    /// Network failure or timeout before a response arrived.
    #[error("HTTP error: {0}")]
    Transport(String),
    /// The body was not a bare probability in [0,1].
    #[error("Malformed probability payload: {0}")]
    Malformed(String),
}

/// Failures of the reviews listing call.
#[derive(Debug, thiserror::Error)]
pub enum ReviewsError {
    #[error("Server error: HTTP {code}: {body}")]
    Status { code: u16, body: String },
    #[error("HTTP error: {0}")]
    Transport(String),
    #[error("Malformed reviews payload: {0}")]
    Malformed(String),
}

/// Failures of the submit persistence call.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("Server error: HTTP {code}: {body}")]
    Status { code: u16, body: String },
    #[error("HTTP error: {0}")]
    Transport(String),
}

/// Request a sentiment probability for the raw review text.
pub fn predict(api_base: &str, review: &str) -> Result<f64, PredictError> {
    let url = format!("{api_base}/predict");
    let response = match http_client::agent()
        .post(&url)
        .send_form(&[("review", review)])
    {
        Ok(response) => response,
        Err(ureq::Error::Status(code, response)) => {
            let body = read_body_limited(response, MAX_PREDICT_RESPONSE_BYTES)
                .unwrap_or_else(|err| err);
            return Err(PredictError::Status { code, body });
        }
        Err(ureq::Error::Transport(err)) => {
            return Err(PredictError::Transport(err.to_string()));
        }
    };

    let body = read_body_limited(response, MAX_PREDICT_RESPONSE_BYTES)
        .map_err(PredictError::Malformed)?;
    parse_probability(&body)
}

/// Fetch the historical review records for the admin table.
pub fn fetch_reviews(api_base: &str) -> Result<Vec<ReviewRecord>, ReviewsError> {
    let url = format!("{api_base}/reviews");
    let response = match http_client::agent().get(&url).call() {
        Ok(response) => response,
        Err(ureq::Error::Status(code, response)) => {
            let body = read_body_limited(response, MAX_REVIEWS_RESPONSE_BYTES)
                .unwrap_or_else(|err| err);
            return Err(ReviewsError::Status { code, body });
        }
        Err(ureq::Error::Transport(err)) => {
            return Err(ReviewsError::Transport(err.to_string()));
        }
    };

    let body = read_body_limited(response, MAX_REVIEWS_RESPONSE_BYTES)
        .map_err(ReviewsError::Malformed)?;
    parse_reviews(&body)
}

/// Persist a finalized review together with its rating.
///
/// The response body is ignored beyond the status code; the schema is owned
/// by the backend.
pub fn submit_review(api_base: &str, review: &str, rating: u8) -> Result<(), SubmitError> {
    let url = format!("{api_base}/review");
    let rating = rating.to_string();
    match http_client::agent()
        .post(&url)
        .send_form(&[("review", review), ("rating", &rating)])
    {
        Ok(response) => {
            let _ = read_body_limited(response, MAX_SUBMIT_RESPONSE_BYTES);
            Ok(())
        }
        Err(ureq::Error::Status(code, response)) => {
            let body = read_body_limited(response, MAX_SUBMIT_RESPONSE_BYTES)
                .unwrap_or_else(|err| err);
            Err(SubmitError::Status { code, body })
        }
        Err(ureq::Error::Transport(err)) => Err(SubmitError::Transport(err.to_string())),
    }
}

fn parse_probability(body: &str) -> Result<f64, PredictError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(PredictError::Malformed("Empty response body".to_string()));
    }
    let value: f64 = serde_json::from_str(trimmed)
        .map_err(|err| PredictError::Malformed(format!("{err}: {trimmed}")))?;
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(PredictError::Malformed(format!(
            "Probability out of range: {value}"
        )));
    }
    Ok(value)
}

fn parse_reviews(body: &str) -> Result<Vec<ReviewRecord>, ReviewsError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(ReviewsError::Malformed("Empty response body".to_string()));
    }
    serde_json::from_str(trimmed)
        .map_err(|err| ReviewsError::Malformed(format!("{err}: {trimmed}")))
}

fn read_body_limited(response: ureq::Response, max_bytes: usize) -> Result<String, String> {
    http_client::read_body(response, max_bytes).map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_probability() {
        assert_eq!(parse_probability("0.82").unwrap(), 0.82);
        assert_eq!(parse_probability(" 1 ").unwrap(), 1.0);
        assert_eq!(parse_probability("0").unwrap(), 0.0);
    }

    #[test]
    fn rejects_out_of_range_probability() {
        let err = parse_probability("1.5").unwrap_err();
        assert!(matches!(err, PredictError::Malformed(_)));
        let err = parse_probability("-0.1").unwrap_err();
        assert!(matches!(err, PredictError::Malformed(_)));
    }

    #[test]
    fn rejects_non_numeric_probability() {
        assert!(parse_probability("\"0.5\"").is_err());
        assert!(parse_probability("{\"proba\": 0.5}").is_err());
        assert!(parse_probability("NaN").is_err());
        assert!(parse_probability("").is_err());
    }

    #[test]
    fn parses_review_array() {
        let reviews = parse_reviews(
            r#"[{"id": 1, "brand": "Acme", "created_date": "2020-01-02",
                 "review": "fine", "rating": 4, "suggested_rating": 4,
                 "sentiment_score": 0.77}]"#,
        )
        .unwrap();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].brand, "Acme");
        assert_eq!(reviews[0].rating, Some(4));
    }

    #[test]
    fn rejects_non_array_reviews_payload() {
        let err = parse_reviews(r#"{"reviews": []}"#).unwrap_err();
        assert!(matches!(err, ReviewsError::Malformed(_)));
    }

    #[test]
    fn empty_review_array_is_valid() {
        assert!(parse_reviews("[]").unwrap().is_empty());
    }
}
