//! Sentiment state reduction: maps a review draft and an inference
//! probability onto the derived home-page state.
//!
//! All functions here are pure. The probability is expected to be validated
//! by the gateway before it reaches this module.

/// Threshold at or above which the progress indicator turns green.
const SUCCESS_THRESHOLD: f64 = 67.0;
/// Threshold at or below which the progress indicator turns red.
const DANGER_THRESHOLD: f64 = 33.0;
/// Highest star rating that can be suggested.
const MAX_RATING: u8 = 5;

/// The review textarea content, with emptiness decided once at the boundary.
///
/// Whitespace-only input is treated identically to no input at all. The raw
/// text is preserved for the wire so the backend sees what the user typed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ReviewDraft {
    /// No review, or only whitespace.
    #[default]
    Empty,
    /// A review with at least one non-whitespace character.
    Present {
        /// The untrimmed text as typed.
        raw: String,
    },
}

impl ReviewDraft {
    /// Classify raw textarea content.
    pub fn new(text: &str) -> Self {
        if text.trim().is_empty() {
            Self::Empty
        } else {
            Self::Present {
                raw: text.to_string(),
            }
        }
    }

    /// The raw text when a review is present.
    pub fn raw(&self) -> Option<&str> {
        match self {
            Self::Empty => None,
            Self::Present { raw } => Some(raw),
        }
    }

    /// Whether the draft holds no usable input.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Categorical positivity indicator for the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorBand {
    /// Probability of 67% or more.
    Success,
    /// Strictly between 33% and 67%.
    Warning,
    /// 33% or less.
    Danger,
    /// No review entered; the bar is empty.
    None,
}

/// Derived home-page state, applied to the view as one batch.
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentResult {
    /// Positive-sentiment probability as a percentage, rounded to 2 decimals.
    pub probability_percent: f64,
    /// Color of the progress indicator.
    pub color_band: ColorBand,
    /// Star rating suggestion; 0 only for the empty state.
    pub suggested_rating: u8,
    /// Whether the submit control is actionable.
    pub submit_enabled: bool,
}

impl SentimentResult {
    /// State for an empty draft. Chosen locally, no inference call involved.
    pub fn empty() -> Self {
        Self {
            probability_percent: 0.0,
            color_band: ColorBand::None,
            suggested_rating: 0,
            submit_enabled: false,
        }
    }

    /// Reduce a validated probability in [0,1] to the full derived state.
    pub fn from_probability(probability: f64) -> Self {
        let percent = probability_percent(probability);
        Self {
            probability_percent: percent,
            color_band: color_band(percent),
            suggested_rating: suggested_rating(percent),
            submit_enabled: true,
        }
    }
}

/// Convert a probability in [0,1] to a percentage rounded to 2 decimals.
pub fn probability_percent(probability: f64) -> f64 {
    (probability * 100.0 * 100.0).round() / 100.0
}

/// Star rating suggested for a percentage, always in [1,5].
pub fn suggested_rating(percent: f64) -> u8 {
    let rating = ((percent / 100.0) * f64::from(MAX_RATING) + 1.0).floor() as u8;
    rating.min(MAX_RATING)
}

/// Band selection. Exactly 33 falls into `Danger`; exactly 67 into `Success`.
pub fn color_band(percent: f64) -> ColorBand {
    if percent >= SUCCESS_THRESHOLD {
        ColorBand::Success
    } else if percent > DANGER_THRESHOLD {
        ColorBand::Warning
    } else {
        ColorBand::Danger
    }
}
