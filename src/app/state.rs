//! State nodes observed by the view layer.
//!
//! The router node and the home-page nodes are independent subtrees:
//! navigation never touches the home state, so an admin round trip leaves
//! the draft and its derived sentiment untouched.

use crate::review_table::TableViewModel;
use crate::router::Route;
use crate::sentiment::{ReviewDraft, SentimentResult};

/// The home page's derived-state node.
///
/// `Failed` is visibly distinct from `Idle`: a broken inference call must
/// never render like "no review entered".
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SentimentNode {
    /// No review entered.
    #[default]
    Idle,
    /// An inference call is outstanding for the current draft.
    Pending,
    /// Derived state for the latest draft, applied as one batch.
    Ready(SentimentResult),
    /// The inference call failed; the message is user-visible.
    Failed(String),
}

impl SentimentNode {
    /// Whether the submit control is actionable in this state.
    pub fn submit_enabled(&self) -> bool {
        matches!(self, Self::Ready(result) if result.submit_enabled)
    }
}

/// Review form state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HomeState {
    pub draft: ReviewDraft,
    pub sentiment: SentimentNode,
    /// Slider value; follows the suggestion until the user overrides it.
    pub rating: u8,
}

/// The admin table node.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TableNode {
    /// Admin page not entered since the last reset.
    #[default]
    Idle,
    /// Fetch outstanding for the current entry.
    Loading,
    /// Projected records from the last successful fetch.
    Ready(TableViewModel),
    /// Fetch failed; shown instead of any previous table.
    Failed(String),
}

/// Admin page state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AdminState {
    pub table: TableNode,
}

/// Severity of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusTone {
    #[default]
    Idle,
    Busy,
    Info,
    Warning,
    Error,
}

/// One-line feedback area below the active page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StatusLine {
    pub text: String,
    pub tone: StatusTone,
}

/// All state nodes for one session.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UiState {
    pub route: Route,
    pub home: HomeState,
    pub admin: AdminState,
    pub status: StatusLine,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_disabled_outside_ready() {
        assert!(!SentimentNode::Idle.submit_enabled());
        assert!(!SentimentNode::Pending.submit_enabled());
        assert!(!SentimentNode::Failed("boom".into()).submit_enabled());
        assert!(SentimentNode::Ready(SentimentResult::from_probability(0.5)).submit_enabled());
    }

    #[test]
    fn default_state_starts_on_home_with_empty_draft() {
        let state = UiState::default();
        assert_eq!(state.route, Route::Home);
        assert!(state.home.draft.is_empty());
        assert_eq!(state.home.sentiment, SentimentNode::Idle);
        assert_eq!(state.admin.table, TableNode::Idle);
    }
}
