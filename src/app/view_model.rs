//! Helpers to convert state nodes into view-facing page structs.

use crate::review_table::REVIEW_COLUMNS;
use crate::router::{HOME_PATH, Route};
use crate::sentiment::ColorBand;

use super::state::{SentimentNode, TableNode, UiState};

/// The page the view should render for the current route.
#[derive(Debug, Clone, PartialEq)]
pub enum PageView {
    Home(HomeView),
    Admin(AdminView),
    NotFound(NotFoundView),
}

/// Review form with its derived progress indicator.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HomeView {
    pub review_text: String,
    /// Progress label such as `82%`; empty when there is nothing to show.
    pub probability_label: String,
    pub progress_value: f64,
    /// Bootstrap-style color name; `None` leaves the bar uncolored.
    pub progress_color: Option<&'static str>,
    pub rating: u8,
    pub submit_enabled: bool,
    pub pending: bool,
    pub error: Option<String>,
}

/// Read-only review table.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminView {
    pub columns: &'static [&'static str; 7],
    pub rows: Vec<[String; 7]>,
    pub loading: bool,
    pub error: Option<String>,
    pub home_link: &'static str,
}

/// Fallback page with a way back.
#[derive(Debug, Clone, PartialEq)]
pub struct NotFoundView {
    pub home_link: &'static str,
}

/// Project the state nodes into the active page.
pub fn page_view(state: &UiState) -> PageView {
    match state.route {
        Route::Home => PageView::Home(home_view(state)),
        Route::Admin => PageView::Admin(admin_view(state)),
        Route::NotFound => PageView::NotFound(NotFoundView {
            home_link: HOME_PATH,
        }),
    }
}

fn home_view(state: &UiState) -> HomeView {
    let review_text = state.home.draft.raw().unwrap_or("").to_string();
    match &state.home.sentiment {
        SentimentNode::Idle => HomeView {
            review_text,
            ..HomeView::default()
        },
        SentimentNode::Pending => HomeView {
            review_text,
            pending: true,
            ..HomeView::default()
        },
        SentimentNode::Ready(result) => HomeView {
            review_text,
            probability_label: probability_label(result.probability_percent),
            progress_value: result.probability_percent,
            progress_color: progress_color(result.color_band),
            rating: state.home.rating,
            submit_enabled: result.submit_enabled,
            pending: false,
            error: None,
        },
        SentimentNode::Failed(message) => HomeView {
            review_text,
            error: Some(message.clone()),
            ..HomeView::default()
        },
    }
}

fn admin_view(state: &UiState) -> AdminView {
    let (rows, loading, error) = match &state.admin.table {
        TableNode::Idle => (Vec::new(), false, None),
        TableNode::Loading => (Vec::new(), true, None),
        TableNode::Ready(table) => (table.rows.clone(), false, None),
        TableNode::Failed(message) => (Vec::new(), false, Some(message.clone())),
    };
    AdminView {
        columns: &REVIEW_COLUMNS,
        rows,
        loading,
        error,
        home_link: HOME_PATH,
    }
}

/// Format a percentage for display, trimming insignificant zeros.
pub fn probability_label(percent: f64) -> String {
    let text = format!("{percent:.2}");
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed}%")
}

/// Map a color band to its display color name.
pub fn progress_color(band: ColorBand) -> Option<&'static str> {
    match band {
        ColorBand::Success => Some("success"),
        ColorBand::Warning => Some("warning"),
        ColorBand::Danger => Some("danger"),
        ColorBand::None => None,
    }
}
