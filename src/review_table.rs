//! Read-only projection of backend review records into the admin table.

use serde::Deserialize;

/// Column order of the admin table. Fixed; the view renders these as-is.
pub const REVIEW_COLUMNS: [&str; 7] = [
    "id",
    "brand",
    "created_date",
    "review",
    "rating",
    "suggested_rating",
    "sentiment_score",
];

/// One historical review as owned by the backend.
///
/// Extra fields in the payload are ignored; optional fields missing from a
/// record render as blanks rather than failing the whole table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReviewRecord {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub created_date: String,
    #[serde(default)]
    pub review: String,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub suggested_rating: Option<u8>,
    #[serde(default)]
    pub sentiment_score: Option<f64>,
}

/// Rendered table: a header row plus stringified cells in column order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableViewModel {
    pub rows: Vec<[String; 7]>,
}

impl TableViewModel {
    /// Header labels, in the same order as each row's cells.
    pub fn columns(&self) -> &'static [&'static str; 7] {
        &REVIEW_COLUMNS
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Project backend records into the table view model.
///
/// Pure and total: an empty input produces an empty table.
pub fn project(records: &[ReviewRecord]) -> TableViewModel {
    let rows = records
        .iter()
        .map(|record| {
            [
                record.id.to_string(),
                record.brand.clone(),
                record.created_date.clone(),
                record.review.clone(),
                optional_cell(record.rating.map(u32::from)),
                optional_cell(record.suggested_rating.map(u32::from)),
                score_cell(record.sentiment_score),
            ]
        })
        .collect();
    TableViewModel { rows }
}

fn optional_cell(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn score_cell(value: Option<f64>) -> String {
    value.map(|v| format!("{v:.2}")).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, brand: &str) -> ReviewRecord {
        ReviewRecord {
            id,
            brand: brand.to_string(),
            created_date: "2020-01-02".to_string(),
            review: "solid".to_string(),
            rating: Some(4),
            suggested_rating: Some(5),
            sentiment_score: Some(0.873),
        }
    }

    #[test]
    fn empty_input_projects_to_empty_table() {
        let table = project(&[]);
        assert!(table.is_empty());
        assert_eq!(table.columns()[0], "id");
    }

    #[test]
    fn rows_follow_fixed_column_order() {
        let table = project(&[record(7, "Acme")]);
        assert_eq!(table.rows.len(), 1);
        let row = &table.rows[0];
        assert_eq!(row[0], "7");
        assert_eq!(row[1], "Acme");
        assert_eq!(row[2], "2020-01-02");
        assert_eq!(row[3], "solid");
        assert_eq!(row[4], "4");
        assert_eq!(row[5], "5");
        assert_eq!(row[6], "0.87");
    }

    #[test]
    fn missing_optionals_render_as_blanks() {
        let mut sparse = record(1, "Acme");
        sparse.rating = None;
        sparse.sentiment_score = None;
        let table = project(&[sparse]);
        assert_eq!(table.rows[0][4], "");
        assert_eq!(table.rows[0][6], "");
    }

    #[test]
    fn records_tolerate_unknown_and_missing_fields() {
        let parsed: Vec<ReviewRecord> = serde_json::from_str(
            r#"[{"id": 3, "brand": "Acme", "extra": true}]"#,
        )
        .unwrap();
        assert_eq!(parsed[0].id, 3);
        assert_eq!(parsed[0].review, "");
        assert_eq!(parsed[0].rating, None);
    }
}
