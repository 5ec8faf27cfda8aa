use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Spending categories known to the backend. Serialized by variant name,
/// which is exactly the string the server stores and groups by.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transport,
    Entertainment,
    Shopping,
    Bills,
    Healthcare,
    Education,
    Other,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Food,
        Category::Transport,
        Category::Entertainment,
        Category::Shopping,
        Category::Bills,
        Category::Healthcare,
        Category::Education,
        Category::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Entertainment => "Entertainment",
            Category::Shopping => "Shopping",
            Category::Bills => "Bills",
            Category::Healthcare => "Healthcare",
            Category::Education => "Education",
            Category::Other => "Other",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Category::Food => "🍔",
            Category::Transport => "🚗",
            Category::Entertainment => "🎬",
            Category::Shopping => "🛍️",
            Category::Bills => "📄",
            Category::Healthcare => "🏥",
            Category::Education => "📚",
            Category::Other => "📦",
        }
    }

    pub fn from_label(label: &str) -> Option<Category> {
        Category::ALL.iter().copied().find(|c| c.as_str() == label)
    }
}

/// Glyph for a raw category label coming back from the server. Labels the
/// client does not know about get the catch-all glyph.
pub fn glyph_for(label: &str) -> &'static str {
    Category::from_label(label).map_or("📦", Category::glyph)
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub date: NaiveDate,
    pub category: Category,
    pub amount: f64,
    pub note: Option<String>,
}

/// Fields the user controls; sent to the create and update endpoints.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct ExpenseDraft {
    pub date: NaiveDate,
    pub category: Category,
    pub amount: f64,
    pub note: Option<String>,
}

/// Server-side aggregate. `total_spend` is null when the user has no
/// expenses (SQL SUM over an empty set); summary pairs arrive as
/// `[label, amount]` tuples in whatever order the server chose.
#[derive(Clone, PartialEq, Debug, Default, Deserialize)]
pub struct AnalyticsSnapshot {
    #[serde(default)]
    pub total_spend: Option<f64>,
    #[serde(default)]
    pub category_summary: Vec<(String, f64)>,
}

impl AnalyticsSnapshot {
    pub fn total(&self) -> f64 {
        self.total_spend.unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expense_decodes_from_wire_format() {
        let raw = r#"{"id":7,"date":"2024-05-01","category":"Food","amount":250.0,"note":"lunch"}"#;
        let expense: Expense = serde_json::from_str(raw).unwrap();
        assert_eq!(expense.id, 7);
        assert_eq!(expense.date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert_eq!(expense.category, Category::Food);
        assert_eq!(expense.amount, 250.0);
        assert_eq!(expense.note.as_deref(), Some("lunch"));
    }

    #[test]
    fn analytics_tolerates_null_total() {
        let raw = r#"{"total_spend":null,"category_summary":[]}"#;
        let snapshot: AnalyticsSnapshot = serde_json::from_str(raw).unwrap();
        assert_eq!(snapshot.total(), 0.0);
        assert!(snapshot.category_summary.is_empty());
    }

    #[test]
    fn analytics_keeps_summary_in_server_order() {
        let raw = r#"{"total_spend":300.0,"category_summary":[["Transport",200.0],["Food",100.0]]}"#;
        let snapshot: AnalyticsSnapshot = serde_json::from_str(raw).unwrap();
        let labels: Vec<&str> = snapshot
            .category_summary
            .iter()
            .map(|(label, _)| label.as_str())
            .collect();
        assert_eq!(labels, vec!["Transport", "Food"]);
    }

    #[test]
    fn analytics_rejects_non_numeric_amounts() {
        let raw = r#"{"total_spend":300.0,"category_summary":[["Food","oops"]]}"#;
        assert!(serde_json::from_str::<AnalyticsSnapshot>(raw).is_err());
    }

    #[test]
    fn unknown_summary_label_gets_catch_all_glyph() {
        assert_eq!(glyph_for("Food"), "🍔");
        assert_eq!(glyph_for("Groceries"), "📦");
    }
}
