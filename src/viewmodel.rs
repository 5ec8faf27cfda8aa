//! Pure computations behind the rendered views: dashboard stats, display
//! ordering, the analytics breakdown, form validation, and formatting.
//! Nothing here touches the DOM or the network.

use chrono::{Datelike, NaiveDate};

use crate::model::{AnalyticsSnapshot, Category, Expense, ExpenseDraft};

#[derive(Clone, PartialEq, Debug)]
pub struct DashboardStats {
    pub total: f64,
    pub month_total: f64,
    pub average: f64,
    pub count: usize,
}

impl DashboardStats {
    /// `today` decides which entries count as "this month": the client's
    /// local calendar month, not anything server-side.
    pub fn compute(expenses: &[Expense], today: NaiveDate) -> DashboardStats {
        let total: f64 = expenses.iter().map(|e| e.amount).sum();
        let count = expenses.len();
        let average = if count > 0 { total / count as f64 } else { 0.0 };
        let month_total = expenses
            .iter()
            .filter(|e| e.date.month() == today.month() && e.date.year() == today.year())
            .map(|e| e.amount)
            .sum();
        DashboardStats {
            total,
            month_total,
            average,
            count,
        }
    }
}

/// Newest first; ties keep the fetched order.
pub fn sort_date_desc(mut expenses: Vec<Expense>) -> Vec<Expense> {
    expenses.sort_by(|a, b| b.date.cmp(&a.date));
    expenses
}

pub fn recent(expenses: &[Expense], limit: usize) -> Vec<Expense> {
    let mut sorted = sort_date_desc(expenses.to_vec());
    sorted.truncate(limit);
    sorted
}

#[derive(Clone, PartialEq, Debug)]
pub struct BreakdownRow {
    pub label: String,
    pub amount: f64,
    /// Share of total spend, rounded to one decimal place; 0 when there is
    /// no spend at all.
    pub percent: f64,
}

pub fn category_breakdown(snapshot: &AnalyticsSnapshot) -> Vec<BreakdownRow> {
    let total = snapshot.total();
    snapshot
        .category_summary
        .iter()
        .map(|(label, amount)| BreakdownRow {
            label: label.clone(),
            amount: *amount,
            percent: if total > 0.0 {
                (amount / total * 1000.0).round() / 10.0
            } else {
                0.0
            },
        })
        .collect()
}

// ---- form validation ----
// Everything below runs before any network call; an Err is shown to the user
// and the request never goes out.

pub fn validate_login(username: &str, password: &str) -> Result<(), String> {
    if username.trim().is_empty() || password.is_empty() {
        return Err("Please fill in all fields".to_string());
    }
    Ok(())
}

pub fn validate_signup_email(email: &str) -> Result<(), String> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Please enter your email".to_string());
    }
    if !is_valid_email(email) {
        return Err("Please enter a valid email address".to_string());
    }
    Ok(())
}

/// Same shape the original form accepted: something@something.something,
/// no whitespace anywhere, exactly one `@`.
fn is_valid_email(email: &str) -> bool {
    let chunk_ok = |s: &str| !s.is_empty() && !s.contains(char::is_whitespace);
    match email.split_once('@') {
        Some((local, domain)) if !domain.contains('@') => match domain.rsplit_once('.') {
            Some((head, tail)) => chunk_ok(local) && chunk_ok(head) && chunk_ok(tail),
            None => false,
        },
        _ => false,
    }
}

pub fn validate_signup(
    otp: &str,
    username: &str,
    password: &str,
    confirm: &str,
) -> Result<(), String> {
    if otp.is_empty() || username.is_empty() || password.is_empty() || confirm.is_empty() {
        return Err("Please fill in all fields".to_string());
    }
    if otp.len() != 6 || !otp.chars().all(|c| c.is_ascii_digit()) {
        return Err("Please enter a valid 6-digit code".to_string());
    }
    if password != confirm {
        return Err("Passwords do not match".to_string());
    }
    if password.len() < 4 {
        return Err("Password must be at least 4 characters".to_string());
    }
    Ok(())
}

/// Builds the draft for the add/edit forms out of raw input values.
pub fn validate_expense(
    date: &str,
    category: Option<Category>,
    amount: &str,
    note: &str,
) -> Result<ExpenseDraft, String> {
    let missing = || "Please fill in all required fields".to_string();
    let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").map_err(|_| missing())?;
    let category = category.ok_or_else(missing)?;
    let amount: f64 = amount.trim().parse().map_err(|_| missing())?;
    if amount <= 0.0 {
        return Err(missing());
    }
    let note = note.trim();
    Ok(ExpenseDraft {
        date,
        category,
        amount,
        note: (!note.is_empty()).then(|| note.to_string()),
    })
}

// ---- formatting ----

fn format_with_commas(value: i64) -> String {
    let is_negative = value < 0;
    let s = value.abs().to_string().chars().rev().collect::<Vec<char>>();
    let mut out = Vec::new();
    for (i, ch) in s.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(*ch);
    }
    let formatted: String = out.into_iter().rev().collect();
    if is_negative {
        format!("-{}", formatted)
    } else {
        formatted
    }
}

pub fn format_currency(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as i64;
    format!("{}₹{}.{:02}", sign, format_with_commas(cents / 100), cents % 100)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(id: i64, date: &str, amount: f64) -> Expense {
        Expense {
            id,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            category: Category::Food,
            amount,
            note: None,
        }
    }

    #[test]
    fn dashboard_stats_sum_and_average() {
        let expenses = vec![
            expense(1, "2024-05-01", 100.0),
            expense(2, "2024-05-15", 50.0),
            expense(3, "2024-04-20", 30.0),
        ];
        let today = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
        let stats = DashboardStats::compute(&expenses, today);
        assert_eq!(stats.total, 180.0);
        assert_eq!(stats.month_total, 150.0);
        assert_eq!(stats.average, 60.0);
        assert_eq!(stats.count, 3);
    }

    #[test]
    fn dashboard_stats_empty_list_averages_zero() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
        let stats = DashboardStats::compute(&[], today);
        assert_eq!(stats.total, 0.0);
        assert_eq!(stats.average, 0.0);
        assert_eq!(stats.count, 0);
    }

    #[test]
    fn month_filter_distinguishes_same_month_other_year() {
        let expenses = vec![
            expense(1, "2024-05-01", 100.0),
            expense(2, "2023-05-01", 40.0),
        ];
        let today = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
        let stats = DashboardStats::compute(&expenses, today);
        assert_eq!(stats.month_total, 100.0);
    }

    #[test]
    fn recent_returns_newest_five() {
        let expenses: Vec<Expense> = (1..=7)
            .map(|day| expense(day, &format!("2024-05-{:02}", day), 10.0))
            .collect();
        let recent = recent(&expenses, 5);
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].id, 7);
        assert_eq!(recent[4].id, 3);
    }

    #[test]
    fn breakdown_percentages_round_to_one_decimal() {
        let snapshot = AnalyticsSnapshot {
            total_spend: Some(300.0),
            category_summary: vec![
                ("Food".to_string(), 100.0),
                ("Transport".to_string(), 200.0),
            ],
        };
        let rows = category_breakdown(&snapshot);
        assert_eq!(rows[0].percent, 33.3);
        assert_eq!(rows[1].percent, 66.7);
    }

    #[test]
    fn breakdown_with_zero_total_is_all_zero_percent() {
        let snapshot = AnalyticsSnapshot {
            total_spend: None,
            category_summary: vec![("Food".to_string(), 0.0)],
        };
        let rows = category_breakdown(&snapshot);
        assert_eq!(rows[0].percent, 0.0);
    }

    #[test]
    fn breakdown_preserves_server_order() {
        let snapshot = AnalyticsSnapshot {
            total_spend: Some(10.0),
            category_summary: vec![
                ("Other".to_string(), 4.0),
                ("Bills".to_string(), 6.0),
            ],
        };
        let rows = category_breakdown(&snapshot);
        let labels: Vec<&str> = rows.iter().map(|row| row.label.as_str()).collect();
        assert_eq!(labels, vec!["Other", "Bills"]);
    }

    #[test]
    fn signup_rejects_non_numeric_otp() {
        let err = validate_signup("12a456", "sam", "hunter2", "hunter2").unwrap_err();
        assert_eq!(err, "Please enter a valid 6-digit code");
    }

    #[test]
    fn signup_accepts_six_digit_otp_and_matching_passwords() {
        assert!(validate_signup("123456", "sam", "hunter2", "hunter2").is_ok());
    }

    #[test]
    fn signup_rejects_short_or_mismatched_passwords() {
        assert_eq!(
            validate_signup("123456", "sam", "abc", "abc").unwrap_err(),
            "Password must be at least 4 characters"
        );
        assert_eq!(
            validate_signup("123456", "sam", "abcd", "abce").unwrap_err(),
            "Passwords do not match"
        );
    }

    #[test]
    fn email_shapes() {
        assert!(validate_signup_email("a@b.com").is_ok());
        assert!(validate_signup_email("first.last@sub.domain.org").is_ok());
        assert!(validate_signup_email("").is_err());
        assert!(validate_signup_email("nodomain@").is_err());
        assert!(validate_signup_email("no at sign").is_err());
        assert!(validate_signup_email("a@b").is_err());
        assert!(validate_signup_email("a b@c.com").is_err());
    }

    #[test]
    fn expense_form_requires_positive_amount() {
        assert!(validate_expense("2024-05-01", Some(Category::Food), "0", "").is_err());
        assert!(validate_expense("2024-05-01", Some(Category::Food), "-5", "").is_err());
        assert!(validate_expense("2024-05-01", Some(Category::Food), "abc", "").is_err());
        let draft = validate_expense("2024-05-01", Some(Category::Food), "250", "lunch").unwrap();
        assert_eq!(draft.amount, 250.0);
        assert_eq!(draft.note.as_deref(), Some("lunch"));
    }

    #[test]
    fn expense_form_blank_note_becomes_none() {
        let draft = validate_expense("2024-05-01", Some(Category::Food), "10", "  ").unwrap();
        assert_eq!(draft.note, None);
    }

    #[test]
    fn currency_formatting_groups_thousands() {
        assert_eq!(format_currency(1234567.5), "₹1,234,567.50");
        assert_eq!(format_currency(0.0), "₹0.00");
        assert_eq!(format_currency(-42.25), "-₹42.25");
    }

    #[test]
    fn date_formatting_is_short_month_style() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(format_date(date), "May 1, 2024");
    }
}
