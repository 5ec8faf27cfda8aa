use yew::prelude::UseStateHandle;

use crate::model::{AnalyticsSnapshot, Expense};

const TOKEN_KEY: &str = "token";

/// Client-side session: the auth token plus read-through caches of server
/// data. All mutation goes through the methods below; each returns the
/// updated session so it can be fed straight into a state handle.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Session {
    pub token: Option<String>,
    pub expenses: Vec<Expense>,
    pub analytics: Option<AnalyticsSnapshot>,
    pub pending_signup_email: Option<String>,
}

pub type SessionHandle = UseStateHandle<Session>;

impl Session {
    /// Session at app start: persisted token, empty caches.
    pub fn initial() -> Session {
        Session {
            token: load_token(),
            ..Session::default()
        }
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub fn authenticated(mut self, token: String) -> Session {
        self.token = Some(token);
        self.pending_signup_email = None;
        self
    }

    /// Logged-out session; caches are dropped with the token.
    pub fn cleared(self) -> Session {
        Session::default()
    }

    /// Replaces the expense cache wholesale. Never called on a failed fetch,
    /// so a failure leaves the previous snapshot intact.
    pub fn with_expenses(mut self, expenses: Vec<Expense>) -> Session {
        self.expenses = expenses;
        self
    }

    pub fn with_analytics(mut self, analytics: AnalyticsSnapshot) -> Session {
        self.analytics = Some(analytics);
        self
    }

    pub fn signup_pending(mut self, email: String) -> Session {
        self.pending_signup_email = Some(email);
        self
    }

    pub fn signup_reset(mut self) -> Session {
        self.pending_signup_email = None;
        self
    }
}

pub fn load_token() -> Option<String> {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(token)) = storage.get_item(TOKEN_KEY) {
                if !token.is_empty() {
                    return Some(token);
                }
            }
        }
    }
    None
}

pub fn store_token(token: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }
}

pub fn clear_token() {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use chrono::NaiveDate;

    fn expense(id: i64) -> Expense {
        Expense {
            id,
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            category: Category::Food,
            amount: 100.0,
            note: None,
        }
    }

    #[test]
    fn expense_cache_is_replaced_wholesale() {
        let session = Session::default()
            .with_expenses(vec![expense(1), expense(2)])
            .with_expenses(vec![expense(3)]);
        assert_eq!(session.expenses.len(), 1);
        assert_eq!(session.expenses[0].id, 3);
    }

    #[test]
    fn authenticating_clears_the_pending_signup_email() {
        let session = Session::default()
            .signup_pending("a@b.com".to_string())
            .authenticated("jwt".to_string());
        assert!(session.has_token());
        assert_eq!(session.pending_signup_email, None);
    }

    #[test]
    fn clearing_drops_token_and_caches() {
        let session = Session::default()
            .authenticated("jwt".to_string())
            .with_expenses(vec![expense(1)])
            .with_analytics(AnalyticsSnapshot::default())
            .cleared();
        assert!(!session.has_token());
        assert!(session.expenses.is_empty());
        assert!(session.analytics.is_none());
    }
}
