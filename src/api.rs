use gloo_net::http::{Method, Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{AnalyticsSnapshot, Category, Expense, ExpenseDraft};

/// Backend base URL, overridable at build time via `API_BASE_URL`.
pub const API_BASE_URL: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "http://127.0.0.1:8000",
};

#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum ApiError {
    /// Non-2xx response; carries the server's `detail` message when it sent one.
    #[error("{0}")]
    Request(String),
    #[error("Network error. Please check your connection.")]
    Network,
    #[error("Unexpected response from the server.")]
    Decode,
}

/// FastAPI-style error payload.
#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Optional server-side filters for the expense list. Only the fields that
/// are set become query parameters.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ExpenseFilter {
    pub category: Option<Category>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl ExpenseFilter {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(category) = self.category {
            pairs.push(("category", category.as_str().to_string()));
        }
        if let Some(start) = &self.start_date {
            pairs.push(("start_date", start.clone()));
        }
        if let Some(end) = &self.end_date {
            pairs.push(("end_date", end.clone()));
        }
        pairs
    }
}

/// Thin client over the backend REST API. Attaches the bearer token to every
/// call except the auth bootstrap endpoints, and normalizes every failure
/// mode into an [`ApiError`]; nothing network-shaped escapes this module.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ApiClient {
    token: Option<String>,
}

impl ApiClient {
    pub fn new(token: Option<String>) -> Self {
        Self { token }
    }

    fn builder(&self, method: Method, path: &str, attach_token: bool) -> RequestBuilder {
        let mut builder = RequestBuilder::new(&format!("{API_BASE_URL}{path}")).method(method);
        if attach_token {
            if let Some(token) = &self.token {
                builder = builder.header("Authorization", &format!("Bearer {token}"));
            }
        }
        builder
    }

    async fn dispatch<T: DeserializeOwned>(
        request: Result<Request, gloo_net::Error>,
    ) -> Result<T, ApiError> {
        let request = request.map_err(|_| ApiError::Decode)?;
        let response = request.send().await.map_err(|err| {
            log::warn!("request failed to send: {err}");
            ApiError::Network
        })?;
        if !response.ok() {
            let detail = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.detail);
            return Err(ApiError::Request(
                detail.unwrap_or_else(|| "Request failed".to_string()),
            ));
        }
        response.json::<T>().await.map_err(|err| {
            log::warn!("response body did not decode: {err}");
            ApiError::Decode
        })
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        attach_token: bool,
    ) -> Result<T, ApiError> {
        Self::dispatch(self.builder(Method::POST, path, attach_token).json(body)).await
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<String, ApiError> {
        let body = serde_json::json!({ "username": username, "password": password });
        let token: TokenResponse = self.post_json("/users/login", &body, false).await?;
        Ok(token.access_token)
    }

    pub async fn send_otp(&self, email: &str) -> Result<(), ApiError> {
        let body = serde_json::json!({ "email": email });
        self.post_json::<_, serde_json::Value>("/users/send-otp", &body, false)
            .await?;
        Ok(())
    }

    pub async fn verify_otp_signup(
        &self,
        email: &str,
        otp: &str,
        username: &str,
        password: &str,
    ) -> Result<String, ApiError> {
        let body = serde_json::json!({
            "email": email,
            "otp": otp,
            "username": username,
            "password": password,
        });
        let token: TokenResponse = self
            .post_json("/users/verify-otp-signup", &body, false)
            .await?;
        Ok(token.access_token)
    }

    pub async fn list_expenses(&self, filter: &ExpenseFilter) -> Result<Vec<Expense>, ApiError> {
        let pairs = filter.query_pairs();
        let builder = self
            .builder(Method::GET, "/expenses/expenses", true)
            .query(pairs.iter().map(|(key, value)| (*key, value.as_str())));
        Self::dispatch(builder.build()).await
    }

    pub async fn create_expense(&self, draft: &ExpenseDraft) -> Result<(), ApiError> {
        self.post_json::<_, serde_json::Value>("/expenses/expenses", draft, true)
            .await?;
        Ok(())
    }

    pub async fn update_expense(&self, id: i64, draft: &ExpenseDraft) -> Result<(), ApiError> {
        let builder = self.builder(Method::PUT, &format!("/expenses/expenses/{id}"), true);
        Self::dispatch::<serde_json::Value>(builder.json(draft)).await?;
        Ok(())
    }

    pub async fn delete_expense(&self, id: i64) -> Result<(), ApiError> {
        let builder = self.builder(Method::DELETE, &format!("/expenses/expenses/{id}"), true);
        Self::dispatch::<serde_json::Value>(builder.build()).await?;
        Ok(())
    }

    pub async fn fetch_analytics(&self) -> Result<AnalyticsSnapshot, ApiError> {
        Self::dispatch(self.builder(Method::GET, "/analytics/analytics", true).build()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_produces_no_query_pairs() {
        assert!(ExpenseFilter::default().query_pairs().is_empty());
    }

    #[test]
    fn partial_filter_omits_unset_parameters() {
        let filter = ExpenseFilter {
            category: Some(Category::Food),
            start_date: Some("2024-01-01".to_string()),
            end_date: None,
        };
        assert_eq!(
            filter.query_pairs(),
            vec![
                ("category", "Food".to_string()),
                ("start_date", "2024-01-01".to_string()),
            ]
        );
    }

    #[test]
    fn full_filter_produces_all_three_pairs() {
        let filter = ExpenseFilter {
            category: Some(Category::Bills),
            start_date: Some("2024-01-01".to_string()),
            end_date: Some("2024-02-01".to_string()),
        };
        let pairs = filter.query_pairs();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[2], ("end_date", "2024-02-01".to_string()));
    }
}
