use gloo_net::http::{Request, RequestBuilder};
use thiserror::Error;
use web_sys::RequestCredentials;

use crate::model::{DailySummary, Expense, ExpenseUpdate};

pub const API_BASE_URL: &str = "http://localhost:5000";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("server returned status {0}")]
    Status(u16),
}

fn bearer_token() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item("access_token").ok()?
}

fn with_auth(mut builder: RequestBuilder) -> RequestBuilder {
    if let Some(token) = bearer_token() {
        builder = builder.header("Authorization", &format!("Bearer {}", token));
    }
    builder
}

fn get(url: &str) -> RequestBuilder {
    with_auth(Request::get(url).credentials(RequestCredentials::Include))
}

/// Daily spend totals, one record per date that has any expenses.
pub async fn fetch_daily_summary() -> Result<Vec<DailySummary>, ApiError> {
    let url = format!("{}/api/expenses/summary?granularity=daily", API_BASE_URL);
    let resp = get(&url).send().await?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    Ok(resp.json::<Vec<DailySummary>>().await?)
}

pub async fn fetch_expenses() -> Result<Vec<Expense>, ApiError> {
    let url = format!("{}/api/expenses", API_BASE_URL);
    let resp = get(&url).send().await?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    Ok(resp.json::<Vec<Expense>>().await?)
}

pub async fn update_expense(id: &str, update: &ExpenseUpdate) -> Result<Expense, ApiError> {
    let url = format!("{}/api/expenses/{}", API_BASE_URL, id);
    let payload = serde_json::json!({
        "amount": update.amount,
        "category": update.category.as_str(),
        "date": update.date.as_str(),
    });
    let builder = with_auth(Request::put(&url).credentials(RequestCredentials::Include));
    let resp = builder.json(&payload)?.send().await?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    Ok(resp.json::<Expense>().await?)
}
