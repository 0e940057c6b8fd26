//! REST client for the recipe backend.
//!
//! Three endpoints, all plain GET with JSON responses:
//! `{base}/recipes` (optional `q`/`category` filters), `{base}/categories`,
//! and `{base}/recipes/{id}`.

pub mod model;

pub use model::Recipe;

use reqwest::{Client, Url};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid api url: {0}")]
    InvalidUrl(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Shared HTTP client bound to a base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch recipe summaries, optionally filtered by search query and category.
    /// Empty filter values are left off the request entirely.
    pub async fn list_recipes(&self, query: &str, category: &str) -> ApiResult<Vec<Recipe>> {
        let url = self.recipes_url(query, category)?;
        let recipes = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Recipe>>()
            .await?;
        Ok(recipes)
    }

    /// Fetch the list of category labels.
    pub async fn list_categories(&self) -> ApiResult<Vec<String>> {
        let url = self.parse_url(&format!("{}/categories", self.base_url))?;
        let categories = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<String>>()
            .await?;
        Ok(categories)
    }

    /// Fetch the full detail record for one recipe.
    pub async fn get_recipe(&self, id: &str) -> ApiResult<Recipe> {
        let url = self.parse_url(&format!("{}/recipes/{}", self.base_url, id))?;
        let recipe = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<Recipe>()
            .await?;
        Ok(recipe)
    }

    fn recipes_url(&self, query: &str, category: &str) -> ApiResult<Url> {
        let mut url = self.parse_url(&format!("{}/recipes", self.base_url))?;
        if !query.is_empty() || !category.is_empty() {
            let mut pairs = url.query_pairs_mut();
            if !query.is_empty() {
                pairs.append_pair("q", query);
            }
            if !category.is_empty() {
                pairs.append_pair("category", category);
            }
        }
        Ok(url)
    }

    fn parse_url(&self, raw: &str) -> ApiResult<Url> {
        Url::parse(raw).map_err(|_| ApiError::InvalidUrl(raw.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> ApiClient {
        ApiClient::new("http://localhost:5000/api")
    }

    #[test]
    fn recipes_url_without_filters_has_no_query() {
        let url = api().recipes_url("", "").unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/recipes");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn recipes_url_appends_only_present_filters() {
        let url = api().recipes_url("pancake", "").unwrap();
        assert_eq!(url.query(), Some("q=pancake"));

        let url = api().recipes_url("", "Dinner").unwrap();
        assert_eq!(url.query(), Some("category=Dinner"));

        let url = api().recipes_url("soup", "Lunch").unwrap();
        assert_eq!(url.query(), Some("q=soup&category=Lunch"));
    }

    #[test]
    fn recipes_url_encodes_query_values() {
        let url = api().recipes_url("chicken & rice", "").unwrap();
        assert_eq!(url.query(), Some("q=chicken+%26+rice"));
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let api = ApiClient::new("http://localhost:5000/api/");
        let url = api.recipes_url("", "").unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/recipes");
    }

    #[tokio::test]
    async fn unreachable_server_reports_http_error() {
        // Nothing listens on the discard port.
        let api = ApiClient::new("http://127.0.0.1:9/api");
        assert!(matches!(api.list_categories().await, Err(ApiError::Http(_))));
    }
}
