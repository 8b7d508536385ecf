//! HTTP recommendation provider
//!
//! Talks to the recommendation service over plain HTTP:
//! `GET {api_url}/recommend?title=<encoded>[&limit=..][&platform=..][&only_platform=1]`
//!
//! No timeout is configured; the request waits as long as the transport does.

use crate::{
    error::{AppError, AppResult},
    models::{RecommendationQuery, RecommendationResponse},
    services::providers::{RecommendationOutcome, RecommendationProvider},
};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::Client as HttpClient;
use serde::Deserialize;

/// Characters left alone by `encodeURIComponent`
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Optional narrowing understood by the recommendation service
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestFilters {
    pub limit: Option<u32>,
    /// Comma-separated platform names, e.g. "netflix,viki"
    pub platforms: Option<String>,
    /// Drop titles not on `platforms` instead of ranking them last
    pub only_platform: bool,
}

/// Error body returned with non-success statuses, e.g. `{"error": "Title not found"}`
#[derive(Debug, Deserialize)]
struct ServiceErrorBody {
    error: String,
}

#[derive(Clone)]
pub struct HttpRecommendationProvider {
    http_client: HttpClient,
    api_url: String,
    filters: RequestFilters,
}

impl HttpRecommendationProvider {
    pub fn new(api_url: impl Into<String>, filters: RequestFilters) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
            filters,
        }
    }

    /// Builds the request URL for `query`
    fn recommend_url(&self, query: &RecommendationQuery) -> String {
        let mut url = format!(
            "{}/recommend?title={}",
            self.api_url,
            utf8_percent_encode(query.title(), QUERY_COMPONENT)
        );

        if let Some(limit) = self.filters.limit {
            url.push_str(&format!("&limit={}", limit));
        }

        if let Some(platforms) = self
            .filters
            .platforms
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
        {
            url.push_str(&format!(
                "&platform={}",
                utf8_percent_encode(platforms, QUERY_COMPONENT)
            ));
            if self.filters.only_platform {
                url.push_str("&only_platform=1");
            }
        }

        url
    }

    /// Message for a non-success status, preferring the service's own error text
    fn failure_message(status: reqwest::StatusCode, body: &str) -> String {
        match serde_json::from_str::<ServiceErrorBody>(body) {
            Ok(parsed) if !parsed.error.trim().is_empty() => parsed.error,
            _ => format!("Recommendation service returned status {}", status),
        }
    }

    fn parse_payload(body: &str) -> AppResult<RecommendationResponse> {
        serde_json::from_str(body).map_err(|e| {
            tracing::error!(error = %e, "Failed to deserialize recommendation response");
            AppError::request_failed(format!("Malformed recommendation payload: {}", e))
        })
    }
}

#[async_trait::async_trait]
impl RecommendationProvider for HttpRecommendationProvider {
    async fn fetch_recommendations(
        &self,
        query: &RecommendationQuery,
    ) -> AppResult<RecommendationOutcome> {
        let url = self.recommend_url(query);
        tracing::debug!(url = %url, "Requesting recommendations");

        let response = self.http_client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(
                query = %query,
                status = %status,
                provider = self.name(),
                "Recommendation service returned an error status"
            );
            return Err(AppError::request_failed(Self::failure_message(
                status, &body,
            )));
        }

        let body = response.text().await?;
        let payload = Self::parse_payload(&body)?;

        tracing::info!(
            query = %query,
            input = %payload.input,
            input_platform = payload.input_platform.as_deref().unwrap_or_default(),
            records = payload.recommendations.len(),
            provider = self.name(),
            "Recommendations fetched"
        );

        Ok(RecommendationOutcome::classify(payload))
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_provider(filters: RequestFilters) -> HttpRecommendationProvider {
        HttpRecommendationProvider::new("http://test.local/", filters)
    }

    #[test]
    fn test_url_encodes_title_like_encode_uri_component() {
        let provider = create_test_provider(RequestFilters::default());
        let query = RecommendationQuery::new("It's Okay, That's Love");
        assert_eq!(
            provider.recommend_url(&query),
            "http://test.local/recommend?title=It's%20Okay%2C%20That's%20Love"
        );
    }

    #[test]
    fn test_url_encodes_reserved_characters() {
        let provider = create_test_provider(RequestFilters::default());
        let query = RecommendationQuery::new("Mr. Queen & W?/#");
        assert_eq!(
            provider.recommend_url(&query),
            "http://test.local/recommend?title=Mr.%20Queen%20%26%20W%3F%2F%23"
        );
    }

    #[test]
    fn test_url_encodes_non_ascii() {
        let provider = create_test_provider(RequestFilters::default());
        let query = RecommendationQuery::new("도깨비");
        assert_eq!(
            provider.recommend_url(&query),
            "http://test.local/recommend?title=%EB%8F%84%EA%B9%A8%EB%B9%84"
        );
    }

    #[test]
    fn test_url_with_empty_title() {
        let provider = create_test_provider(RequestFilters::default());
        let query = RecommendationQuery::new("   ");
        assert_eq!(provider.recommend_url(&query), "http://test.local/recommend?title=");
    }

    #[test]
    fn test_url_with_filters() {
        let provider = create_test_provider(RequestFilters {
            limit: Some(10),
            platforms: Some("netflix,viki".to_string()),
            only_platform: true,
        });
        let query = RecommendationQuery::new("Goblin");
        assert_eq!(
            provider.recommend_url(&query),
            "http://test.local/recommend?title=Goblin&limit=10&platform=netflix%2Cviki&only_platform=1"
        );
    }

    #[test]
    fn test_only_platform_ignored_without_platforms() {
        let provider = create_test_provider(RequestFilters {
            limit: None,
            platforms: Some("  ".to_string()),
            only_platform: true,
        });
        let query = RecommendationQuery::new("Goblin");
        assert_eq!(
            provider.recommend_url(&query),
            "http://test.local/recommend?title=Goblin"
        );
    }

    #[test]
    fn test_failure_message_uses_service_error() {
        let message = HttpRecommendationProvider::failure_message(
            reqwest::StatusCode::NOT_FOUND,
            r#"{"error": "Title not found"}"#,
        );
        assert_eq!(message, "Title not found");
    }

    #[test]
    fn test_failure_message_falls_back_to_status() {
        let message = HttpRecommendationProvider::failure_message(
            reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            "<html>oops</html>",
        );
        assert_eq!(
            message,
            "Recommendation service returned status 500 Internal Server Error"
        );
    }

    #[test]
    fn test_parse_payload_rejects_malformed_json() {
        let result = HttpRecommendationProvider::parse_payload("{ not json");
        assert!(matches!(result, Err(AppError::RequestFailed { .. })));
    }

    #[test]
    fn test_null_recommendations_classify_as_empty() {
        let payload = HttpRecommendationProvider::parse_payload(
            r#"{"input":"Goblin","recommendations":null}"#,
        )
        .unwrap();
        assert!(matches!(
            RecommendationOutcome::classify(payload),
            RecommendationOutcome::Empty(_)
        ));
    }

    #[test]
    fn test_null_input_with_records_is_found() {
        let payload = HttpRecommendationProvider::parse_payload(
            r#"{"input":null,"recommendations":[{"title":"Tunnel","similarity":81.5}]}"#,
        )
        .unwrap();
        match RecommendationOutcome::classify(payload) {
            RecommendationOutcome::Found(response) => {
                assert_eq!(response.recommendations[0].title, "Tunnel");
            }
            other => panic!("expected found, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_payload_rejects_wrong_shape() {
        let result =
            HttpRecommendationProvider::parse_payload(r#"{"recommendations": "nope"}"#);
        assert!(result.is_err());
    }
}
