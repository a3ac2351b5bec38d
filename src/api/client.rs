//! Review API HTTP Client
//!
//! reqwest-based [`ReviewApi`] implementation used by the CLI.

use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;

use super::{
    course_details_url, normalize_base, submit_review_url, ApiError, ApiResult,
    CourseDetailsResponse, ReviewApi,
};
use crate::config::ApiConfig;
use crate::models::{CourseIdentifier, ReviewRecord};

/// Review API client
#[derive(Debug, Clone)]
pub struct ReviewClient {
    client: Client,
    base_url: String,
}

impl ReviewClient {
    /// Create a client for the configured backend
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: normalize_base(&config.base_url),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fail(response: Response, course: &CourseIdentifier) -> ApiError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        ApiError::from_status(status, &body, course)
    }
}

fn transport_error(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Transport("Request timed out".to_string())
    } else if e.is_connect() {
        ApiError::Transport(format!("Review API unavailable: {}", e))
    } else {
        ApiError::Transport(e.to_string())
    }
}

#[async_trait(?Send)]
impl ReviewApi for ReviewClient {
    async fn course_details(&self, course: &CourseIdentifier) -> ApiResult<CourseDetailsResponse> {
        let url = course_details_url(&self.base_url, course);
        tracing::debug!(%url, "Fetching course details");

        let response = self.client.get(&url).send().await.map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(Self::fail(response, course).await);
        }

        response
            .json::<CourseDetailsResponse>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn submit_review(&self, review: &ReviewRecord) -> ApiResult<()> {
        let url = submit_review_url(&self.base_url);
        tracing::debug!(%url, course = %review.course_code(), "Submitting review");

        let response = self
            .client
            .post(&url)
            .json(review)
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            let course =
                CourseIdentifier::new(review.school.as_str(), &review.subject, &review.course_number);
            return Err(Self::fail(response, &course).await);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalized() {
        let config = ApiConfig {
            base_url: "http://localhost:8000///".to_string(),
            ..ApiConfig::default()
        };
        let client = ReviewClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport_error() {
        let config = ApiConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            timeout_secs: 2,
        };
        let client = ReviewClient::new(&config).unwrap();
        let course = CourseIdentifier::at_default_school("COMP", "110");

        let err = client.course_details(&course).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
