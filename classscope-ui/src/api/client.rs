//! HTTP API Client
//!
//! gloo-net implementation of the review API for the browser.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};

use classscope::api::{
    course_details_url, normalize_base, submit_review_url, ApiError, ApiResult,
    CourseDetailsResponse, ReviewApi,
};
use classscope::models::{CourseIdentifier, ReviewRecord};

/// Review API client backed by the browser's `fetch`
#[derive(Debug, Clone)]
pub struct BrowserClient {
    base_url: String,
}

impl BrowserClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base(base_url),
        }
    }

    async fn fail(response: Response, course: &CourseIdentifier) -> ApiError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        ApiError::from_status(status, &body, course)
    }
}

fn transport_error(e: gloo_net::Error) -> ApiError {
    ApiError::Transport(format!("Network error: {}", e))
}

#[async_trait(?Send)]
impl ReviewApi for BrowserClient {
    async fn course_details(&self, course: &CourseIdentifier) -> ApiResult<CourseDetailsResponse> {
        let url = course_details_url(&self.base_url, course);

        let response = Request::get(&url).send().await.map_err(transport_error)?;

        if !response.ok() {
            return Err(Self::fail(response, course).await);
        }

        response
            .json::<CourseDetailsResponse>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn submit_review(&self, review: &ReviewRecord) -> ApiResult<()> {
        let url = submit_review_url(&self.base_url);

        let response = Request::post(&url)
            .json(review)
            .map_err(|e| ApiError::Parse(format!("Request build error: {}", e)))?
            .send()
            .await
            .map_err(transport_error)?;

        if !response.ok() {
            let course =
                CourseIdentifier::new(review.school.as_str(), &review.subject, &review.course_number);
            return Err(Self::fail(response, &course).await);
        }

        Ok(())
    }
}
