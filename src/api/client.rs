//! HTTP client for the review submission endpoint

use super::traits::ReviewApi;
use super::wire::{RawResponse, SubmitReviewRequest, SubmitReviewResponse};
use crate::config::TuiConfig;
use crate::error::SubmitError;
use crate::state::{ReviewSubmission, SubmissionResult};
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Local;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Client for `POST {API_URL}/api/submit-review`
#[derive(Debug, Clone)]
pub struct ReviewClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ReviewClient {
    /// Create a new client for the configured endpoint
    pub fn new(config: &TuiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            endpoint: config.submit_endpoint(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ReviewApi for ReviewClient {
    async fn submit_review(
        &self,
        submission: &ReviewSubmission,
    ) -> Result<SubmissionResult, SubmitError> {
        let payload = SubmitReviewRequest {
            rating: submission.rating,
            review_text: &submission.review_text,
        };

        tracing::debug!(endpoint = %self.endpoint, rating = payload.rating, "Submitting review");

        let response = self
            .http
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        tracing::debug!(status = status.as_u16(), bytes = body.len(), "Review response received");

        let raw =
            RawResponse::from_slice(&body).map_err(|e| SubmitError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(SubmitError::Server {
                status: status.as_u16(),
                message: raw.error_message(),
            });
        }

        match SubmitReviewResponse::from(raw) {
            SubmitReviewResponse::Accepted {
                review_id,
                ai_response,
            } => Ok(SubmissionResult {
                review_id,
                ai_response,
                received_at: Local::now(),
            }),
            SubmitReviewResponse::Rejected { error } => Err(SubmitError::Server {
                status: status.as_u16(),
                message: error,
            }),
        }
    }
}
