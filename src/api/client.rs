//! Blocking HTTP client for the coaching API.

use color_eyre::eyre::Result;
use reqwest::blocking::{multipart, Client};
use std::time::Duration;

use super::types::{
    LoginRequest, LoginResponse, StartRequest, StartResponse, StatsResponse,
    SubmitRequest, SubmitResponse,
};

/// Single fallible seam for every network operation the UI performs. All
/// failures surface as `Err` so callers report them uniformly - nothing
/// propagates unguarded.
#[cfg_attr(test, mockall::automock)]
pub trait ApiClient: Send {
    fn login(&self, req: &LoginRequest) -> Result<LoginResponse>;
    fn start_session(&self, req: &StartRequest) -> Result<StartResponse>;
    fn submit_answer(&self, req: &SubmitRequest) -> Result<SubmitResponse>;
    fn admin_stats(&self) -> Result<StatsResponse>;
}

/// Talks to the remote coaching backend over HTTP. Requests and responses
/// are JSON except answer submission, which the backend expects as
/// multipart form data.
pub struct HttpApiClient {
    base_url: String,
    http: Client,
}

impl HttpApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl ApiClient for HttpApiClient {
    fn login(&self, req: &LoginRequest) -> Result<LoginResponse> {
        let res = self
            .http
            .post(self.url("/api/login"))
            .json(req)
            .send()?
            .error_for_status()?
            .json::<LoginResponse>()?;
        Ok(res)
    }

    fn start_session(&self, req: &StartRequest) -> Result<StartResponse> {
        let res = self
            .http
            .post(self.url("/api/start"))
            .json(req)
            .send()?
            .error_for_status()?
            .json::<StartResponse>()?;
        Ok(res)
    }

    fn submit_answer(&self, req: &SubmitRequest) -> Result<SubmitResponse> {
        let form = multipart::Form::new()
            .text("session_id", req.session_id.clone())
            .text("question", req.question.clone())
            .text("answer_text", req.answer_text.clone());

        let res = self
            .http
            .post(self.url("/api/submit"))
            .multipart(form)
            .send()?
            .error_for_status()?
            .json::<SubmitResponse>()?;
        Ok(res)
    }

    fn admin_stats(&self) -> Result<StatsResponse> {
        let res = self
            .http
            .get(self.url("/api/admin/stats"))
            .send()?
            .error_for_status()?
            .json::<StatsResponse>()?;
        Ok(res)
    }
}

#[cfg(test)]
#[path = "./client_tests.rs"]
mod tests;
