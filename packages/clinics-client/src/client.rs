//! The API client itself.
//!
//! One `ClinicsClient` corresponds to one running client session. Endpoint
//! groups live under [`crate::api`]; everything funnels through the
//! [`HttpPipeline`] so the token-injection and error-dispatch rules apply
//! uniformly.

use std::sync::Arc;

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::Result;
use crate::error_feed::ErrorFeed;
use crate::pipeline::HttpPipeline;
use crate::routes::Navigate;
use crate::session::Session;
use crate::types::ExceptionResponse;

pub struct ClinicsClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<Session>,
    navigator: Arc<dyn Navigate>,
    pipeline: HttpPipeline,
    errors: ErrorFeed,
}

impl ClinicsClient {
    pub fn new(config: &Config, navigator: Arc<dyn Navigate>) -> Self {
        let session = Arc::new(Session::in_memory());
        Self::with_session(config, navigator, session)
    }

    /// Build a client around an existing session, e.g. one backed by a
    /// custom [`crate::TokenStorage`].
    pub fn with_session(
        config: &Config,
        navigator: Arc<dyn Navigate>,
        session: Arc<Session>,
    ) -> Self {
        let errors = ErrorFeed::new();
        let pipeline = HttpPipeline::new(session.clone(), navigator.clone(), errors.clone());

        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            session,
            navigator,
            pipeline,
            errors,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn errors(&self) -> &ErrorFeed {
        &self.errors
    }

    pub(crate) fn navigator(&self) -> &dyn Navigate {
        self.navigator.as_ref()
    }

    /// Start a request against an endpoint path, with the outbound pipeline
    /// stage applied.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let builder = self.http.request(method.clone(), url);
        self.pipeline.authorize(&method, path, builder)
    }

    /// Send a prepared request; error responses go through the inbound
    /// pipeline stage before surfacing to the caller.
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<reqwest::Response> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let payload = response.json::<ExceptionResponse>().await.ok();
        Err(self.pipeline.dispatch(status, payload))
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.send(self.request(Method::GET, path)).await?;
        Ok(response.json().await?)
    }

    /// Send a request whose success response carries no body.
    pub(crate) async fn send_no_content(&self, request: RequestBuilder) -> Result<()> {
        self.send(request).await?;
        Ok(())
    }
}
