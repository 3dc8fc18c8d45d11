//! Signed request dispatch
//!
//! Every request goes out once with the four authentication headers. The
//! signed string covers the path only: neither the query string nor the
//! body is signed.

use std::sync::Arc;

use gatecoin_auth::{Clock, Credentials, HeaderBuilder, Verb};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::{RestError, RestResult};

/// Sends signed GET, POST and DELETE requests
#[derive(Debug, Clone)]
pub struct RequestDispatcher {
    http_client: Client,
    credentials: Credentials,
    clock: Arc<dyn Clock>,
}

impl RequestDispatcher {
    pub(crate) fn new(http_client: Client, credentials: Credentials, clock: Arc<dyn Clock>) -> Self {
        Self {
            http_client,
            credentials,
            clock,
        }
    }

    /// Credentials used to sign requests
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub(crate) fn set_clock(&mut self, clock: Arc<dyn Clock>) {
        self.clock = clock;
    }

    /// GET `path` and parse the JSON response
    ///
    /// `query` is URL-encoded onto the request but not signed.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&[(&str, &str)]>,
    ) -> RestResult<T> {
        parse(&self.get_text(path, query).await?)
    }

    /// GET `path` and return the body as text
    pub async fn get_text(&self, path: &str, query: Option<&[(&str, &str)]>) -> RestResult<String> {
        let mut request = self.request(Verb::Get, path);
        if let Some(query) = query.filter(|q| !q.is_empty()) {
            request = request.query(query);
        }
        self.send(request).await
    }

    /// POST `payload` as JSON to `path` and parse the JSON response
    pub async fn post<T, P>(&self, path: &str, payload: &P) -> RestResult<T>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        parse(&self.post_text(path, payload).await?)
    }

    /// POST `payload` as JSON to `path` and return the body as text
    pub async fn post_text<P: Serialize + ?Sized>(&self, path: &str, payload: &P) -> RestResult<String> {
        let body = serde_json::to_string(payload)
            .map_err(|e| RestError::InvalidParameter(e.to_string()))?;
        self.send(self.request(Verb::Post, path).body(body)).await
    }

    /// DELETE `path` and parse the JSON response
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> RestResult<T> {
        parse(&self.delete_text(path).await?)
    }

    /// DELETE `path` and return the body as text
    pub async fn delete_text(&self, path: &str) -> RestResult<String> {
        self.send(self.request(Verb::Delete, path)).await
    }

    /// Build a request with fresh authentication headers
    fn request(&self, verb: Verb, path: &str) -> RequestBuilder {
        let headers = HeaderBuilder::new(&self.credentials, self.clock.as_ref()).build(path, verb);
        let method = match verb {
            Verb::Get => Method::GET,
            Verb::Post => Method::POST,
            Verb::Delete => Method::DELETE,
        };
        let url = format!("{}{}", self.credentials.base_url(), path);

        debug!("Making authenticated {} request to {}", verb, path);

        headers
            .iter()
            .fold(self.http_client.request(method, url), |request, (name, value)| {
                request.header(name, value)
            })
    }

    async fn send(&self, request: RequestBuilder) -> RestResult<String> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            debug!("Request failed with status {}", status);
            return Err(RestError::HttpStatus { status, body });
        }

        Ok(body)
    }
}

fn parse<T: DeserializeOwned>(body: &str) -> RestResult<T> {
    serde_json::from_str(body).map_err(|e| RestError::Parse(e.to_string()))
}
