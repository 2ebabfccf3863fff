//! Shared request executor.
//!
//! Every generated accessor funnels through one of the `Transport` methods
//! here: the transport builds the URL, appends only the query pairs that are
//! present, dispatches the request, and discriminates the outcome into the
//! three-way result model of [`crate::error`]. No retries, no logging of
//! errors, no timeout policy; callers own the `reqwest::Client` they pass in.

use reqwest::multipart::Form;
use reqwest::{Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{ApiError, ApiResult, TransportFailure, ValidationErrors};

/// The base-query executor all endpoint accessors delegate to.
#[derive(Debug, Clone)]
pub struct Transport {
    client: reqwest::Client,
    base_url: Url,
}

impl Transport {
    pub fn new(client: reqwest::Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// GET with a JSON response.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ApiResult<T> {
        let url = self.url(path, query)?;
        let response = self.client.get(url).send().await.map_err(network)?;
        decode_json(response).await
    }

    /// GET with a binary response, passed through undecoded.
    pub async fn get_binary(&self, path: &str, query: &[(&str, String)]) -> ApiResult<Vec<u8>> {
        let url = self.url(path, query)?;
        let response = self.client.get(url).send().await.map_err(network)?;

        let status = response.status();
        if status.is_success() {
            Ok(response.bytes().await.map_err(network)?.to_vec())
        } else {
            Err(failure(status, response).await)
        }
    }

    /// Mutating request with a JSON body and a JSON response.
    pub async fn send_json<T, B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: &B,
    ) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(path, query)?;
        let response = self
            .client
            .request(method, url)
            .json(body)
            .send()
            .await
            .map_err(network)?;
        decode_json(response).await
    }

    /// Mutating request without a body.
    pub async fn send_empty<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
    ) -> ApiResult<T> {
        let url = self.url(path, query)?;
        let response = self
            .client
            .request(method, url)
            .send()
            .await
            .map_err(network)?;
        decode_json(response).await
    }

    /// Mutating request with a multipart body.
    pub async fn send_multipart<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        form: Form,
    ) -> ApiResult<T> {
        let url = self.url(path, &[])?;
        let response = self
            .client
            .request(method, url)
            .multipart(form)
            .send()
            .await
            .map_err(network)?;
        decode_json(response).await
    }

    /// Join the path onto the base URL and append the present query pairs.
    /// Absent optional parameters never reach this point, so they never
    /// appear in the URL.
    fn url(&self, path: &str, query: &[(&str, String)]) -> Result<Url, ApiError> {
        let mut url = self.base_url.join(path).map_err(|e| {
            ApiError::Transport(TransportFailure::Network(format!(
                "invalid request path '{path}': {e}"
            )))
        })?;

        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in query {
                pairs.append_pair(name, value);
            }
        }
        Ok(url)
    }
}

fn network(error: reqwest::Error) -> ApiError {
    ApiError::Transport(TransportFailure::Network(error.to_string()))
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let status = response.status();
    if status.is_success() {
        let bytes = response.bytes().await.map_err(network)?;
        serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::Transport(TransportFailure::Decode(e.to_string())))
    } else {
        Err(failure(status, response).await)
    }
}

/// Discriminate a non-success response: a parseable field-located body on a
/// 400/422 is a validation failure, everything else is transport.
async fn failure(status: StatusCode, response: Response) -> ApiError {
    let body = response.text().await.unwrap_or_default();

    if matches!(status.as_u16(), 400 | 422) {
        if let Ok(validation) = serde_json::from_str::<ValidationErrors>(&body) {
            if !validation.detail.is_empty() {
                return ApiError::Validation(validation);
            }
        }
    }

    ApiError::Transport(TransportFailure::Http {
        status: status.as_u16(),
        body,
    })
}
