//! HTTP client for ClickUp API requests.
//!
//! This module provides a low-level blocking HTTP wrapper for making
//! GET requests to the ClickUp API, handling authentication and
//! response decoding.

use log::*;
use serde_json::Value;

use super::error::ClickUpError;

/// Makes GET requests against the ClickUp API and decodes the JSON body.
///
pub struct Client {
    access_token: String,
    base_url: String,
    http_client: reqwest::blocking::Client,
}

impl Client {
    /// Returns a new instance for the given access token and base URL.
    ///
    /// # Panics
    /// Panics if the HTTP client cannot be created. This should never happen
    /// in practice as reqwest's builder only fails on invalid configuration,
    /// which we don't use.
    pub fn new(access_token: &str, base_url: &str) -> Self {
        Client {
            access_token: access_token.to_owned(),
            base_url: base_url.to_owned(),
            http_client: reqwest::blocking::Client::builder()
                .build()
                .expect("Failed to create HTTP client - this should never happen"),
        }
    }

    /// Perform one GET against `<base><endpoint>` and decode the body as
    /// JSON. Query parameters pass through verbatim, in the order given.
    ///
    pub fn get(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Value, ClickUpError> {
        let request_url = format!("{}{}", self.base_url, endpoint);

        // ClickUp personal tokens go into the Authorization header
        // verbatim, with no `Bearer` scheme prefix.
        let response = self
            .http_client
            .get(&request_url)
            .header("Authorization", &self.access_token)
            .header("Content-Type", "application/json")
            .query(params)
            .send()?;

        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            error!("GET {} failed with status {}: {}", endpoint, status, body);
            return Err(ClickUpError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Perform [`Client::get`] and pull the named array out of the
    /// response envelope, failing if the key is absent or not an array.
    ///
    pub fn get_array(
        &self,
        endpoint: &str,
        key: &str,
        params: &[(&str, &str)],
    ) -> Result<Vec<Value>, ClickUpError> {
        let envelope = self.get(endpoint, params)?;
        match envelope.get(key) {
            Some(Value::Array(items)) => Ok(items.clone()),
            _ => {
                error!("GET {} response has no '{}' array", endpoint, key);
                Err(ClickUpError::MissingKey {
                    key: key.to_owned(),
                    endpoint: endpoint.to_owned(),
                })
            }
        }
    }
}
