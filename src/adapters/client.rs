use crate::adapters::http::GENERATE_PATH;
use crate::domain::model::{GenerateRequest, GenerateResponse, Recipe};
use crate::domain::ports::RecipeGenerator;
use crate::utils::error::{RecipeError, Result};
use crate::utils::validation::validate_url;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Talks to a running recipe server.
#[derive(Debug, Clone)]
pub struct RecipeClient {
    client: Client,
    endpoint: String,
}

impl RecipeClient {
    pub fn new(server_url: &str) -> Result<Self> {
        validate_url("server_url", server_url)?;
        Ok(Self {
            client: Client::new(),
            endpoint: format!("{}{}", server_url.trim_end_matches('/'), GENERATE_PATH),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RecipeGenerator for RecipeClient {
    async fn generate(&self, prompt: &str) -> Result<Recipe> {
        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .json(&GenerateRequest {
                prompt: prompt.to_string(),
            })
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body.error,
                Err(_) => status.canonical_reason().unwrap_or("unknown error").to_string(),
            };
            return Err(RecipeError::UpstreamError {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateResponse = response.json().await?;
        Ok(body.recipe)
    }
}
