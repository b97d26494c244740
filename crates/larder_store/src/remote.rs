use std::time::Duration;

use serde::Deserialize;
use store_logging::store_debug;

use crate::store::RecipeStore;
use crate::{Recipe, RecipeDraft, RecipeId, StoreError};

#[derive(Debug, Clone)]
pub struct RestSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for RestSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// REST-backed store: every operation proxies to one endpoint of the
/// backend collaborator.
#[derive(Debug, Clone)]
pub struct RestStore {
    client: reqwest::Client,
    base_url: String,
}

/// Acknowledgement body of `DELETE /recipes/{id}`.
#[derive(Debug, Deserialize)]
struct DeleteAck {
    message: String,
}

impl RestStore {
    pub fn new(base_url: &str) -> Result<Self, StoreError> {
        Self::with_settings(base_url, RestSettings::default())
    }

    pub fn with_settings(base_url: &str, settings: RestSettings) -> Result<Self, StoreError> {
        reqwest::Url::parse(base_url)
            .map_err(|err| StoreError::InvalidBaseUrl(err.to_string()))?;

        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| StoreError::Network(err.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn collection_url(&self) -> String {
        format!("{}/recipes", self.base_url)
    }

    fn recipe_url(&self, id: RecipeId) -> String {
        format!("{}/recipes/{}", self.base_url, id)
    }
}

#[async_trait::async_trait]
impl RecipeStore for RestStore {
    async fn list(&self) -> Result<Vec<Recipe>, StoreError> {
        let response = self
            .client
            .get(self.collection_url())
            .send()
            .await
            .map_err(map_transport_error)?;
        decode_body(check_status(response)?).await
    }

    async fn create(&self, draft: RecipeDraft) -> Result<Recipe, StoreError> {
        let response = self
            .client
            .post(self.collection_url())
            .json(&draft)
            .send()
            .await
            .map_err(map_transport_error)?;
        decode_body(check_status(response)?).await
    }

    async fn update(&self, id: RecipeId, draft: RecipeDraft) -> Result<Recipe, StoreError> {
        let response = self
            .client
            .put(self.recipe_url(id))
            .json(&draft)
            .send()
            .await
            .map_err(map_transport_error)?;
        decode_body(check_status(response)?).await
    }

    async fn delete(&self, id: RecipeId) -> Result<(), StoreError> {
        let response = self
            .client
            .delete(self.recipe_url(id))
            .send()
            .await
            .map_err(map_transport_error)?;
        let response = check_status(response)?;

        // The ack body is informational only; a missing or malformed
        // message on a 2xx delete is not a failure.
        if let Ok(ack) = response.json::<DeleteAck>().await {
            store_debug!("Delete ack for recipe {}: {}", id, ack.message);
        }
        Ok(())
    }
}

fn check_status(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(StoreError::HttpStatus(status.as_u16()))
    }
}

async fn decode_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, StoreError> {
    response.json::<T>().await.map_err(|err| {
        if err.is_timeout() {
            StoreError::Timeout
        } else {
            StoreError::Decode(err.to_string())
        }
    })
}

fn map_transport_error(err: reqwest::Error) -> StoreError {
    if err.is_timeout() {
        return StoreError::Timeout;
    }
    StoreError::Network(err.to_string())
}
