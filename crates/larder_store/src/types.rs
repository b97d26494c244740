use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type RecipeId = u64;

/// A persisted recipe. `imageUrl` keeps the REST collaborator's casing on
/// the wire and on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    pub ingredients: String,
    pub steps: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

/// The submitted form contents; identity is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecipeDraft {
    pub name: String,
    pub ingredients: String,
    pub steps: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

impl RecipeDraft {
    pub fn into_recipe(self, id: RecipeId) -> Recipe {
        Recipe {
            id,
            name: self.name,
            ingredients: self.ingredients,
            steps: self.steps,
            image_url: self.image_url,
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("no recipe with id {0}")]
    NotFound(RecipeId),
    #[error("request timed out")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed payload: {0}")]
    Decode(String),
    #[error(transparent)]
    Persist(#[from] crate::PersistError),
}

/// Completion of one store operation, delivered over the handle's event
/// channel.
#[derive(Debug)]
pub enum StoreEvent {
    Loaded(Result<Vec<Recipe>, StoreError>),
    Created(Result<Recipe, StoreError>),
    Updated(Result<Recipe, StoreError>),
    Deleted {
        id: RecipeId,
        result: Result<(), StoreError>,
    },
}
