use crate::{Recipe, RecipeDraft, RecipeId, StoreError};

/// The persistence port: one authoritative recipe collection, local or
/// remote. Implementations assign identifiers; callers never do.
#[async_trait::async_trait]
pub trait RecipeStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Recipe>, StoreError>;

    async fn create(&self, draft: RecipeDraft) -> Result<Recipe, StoreError>;

    async fn update(&self, id: RecipeId, draft: RecipeDraft) -> Result<Recipe, StoreError>;

    /// Idempotent: deleting an identifier that is already gone succeeds.
    async fn delete(&self, id: RecipeId) -> Result<(), StoreError>;
}
