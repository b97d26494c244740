use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use store_logging::{store_info, store_warn};

use crate::persist::AtomicFileWriter;
use crate::store::RecipeStore;
use crate::{Recipe, RecipeDraft, RecipeId, StoreError};

/// Fixed key the collection lives under inside the data directory.
pub const RECIPES_FILENAME: &str = "recipes.json";

/// File-backed store: a process-wide collection mirrored to a single JSON
/// array after every mutation. Read-all, mutate, write-all; no partial
/// updates.
pub struct LocalStore {
    writer: AtomicFileWriter,
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    recipes: Vec<Recipe>,
    next_id: RecipeId,
}

impl LocalStore {
    /// Opens the store over `data_dir`, loading any previously persisted
    /// collection. A missing file starts empty; an unreadable or
    /// unparsable file is logged and also starts empty.
    pub fn open(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        let recipes = load_collection(&data_dir.join(RECIPES_FILENAME));
        let next_id = recipes.iter().map(|recipe| recipe.id).max().unwrap_or(0) + 1;
        Self {
            writer: AtomicFileWriter::new(data_dir),
            inner: Mutex::new(Inner { recipes, next_id }),
        }
    }

    fn flush(&self, recipes: &[Recipe]) -> Result<(), StoreError> {
        let content =
            serde_json::to_vec_pretty(recipes).map_err(|err| StoreError::Decode(err.to_string()))?;
        self.writer.write(RECIPES_FILENAME, &content)?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl RecipeStore for LocalStore {
    async fn list(&self) -> Result<Vec<Recipe>, StoreError> {
        Ok(self.inner.lock().expect("lock recipes").recipes.clone())
    }

    async fn create(&self, draft: RecipeDraft) -> Result<Recipe, StoreError> {
        let mut inner = self.inner.lock().expect("lock recipes");
        let id = inner.next_id;
        inner.next_id += 1;
        let recipe = draft.into_recipe(id);
        inner.recipes.push(recipe.clone());
        self.flush(&inner.recipes)?;
        Ok(recipe)
    }

    async fn update(&self, id: RecipeId, draft: RecipeDraft) -> Result<Recipe, StoreError> {
        let mut inner = self.inner.lock().expect("lock recipes");
        let recipe = draft.into_recipe(id);
        match inner.recipes.iter_mut().find(|slot| slot.id == id) {
            Some(slot) => *slot = recipe.clone(),
            None => return Err(StoreError::NotFound(id)),
        }
        self.flush(&inner.recipes)?;
        Ok(recipe)
    }

    async fn delete(&self, id: RecipeId) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().expect("lock recipes");
        let before = inner.recipes.len();
        inner.recipes.retain(|recipe| recipe.id != id);
        if inner.recipes.len() != before {
            self.flush(&inner.recipes)?;
        }
        Ok(())
    }
}

fn load_collection(path: &Path) -> Vec<Recipe> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Vec::new();
        }
        Err(err) => {
            store_warn!("Failed to read recipes from {:?}: {}", path, err);
            return Vec::new();
        }
    };

    match serde_json::from_str(&content) {
        Ok(recipes) => {
            store_info!("Loaded persisted recipes from {:?}", path);
            recipes
        }
        Err(err) => {
            store_warn!("Failed to parse recipes from {:?}: {}", path, err);
            Vec::new()
        }
    }
}
