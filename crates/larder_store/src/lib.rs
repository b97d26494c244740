//! Larder store: the recipe persistence port and its backends.
mod handle;
mod local;
mod persist;
mod remote;
mod store;
mod types;

pub use handle::StoreHandle;
pub use local::{LocalStore, RECIPES_FILENAME};
pub use persist::{ensure_data_dir, AtomicFileWriter, PersistError};
pub use remote::{RestSettings, RestStore};
pub use store::RecipeStore;
pub use types::{Recipe, RecipeDraft, RecipeId, StoreError, StoreEvent};
