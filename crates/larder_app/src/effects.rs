use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use larder_core::{Effect, Msg};
use larder_store::{RecipeStore, StoreEvent, StoreHandle};
use store_logging::store_warn;

/// Executes core effects against the store and feeds completions back as
/// messages. Store failures end here: logged, then swallowed (a failed
/// load surfaces as an empty collection, a failed mutation as nothing).
pub struct EffectRunner {
    handle: StoreHandle,
}

impl EffectRunner {
    pub fn new(store: Arc<dyn RecipeStore>, msg_tx: mpsc::Sender<Msg>) -> Self {
        let runner = Self {
            handle: StoreHandle::new(store),
        };
        runner.spawn_event_loop(msg_tx);
        runner
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::LoadCollection => self.handle.load_collection(),
                Effect::CreateRecipe { draft } => self.handle.create(to_store_draft(draft)),
                Effect::UpdateRecipe { id, draft } => {
                    self.handle.update(id, to_store_draft(draft));
                }
                Effect::DeleteRecipe { id } => self.handle.delete(id),
            }
        }
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<Msg>) {
        let handle = self.handle.clone();
        thread::spawn(move || loop {
            if let Some(event) = handle.try_recv() {
                if let Some(msg) = map_event(event) {
                    if msg_tx.send(msg).is_err() {
                        return;
                    }
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn map_event(event: StoreEvent) -> Option<Msg> {
    match event {
        StoreEvent::Loaded(Ok(recipes)) => Some(Msg::CollectionLoaded(
            recipes.into_iter().map(to_core_recipe).collect(),
        )),
        StoreEvent::Loaded(Err(err)) => {
            store_warn!("Failed to load recipes: {}", err);
            Some(Msg::CollectionLoaded(Vec::new()))
        }
        StoreEvent::Created(Ok(recipe)) => Some(Msg::RecipeCreated(to_core_recipe(recipe))),
        StoreEvent::Created(Err(err)) => {
            store_warn!("Failed to create recipe: {}", err);
            None
        }
        StoreEvent::Updated(Ok(recipe)) => Some(Msg::RecipeUpdated(to_core_recipe(recipe))),
        StoreEvent::Updated(Err(err)) => {
            store_warn!("Failed to update recipe: {}", err);
            None
        }
        StoreEvent::Deleted { id, result: Ok(()) } => Some(Msg::RecipeDeleted { id }),
        StoreEvent::Deleted {
            id,
            result: Err(err),
        } => {
            store_warn!("Failed to delete recipe {}: {}", id, err);
            None
        }
    }
}

fn to_core_recipe(recipe: larder_store::Recipe) -> larder_core::Recipe {
    larder_core::Recipe {
        id: recipe.id,
        name: recipe.name,
        ingredients: recipe.ingredients,
        steps: recipe.steps,
        image_url: recipe.image_url,
    }
}

fn to_store_draft(draft: larder_core::RecipeDraft) -> larder_store::RecipeDraft {
    larder_store::RecipeDraft {
        name: draft.name,
        ingredients: draft.ingredients,
        steps: draft.steps,
        image_url: draft.image_url,
    }
}
