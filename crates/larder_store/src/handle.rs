use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use crate::store::RecipeStore;
use crate::{RecipeDraft, RecipeId, StoreEvent};

enum StoreCommand {
    LoadCollection,
    Create { draft: RecipeDraft },
    Update { id: RecipeId, draft: RecipeDraft },
    Delete { id: RecipeId },
}

/// Async bridge over a store: commands in, completion events out. A
/// background thread owns the runtime and spawns one task per command, so
/// no two operations are ordered relative to each other. Clones share the
/// same command and event channels.
#[derive(Clone)]
pub struct StoreHandle {
    cmd_tx: mpsc::Sender<StoreCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<StoreEvent>>>,
}

impl StoreHandle {
    pub fn new(store: Arc<dyn RecipeStore>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let store = store.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(store.as_ref(), command, event_tx).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    pub fn load_collection(&self) {
        let _ = self.cmd_tx.send(StoreCommand::LoadCollection);
    }

    pub fn create(&self, draft: RecipeDraft) {
        let _ = self.cmd_tx.send(StoreCommand::Create { draft });
    }

    pub fn update(&self, id: RecipeId, draft: RecipeDraft) {
        let _ = self.cmd_tx.send(StoreCommand::Update { id, draft });
    }

    pub fn delete(&self, id: RecipeId) {
        let _ = self.cmd_tx.send(StoreCommand::Delete { id });
    }

    pub fn try_recv(&self) -> Option<StoreEvent> {
        self.event_rx.lock().expect("lock store events").try_recv().ok()
    }
}

async fn handle_command(
    store: &dyn RecipeStore,
    command: StoreCommand,
    event_tx: mpsc::Sender<StoreEvent>,
) {
    let event = match command {
        StoreCommand::LoadCollection => StoreEvent::Loaded(store.list().await),
        StoreCommand::Create { draft } => StoreEvent::Created(store.create(draft).await),
        StoreCommand::Update { id, draft } => StoreEvent::Updated(store.update(id, draft).await),
        StoreCommand::Delete { id } => StoreEvent::Deleted {
            id,
            result: store.delete(id).await,
        },
    };
    let _ = event_tx.send(event);
}
