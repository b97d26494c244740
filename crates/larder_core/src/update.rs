use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => vec![Effect::LoadCollection],
        Msg::CollectionLoaded(recipes) => {
            state.replace_collection(recipes);
            Vec::new()
        }
        Msg::FieldChanged { field, value } => {
            state.set_field(field, value);
            Vec::new()
        }
        Msg::SubmitClicked => {
            // Fields are cleared on the store's confirmation, not here; a
            // failed round-trip leaves the form intact.
            let draft = state.draft();
            match state.edit_target() {
                Some(id) => vec![Effect::UpdateRecipe { id, draft }],
                None => vec![Effect::CreateRecipe { draft }],
            }
        }
        Msg::EditClicked { id } => {
            state.begin_edit(id);
            Vec::new()
        }
        Msg::CancelClicked => {
            state.reset_form();
            Vec::new()
        }
        Msg::DeleteClicked { id } => vec![Effect::DeleteRecipe { id }],
        Msg::RecipeCreated(recipe) => {
            state.apply_created(recipe);
            Vec::new()
        }
        Msg::RecipeUpdated(recipe) => {
            state.apply_updated(recipe);
            Vec::new()
        }
        Msg::RecipeDeleted { id } => {
            state.apply_deleted(id);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
