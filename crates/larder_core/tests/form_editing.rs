use std::sync::Once;

use larder_core::{update, AppState, Effect, Field, Msg, Recipe, RecipeDraft};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(store_logging::initialize_for_tests);
}

fn recipe(id: u64, name: &str, steps: &str) -> Recipe {
    Recipe {
        id,
        name: name.to_string(),
        ingredients: "flour, water".to_string(),
        steps: steps.to_string(),
        image_url: String::new(),
    }
}

fn loaded_state() -> AppState {
    let (state, _) = update(
        AppState::new(),
        Msg::CollectionLoaded(vec![recipe(1, "Bread", "bake"), recipe(2, "Soup", "boil")]),
    );
    state
}

#[test]
fn edit_click_loads_target_fields_into_form() {
    init_logging();
    let (state, effects) = update(loaded_state(), Msg::EditClicked { id: 2 });

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.form.name, "Soup");
    assert_eq!(view.form.ingredients, "flour, water");
    assert_eq!(view.form.steps, "boil");
    assert_eq!(view.form.edit_target, Some(2));
}

#[test]
fn edit_click_on_unknown_id_is_ignored() {
    init_logging();
    let (mut state, effects) = update(loaded_state(), Msg::EditClicked { id: 99 });

    assert!(effects.is_empty());
    assert_eq!(state.view().form.edit_target, None);
    // CollectionLoaded left the state dirty; editing nothing adds nothing.
    state.consume_dirty();
    assert!(!state.consume_dirty());
}

#[test]
fn submit_while_editing_emits_update_for_target() {
    init_logging();
    let (state, _) = update(loaded_state(), Msg::EditClicked { id: 2 });
    let (state, _) = update(
        state,
        Msg::FieldChanged {
            field: Field::Steps,
            value: "simmer".to_string(),
        },
    );

    let (_state, effects) = update(state, Msg::SubmitClicked);

    assert_eq!(
        effects,
        vec![Effect::UpdateRecipe {
            id: 2,
            draft: RecipeDraft {
                name: "Soup".to_string(),
                ingredients: "flour, water".to_string(),
                steps: "simmer".to_string(),
                image_url: String::new(),
            },
        }]
    );
}

#[test]
fn recipe_updated_replaces_in_place_without_second_record() {
    init_logging();
    let (state, _) = update(loaded_state(), Msg::EditClicked { id: 2 });
    let (state, _) = update(state, Msg::SubmitClicked);

    let (state, effects) = update(state, Msg::RecipeUpdated(recipe(2, "Soup", "simmer")));

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(
        view.cards.iter().map(|card| card.id).collect::<Vec<_>>(),
        vec![1, 2]
    );
    assert_eq!(view.cards[1].steps, "simmer");
    assert_eq!(view.form.name, "");
    assert_eq!(view.form.edit_target, None);
}

#[test]
fn cancel_resets_fields_and_edit_target() {
    init_logging();
    let (state, _) = update(loaded_state(), Msg::EditClicked { id: 1 });

    let (state, effects) = update(state, Msg::CancelClicked);

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.form.name, "");
    assert_eq!(view.form.edit_target, None);
}

#[test]
fn deleting_current_edit_target_resets_form() {
    init_logging();
    let (state, _) = update(loaded_state(), Msg::EditClicked { id: 1 });
    let (state, _) = update(state, Msg::RecipeDeleted { id: 1 });

    let view = state.view();
    assert_eq!(view.form.edit_target, None);
    assert_eq!(view.form.name, "");

    // The next submit creates instead of updating a dead id.
    let (_state, effects) = update(state, Msg::SubmitClicked);
    assert!(matches!(effects[0], Effect::CreateRecipe { .. }));
}

#[test]
fn deleting_other_record_keeps_edit_session() {
    init_logging();
    let (state, _) = update(loaded_state(), Msg::EditClicked { id: 1 });
    let (state, _) = update(state, Msg::RecipeDeleted { id: 2 });

    let view = state.view();
    assert_eq!(view.form.edit_target, Some(1));
    assert_eq!(view.form.name, "Bread");
}

#[test]
fn update_confirmation_for_deleted_record_does_not_resurrect_it() {
    init_logging();
    let (state, _) = update(loaded_state(), Msg::EditClicked { id: 2 });
    let (state, _) = update(state, Msg::SubmitClicked);
    let (state, _) = update(state, Msg::RecipeDeleted { id: 2 });

    let (state, _) = update(state, Msg::RecipeUpdated(recipe(2, "Soup", "simmer")));

    assert_eq!(
        state
            .view()
            .cards
            .iter()
            .map(|card| card.id)
            .collect::<Vec<_>>(),
        vec![1]
    );
}
