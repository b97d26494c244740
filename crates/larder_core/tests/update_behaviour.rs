use std::sync::Once;

use larder_core::{update, AppState, Effect, Field, Msg, Recipe, RecipeDraft};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(store_logging::initialize_for_tests);
}

fn recipe(id: u64, name: &str) -> Recipe {
    Recipe {
        id,
        name: name.to_string(),
        ingredients: "water, salt".to_string(),
        steps: "boil".to_string(),
        image_url: "http://example.com/soup.png".to_string(),
    }
}

fn fill_form(state: AppState, name: &str, ingredients: &str, steps: &str, image: &str) -> AppState {
    let fields = [
        (Field::Name, name),
        (Field::Ingredients, ingredients),
        (Field::Steps, steps),
        (Field::ImageUrl, image),
    ];
    fields.into_iter().fold(state, |state, (field, value)| {
        let (state, _) = update(
            state,
            Msg::FieldChanged {
                field,
                value: value.to_string(),
            },
        );
        state
    })
}

#[test]
fn started_requests_collection_load() {
    init_logging();
    let (_state, effects) = update(AppState::new(), Msg::Started);
    assert_eq!(effects, vec![Effect::LoadCollection]);
}

#[test]
fn collection_loaded_replaces_cards() {
    init_logging();
    let loaded = vec![recipe(1, "Soup"), recipe(2, "Bread")];
    let (state, effects) = update(AppState::new(), Msg::CollectionLoaded(loaded));

    assert!(effects.is_empty());
    let view = state.view();
    assert!(view.dirty);
    assert_eq!(view.cards.len(), 2);
    assert_eq!(view.cards[0].name, "Soup");
    assert_eq!(view.cards[1].name, "Bread");
}

#[test]
fn failed_load_renders_empty_list() {
    init_logging();
    // The effect runner collapses a failed fetch into an empty load.
    let (state, effects) = update(AppState::new(), Msg::CollectionLoaded(Vec::new()));

    assert!(effects.is_empty());
    assert!(state.view().cards.is_empty());
}

#[test]
fn submit_without_edit_target_emits_create() {
    init_logging();
    let state = fill_form(AppState::new(), "Soup", "water, salt", "boil", "");

    let (state, effects) = update(state, Msg::SubmitClicked);

    assert_eq!(
        effects,
        vec![Effect::CreateRecipe {
            draft: RecipeDraft {
                name: "Soup".to_string(),
                ingredients: "water, salt".to_string(),
                steps: "boil".to_string(),
                image_url: String::new(),
            },
        }]
    );
    // Fields stay put until the store confirms.
    assert_eq!(state.view().form.name, "Soup");
}

#[test]
fn recipe_created_appends_one_card_and_clears_form() {
    init_logging();
    let state = fill_form(AppState::new(), "Soup", "water, salt", "boil", "");
    let (state, _) = update(state, Msg::SubmitClicked);

    let (mut state, effects) = update(state, Msg::RecipeCreated(recipe(7, "Soup")));

    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    let view = state.view();
    assert_eq!(view.cards.len(), 1);
    assert_eq!(view.cards[0].id, 7);
    assert_eq!(view.cards[0].name, "Soup");
    assert_eq!(view.form.name, "");
    assert_eq!(view.form.edit_target, None);
}

#[test]
fn empty_fields_are_accepted_as_is() {
    init_logging();
    let (_state, effects) = update(AppState::new(), Msg::SubmitClicked);

    assert_eq!(
        effects,
        vec![Effect::CreateRecipe {
            draft: RecipeDraft::default(),
        }]
    );
}

#[test]
fn delete_click_emits_delete_effect_only() {
    init_logging();
    let (state, _) = update(
        AppState::new(),
        Msg::CollectionLoaded(vec![recipe(1, "Soup")]),
    );

    let (state, effects) = update(state, Msg::DeleteClicked { id: 1 });

    assert_eq!(effects, vec![Effect::DeleteRecipe { id: 1 }]);
    // Removal waits for the store confirmation.
    assert_eq!(state.view().cards.len(), 1);
}

#[test]
fn recipe_deleted_removes_exactly_that_card() {
    init_logging();
    let loaded = vec![recipe(1, "Soup"), recipe(2, "Bread"), recipe(3, "Stew")];
    let (state, _) = update(AppState::new(), Msg::CollectionLoaded(loaded));

    let (state, effects) = update(state, Msg::RecipeDeleted { id: 2 });

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(
        view.cards.iter().map(|card| card.id).collect::<Vec<_>>(),
        vec![1, 3]
    );
    assert_eq!(view.cards[0].name, "Soup");
    assert_eq!(view.cards[1].name, "Stew");
}

#[test]
fn deleting_same_id_twice_matches_single_delete() {
    init_logging();
    let loaded = vec![recipe(1, "Soup"), recipe(2, "Bread")];
    let (state, _) = update(AppState::new(), Msg::CollectionLoaded(loaded));

    let (mut once, _) = update(state.clone(), Msg::RecipeDeleted { id: 2 });
    assert!(once.consume_dirty());
    let (mut twice, _) = update(once.clone(), Msg::RecipeDeleted { id: 2 });

    assert_eq!(once.view().cards, twice.view().cards);
    // The second confirmation changed nothing, so no render is due.
    assert!(!twice.consume_dirty());
}

#[test]
fn noop_leaves_state_untouched() {
    init_logging();
    let state = AppState::new();
    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}
