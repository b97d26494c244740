use crate::{Recipe, RecipeId};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub cards: Vec<RecipeCardView>,
    pub form: FormView,
    pub dirty: bool,
}

/// One rendered recipe card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeCardView {
    pub id: RecipeId,
    pub name: String,
    pub ingredients: Vec<String>,
    pub steps: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormView {
    pub name: String,
    pub ingredients: String,
    pub steps: String,
    pub image_url: String,
    pub edit_target: Option<RecipeId>,
}

pub(crate) fn card_view(recipe: &Recipe) -> RecipeCardView {
    RecipeCardView {
        id: recipe.id,
        name: recipe.name.clone(),
        ingredients: split_ingredients(&recipe.ingredients),
        steps: recipe.steps.clone(),
        image_url: recipe.image_url.clone(),
    }
}

fn split_ingredients(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
