use crate::view_model::{card_view, AppViewModel, FormView};

pub type RecipeId = u64;

/// A stored recipe as the store hands it back, identifier included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    pub ingredients: String,
    pub steps: String,
    pub image_url: String,
}

/// Form contents without an identifier; what the store receives on
/// create and update.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecipeDraft {
    pub name: String,
    pub ingredients: String,
    pub steps: String,
    pub image_url: String,
}

/// One editable form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Ingredients,
    Steps,
    ImageUrl,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    recipes: Vec<Recipe>,
    form: RecipeDraft,
    edit_target: Option<RecipeId>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            cards: self.recipes.iter().map(card_view).collect(),
            form: FormView {
                name: self.form.name.clone(),
                ingredients: self.form.ingredients.clone(),
                steps: self.form.steps.clone(),
                image_url: self.form.image_url.clone(),
                edit_target: self.edit_target,
            },
            dirty: self.dirty,
        }
    }

    /// Returns whether a render is due and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.form.name = value,
            Field::Ingredients => self.form.ingredients = value,
            Field::Steps => self.form.steps = value,
            Field::ImageUrl => self.form.image_url = value,
        }
        self.dirty = true;
    }

    pub(crate) fn draft(&self) -> RecipeDraft {
        self.form.clone()
    }

    pub(crate) fn edit_target(&self) -> Option<RecipeId> {
        self.edit_target
    }

    pub(crate) fn replace_collection(&mut self, recipes: Vec<Recipe>) {
        self.recipes = recipes;
        self.dirty = true;
    }

    /// Loads the target's fields into the form. Unknown ids leave the
    /// state untouched.
    pub(crate) fn begin_edit(&mut self, id: RecipeId) {
        let Some(recipe) = self.recipes.iter().find(|recipe| recipe.id == id) else {
            return;
        };
        self.form = RecipeDraft {
            name: recipe.name.clone(),
            ingredients: recipe.ingredients.clone(),
            steps: recipe.steps.clone(),
            image_url: recipe.image_url.clone(),
        };
        self.edit_target = Some(id);
        self.dirty = true;
    }

    pub(crate) fn reset_form(&mut self) {
        self.form = RecipeDraft::default();
        self.edit_target = None;
        self.dirty = true;
    }

    pub(crate) fn apply_created(&mut self, recipe: Recipe) {
        self.recipes.push(recipe);
        self.reset_form();
    }

    /// Replaces the record with the same identifier in place. A record
    /// deleted while the update was in flight stays gone.
    pub(crate) fn apply_updated(&mut self, updated: Recipe) {
        if let Some(slot) = self
            .recipes
            .iter_mut()
            .find(|recipe| recipe.id == updated.id)
        {
            *slot = updated;
        }
        self.reset_form();
    }

    pub(crate) fn apply_deleted(&mut self, id: RecipeId) {
        let before = self.recipes.len();
        self.recipes.retain(|recipe| recipe.id != id);
        if self.recipes.len() != before {
            self.dirty = true;
        }
        // A submit after the target vanished must not update a dead id.
        if self.edit_target == Some(id) {
            self.reset_form();
        }
    }
}
