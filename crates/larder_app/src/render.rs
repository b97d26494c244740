use larder_core::{AppViewModel, RecipeCardView};

/// Formats the view model as terminal lines; the caller owns the printing.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::new();

    match view.form.edit_target {
        Some(id) => lines.push(format!("Form: editing recipe #{id}")),
        None => lines.push("Form: new recipe".to_string()),
    }
    if !form_is_empty(view) {
        lines.push(format!(
            "  name: {} | ingredients: {} | steps: {} | image: {}",
            view.form.name, view.form.ingredients, view.form.steps, view.form.image_url
        ));
    }

    if view.cards.is_empty() {
        lines.push("No recipes yet.".to_string());
        return lines;
    }

    lines.push(format!("Recipes ({}):", view.cards.len()));
    for card in &view.cards {
        render_card(&mut lines, card);
    }
    lines
}

fn render_card(lines: &mut Vec<String>, card: &RecipeCardView) {
    lines.push(format!("[#{}] {}", card.id, card.name));
    if !card.image_url.is_empty() {
        lines.push(format!("  image: {}", card.image_url));
    }
    lines.push(format!("  ingredients: {}", card.ingredients.join(", ")));
    lines.push(format!("  steps: {}", card.steps));
}

fn form_is_empty(view: &AppViewModel) -> bool {
    view.form.name.is_empty()
        && view.form.ingredients.is_empty()
        && view.form.steps.is_empty()
        && view.form.image_url.is_empty()
}
