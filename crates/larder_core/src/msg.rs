#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// App started; trigger the initial collection load.
    Started,
    /// Store delivered the full collection (empty on a failed load).
    CollectionLoaded(Vec<crate::Recipe>),
    /// User edited a single form field.
    FieldChanged { field: crate::Field, value: String },
    /// User submitted the form.
    SubmitClicked,
    /// User clicked Edit on a card.
    EditClicked { id: crate::RecipeId },
    /// User abandoned the current form contents.
    CancelClicked,
    /// User clicked Delete on a card.
    DeleteClicked { id: crate::RecipeId },
    /// Store confirmed a create and assigned the identifier.
    RecipeCreated(crate::Recipe),
    /// Store confirmed an update.
    RecipeUpdated(crate::Recipe),
    /// Store confirmed a delete.
    RecipeDeleted { id: crate::RecipeId },
    /// Fallback for placeholder wiring.
    NoOp,
}
