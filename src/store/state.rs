use crate::api::{Cuisine, Ingredient, Recipe};
use crate::mvi::ViewState;

/// In-memory snapshot of everything the UI shows.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogState {
    /// Most recent first.
    pub recipes: Vec<Recipe>,
    pub ingredients: Vec<Ingredient>,
    pub cuisines: Vec<Cuisine>,
    pub loading: bool,
    /// Message of the last failed load. Mutation failures never land here.
    pub error: Option<String>,
}

impl Default for CatalogState {
    /// Nothing fetched yet and a load about to start.
    fn default() -> Self {
        Self {
            recipes: Vec::new(),
            ingredients: Vec::new(),
            cuisines: Vec::new(),
            loading: true,
            error: None,
        }
    }
}

impl ViewState for CatalogState {}

impl CatalogState {
    pub fn find_ingredient(&self, id: i64) -> Option<&Ingredient> {
        self.ingredients.iter().find(|ingredient| ingredient.id == id)
    }

    /// Ingredients currently marked as in the pantry.
    pub fn pantry(&self) -> impl Iterator<Item = &Ingredient> {
        self.ingredients.iter().filter(|ingredient| ingredient.in_pantry)
    }
}
