use crate::api::{Cuisine, Ingredient, Recipe};
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum CatalogIntent {
    /// A refresh started: set loading and clear the previous error.
    LoadStarted,
    /// All three collections fetched. Replaces them together.
    LoadSucceeded {
        recipes: Vec<Recipe>,
        ingredients: Vec<Ingredient>,
        cuisines: Vec<Cuisine>,
    },
    /// A refresh failed. Collections stay as they were.
    LoadFailed { message: String },
    /// A recipe was created or generated; it becomes the most recent.
    RecipeAdded(Recipe),
    /// An ingredient was created; it goes to the end of the list.
    IngredientAdded(Ingredient),
    /// The backend returned an updated ingredient; swap it in place by id.
    IngredientUpdated(Ingredient),
}

impl Intent for CatalogIntent {}
