use crate::api::Ingredient;
use crate::mvi::Reducer;
use crate::store::intent::CatalogIntent;
use crate::store::state::CatalogState;

pub struct CatalogReducer;

impl Reducer for CatalogReducer {
    type State = CatalogState;
    type Intent = CatalogIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CatalogIntent::LoadStarted => CatalogState {
                loading: true,
                error: None,
                ..state
            },
            CatalogIntent::LoadSucceeded {
                recipes,
                ingredients,
                cuisines,
            } => CatalogState {
                recipes,
                ingredients,
                cuisines,
                loading: false,
                ..state
            },
            CatalogIntent::LoadFailed { message } => CatalogState {
                loading: false,
                error: Some(message),
                ..state
            },
            CatalogIntent::RecipeAdded(recipe) => CatalogState {
                recipes: prepend(state.recipes, recipe),
                ..state
            },
            CatalogIntent::IngredientAdded(ingredient) => CatalogState {
                ingredients: append(state.ingredients, ingredient),
                ..state
            },
            CatalogIntent::IngredientUpdated(updated) => CatalogState {
                ingredients: replace_by_id(state.ingredients, updated),
                ..state
            },
        }
    }
}

fn prepend<T>(mut items: Vec<T>, item: T) -> Vec<T> {
    items.insert(0, item);
    items
}

fn append<T>(mut items: Vec<T>, item: T) -> Vec<T> {
    items.push(item);
    items
}

/// Swap the element with the same id. Never inserts.
fn replace_by_id(mut items: Vec<Ingredient>, updated: Ingredient) -> Vec<Ingredient> {
    if let Some(slot) = items.iter_mut().find(|item| item.id == updated.id) {
        *slot = updated;
    }
    items
}
