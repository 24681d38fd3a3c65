//! Stateful view-model over the recipe backend.
//!
//! `RecipeStore` owns the in-memory catalog, loads it when attached and
//! patches it after every successful write. Every transition goes through
//! `CatalogReducer`, applied to the state current when the response arrives.

mod intent;
mod observer;
mod reducer;
mod state;

use std::sync::Arc;

use tokio::sync::watch;

use crate::api::{
    ApiError, Cuisine, GenerateRecipeRequest, Ingredient, IngredientDraft, IngredientUpdate,
    Recipe, RecipeApi, RecipeDraft,
};
use crate::mvi::Reducer;

pub use intent::CatalogIntent;
pub use observer::{FailureObserver, StoreOperation, TracingObserver};
pub use reducer::CatalogReducer;
pub use state::CatalogState;

pub struct RecipeStore<A> {
    api: A,
    state: watch::Sender<CatalogState>,
    observer: Arc<dyn FailureObserver>,
}

impl<A: RecipeApi> RecipeStore<A> {
    /// Create a store that has not loaded anything yet.
    pub fn new(api: A) -> Self {
        let (state, _) = watch::channel(CatalogState::default());
        Self {
            api,
            state,
            observer: Arc::new(TracingObserver),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn FailureObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Run the initial load and hand the store back.
    pub async fn attach(self) -> Self {
        self.refresh().await;
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Clone of the current state.
    pub fn snapshot(&self) -> CatalogState {
        self.state.borrow().clone()
    }

    /// Receiver notified after every state change.
    pub fn subscribe(&self) -> watch::Receiver<CatalogState> {
        self.state.subscribe()
    }

    pub fn recipes(&self) -> Vec<Recipe> {
        self.state.borrow().recipes.clone()
    }

    pub fn ingredients(&self) -> Vec<Ingredient> {
        self.state.borrow().ingredients.clone()
    }

    pub fn cuisines(&self) -> Vec<Cuisine> {
        self.state.borrow().cuisines.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    pub fn error(&self) -> Option<String> {
        self.state.borrow().error.clone()
    }

    /// Fetch recipes, ingredients and cuisines concurrently and replace all
    /// three collections once every fetch succeeded.
    ///
    /// On failure the collections are left untouched and the error message
    /// is stored in `error`. Overlapping refreshes are not de-duplicated:
    /// the last one to settle wins.
    pub async fn refresh(&self) {
        self.dispatch(CatalogIntent::LoadStarted);

        let result = tokio::try_join!(
            self.api.fetch_recipes(),
            self.api.fetch_ingredients(),
            self.api.fetch_cuisines(),
        );

        match result {
            Ok((recipes, ingredients, cuisines)) => {
                tracing::info!(
                    recipes = recipes.len(),
                    ingredients = ingredients.len(),
                    cuisines = cuisines.len(),
                    "Catalog loaded"
                );
                self.dispatch(CatalogIntent::LoadSucceeded {
                    recipes,
                    ingredients,
                    cuisines,
                });
            }
            Err(err) => {
                self.observer.on_failure(StoreOperation::Load, &err);
                let mut message = err.to_string();
                if message.is_empty() {
                    message = StoreOperation::Load.failure_message().to_string();
                }
                self.dispatch(CatalogIntent::LoadFailed { message });
            }
        }
    }

    /// Have the backend generate a recipe and make it the most recent one.
    pub async fn generate_new_recipe(
        &self,
        available_ingredients: Vec<String>,
        cuisine: impl Into<String>,
        max_cooking_time: u32,
    ) -> Result<Recipe, ApiError> {
        let request = GenerateRecipeRequest {
            ingredients: available_ingredients,
            cuisine: cuisine.into(),
            max_cooking_time,
        };
        let recipe = self
            .api
            .generate_recipe(&request)
            .await
            .inspect_err(|err| self.observer.on_failure(StoreOperation::GenerateRecipe, err))?;

        self.dispatch(CatalogIntent::RecipeAdded(recipe.clone()));
        Ok(recipe)
    }

    pub async fn save_recipe(&self, draft: &RecipeDraft) -> Result<Recipe, ApiError> {
        let recipe = self
            .api
            .create_recipe(draft)
            .await
            .inspect_err(|err| self.observer.on_failure(StoreOperation::SaveRecipe, err))?;

        self.dispatch(CatalogIntent::RecipeAdded(recipe.clone()));
        Ok(recipe)
    }

    pub async fn add_new_ingredient(&self, draft: &IngredientDraft) -> Result<Ingredient, ApiError> {
        let ingredient = self
            .api
            .add_ingredient(draft)
            .await
            .inspect_err(|err| self.observer.on_failure(StoreOperation::AddIngredient, err))?;

        self.dispatch(CatalogIntent::IngredientAdded(ingredient.clone()));
        Ok(ingredient)
    }

    /// Set pantry membership of ingredient `id`.
    ///
    /// Existence is not checked locally: the request is always sent, and if
    /// no loaded ingredient has this id the collection stays as it is.
    pub async fn toggle_ingredient_in_pantry(&self, id: i64, in_pantry: bool) -> Result<(), ApiError> {
        let updated = self
            .api
            .update_ingredient(id, &IngredientUpdate::in_pantry(in_pantry))
            .await
            .inspect_err(|err| self.observer.on_failure(StoreOperation::UpdateIngredient, err))?;

        self.dispatch(CatalogIntent::IngredientUpdated(updated));
        Ok(())
    }

    fn dispatch(&self, intent: CatalogIntent) {
        self.state.send_modify(|state| {
            let current = std::mem::take(state);
            *state = CatalogReducer::reduce(current, intent);
        });
    }
}
