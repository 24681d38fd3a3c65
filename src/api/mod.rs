//! Data access layer for the recipe backend.
//!
//! Each call issues exactly one HTTP request and decodes the JSON body.
//! Errors are classified and returned, never recovered.

pub mod client;
pub mod error;
pub mod resources;
pub mod types;

use std::future::Future;

pub use client::{HttpRecipeApi, DEFAULT_BASE_URL};
pub use error::{ApiError, ApiOperation};
pub use resources::{Collection, NamespaceError, ResourceNamespace};
pub use types::{
    Cuisine, Difficulty, GenerateRecipeRequest, Ingredient, IngredientDraft, IngredientUpdate,
    Recipe, RecipeDraft,
};

/// Remote operations the store depends on.
///
/// `HttpRecipeApi` is the production implementation; tests substitute
/// in-memory fakes.
pub trait RecipeApi: Send + Sync {
    fn fetch_recipes(&self) -> impl Future<Output = Result<Vec<Recipe>, ApiError>> + Send;

    fn create_recipe(
        &self,
        draft: &RecipeDraft,
    ) -> impl Future<Output = Result<Recipe, ApiError>> + Send;

    /// Ask the backend to synthesize a new recipe. How it does so is opaque here.
    fn generate_recipe(
        &self,
        request: &GenerateRecipeRequest,
    ) -> impl Future<Output = Result<Recipe, ApiError>> + Send;

    fn fetch_ingredients(&self) -> impl Future<Output = Result<Vec<Ingredient>, ApiError>> + Send;

    fn add_ingredient(
        &self,
        draft: &IngredientDraft,
    ) -> impl Future<Output = Result<Ingredient, ApiError>> + Send;

    /// Send only the changed fields; the backend answers with the full record.
    fn update_ingredient(
        &self,
        id: i64,
        update: &IngredientUpdate,
    ) -> impl Future<Output = Result<Ingredient, ApiError>> + Send;

    fn fetch_cuisines(&self) -> impl Future<Output = Result<Vec<Cuisine>, ApiError>> + Send;
}
