//! Error types for the data access layer.

use std::fmt;

use thiserror::Error;

/// The request an `ApiError::Request` came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiOperation {
    FetchRecipes,
    CreateRecipe,
    GenerateRecipe,
    FetchIngredients,
    AddIngredient,
    UpdateIngredient,
    FetchCuisines,
}

impl ApiOperation {
    /// Static message reported when the backend answers with a non-success status.
    pub fn failure_message(&self) -> &'static str {
        match self {
            ApiOperation::FetchRecipes => "Failed to fetch recipes",
            ApiOperation::CreateRecipe => "Failed to create recipe",
            ApiOperation::GenerateRecipe => "Failed to generate recipe",
            ApiOperation::FetchIngredients => "Failed to fetch ingredients",
            ApiOperation::AddIngredient => "Failed to add ingredient",
            ApiOperation::UpdateIngredient => "Failed to update ingredient",
            ApiOperation::FetchCuisines => "Failed to fetch cuisines",
        }
    }
}

impl fmt::Display for ApiOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.failure_message())
    }
}

/// Errors returned by `RecipeApi` calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend returned a non-2xx status. Status and body are discarded.
    #[error("{0}")]
    Request(ApiOperation),

    /// Transport or response decoding failure.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl ApiError {
    /// The operation that was rejected, if this is a status failure.
    pub fn operation(&self) -> Option<ApiOperation> {
        match self {
            ApiError::Request(op) => Some(*op),
            _ => None,
        }
    }
}
