use serde::{Deserialize, Serialize};

/// How demanding a recipe is to cook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// A recipe as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Backend-assigned identity.
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Free-text cuisine name, not a reference to a `Cuisine` record.
    pub cuisine: String,
    /// Minutes.
    pub cooking_time: u32,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub instructions: Vec<String>,
    pub ingredients: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Backend-assigned timestamp, kept verbatim.
    pub created_at: String,
}

/// Recipe payload for creation: everything except `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    pub cuisine: String,
    pub cooking_time: u32,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub instructions: Vec<String>,
    pub ingredients: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

/// Body of the recipe generation endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateRecipeRequest {
    pub ingredients: Vec<String>,
    pub cuisine: String,
    pub max_cooking_time: u32,
}

/// A pantry ingredient as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub unit: String,
    pub in_pantry: bool,
    pub created_at: String,
}

/// Ingredient payload for creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientDraft {
    pub name: String,
    pub category: String,
    pub unit: String,
    pub in_pantry: bool,
}

/// Partial ingredient update. Only the fields that are `Some` are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IngredientUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_pantry: Option<bool>,
}

impl IngredientUpdate {
    /// Update that only flips pantry membership.
    pub fn in_pantry(in_pantry: bool) -> Self {
        Self {
            in_pantry: Some(in_pantry),
            ..Self::default()
        }
    }
}

/// A cuisine. Read-only: the backend owns these records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cuisine {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub popular_dishes: Vec<String>,
    pub created_at: String,
}
