//! Shared test utilities and fixtures.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use recipebox::api::{HttpRecipeApi, ResourceNamespace};
use serde_json::{json, Value};
use std::time::Duration;

pub const NAMESPACE: &str = "test";

pub fn recipes_path() -> String {
    format!("/recipes_{NAMESPACE}")
}

pub fn ingredients_path() -> String {
    format!("/ingredients_{NAMESPACE}")
}

pub fn cuisines_path() -> String {
    format!("/cuisines_{NAMESPACE}")
}

/// API client pointed at `base_url` with the fixed test namespace.
pub fn api_for(base_url: &str) -> HttpRecipeApi {
    let namespace: ResourceNamespace = NAMESPACE.parse().unwrap();
    HttpRecipeApi::new(base_url, namespace, Duration::from_secs(2)).expect("client")
}

pub fn recipe_json(id: i64, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": format!("{title} description"),
        "cuisine": "italian",
        "cooking_time": 25,
        "servings": 2,
        "difficulty": "medium",
        "instructions": ["prepare", "cook"],
        "ingredients": ["egg", "flour"],
        "created_at": "2024-05-01T12:00:00Z"
    })
}

pub fn ingredient_json(id: i64, name: &str, in_pantry: bool) -> Value {
    json!({
        "id": id,
        "name": name,
        "category": "basic",
        "unit": "g",
        "in_pantry": in_pantry,
        "created_at": "2024-05-01T12:00:00Z"
    })
}

pub fn cuisine_json(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": format!("{name} food"),
        "popular_dishes": ["dish one", "dish two"],
        "created_at": "2024-05-01T12:00:00Z"
    })
}
