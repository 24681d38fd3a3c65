use std::fmt;

use crate::api::ApiError;

/// Store operation that can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOperation {
    Load,
    GenerateRecipe,
    SaveRecipe,
    AddIngredient,
    UpdateIngredient,
}

impl StoreOperation {
    pub fn failure_message(&self) -> &'static str {
        match self {
            StoreOperation::Load => "Failed to load data",
            StoreOperation::GenerateRecipe => "Failed to generate recipe",
            StoreOperation::SaveRecipe => "Failed to save recipe",
            StoreOperation::AddIngredient => "Failed to add ingredient",
            StoreOperation::UpdateIngredient => "Failed to update ingredient",
        }
    }
}

impl fmt::Display for StoreOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.failure_message())
    }
}

/// Notified whenever a store operation fails, before the error is
/// stored or returned.
pub trait FailureObserver: Send + Sync {
    fn on_failure(&self, operation: StoreOperation, error: &ApiError);
}

/// Logs failures at error level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl FailureObserver for TracingObserver {
    fn on_failure(&self, operation: StoreOperation, error: &ApiError) {
        tracing::error!(error = %error, "{}", operation.failure_message());
    }
}
