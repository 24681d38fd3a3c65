//! Backend collection naming.
//!
//! The backend is shared between deployments, so every collection name
//! carries a namespace suffix (`recipes_a1b2c3d4`). The namespace is resolved
//! once at startup and reused for every request made by the process.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use uuid::Uuid;

const GENERATED_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NamespaceError {
    #[error("Resource namespace must not be empty")]
    Empty,

    #[error("Resource namespace '{0}' may only contain ASCII letters, digits, '_' or '-'")]
    InvalidCharacters(String),
}

/// Suffix appended to every collection name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceNamespace(String);

impl ResourceNamespace {
    /// Generate a fresh random namespace of lowercase hex characters.
    pub fn generate() -> Self {
        let mut token = Uuid::new_v4().simple().to_string();
        token.truncate(GENERATED_LEN);
        Self(token)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Full resource name for a collection, e.g. `ingredients_a1b2c3d4`.
    pub fn resource(&self, collection: Collection) -> String {
        format!("{}_{}", collection.as_str(), self.0)
    }
}

impl FromStr for ResourceNamespace {
    type Err = NamespaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(NamespaceError::Empty);
        }
        let valid = s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(NamespaceError::InvalidCharacters(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for ResourceNamespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Backend collections used by the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Recipes,
    Ingredients,
    Cuisines,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Recipes => "recipes",
            Collection::Ingredients => "ingredients",
            Collection::Cuisines => "cuisines",
        }
    }
}
