use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::api::error::{ApiError, ApiOperation};
use crate::api::resources::{Collection, ResourceNamespace};
use crate::api::types::{
    Cuisine, GenerateRecipeRequest, Ingredient, IngredientDraft, IngredientUpdate, Recipe,
    RecipeDraft,
};
use crate::api::RecipeApi;
use crate::config::ApiConfig;

pub const DEFAULT_BASE_URL: &str = "https://haix.ai/api";

/// `RecipeApi` over HTTP + JSON.
pub struct HttpRecipeApi {
    client: Client,
    base_url: String,
    namespace: ResourceNamespace,
}

impl HttpRecipeApi {
    /// Build a client for `base_url`. Every request uses `namespace`.
    ///
    /// `connect_timeout` bounds TCP/TLS connection setup only. It is not a
    /// request timeout: once connected, a request pends until the server
    /// answers or the transport fails, and nothing here cancels it.
    pub fn new(
        base_url: &str,
        namespace: ResourceNamespace,
        connect_timeout: Duration,
    ) -> Result<Self, ApiError> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            namespace,
        })
    }

    pub fn from_config(config: &ApiConfig, namespace: ResourceNamespace) -> Result<Self, ApiError> {
        Self::new(
            &config.base_url,
            namespace,
            Duration::from_secs(u64::from(config.connect_timeout_seconds)),
        )
    }

    pub fn namespace(&self) -> &ResourceNamespace {
        &self.namespace
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self, collection: Collection) -> String {
        format!("{}/{}", self.base_url, self.namespace.resource(collection))
    }

    fn request(&self, method: Method, url: String) -> RequestBuilder {
        tracing::debug!(%method, %url, "Sending request");
        self.client.request(method, url)
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        operation: ApiOperation,
    ) -> Result<T, ApiError> {
        let response = builder.send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), %operation, "Backend rejected request");
            return Err(ApiError::Request(operation));
        }

        Ok(response.json::<T>().await?)
    }
}

impl RecipeApi for HttpRecipeApi {
    async fn fetch_recipes(&self) -> Result<Vec<Recipe>, ApiError> {
        let url = self.collection_url(Collection::Recipes);
        self.execute(self.request(Method::GET, url), ApiOperation::FetchRecipes)
            .await
    }

    async fn create_recipe(&self, draft: &RecipeDraft) -> Result<Recipe, ApiError> {
        let url = self.collection_url(Collection::Recipes);
        let builder = self.request(Method::POST, url).json(draft);
        self.execute(builder, ApiOperation::CreateRecipe).await
    }

    async fn generate_recipe(&self, request: &GenerateRecipeRequest) -> Result<Recipe, ApiError> {
        let url = format!("{}/generate", self.collection_url(Collection::Recipes));
        let builder = self.request(Method::POST, url).json(request);
        self.execute(builder, ApiOperation::GenerateRecipe).await
    }

    async fn fetch_ingredients(&self) -> Result<Vec<Ingredient>, ApiError> {
        let url = self.collection_url(Collection::Ingredients);
        self.execute(self.request(Method::GET, url), ApiOperation::FetchIngredients)
            .await
    }

    async fn add_ingredient(&self, draft: &IngredientDraft) -> Result<Ingredient, ApiError> {
        let url = self.collection_url(Collection::Ingredients);
        let builder = self.request(Method::POST, url).json(draft);
        self.execute(builder, ApiOperation::AddIngredient).await
    }

    async fn update_ingredient(
        &self,
        id: i64,
        update: &IngredientUpdate,
    ) -> Result<Ingredient, ApiError> {
        let url = format!("{}/{}", self.collection_url(Collection::Ingredients), id);
        let builder = self.request(Method::PUT, url).json(update);
        self.execute(builder, ApiOperation::UpdateIngredient).await
    }

    async fn fetch_cuisines(&self) -> Result<Vec<Cuisine>, ApiError> {
        let url = self.collection_url(Collection::Cuisines);
        self.execute(self.request(Method::GET, url), ApiOperation::FetchCuisines)
            .await
    }
}
