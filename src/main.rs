use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use recipebox::api::{HttpRecipeApi, IngredientDraft, RecipeDraft};
use recipebox::config::Config;
use recipebox::logging::init_tracing;
use recipebox::store::RecipeStore;

#[derive(Debug, Parser)]
#[command(name = "recipebox", version, about = "Browse and edit recipes, pantry and cuisines")]
struct Cli {
    /// Path to config.toml; must exist (default: platform config dir, optional)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the backend base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Collection namespace; a random one is used when unset
    #[arg(long, global = true, env = "RECIPEBOX_NAMESPACE")]
    namespace: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List recipes, most recent first
    Recipes,
    /// List ingredients
    Ingredients,
    /// List ingredients currently in the pantry
    Pantry,
    /// List cuisines
    Cuisines,
    /// Generate a recipe from available ingredients
    Generate {
        /// Available ingredient (repeatable)
        #[arg(long = "ingredient", required = true)]
        ingredients: Vec<String>,
        #[arg(long)]
        cuisine: String,
        /// Maximum cooking time in minutes
        #[arg(long, default_value_t = 30)]
        max_time: u32,
    },
    /// Save a recipe from a JSON draft file
    SaveRecipe { path: PathBuf },
    /// Add an ingredient
    AddIngredient {
        #[arg(long)]
        name: String,
        #[arg(long)]
        category: String,
        #[arg(long)]
        unit: String,
        #[arg(long)]
        in_pantry: bool,
    },
    /// Move an ingredient into or out of the pantry
    Stock { id: i64, state: PantryState },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PantryState {
    In,
    Out,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
    }
    if let Some(namespace) = cli.namespace {
        config.api.namespace = Some(namespace);
    }
    config.validate()?;

    init_tracing(&config.logging.filter);

    let namespace = config.api.resolve_namespace()?;
    tracing::info!(namespace = %namespace, base_url = %config.api.base_url, "Using backend");
    let api = HttpRecipeApi::from_config(&config.api, namespace)?;

    let store = RecipeStore::new(api).attach().await;
    if let Some(error) = store.error() {
        bail!("{error}");
    }

    match cli.command {
        Command::Recipes => print_json(&store.recipes())?,
        Command::Ingredients => print_json(&store.ingredients())?,
        Command::Pantry => {
            let state = store.snapshot();
            let pantry: Vec<_> = state.pantry().collect();
            print_json(&pantry)?
        }
        Command::Cuisines => print_json(&store.cuisines())?,
        Command::Generate {
            ingredients,
            cuisine,
            max_time,
        } => {
            let recipe = store
                .generate_new_recipe(ingredients, cuisine, max_time)
                .await?;
            print_json(&recipe)?
        }
        Command::SaveRecipe { path } => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read '{}'", path.display()))?;
            let draft: RecipeDraft = serde_json::from_str(&content)
                .with_context(|| format!("Invalid recipe draft in '{}'", path.display()))?;
            let recipe = store.save_recipe(&draft).await?;
            print_json(&recipe)?
        }
        Command::AddIngredient {
            name,
            category,
            unit,
            in_pantry,
        } => {
            let draft = IngredientDraft {
                name,
                category,
                unit,
                in_pantry,
            };
            let ingredient = store.add_new_ingredient(&draft).await?;
            print_json(&ingredient)?
        }
        Command::Stock { id, state } => {
            let in_pantry = matches!(state, PantryState::In);
            store.toggle_ingredient_in_pantry(id, in_pantry).await?;
            match store.snapshot().find_ingredient(id) {
                Some(ingredient) => print_json(ingredient)?,
                None => tracing::warn!(id, "Ingredient updated but not in the loaded catalog"),
            }
        }
    }

    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
