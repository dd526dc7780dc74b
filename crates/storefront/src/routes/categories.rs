//! Category CRUD route handlers.

use axum::{
    Form, Json,
    extract::{Path, State},
    response::Redirect,
};
use serde::Deserialize;

use tiendita_core::CategoryId;

use crate::db::CategoryRepository;
use crate::error::{AppError, Result};
use crate::models::Category;
use crate::state::AppState;

/// Category form data.
#[derive(Debug, Deserialize)]
pub struct CategoryForm {
    #[serde(rename = "nombre")]
    pub name: String,
}

/// List all categories.
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Category>>> {
    let categories = CategoryRepository::new(state.pool()).list().await?;
    Ok(Json(categories))
}

/// Create a category, then redirect to the list.
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<CategoryForm>,
) -> Result<Redirect> {
    let category = CategoryRepository::new(state.pool()).create(&form.name).await?;

    tracing::info!(category_id = %category.id, "category created");
    Ok(Redirect::to("/categorias"))
}

/// Show a single category.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Category>> {
    let category = CategoryRepository::new(state.pool())
        .get_by_id(CategoryId::new(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("categoría {id}")))?;

    Ok(Json(category))
}

/// Rename a category, then redirect to the list.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<CategoryForm>,
) -> Result<Redirect> {
    CategoryRepository::new(state.pool())
        .update(CategoryId::new(id), &form.name)
        .await
        .map_err(|e| match e {
            crate::db::RepositoryError::NotFound => {
                AppError::NotFound(format!("categoría {id}"))
            }
            other => AppError::Database(other),
        })?;

    Ok(Redirect::to("/categorias"))
}

/// Delete a category, then redirect to the list.
///
/// Products referencing the category are detached, not deleted.
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Redirect> {
    let deleted = CategoryRepository::new(state.pool())
        .delete(CategoryId::new(id))
        .await?;

    if !deleted {
        return Err(AppError::NotFound(format!("categoría {id}")));
    }

    Ok(Redirect::to("/categorias"))
}
