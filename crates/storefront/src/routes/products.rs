//! Product CRUD route handlers.

use axum::{
    Form, Json,
    extract::{Path, State},
    response::Redirect,
};
use serde::Deserialize;

use tiendita_core::{CategoryId, Price, ProductId};

use crate::db::ProductRepository;
use crate::error::{AppError, Result};
use crate::models::{NewProduct, Product};
use crate::state::AppState;

/// Product form data (create and edit share the same fields).
#[derive(Debug, Deserialize)]
pub struct ProductForm {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "precio")]
    pub price: String,
    pub stock: i64,
    #[serde(rename = "id_categoria", default)]
    pub category_id: Option<i64>,
}

impl ProductForm {
    /// Validate the form into repository input.
    fn into_new_product(self) -> Result<NewProduct> {
        let price = Price::parse(&self.price).map_err(|e| AppError::BadRequest(e.to_string()))?;

        Ok(NewProduct {
            name: self.name,
            price,
            stock: self.stock,
            category_id: self.category_id.map(CategoryId::new),
        })
    }
}

/// List all products.
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = ProductRepository::new(state.pool()).list().await?;
    Ok(Json(products))
}

/// Create a product, then redirect to the list.
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<ProductForm>,
) -> Result<Redirect> {
    let new = form.into_new_product()?;
    let product = ProductRepository::new(state.pool()).create(&new).await?;

    tracing::info!(product_id = %product.id, "product created");
    Ok(Redirect::to("/productos"))
}

/// Show a single product.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Product>> {
    let product = ProductRepository::new(state.pool())
        .get_by_id(ProductId::new(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("producto {id}")))?;

    Ok(Json(product))
}

/// Update a product in place, then redirect to the list.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<ProductForm>,
) -> Result<Redirect> {
    let changes = form.into_new_product()?;
    ProductRepository::new(state.pool())
        .update(ProductId::new(id), &changes)
        .await
        .map_err(|e| match e {
            crate::db::RepositoryError::NotFound => {
                AppError::NotFound(format!("producto {id}"))
            }
            other => AppError::Database(other),
        })?;

    Ok(Redirect::to("/productos"))
}

/// Delete a product, then redirect to the list.
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Redirect> {
    let deleted = ProductRepository::new(state.pool())
        .delete(ProductId::new(id))
        .await?;

    if !deleted {
        return Err(AppError::NotFound(format!("producto {id}")));
    }

    Ok(Redirect::to("/productos"))
}
