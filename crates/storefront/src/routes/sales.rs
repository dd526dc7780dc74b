//! Sales ledger route handlers.
//!
//! Sales go to the file-backed ledger, not the relational store. Form
//! field names follow the ledger file format (`producto`, `cantidad`,
//! `precio`).

use axum::{Form, Json, extract::State, response::Redirect};
use serde::Deserialize;

use crate::error::Result;
use crate::models::SaleRecord;
use crate::state::AppState;

/// Sale form data.
#[derive(Debug, Deserialize)]
pub struct SaleForm {
    #[serde(rename = "producto")]
    pub product: String,
    #[serde(rename = "cantidad")]
    pub quantity: i64,
    #[serde(rename = "precio")]
    pub unit_price: f64,
}

/// List all recorded sales, oldest first.
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<SaleRecord>>> {
    let records = state.ledger().list().await?;
    Ok(Json(records))
}

/// Record a sale, then redirect to the list.
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<SaleForm>,
) -> Result<Redirect> {
    state
        .ledger()
        .append(SaleRecord {
            product: form.product,
            quantity: form.quantity,
            unit_price: form.unit_price,
        })
        .await?;

    Ok(Redirect::to("/ventas"))
}
