//! Order handlers.

use crate::http::envelope::{submitted, Envelope};
use crate::http::error::ApiResult;
use crate::http::AppState;
use crate::model::{Order, OrderDraft, OrderId};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};

pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Envelope<Vec<Order>>>> {
    let orders = state.orders.list_orders().await?;
    Ok(Json(Envelope::new(orders)))
}

pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Envelope<Order>>)> {
    let draft: OrderDraft = submitted(&body)?;
    let order = state.orders.create_order(draft).await?;
    Ok((StatusCode::CREATED, Json(Envelope::new(order))))
}

pub async fn read(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> ApiResult<Json<Envelope<Order>>> {
    let order = state.orders.read_order(OrderId(order_id)).await?;
    Ok(Json(Envelope::new(order)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<Envelope<Order>>> {
    let draft: OrderDraft = submitted(&body)?;
    let order = state.orders.update_order(OrderId(order_id), draft).await?;
    Ok(Json(Envelope::new(order)))
}

/// 204 with an empty body.
pub async fn delete(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> ApiResult<StatusCode> {
    state.orders.delete_order(OrderId(order_id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
