//! Dish handlers.

use crate::http::envelope::{submitted, Envelope};
use crate::http::error::ApiResult;
use crate::http::AppState;
use crate::model::{Dish, DishDraft, DishId};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};

pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Envelope<Vec<Dish>>>> {
    let dishes = state.dishes.list_dishes().await?;
    Ok(Json(Envelope::new(dishes)))
}

pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Envelope<Dish>>)> {
    let draft: DishDraft = submitted(&body)?;
    let dish = state.dishes.create_dish(draft).await?;
    Ok((StatusCode::CREATED, Json(Envelope::new(dish))))
}

pub async fn read(
    State(state): State<AppState>,
    Path(dish_id): Path<String>,
) -> ApiResult<Json<Envelope<Dish>>> {
    let dish = state.dishes.read_dish(DishId(dish_id)).await?;
    Ok(Json(Envelope::new(dish)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(dish_id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<Envelope<Dish>>> {
    let draft: DishDraft = submitted(&body)?;
    let dish = state.dishes.update_dish(DishId(dish_id), draft).await?;
    Ok(Json(Envelope::new(dish)))
}
