use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use super::error::ApiResult;
use super::hateoas::HalResource;
use super::routes::AppState;
use crate::domain::model::{CouponDto, CouponUpdate};
use crate::utils::error::CouponError;

pub async fn create_coupon(
    State(state): State<AppState>,
    Json(dto): Json<CouponDto>,
) -> ApiResult<Json<CouponDto>> {
    let created = state.service.create(dto).await?;
    Ok(Json(created))
}

pub async fn list_coupons(State(state): State<AppState>) -> ApiResult<Json<Vec<CouponDto>>> {
    Ok(Json(state.service.list().await?))
}

pub async fn get_coupon(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<CouponDto>> {
    state
        .service
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or(CouponError::NotFound { id })
}

pub async fn update_coupon(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(update): Json<CouponUpdate>,
) -> ApiResult<Json<CouponDto>> {
    state
        .service
        .update(id, update)
        .await?
        .map(Json)
        .ok_or(CouponError::NotFound { id })
}

pub async fn delete_coupon(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    if state.service.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CouponError::NotFound { id })
    }
}

pub async fn get_coupon_hateoas(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<HalResource<CouponDto>>> {
    let dto = state
        .service
        .get_by_id(id)
        .await?
        .ok_or(CouponError::NotFound { id })?;
    Ok(Json(state.links.single(id, dto)))
}

pub async fn list_coupons_hateoas(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<HalResource<CouponDto>>>> {
    let coupons = state.service.list().await?;
    Ok(Json(state.links.collection(coupons)))
}
