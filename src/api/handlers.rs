use axum::{
    body::Bytes,
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, info};

use super::{auth::Authenticated, error::ApiError, state::AppState};
use crate::model::{
    LoginRequest, LoginResponse, MenuItem, MenuItemId, Order, OrderCreate, OrderId,
};

pub const API_NAME: &str = "QuickBite QA API";

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct MenuQuery {
    pub category: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StatusBody {
    status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusMessage {
    pub message: String,
}

pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": format!("Welcome to {API_NAME}"),
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "menu": "/menu",
            "orders": "/order",
            "login": "/login"
        }
    }))
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
    })
}

/// An empty `category` parameter means no filter.
pub async fn menu_handler(
    State(state): State<AppState>,
    query: Result<Query<MenuQuery>, QueryRejection>,
) -> Result<Json<Vec<MenuItem>>, ApiError> {
    let Query(query) = query?;
    let category = query.category.as_deref().filter(|c| !c.is_empty());
    debug!(?category, "Listing menu");

    Ok(Json(state.catalog.list(category)?))
}

pub async fn menu_item_handler(
    State(state): State<AppState>,
    item_id: Result<Path<MenuItemId>, PathRejection>,
) -> Result<Json<MenuItem>, ApiError> {
    let Path(item_id) = item_id?;
    Ok(Json(state.catalog.get(item_id)?.clone()))
}

/// Places an order. Any client-supplied id, total, status or timestamp is ignored.
pub async fn create_order_handler(
    State(state): State<AppState>,
    payload: Result<Json<OrderCreate>, JsonRejection>,
) -> Result<Json<Order>, ApiError> {
    let Json(params) = payload?;
    let order = state.orders.create_order(params).await?;
    Ok(Json(order))
}

pub async fn list_orders_handler(
    Authenticated(identity): Authenticated,
    State(state): State<AppState>,
) -> Result<Json<Vec<Order>>, ApiError> {
    debug!(username = %identity.username, "Listing orders");
    Ok(Json(state.orders.list_orders().await?))
}

/// Open to anonymous callers, unlike the order list.
pub async fn order_handler(
    State(state): State<AppState>,
    order_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Order>, ApiError> {
    let Path(order_id) = order_id?;
    Ok(Json(state.orders.get_order(OrderId(order_id)).await?))
}

/// Reads `status` from the query string, or from a JSON body when the query has none.
pub async fn order_status_handler(
    Authenticated(identity): Authenticated,
    State(state): State<AppState>,
    order_id: Result<Path<i64>, PathRejection>,
    query: Result<Query<StatusQuery>, QueryRejection>,
    body: Bytes,
) -> Result<Json<StatusMessage>, ApiError> {
    let Path(order_id) = order_id?;
    let Query(query) = query?;

    let status = match query.status {
        Some(status) => status,
        None if body.is_empty() => {
            return Err(ApiError::Unprocessable("Field required: status".to_string()))
        }
        None => {
            serde_json::from_slice::<StatusBody>(&body)
                .map_err(|e| ApiError::Unprocessable(e.to_string()))?
                .status
        }
    };

    let order = state.orders.update_status(OrderId(order_id), &status).await?;
    info!(order_id, status = %order.status, by = %identity.username, "Status changed");

    Ok(Json(StatusMessage {
        message: format!("Order {order_id} status updated to {}", order.status),
    }))
}

pub async fn login_handler(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(request) = payload?;
    Ok(Json(state.auth.login(&request)?))
}

pub async fn categories_handler(State(state): State<AppState>) -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: state.catalog.categories(),
    })
}

pub async fn not_found_handler() -> ApiError {
    ApiError::NotFound("Not Found".to_string())
}

pub async fn method_not_allowed_handler() -> ApiError {
    ApiError::MethodNotAllowed
}
