use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use stockroom_core::ItemId;

use crate::app::{AppState, dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/:id", get(get_item).put(update_item).delete(delete_item))
}

/// Non-integer segments fall through to the store's existence check semantics (404).
fn parse_id(raw: &str) -> Result<ItemId, axum::response::Response> {
    raw.parse::<ItemId>().map_err(errors::domain_error_to_response)
}

pub async fn list_items(Extension(state): Extension<AppState>) -> axum::response::Response {
    match state.store.list().await {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_item(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match state.store.get(id).await {
        Ok(item) => (StatusCode::OK, Json(item)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn create_item(
    Extension(state): Extension<AppState>,
    body: dto::ItemBody,
) -> axum::response::Response {
    let draft = match dto::parse_item_request(body) {
        Ok(d) => d,
        Err(resp) => return resp,
    };

    match state.store.insert(&draft).await {
        Ok(item) => (StatusCode::CREATED, Json(item)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_item(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
    body: dto::ItemBody,
) -> axum::response::Response {
    let draft = match dto::parse_item_request(body) {
        Ok(d) => d,
        Err(resp) => return resp,
    };
    let id = match id.parse::<ItemId>() {
        Ok(id) => id,
        // No record can match, but a missing name still outranks the missing record.
        Err(not_found) => {
            let err = draft.validate().err().unwrap_or(not_found);
            return errors::domain_error_to_response(err);
        }
    };

    match state.store.update(id, &draft).await {
        Ok(item) => (StatusCode::OK, Json(item)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_item(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match state.store.delete(id).await {
        Ok(()) => (StatusCode::OK, Json(dto::ITEM_DELETED)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
