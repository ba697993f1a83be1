use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use serde::Serialize;
use serde_json::Value;

use stockroom_inventory::ItemDraft;

use crate::app::errors;

// -------------------------
// Request DTOs
// -------------------------

/// Create and update share one body shape; every field is optional on the wire and
/// the store decides what is required.
pub type ItemRequest = ItemDraft;

/// Raw body as extracted by axum; shape checks happen in `parse_item_request`.
pub type ItemBody = Result<Json<Value>, JsonRejection>;

/// Unwrap a JSON body into an `ItemRequest`, turning malformed payloads into a
/// 400 `{error}` response instead of axum's default plain-text rejection.
///
/// Only objects are accepted; serde would otherwise read a JSON array positionally.
pub fn parse_item_request(body: ItemBody) -> Result<ItemRequest, axum::response::Response> {
    let value = match body {
        Ok(Json(value)) => value,
        Err(rejection) => {
            tracing::debug!("rejected request body: {rejection}");
            return Err(errors::json_error(StatusCode::BAD_REQUEST, rejection.body_text()));
        }
    };

    if !value.is_object() {
        return Err(errors::json_error(
            StatusCode::BAD_REQUEST,
            "Request body must be a JSON object",
        ));
    }

    serde_json::from_value(value).map_err(|e| {
        tracing::debug!("rejected request body: {e}");
        errors::json_error(StatusCode::BAD_REQUEST, format!("Invalid request body: {e}"))
    })
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

pub const ITEM_DELETED: MessageResponse = MessageResponse {
    message: "Item deleted successfully",
};
