//! Route handlers for property listing operations.
//!
//! Each handler is stateless: parse and validate input first, delegate to the
//! service, then map the outcome to a status code. Validation failures are 400
//! with the structured issue list, absent resources are 404, anything
//! unexpected is a 500 with a generic message.

use crate::api::models::properties::{PropertyCreate, PropertyListResponse, PropertyResponse, PropertyUpdate};
use crate::errors::{Error, Result};
use crate::validation::{parse_property_id, validate_create, validate_update};
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

#[utoipa::path(
    get,
    path = "/items",
    tag = "properties",
    summary = "List properties",
    responses(
        (status = 200, description = "All property listings", body = PropertyListResponse),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_properties(State(state): State<AppState>) -> Result<Json<PropertyListResponse>> {
    let listing = state.service.get_all_properties().await?;
    Ok(Json(listing))
}

#[utoipa::path(
    get,
    path = "/items/{id}",
    tag = "properties",
    summary = "Get a property",
    params(("id" = String, Path, description = "Property id (UUID)")),
    responses(
        (status = 200, description = "The property", body = PropertyResponse),
        (status = 400, description = "Malformed property id"),
        (status = 404, description = "Property not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all, fields(id = %id))]
pub async fn get_property(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<PropertyResponse>> {
    let id = parse_property_id(&id).map_err(Error::invalid_params)?;

    let property = state
        .service
        .get_property(id)
        .await?
        .ok_or_else(|| Error::property_not_found(id))?;

    Ok(Json(property))
}

#[utoipa::path(
    post,
    path = "/items",
    tag = "properties",
    summary = "Create a property",
    request_body = PropertyCreate,
    responses(
        (status = 201, description = "The created property", body = PropertyResponse),
        (status = 400, description = "Invalid request body"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_property(
    State(state): State<AppState>,
    payload: std::result::Result<Json<PropertyCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<PropertyResponse>)> {
    let Json(body) = payload?;
    validate_create(&body).map_err(Error::invalid_body)?;

    let created = state.service.create_property(body).await?;
    tracing::info!(id = %created.id, "created property");

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/items/{id}",
    tag = "properties",
    summary = "Update a property",
    params(("id" = String, Path, description = "Property id (UUID)")),
    request_body = PropertyUpdate,
    responses(
        (status = 200, description = "The updated property", body = PropertyResponse),
        (status = 400, description = "Malformed id or invalid request body"),
        (status = 404, description = "Property not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all, fields(id = %id))]
pub async fn update_property(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<PropertyUpdate>, JsonRejection>,
) -> Result<Json<PropertyResponse>> {
    let id = parse_property_id(&id).map_err(Error::invalid_params)?;
    let Json(body) = payload?;
    validate_update(&body).map_err(Error::invalid_body)?;

    let updated = state
        .service
        .update_property(id, body)
        .await?
        .ok_or_else(|| Error::property_not_found(id))?;

    Ok(Json(updated))
}

#[utoipa::path(
    delete,
    path = "/items/{id}",
    tag = "properties",
    summary = "Delete a property",
    params(("id" = String, Path, description = "Property id (UUID)")),
    responses(
        (status = 204, description = "Property deleted"),
        (status = 400, description = "Malformed property id"),
        (status = 404, description = "Property not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all, fields(id = %id))]
pub async fn delete_property(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode> {
    let id = parse_property_id(&id).map_err(Error::invalid_params)?;

    if !state.service.delete_property(id).await? {
        return Err(Error::property_not_found(id));
    }

    tracing::info!(id = %id, "deleted property");
    Ok(StatusCode::NO_CONTENT)
}
