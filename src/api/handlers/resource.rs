//! Generic CRUD handlers mounted once per resource.
//!
//! Routes (relative to the resource prefix):
//! - `GET /`          list every resource as `{"data": [...]}`
//! - `POST /`         create, 201 with the stored resource
//! - `GET /{id}`      fetch one resource
//! - `PATCH /{id}`    sparse update
//! - `DELETE /{id}`   delete, 204 with an empty body

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};
use serde::{Serialize, de::DeserializeOwned};
use validator::Validate;

use crate::api::dto::DataResponse;
use crate::error::AppResult;
use crate::models::Resource;
use crate::services::ResourceService;
use crate::state::AppState;
use crate::utils::validate::{ResourceId, ValidatedJson};

/// Binds a resource to its HTTP shapes and to its service in [`AppState`].
pub trait ResourceEndpoint: Resource {
    type CreateRequest: DeserializeOwned + Validate + Into<Self::New> + Send + 'static;
    type UpdateRequest: DeserializeOwned + Validate + Into<Self::Patch> + Send + 'static;
    type Response: From<Self> + Serialize + Send + 'static;

    fn service(state: &AppState) -> &ResourceService<Self>;
}

pub fn resource_routes<E: ResourceEndpoint>() -> Router<AppState> {
    Router::new()
        .route("/", get(list::<E>).post(create::<E>))
        .route("/{id}", get(fetch::<E>).patch(update::<E>).delete(remove::<E>))
}

async fn list<E: ResourceEndpoint>(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<E::Response>>> {
    let rows = E::service(&state).list().await?;
    Ok(Json(rows.into_iter().map(E::Response::from).collect()))
}

async fn fetch<E: ResourceEndpoint>(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> AppResult<Json<E::Response>> {
    let entity = E::service(&state).get(id).await?;
    Ok(Json(E::Response::from(entity)))
}

async fn create<E: ResourceEndpoint>(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<E::CreateRequest>,
) -> AppResult<(StatusCode, Json<E::Response>)> {
    let created = E::service(&state).create(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(E::Response::from(created))))
}

async fn update<E: ResourceEndpoint>(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
    ValidatedJson(payload): ValidatedJson<E::UpdateRequest>,
) -> AppResult<Json<E::Response>> {
    let updated = E::service(&state).update(id, payload.into()).await?;
    Ok(Json(E::Response::from(updated)))
}

async fn remove<E: ResourceEndpoint>(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> AppResult<StatusCode> {
    E::service(&state).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
