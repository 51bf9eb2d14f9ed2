//! The five REST operations shared by every collection.
//!
//! | method | path | operation |
//! |---|---|---|
//! | `POST` | `/api/{collection}` | create |
//! | `PUT` | `/api/{collection}` | update (create when the body has no id) |
//! | `GET` | `/api/{collection}` | list, honouring `sort` |
//! | `GET` | `/api/{collection}/{id}` | get one |
//! | `DELETE` | `/api/{collection}/{id}` | delete |

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderValue, StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
    routing::get,
};
use axum_extra::extract::Query;
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

use crate::db::repository::{Repository, SortOrder};
use crate::models::Document;
use crate::web::alert::{Alert, AlertHeaders};
use crate::web::error::AppError;

/// Handler state for one collection. Holds no per-request data.
pub struct ResourceState<T: Document> {
    repository: Arc<dyn Repository<T>>,
    alerts: AlertHeaders,
}

impl<T: Document> Clone for ResourceState<T> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
            alerts: self.alerts.clone(),
        }
    }
}

#[derive(Deserialize)]
pub struct ListParams {
    #[serde(default)]
    sort: Vec<String>,
}

pub fn resource_router<T: Document>(
    repository: Arc<dyn Repository<T>>,
    alerts: AlertHeaders,
) -> Router {
    let collection_path = format!("/api/{}", T::COLLECTION);
    let item_path = format!("/api/{}/{{id}}", T::COLLECTION);

    Router::new()
        .route(
            &collection_path,
            get(list_documents::<T>)
                .post(create_document::<T>)
                .put(update_document::<T>),
        )
        .route(
            &item_path,
            get(get_document::<T>).delete(delete_document::<T>),
        )
        .with_state(ResourceState { repository, alerts })
}

async fn create_document<T: Document>(
    State(state): State<ResourceState<T>>,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(document) = payload?;
    debug!(entity = T::ENTITY_NAME, ?document, "REST request to save");
    create(&state, document).await
}

async fn create<T: Document>(state: &ResourceState<T>, document: T) -> Result<Response, AppError> {
    if document.id().is_some() {
        let alert = Alert::failure(
            T::ENTITY_NAME,
            "idexists",
            format!("A new {} cannot already have an ID", T::ENTITY_NAME),
        );
        return Ok((StatusCode::BAD_REQUEST, state.alerts.render(&alert)).into_response());
    }

    let saved = state.repository.save(document).await?;
    let id = saved.id().unwrap_or_default().to_owned();

    let mut headers = state.alerts.render(&Alert::created(T::ENTITY_NAME, &id));
    if let Ok(location) = HeaderValue::from_str(&format!("/api/{}/{}", T::COLLECTION, id)) {
        headers.insert(LOCATION, location);
    }
    Ok((StatusCode::CREATED, headers, Json(saved)).into_response())
}

async fn update_document<T: Document>(
    State(state): State<ResourceState<T>>,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(document) = payload?;
    debug!(entity = T::ENTITY_NAME, ?document, "REST request to update");
    let Some(id) = document.id().map(str::to_owned) else {
        return create(&state, document).await;
    };

    let saved = state.repository.save(document).await?;
    let headers = state.alerts.render(&Alert::updated(T::ENTITY_NAME, &id));
    Ok((StatusCode::OK, headers, Json(saved)).into_response())
}

async fn list_documents<T: Document>(
    State(state): State<ResourceState<T>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<T>>, AppError> {
    debug!(entity = T::ENTITY_NAME, sort = ?params.sort, "REST request to get all");
    let sort = SortOrder::parse_all(&params.sort);
    let documents = state.repository.find_all(&sort).await?;
    Ok(Json(documents))
}

async fn get_document<T: Document>(
    State(state): State<ResourceState<T>>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    debug!(entity = T::ENTITY_NAME, %id, "REST request to get");
    match state.repository.find_one(&id).await? {
        Some(document) => Ok(Json(document).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

async fn delete_document<T: Document>(
    State(state): State<ResourceState<T>>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    debug!(entity = T::ENTITY_NAME, %id, "REST request to delete");
    state.repository.delete(&id).await?;
    let headers = state.alerts.render(&Alert::deleted(T::ENTITY_NAME, &id));
    Ok((StatusCode::OK, headers).into_response())
}
