use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryOrder, Set,
    TransactionTrait,
};
use tracing::{debug, info};

use crate::{
    AppState,
    entities::director,
    error::{AppError, AppJson, AppResult},
    models::{NamePatch, NamePayload},
};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/directors", get(list).post(create))
        .route("/directors/", get(list).post(create))
        .route(
            "/directors/{id}",
            get(show).put(update).patch(partial_update).delete(remove),
        )
}

pub async fn list(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<director::Model>>> {
    let directors =
        director::Entity::find().order_by_asc(director::Column::Id).all(&state.db).await?;
    Ok(Json(directors))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    AppJson(payload): AppJson<NamePayload>,
) -> AppResult<StatusCode> {
    let model = director::ActiveModel { id: Default::default(), name: Set(payload.name) };

    let txn = state.db.begin().await?;
    let inserted = director::Entity::insert(model).exec(&txn).await?;
    txn.commit().await?;

    info!(director_id = inserted.last_insert_id, "director created");
    Ok(StatusCode::OK)
}

pub async fn show(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<Json<Option<director::Model>>> {
    let row = director::Entity::find_by_id(id).one(&state.db).await?;
    Ok(Json(row))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<NamePayload>,
) -> AppResult<StatusCode> {
    let mut active: director::ActiveModel = find(&state.db, id).await?.into();
    active.name = Set(payload.name);
    active.update(&state.db).await?;

    debug!(director_id = id, "director replaced");
    Ok(StatusCode::OK)
}

pub async fn partial_update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    AppJson(patch): AppJson<NamePatch>,
) -> AppResult<StatusCode> {
    let existing = find(&state.db, id).await?;

    if let Some(name) = patch.name {
        let mut active: director::ActiveModel = existing.into();
        active.name = Set(name);
        active.update(&state.db).await?;
        debug!(director_id = id, "director patched");
    }

    Ok(StatusCode::OK)
}

pub async fn remove(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    find(&state.db, id).await?.delete(&state.db).await?;

    info!(director_id = id, "director deleted");
    Ok(StatusCode::OK)
}

async fn find(db: &DatabaseConnection, id: i32) -> AppResult<director::Model> {
    director::Entity::find_by_id(id).one(db).await?.ok_or(AppError::NotFound)
}
