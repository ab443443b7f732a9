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
    entities::genre,
    error::{AppError, AppJson, AppResult},
    models::{NamePatch, NamePayload},
};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/genres", get(list).post(create))
        .route("/genres/", get(list).post(create))
        .route(
            "/genres/{id}",
            get(show).put(update).patch(partial_update).delete(remove),
        )
}

pub async fn list(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<genre::Model>>> {
    let genres =
        genre::Entity::find().order_by_asc(genre::Column::Id).all(&state.db).await?;
    Ok(Json(genres))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    AppJson(payload): AppJson<NamePayload>,
) -> AppResult<StatusCode> {
    let model = genre::ActiveModel { id: Default::default(), name: Set(payload.name) };

    let txn = state.db.begin().await?;
    let inserted = genre::Entity::insert(model).exec(&txn).await?;
    txn.commit().await?;

    info!(genre_id = inserted.last_insert_id, "genre created");
    Ok(StatusCode::OK)
}

pub async fn show(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<Json<Option<genre::Model>>> {
    let row = genre::Entity::find_by_id(id).one(&state.db).await?;
    Ok(Json(row))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<NamePayload>,
) -> AppResult<StatusCode> {
    let mut active: genre::ActiveModel = find(&state.db, id).await?.into();
    active.name = Set(payload.name);
    active.update(&state.db).await?;

    debug!(genre_id = id, "genre replaced");
    Ok(StatusCode::OK)
}

pub async fn partial_update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    AppJson(patch): AppJson<NamePatch>,
) -> AppResult<StatusCode> {
    let existing = find(&state.db, id).await?;

    if let Some(name) = patch.name {
        let mut active: genre::ActiveModel = existing.into();
        active.name = Set(name);
        active.update(&state.db).await?;
        debug!(genre_id = id, "genre patched");
    }

    Ok(StatusCode::OK)
}

pub async fn remove(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    find(&state.db, id).await?.delete(&state.db).await?;

    info!(genre_id = id, "genre deleted");
    Ok(StatusCode::OK)
}

async fn find(db: &DatabaseConnection, id: i32) -> AppResult<genre::Model> {
    genre::Entity::find_by_id(id).one(db).await?.ok_or(AppError::NotFound)
}
