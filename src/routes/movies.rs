use std::{collections::HashMap, sync::Arc};

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use tracing::debug;

use crate::{
    AppState,
    entities::{director, genre, movie},
    error::AppResult,
    models::{MovieFilter, MovieListQuery, MovieView},
    pagination::{MOVIES_PER_PAGE, Page},
};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/movies", get(list))
        .route("/movies/", get(list))
        .route("/movies/{id}", get(show))
}

pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> AppResult<Json<Vec<MovieView>>> {
    let query = MovieListQuery::from_pairs(pairs);
    let Some(page) = Page::new(query.page(), MOVIES_PER_PAGE) else {
        return Ok(Json(Vec::new()));
    };

    let mut select = movie::Entity::find();
    match query.filter() {
        Some(MovieFilter::Genre(id)) => select = select.filter(movie::Column::GenreId.eq(id)),
        Some(MovieFilter::Director(id)) => {
            select = select.filter(movie::Column::DirectorId.eq(id))
        },
        None => {},
    }

    let movies = select
        .order_by_asc(movie::Column::Id)
        .offset(page.offset())
        .limit(page.limit())
        .all(&state.db)
        .await?;

    debug!(offset = page.offset(), count = movies.len(), "listed movies");

    Ok(Json(with_related_names(&state.db, movies).await?))
}

pub async fn show(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<Json<Option<MovieView>>> {
    let Some(movie) = movie::Entity::find_by_id(id).one(&state.db).await? else {
        debug!(movie_id = id, "movie not found");
        return Ok(Json(None));
    };

    let view = with_related_names(&state.db, vec![movie]).await?.pop();
    Ok(Json(view))
}

/// Resolves genre and director names for a batch of movies with one query per
/// table. Dangling references resolve to no name.
async fn with_related_names(
    db: &DatabaseConnection,
    movies: Vec<movie::Model>,
) -> Result<Vec<MovieView>, DbErr> {
    if movies.is_empty() {
        return Ok(Vec::new());
    }

    let genre_ids: Vec<i32> = movies.iter().filter_map(|m| m.genre_id).collect();
    let director_ids: Vec<i32> = movies.iter().filter_map(|m| m.director_id).collect();

    let genres: HashMap<i32, String> = genre::Entity::find()
        .filter(genre::Column::Id.is_in(genre_ids))
        .all(db)
        .await?
        .into_iter()
        .map(|g| (g.id, g.name))
        .collect();

    let directors: HashMap<i32, String> = director::Entity::find()
        .filter(director::Column::Id.is_in(director_ids))
        .all(db)
        .await?
        .into_iter()
        .map(|d| (d.id, d.name))
        .collect();

    Ok(movies
        .into_iter()
        .map(|m| {
            let genre = m.genre_id.and_then(|id| genres.get(&id).cloned());
            let director = m.director_id.and_then(|id| directors.get(&id).cloned());
            MovieView::new(m, genre, director)
        })
        .collect())
}
