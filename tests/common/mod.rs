#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, Bytes},
    http::{Method, Request, header::CONTENT_TYPE},
    response::Response,
};
use movie_catalog::{
    AppState, db,
    entities::{director, genre, movie},
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub db: DatabaseConnection,
}

/// Builds the production router over a fresh in-memory database.
pub async fn spawn() -> TestApp {
    let db = db::connect_and_prepare("sqlite::memory:", 1).await.expect("in-memory database");
    let router = movie_catalog::router(Arc::new(AppState { db: db.clone() }));
    TestApp { router, db }
}

impl TestApp {
    pub async fn get(&self, uri: &str) -> Response {
        self.send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn delete(&self, uri: &str) -> Response {
        self.send(Request::delete(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn send_json(&self, method: Method, uri: &str, body: serde_json::Value) -> Response {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }
}

pub async fn body_bytes(response: Response) -> Bytes {
    axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn insert_director(db: &DatabaseConnection, name: &str) -> director::Model {
    director::ActiveModel { name: Set(name.to_string()), ..Default::default() }
        .insert(db)
        .await
        .unwrap()
}

pub async fn insert_genre(db: &DatabaseConnection, name: &str) -> genre::Model {
    genre::ActiveModel { name: Set(name.to_string()), ..Default::default() }
        .insert(db)
        .await
        .unwrap()
}

pub async fn insert_movie(
    db: &DatabaseConnection,
    title: &str,
    genre_id: Option<i32>,
    director_id: Option<i32>,
) -> movie::Model {
    movie::ActiveModel {
        title: Set(Some(title.to_string())),
        description: Set(Some(format!("About {title}"))),
        trailer: Set(Some("https://example.com/trailer".to_string())),
        year: Set(Some(2000)),
        rating: Set(Some(7.5)),
        genre_id: Set(genre_id),
        director_id: Set(director_id),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}
