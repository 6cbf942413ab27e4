#![allow(dead_code)]

use api::AppState;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;
use tower_sessions::MemoryStore;

use web::settings::Settings;

/// One application instance with an in-memory database.
pub struct TestApp {
    pub app: Router,
    pub pool: SqlitePool,
}

impl TestApp {
    pub async fn new() -> Self {
        let pool = api::db::memory().await.expect("in-memory database");
        let app = web::app(
            AppState::new(pool.clone()),
            MemoryStore::default(),
            &Settings::default(),
        );
        Self { app, pool }
    }

    pub async fn user_count(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .unwrap()
    }

    /// A browser-like client with its own session cookie.
    pub fn client(&self) -> Client {
        Client {
            app: self.app.clone(),
            cookie: None,
        }
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("JSON body")
    }
}

pub struct Client {
    app: Router,
    cookie: Option<String>,
}

impl Client {
    pub async fn send(
        &mut self,
        method: Method,
        uri: &str,
        content_type: Option<&str>,
        body: String,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        if let Some(cookie) = &self.cookie {
            builder = builder.header(header::COOKIE, cookie);
        }

        let response = self
            .app
            .clone()
            .oneshot(builder.body(Body::from(body)).unwrap())
            .await
            .unwrap();

        if let Some(set_cookie) = response.headers().get(header::SET_COOKIE) {
            let set_cookie = set_cookie.to_str().unwrap();
            let pair = set_cookie.split(';').next().unwrap().trim().to_string();
            if set_cookie.contains("Max-Age=0") || pair.ends_with('=') {
                self.cookie = None;
            } else {
                self.cookie = Some(pair);
            }
        }

        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .map(|v| v.to_str().unwrap().to_string());
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        TestResponse {
            status,
            location,
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }

    pub async fn get(&mut self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None, String::new()).await
    }

    pub async fn post_form(&mut self, uri: &str, form: &str) -> TestResponse {
        self.send(
            Method::POST,
            uri,
            Some("application/x-www-form-urlencoded"),
            form.to_string(),
        )
        .await
    }

    pub async fn json(&mut self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        match body {
            Some(body) => {
                self.send(method, uri, Some("application/json"), body.to_string())
                    .await
            }
            None => self.send(method, uri, None, String::new()).await,
        }
    }

    pub async fn register(&mut self, username: &str, password: &str) -> TestResponse {
        self.post_form(
            "/register",
            &format!("username={username}&password={password}"),
        )
        .await
    }

    pub async fn login(&mut self, username: &str, password: &str) -> TestResponse {
        self.post_form("/login", &format!("username={username}&password={password}"))
            .await
    }

    /// Register and log in as `username`.
    pub async fn sign_in(&mut self, username: &str) {
        self.register(username, "password").await;
        let response = self.login(username, "password").await;
        assert_eq!(response.location.as_deref(), Some("/dashboard"));
    }
}
