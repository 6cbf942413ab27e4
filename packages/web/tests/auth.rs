mod common;

use axum::http::StatusCode;
use common::TestApp;

#[tokio::test]
async fn register_then_login_reaches_dashboard() {
    let app = TestApp::new().await;
    let mut client = app.client();

    let response = client.register("alice", "s3cret").await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location.as_deref(), Some("/login"));

    let page = client.get("/login").await;
    assert!(page.body.contains("Account created. Please log in."));

    let response = client.login("alice", "s3cret").await;
    assert_eq!(response.location.as_deref(), Some("/dashboard"));

    let page = client.get("/dashboard").await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("Logged in successfully"));
    assert!(page.body.contains("alice"));

    // Flashes are shown once
    let page = client.get("/dashboard").await;
    assert!(!page.body.contains("Logged in successfully"));
}

#[tokio::test]
async fn register_requires_both_fields() {
    let app = TestApp::new().await;
    let mut client = app.client();

    let response = client.post_form("/register", "username=alice").await;
    assert_eq!(response.location.as_deref(), Some("/register"));

    let page = client.get("/register").await;
    assert!(page.body.contains("Please provide username and password"));
    assert_eq!(app.user_count().await, 0);
}

#[tokio::test]
async fn duplicate_username_is_rejected() {
    let app = TestApp::new().await;
    let mut client = app.client();

    client.register("alice", "one").await;
    let response = client.register("alice", "two").await;
    assert_eq!(response.location.as_deref(), Some("/register"));

    let page = client.get("/register").await;
    assert!(page.body.contains("Username already exists"));
    assert_eq!(app.user_count().await, 1);
}

#[tokio::test]
async fn bad_password_and_unknown_user_look_the_same() {
    let app = TestApp::new().await;
    app.client().register("alice", "right").await;

    let mut wrong_password = app.client();
    let first = wrong_password.login("alice", "wrong").await;
    let first_page = wrong_password.get("/login").await;

    let mut unknown_user = app.client();
    let second = unknown_user.login("mallory", "right").await;
    let second_page = unknown_user.get("/login").await;

    assert_eq!(first.status, second.status);
    assert_eq!(first.location, second.location);
    assert_eq!(first.location.as_deref(), Some("/login"));
    assert!(first_page.body.contains("Invalid credentials"));
    assert_eq!(first_page.body, second_page.body);

    // Neither attempt produced a session
    assert_eq!(wrong_password.get("/dashboard").await.status, StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn protected_pages_redirect_to_login() {
    let app = TestApp::new().await;
    let mut client = app.client();

    for uri in ["/dashboard", "/note/new", "/note/1", "/logout"] {
        let response = client.get(uri).await;
        assert_eq!(response.status, StatusCode::SEE_OTHER, "{uri}");
        assert_eq!(response.location.as_deref(), Some("/login"), "{uri}");
    }

    let page = client.get("/login").await;
    assert!(page.body.contains("Please log in to access this page."));
}

#[tokio::test]
async fn logout_ends_the_session() {
    let app = TestApp::new().await;
    let mut client = app.client();
    client.sign_in("alice").await;

    let response = client.get("/logout").await;
    assert_eq!(response.location.as_deref(), Some("/"));

    let page = client.get("/").await;
    assert!(page.body.contains("Logged out"));

    let response = client.get("/dashboard").await;
    assert_eq!(response.location.as_deref(), Some("/login"));
    assert_eq!(client.get("/api/notes").await.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn session_of_deleted_user_is_anonymous() {
    let app = TestApp::new().await;
    let mut client = app.client();
    client.sign_in("alice").await;

    sqlx::query("DELETE FROM users")
        .execute(&app.pool)
        .await
        .unwrap();

    assert_eq!(client.get("/api/notes").await.status, StatusCode::UNAUTHORIZED);
    let response = client.get("/dashboard").await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location.as_deref(), Some("/login"));
}

#[tokio::test]
async fn unknown_paths_render_not_found() {
    let app = TestApp::new().await;
    let response = app.client().get("/no/such/page").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.body.starts_with("<!DOCTYPE html><html lang=\"en\"><head>"));
    assert!(response.body.ends_with("</html>"));
    assert!(response.body.contains("Not Found"));
}
