use super::helpers::{TestClient, insert_user, location, read_text, unique};
use axum::http::StatusCode;
use cafe::presentation::http::session::issue_session_token;

#[tokio::test]
async fn homepage_for_anonymous_visitor() {
    let app = app_or_skip!();
    let mut client = TestClient::new(&app);

    let res = client.get("/").await;
    assert_eq!(res.status(), StatusCode::OK);
    let html = read_text(res).await;
    assert!(html.contains("Where Coffee Dreams Come True"));
    assert!(html.contains("Sign Up"));
    assert!(html.contains("Log In"));
}

#[tokio::test]
async fn signup_logs_the_user_in() {
    let app = app_or_skip!();
    let username = unique("new");
    let mut client = TestClient::new(&app);

    let html = read_text(client.get("/signup").await).await;
    assert!(html.contains("Sign Up"));

    let res = client
        .post_form(
            "/signup",
            &[
                ("username", username.as_str()),
                ("first_name", "Testy"),
                ("last_name", "MacTest"),
                ("description", "Test Description."),
                ("email", "test@test.com"),
                ("password", "secret"),
                ("image_url", ""),
            ],
        )
        .await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/cafes");
    assert!(client.cookie("curr_user").is_some());

    let html = read_text(client.follow(res).await).await;
    assert!(html.contains("You are signed up and logged in."));
    assert!(html.contains("Testy MacTest"));
    assert!(html.contains("Log Out"));
    assert!(!html.contains("Sign Up"));

    let hashed: String = sqlx::query_scalar("SELECT hashed_password FROM users WHERE username = $1")
        .bind(&username)
        .fetch_one(&app.db)
        .await
        .unwrap();
    assert_ne!(hashed, "secret");
    assert!(hashed.starts_with("$2b$"));
}

#[tokio::test]
async fn signup_with_taken_username_is_rejected() {
    let app = app_or_skip!();
    let (_, username) = insert_user(&app.db, "secret").await;
    let mut client = TestClient::new(&app);

    let res = client
        .post_form(
            "/signup",
            &[
                ("username", username.as_str()),
                ("first_name", "Other"),
                ("last_name", "Person"),
                ("email", "other@test.com"),
                ("password", "secret"),
            ],
        )
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(client.cookie("curr_user").is_none());
    let html = read_text(res).await;
    assert!(html.contains("Username already taken"));
}

#[tokio::test]
async fn login_with_valid_credentials() {
    let app = app_or_skip!();
    let (_, username) = insert_user(&app.db, "secret").await;
    let mut client = TestClient::new(&app);

    let html = read_text(client.get("/login").await).await;
    assert!(html.contains("Welcome Back!"));

    let res = client
        .post_form(
            "/login",
            &[("username", username.as_str()), ("password", "secret")],
        )
        .await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/cafes");

    let html = read_text(client.follow(res).await).await;
    assert!(html.contains(&format!("Hello, {}!", username)));
}

#[tokio::test]
async fn login_with_wrong_password() {
    let app = app_or_skip!();
    let (_, username) = insert_user(&app.db, "secret").await;
    let mut client = TestClient::new(&app);

    let res = client
        .post_form(
            "/login",
            &[("username", username.as_str()), ("password", "wrong-password")],
        )
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(client.cookie("curr_user").is_none());
    let html = read_text(res).await;
    assert!(html.contains("Invalid credentials."));
}

#[tokio::test]
async fn logout_clears_session() {
    let app = app_or_skip!();
    let (id, username) = insert_user(&app.db, "secret").await;
    let mut client = TestClient::logged_in(&app, id, &username);

    let res = client.post_empty("/logout").await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/login");
    assert!(client.cookie("curr_user").is_none());

    let html = read_text(client.follow(res).await).await;
    assert!(html.contains("You have successfully logged out."));
    assert!(html.contains("Log In"));
    assert!(!html.contains("Log Out"));
}

#[tokio::test]
async fn forged_session_reads_as_anonymous() {
    let app = app_or_skip!();
    let (id, username) = insert_user(&app.db, "secret").await;
    let forged = issue_session_token(id, &username, "some-other-secret", 1).unwrap();
    let mut client = TestClient::new(&app).with_cookie("curr_user", &forged);

    let html = read_text(client.get("/").await).await;
    assert!(html.contains("Log In"));
    assert!(!html.contains("Log Out"));

    let res = client.get("/profile").await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
}
